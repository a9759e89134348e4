use rocket::response::{Responder, Response};
use rocket::{
    http::{ContentType, Status},
    response,
    serde::json::Json,
    Request,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize, Debug)]
pub struct ApiError {
    err: String,
}

impl ApiError {
    pub(crate) fn new(err: String) -> ApiError {
        ApiError { err }
    }
}

#[derive(Debug)]
pub(crate) struct ErrorResponse<T = ApiError> {
    json: Json<T>,
    status: Status,
}

impl ErrorResponse<ApiError> {
    pub(crate) fn new(status: Status, err: String) -> ErrorResponse<ApiError> {
        ErrorResponse {
            json: Json(ApiError::new(err)),
            status,
        }
    }

    pub(crate) fn internal(err: String) -> ErrorResponse<ApiError> {
        ErrorResponse::new(Status { code: 500 }, err)
    }
}

impl<'r, 'o: 'r, T: Serialize> Responder<'r, 'o> for ErrorResponse<T> {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'o> {
        Response::build_from(self.json.respond_to(req)?)
            .status(self.status)
            .header(ContentType::JSON)
            .ok()
    }
}

/// Keeps framework generated errors (unknown route, undecodable body, ...)
/// in the same `{"err": ...}` shape the handlers use.
#[catch(default)]
pub(crate) fn default_catcher(status: Status, _req: &Request) -> ErrorResponse {
    let reason = status.reason().unwrap_or("Unknown error");

    ErrorResponse::new(status, reason.to_string())
}

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Couldn't load settings: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Couldn't get database connection: {0}")]
    Connection(#[from] r2d2::Error),

    #[error("Couldn't create tables: {0}")]
    Schema(#[from] diesel::migration::RunMigrationsError),

    #[error("Database task failed: {0}")]
    Task(#[from] rocket::tokio::task::JoinError),

    #[error("Couldn't launch server: {0}")]
    Launch(#[from] rocket::Error),
}
