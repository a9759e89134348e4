use rocket::serde::json::Json;
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct HealthStatus {
    pub status: &'static str,
    pub database: &'static str,
}

/// Fixed payload. The database is never contacted, so this only tells that
/// the process is up.
#[get("/")]
pub(crate) fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "API funcionando!",
        database: "PostgreSQL conectado",
    })
}
