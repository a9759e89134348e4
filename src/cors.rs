use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::{Request, Response};

const ALL_METHODS: &str = "GET, POST, PUT, PATCH, DELETE, HEAD, OPTIONS";

/// Lets any origin call every route, credentials included.
///
/// Browsers refuse `*` together with credentials, so a request carrying an
/// `Origin` gets that origin echoed back instead.
pub struct CORS;

#[rocket::async_trait]
impl Fairing for CORS {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let headers = request.headers();

        match headers.get_one("Origin") {
            Some(origin) => {
                response.set_header(Header::new(
                    "Access-Control-Allow-Origin",
                    origin.to_string(),
                ));
                response.set_header(Header::new("Vary", "Origin"));
            }
            None => {
                response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
            }
        }

        let methods = headers
            .get_one("Access-Control-Request-Method")
            .unwrap_or(ALL_METHODS)
            .to_string();
        response.set_header(Header::new("Access-Control-Allow-Methods", methods));

        // `*` is taken literally once credentials are allowed, so only echo
        // what the preflight asked for.
        if let Some(requested) = headers.get_one("Access-Control-Request-Headers") {
            response.set_header(Header::new(
                "Access-Control-Allow-Headers",
                requested.to_string(),
            ));
        }

        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

/// Answers preflight requests for any path; the fairing adds the headers.
#[options("/<_..>")]
pub(crate) fn preflight() {}
