use actix_cors::Cors;
use actix_web::http::{header, Method};

const PREFLIGHT_MAX_AGE_SECS: usize = 3600;

/// CORS policy for the site's origins. A `*` entry allows any origin.
pub fn build_cors(origins: &[String]) -> Cors {
    let cors = if origins.iter().any(|o| o == "*") {
        Cors::default().allow_any_origin()
    } else {
        origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allowed_methods([Method::GET, Method::POST])
        .allowed_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::RETRY_AFTER])
        .max_age(PREFLIGHT_MAX_AGE_SECS)
}
