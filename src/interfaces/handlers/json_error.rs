use actix_web::{http::StatusCode, HttpRequest, HttpResponse};


pub fn json_error(status: StatusCode, error: &str, details: &str) -> HttpResponse {
    HttpResponse::build(status).json(serde_json::json!({
        "error": error,
        "details": details
    }))
}

/// Fallback for unmatched routes.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    json_error(
        StatusCode::NOT_FOUND,
        "Not found",
        &format!("No route for {} {}", req.method(), req.path()),
    )
}
