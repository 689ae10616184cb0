use actix_web::{get, web, HttpResponse, Responder};

use crate::{errors::AppError, AppState};

#[get("/")]
pub async fn home(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let profile = state.content_handler.profile().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to the Portfolio API!",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "owner": profile.name,
        "endpoints": [
            "/api/profile",
            "/api/projects",
            "/api/blog",
            "/api/skills",
            "/api/timeline",
            "/api/contact",
            "/health"
        ]
    })))
}
