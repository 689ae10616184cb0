use actix_web::web;

use crate::handlers::{home::home, json_error::not_found, system::health_check};

mod contact;
mod content;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.service(
        web::scope("/api")
            .configure(contact::config_routes)
            .configure(content::config_routes)
    );

    cfg.default_service(web::route().to(not_found));
}
