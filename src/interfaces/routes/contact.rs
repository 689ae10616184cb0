use actix_web::web;

use crate::{constants::MAX_CONTACT_BODY_BYTES, handlers::contact};


pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/contact")
            .app_data(web::PayloadConfig::new(MAX_CONTACT_BODY_BYTES))
            .route(web::post().to(contact::submit_contact))
    );
}
