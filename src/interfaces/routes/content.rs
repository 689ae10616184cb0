use actix_web::web;

use crate::handlers::content;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/profile").route(web::get().to(content::get_profile)))
        .service(
            web::scope("/projects")
                .service(
                    web::resource("")
                        .route(web::get().to(content::get_projects))
                )
                .service(
                    web::resource("/{slug}")
                        .route(web::get().to(content::get_project_by_slug))
                )
        )
        .service(
            web::scope("/blog")
                .service(
                    web::resource("")
                        .route(web::get().to(content::get_blog_posts))
                )
                .service(
                    web::resource("/{slug}")
                        .route(web::get().to(content::get_blog_post_by_slug))
                )
        )
        .service(web::resource("/skills").route(web::get().to(content::get_skills)))
        .service(web::resource("/timeline").route(web::get().to(content::get_timeline)));
}
