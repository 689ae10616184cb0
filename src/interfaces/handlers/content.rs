use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn get_profile(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let profile = state.content_handler.profile().await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[instrument(skip(state))]
pub async fn get_projects(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let projects = state.content_handler.projects().await?;
    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state))]
pub async fn get_project_by_slug(
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let project = state.content_handler.project(&slug).await?;
    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(state))]
pub async fn get_blog_posts(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let posts = state.content_handler.blog_posts().await?;
    Ok(HttpResponse::Ok().json(posts))
}

#[instrument(skip(state))]
pub async fn get_blog_post_by_slug(
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let post = state.content_handler.blog_post(&slug).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[instrument(skip(state))]
pub async fn get_skills(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let skills = state.content_handler.skills().await?;
    Ok(HttpResponse::Ok().json(skills))
}

#[instrument(skip(state))]
pub async fn get_timeline(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let timeline = state.content_handler.timeline().await?;
    Ok(HttpResponse::Ok().json(timeline))
}
