use async_trait::async_trait;

use crate::{
    entities::{
        blog_post::BlogPost,
        profile::Profile,
        project::{ProjectDetail, ProjectSummary},
        skill::SkillCategory,
        timeline::TimelineItem,
    },
    errors::AppError,
};

#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn profile(&self) -> Result<Profile, AppError>;
    async fn projects(&self) -> Result<Vec<ProjectSummary>, AppError>;
    async fn project_by_slug(&self, slug: &str) -> Result<Option<ProjectDetail>, AppError>;
    async fn blog_posts(&self) -> Result<Vec<BlogPost>, AppError>;
    async fn blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, AppError>;
    async fn skills(&self) -> Result<Vec<SkillCategory>, AppError>;
    async fn timeline(&self) -> Result<Vec<TimelineItem>, AppError>;
}
