use crate::{
    entities::{
        blog_post::BlogPost,
        profile::Profile,
        project::{ProjectDetail, ProjectSummary},
        skill::SkillCategory,
        timeline::TimelineItem,
    },
    errors::AppError,
    repositories::content::ContentRepository,
};

pub struct ContentHandler<R>
where
    R: ContentRepository,
{
    pub content_repo: R,
}

impl<R> ContentHandler<R>
where
    R: ContentRepository,
{
    pub fn new(content_repo: R) -> Self {
        ContentHandler { content_repo }
    }

    pub async fn profile(&self) -> Result<Profile, AppError> {
        self.content_repo.profile().await
    }

    pub async fn projects(&self) -> Result<Vec<ProjectSummary>, AppError> {
        self.content_repo.projects().await
    }

    /// Retrieves a single project by its slug
    pub async fn project(&self, slug: &str) -> Result<ProjectDetail, AppError> {
        self.content_repo
            .project_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }

    /// Lists blog posts, newest first
    pub async fn blog_posts(&self) -> Result<Vec<BlogPost>, AppError> {
        let mut posts = self.content_repo.blog_posts().await?;
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(posts)
    }

    pub async fn blog_post(&self, slug: &str) -> Result<BlogPost, AppError> {
        self.content_repo
            .blog_post_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))
    }

    pub async fn skills(&self) -> Result<Vec<SkillCategory>, AppError> {
        self.content_repo.skills().await
    }

    pub async fn timeline(&self) -> Result<Vec<TimelineItem>, AppError> {
        self.content_repo.timeline().await
    }
}
