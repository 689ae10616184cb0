use std::{collections::HashSet, path::Path, sync::Arc};

use anyhow::{ensure, Context};
use async_trait::async_trait;
use serde::Deserialize;
use validator::Validate;

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

const EMBEDDED_CONTENT: &str = include_str!("../../../content/portfolio.json");

/// Everything the site shows, as one document.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioContent {
    #[validate(nested)]
    pub profile: Profile,
    pub projects: Vec<ProjectDetail>,
    pub blog_posts: Vec<BlogPost>,
    #[validate(nested)]
    pub skills: Vec<SkillCategory>,
    pub timeline: Vec<TimelineItem>,
}

/// Read-only catalogue held in memory for the life of the process.
#[derive(Clone)]
pub struct StaticContentRepo {
    content: Arc<PortfolioContent>,
}

impl StaticContentRepo {
    pub fn from_content(content: PortfolioContent) -> Self {
        StaticContentRepo { content: Arc::new(content) }
    }

    /// Catalogue compiled into the binary.
    pub fn embedded() -> anyhow::Result<Self> {
        let content = parse_content(EMBEDDED_CONTENT)
            .context("embedded portfolio content is invalid")?;
        Ok(Self::from_content(content))
    }

    /// Loads the catalogue from `path` when given. A file that cannot be
    /// read or does not validate is logged and replaced by the embedded copy.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Self::embedded();
        };

        match read_content_file(path) {
            Ok(content) => {
                tracing::info!(path = %path.display(), "Loaded portfolio content");
                Ok(Self::from_content(content))
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %format!("{e:#}"),
                    "Portfolio content unavailable, falling back to embedded copy"
                );
                Self::embedded()
            }
        }
    }
}

fn read_content_file(path: &Path) -> anyhow::Result<PortfolioContent> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_content(&raw)
}

fn parse_content(raw: &str) -> anyhow::Result<PortfolioContent> {
    let content: PortfolioContent = serde_json::from_str(raw)
        .context("failed to parse portfolio content")?;
    content.validate().context("portfolio content failed validation")?;

    ensure!(
        unique(content.projects.iter().map(|p| p.summary.slug.as_str())),
        "duplicate project slug"
    );
    ensure!(
        unique(content.blog_posts.iter().map(|p| p.slug.as_str())),
        "duplicate blog post slug"
    );
    Ok(content)
}

fn unique<'a>(mut slugs: impl Iterator<Item = &'a str>) -> bool {
    let mut seen = HashSet::new();
    slugs.all(|slug| seen.insert(slug))
}

#[async_trait]
impl ContentRepository for StaticContentRepo {
    async fn profile(&self) -> Result<Profile, AppError> {
        Ok(self.content.profile.clone())
    }

    async fn projects(&self) -> Result<Vec<ProjectSummary>, AppError> {
        Ok(self.content.projects.iter().map(|p| p.summary.clone()).collect())
    }

    async fn project_by_slug(&self, slug: &str) -> Result<Option<ProjectDetail>, AppError> {
        Ok(self.content.projects.iter().find(|p| p.summary.slug == slug).cloned())
    }

    async fn blog_posts(&self) -> Result<Vec<BlogPost>, AppError> {
        Ok(self.content.blog_posts.clone())
    }

    async fn blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, AppError> {
        Ok(self.content.blog_posts.iter().find(|p| p.slug == slug).cloned())
    }

    async fn skills(&self) -> Result<Vec<SkillCategory>, AppError> {
        Ok(self.content.skills.clone())
    }

    async fn timeline(&self) -> Result<Vec<TimelineItem>, AppError> {
        Ok(self.content.timeline.clone())
    }
}
