use serde::{Deserialize, Serialize};

/// Card-level view used by the project list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub short: String,
    pub cover: String,
    pub tech: Vec<String>,
    pub year: u16,
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub summary: ProjectSummary,
    pub description: String,
    pub images: Vec<String>,
    pub role: String,
    pub duration: String,
    pub links: ProjectLinks,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectLinks {
    pub repo: String,
    pub live: String,
}
