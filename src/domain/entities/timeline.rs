use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineKind {
    Work,
    Education,
}

/// One entry of the work/education history. Dates are `YYYY-MM`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TimelineKind,
    pub title: String,
    pub organization: String,
    pub location: String,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub end_date: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub highlights: Option<Vec<String>>,
}
