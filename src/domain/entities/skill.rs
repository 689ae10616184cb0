use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SkillCategory {
    pub name: String,
    #[validate(nested)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Self-assessed, 0 to 100.
    #[validate(range(max = 100, message = "Proficiency must be between 0 and 100"))]
    pub proficiency: u8,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub icon: Option<String>,
}
