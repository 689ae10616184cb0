use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Profile {
    #[validate(length(min = 1))]
    pub name: String,
    pub title: String,
    pub location: String,
    pub summary: String,
    pub avatar: String,
    #[validate(nested)]
    pub social: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SocialLink {
    pub network: String,
    #[validate(url)]
    pub url: String,
}
