pub mod blog_post;
pub mod contact;
pub mod email;
pub mod profile;
pub mod project;
pub mod rate_limit;
pub mod skill;
pub mod timeline;
