use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use dotenv::dotenv;
use std::{env, fmt, str::FromStr};
use url::Url;
use validator::ValidateEmail;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,

    /// Sender address, optionally with a display name: `Site <no-reply@site.dev>`.
    #[serde(default = "default_email_from")]
    pub email_from: String,

    #[serde(default = "default_email_to")]
    pub email_to: String,

    #[serde(default)]
    pub resend_api_key: String,

    #[serde(default = "default_email_api_url")]
    pub email_api_url: String,

    #[serde(default = "default_email_timeout")]
    pub email_timeout_secs: u64,

    #[serde(default = "default_contact_rate_limit")]
    pub contact_rate_limit: u32,

    #[serde(default = "default_contact_rate_window")]
    pub contact_rate_window_secs: u64,

    /// JSON catalogue overriding the embedded portfolio content.
    #[serde(default)]
    pub content_path: Option<String>,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Portfolio-API".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}
fn default_email_from() -> String {
    "onboarding@resend.dev".to_string()
}
fn default_email_to() -> String {
    "hello@example.com".to_string()
}
fn default_email_api_url() -> String {
    "https://api.resend.com".to_string()
}
fn default_email_timeout() -> u64 {
    10
}
fn default_contact_rate_limit() -> u32 {
    3
}
fn default_contact_rate_window() -> u64 {
    60 * 60
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors_allowed_origins")
                    .ignore_empty(true)
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        // Unprefixed names used by hosting dashboards
        config.resend_api_key = prefer_env(config.resend_api_key, "APP_RESEND_API_KEY", "RESEND_API_KEY");
        config.email_from = prefer_env(config.email_from, "APP_EMAIL_FROM", "EMAIL_FROM");
        config.email_to = prefer_env(config.email_to, "APP_EMAIL_TO", "EMAIL_TO");

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !mailbox_address(&self.email_from).validate_email() {
            errors.push("EMAIL_FROM must be a valid email address");
        }
        if !mailbox_address(&self.email_to).validate_email() {
            errors.push("EMAIL_TO must be a valid email address");
        }
        match Url::parse(&self.email_api_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => errors.push("EMAIL_API_URL must be an http(s) URL"),
        }
        if self.email_timeout_secs == 0 {
            errors.push("EMAIL_TIMEOUT_SECS must be greater than 0");
        }
        if self.contact_rate_limit == 0 {
            errors.push("CONTACT_RATE_LIMIT must be greater than 0");
        }
        if self.contact_rate_window_secs == 0 {
            errors.push("CONTACT_RATE_WINDOW_SECS must be greater than 0");
        }
        if self.is_production() && self.resend_api_key.trim().is_empty() {
            errors.push("RESEND_API_KEY must be set in production");
        }
        if self.is_production() && self.cors_origins().iter().any(|o| o == "*") {
            errors.push("Wildcard CORS (*) is not allowed in production");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .iter()
            .flat_map(|origin| origin.split(','))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Keeps `current` when the prefixed variable is set, otherwise takes the
/// unprefixed one if present.
fn prefer_env(current: String, prefixed_key: &str, bare_key: &str) -> String {
    if env::var(prefixed_key).is_ok() {
        return current;
    }
    env::var(bare_key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(current)
}

/// `Name <addr@host>` -> `addr@host`
fn mailbox_address(mailbox: &str) -> &str {
    match (mailbox.rfind('<'), mailbox.rfind('>')) {
        (Some(start), Some(end)) if start < end => mailbox[start + 1..end].trim(),
        _ => mailbox.trim(),
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

trait Redact {
    fn redact(&self) -> &str;
}

impl Redact for str {
    fn redact(&self) -> &str {
        if self.is_empty() {
            "[MISSING]"
        } else {
            "[REDACTED]"
        }
    }
}

impl Redact for String {
    fn redact(&self) -> &str {
        self.as_str().redact()
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("worker_count", &self.worker_count)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("email_from", &self.email_from)
            .field("email_to", &self.email_to)
            .field("resend_api_key", &self.resend_api_key.redact())
            .field("email_api_url", &self.email_api_url)
            .field("email_timeout_secs", &self.email_timeout_secs)
            .field("contact_rate_limit", &self.contact_rate_limit)
            .field("contact_rate_window_secs", &self.contact_rate_window_secs)
            .field("content_path", &self.content_path)
            .finish()
    }
}
