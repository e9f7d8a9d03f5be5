use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use dotenv::dotenv;
use std::{env, fmt, str::FromStr};

pub const MIN_ADMIN_TOKEN_LENGTH: usize = 32;

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

    #[serde(default)]
    pub database_url: String,

    #[serde(default = "default_db_max_connections")]
    pub db_max_connections: u32,

    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,

    #[serde(default)]
    pub admin_token: Option<String>,

    #[serde(default = "default_site_name")]
    pub site_name: String,

    #[serde(default = "default_site_description")]
    pub site_description: String,

    #[serde(default = "default_static_url")]
    pub static_url: String,

    /// Directory the external file server publishes under `static_url`.
    #[serde(default = "default_static_root")]
    pub static_root: String,

    #[serde(default = "default_media_url")]
    pub media_url: String,

    /// Directory the external file server publishes under `media_url`.
    /// Image fields store paths relative to it.
    #[serde(default = "default_media_root")]
    pub media_root: String,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Portfolio-Site".to_string()
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
fn default_db_max_connections() -> u32 {
    20
}
fn default_run_migrations() -> bool {
    true
}
fn default_site_name() -> String {
    "NDACYAYISABA Lambert Portfolio".to_string()
}
fn default_site_description() -> String {
    "AI Specialist, Applied Mathematician, and Software Engineer".to_string()
}
fn default_static_url() -> String {
    "/static/".to_string()
}
fn default_static_root() -> String {
    "staticfiles".to_string()
}
fn default_media_url() -> String {
    "/media/".to_string()
}
fn default_media_root() -> String {
    "media".to_string()
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
            .add_source(Environment::with_prefix("APP").prefix_separator("_").ignore_empty(true));

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        config.database_url = fill_or_env(config.database_url, "APP_DATABASE_URL")?;

        if config.admin_token.is_none() {
            config.admin_token = env::var("APP_ADMIN_TOKEN").ok();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.database_url.trim().is_empty() {
            errors.push("DATABASE_URL cannot be empty".to_string());
        }
        match self.admin_token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() && token.len() < MIN_ADMIN_TOKEN_LENGTH => {
                errors.push(format!("ADMIN_TOKEN must be at least {MIN_ADMIN_TOKEN_LENGTH} characters"));
            }
            Some(token) if token.is_empty() && self.is_production() => {
                errors.push("ADMIN_TOKEN is required in production".to_string());
            }
            None if self.is_production() => {
                errors.push("ADMIN_TOKEN is required in production".to_string());
            }
            _ => {}
        }
        if !self.static_url.ends_with('/') || !self.media_url.ends_with('/') {
            errors.push("STATIC_URL and MEDIA_URL must end with a slash".to_string());
        }
        if self.worker_count == 0 {
            errors.push("WORKER_COUNT must be at least 1".to_string());
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

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn fill_or_env(current: String, env_key: &str) -> Result<String, ConfigError> {
    if current.trim().is_empty() {
        env::var(env_key).map_err(|_| ConfigError::Message(format!("{env_key} must be set")))
    } else {
        Ok(current)
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

impl Redact for Option<String> {
    fn redact(&self) -> &str {
        match self {
            Some(value) => value.as_str().redact(),
            None => "[MISSING]",
        }
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
            .field("database_url", &self.database_url.redact())
            .field("db_max_connections", &self.db_max_connections)
            .field("run_migrations", &self.run_migrations)
            .field("admin_token", &self.admin_token.redact())
            .field("site_name", &self.site_name)
            .field("static_url", &self.static_url)
            .field("static_root", &self.static_root)
            .field("media_url", &self.media_url)
            .field("media_root", &self.media_root)
            .finish()
    }
}
