/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_app")]
    pub app: AppSettings,

    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_database")]
    pub database: DatabaseSettings,

    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,

    #[serde(default = "default_app_env")]
    pub env: String,
}

impl AppSettings {
    pub fn is_development(&self) -> bool {
        self.env == "development"
    }

    pub fn is_production(&self) -> bool {
        self.env == "production"
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseSettings {
    #[serde(default = "default_db_host")]
    pub host: String,

    #[serde(default = "default_db_port")]
    pub port: u16,

    #[serde(default = "default_db_user")]
    pub user: String,

    #[serde(default)]
    pub password: String,

    #[serde(default = "default_db_name")]
    pub database: String,

    #[serde(default = "default_sslmode")]
    pub sslmode: String,
}

impl DatabaseSettings {
    /// Connection string for the PostgreSQL pool
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}?sslmode={}",
            self.user, self.password, self.host, self.port, self.database, self.sslmode
        )
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthSettings {
    /// Symmetric signing key. Required; there is deliberately no
    /// default so a secret can never ship embedded in the binary.
    pub jwt_secret: String,

    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: i64,
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        let mut settings = config::Config::builder();

        // Load from config file if it exists
        let config_path = PathBuf::from("config.toml");
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        }

        // Override with environment variables. The nesting separator
        // is a double underscore so multi-word field names survive:
        // USERHUB_AUTH__JWT_SECRET maps to auth.jwt_secret.
        settings = settings.add_source(
            config::Environment::with_prefix("USERHUB")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.auth.jwt_secret.is_empty() {
            return Err(ServerError::Config(
                "JWT secret is required (set USERHUB_AUTH__JWT_SECRET)".to_string(),
            ));
        }

        if self.auth.token_ttl_hours < 1 {
            return Err(ServerError::Config(
                "token TTL must be at least one hour".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_app() -> AppSettings {
    AppSettings {
        name: default_app_name(),
        env: default_app_env(),
    }
}

fn default_app_name() -> String {
    "userhub".to_string()
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_database() -> DatabaseSettings {
    DatabaseSettings {
        host: default_db_host(),
        port: default_db_port(),
        user: default_db_user(),
        password: String::new(),
        database: default_db_name(),
        sslmode: default_sslmode(),
    }
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    5432
}

fn default_db_user() -> String {
    "postgres".to_string()
}

fn default_db_name() -> String {
    "userhub".to_string()
}

fn default_sslmode() -> String {
    "disable".to_string()
}

fn default_token_ttl_hours() -> i64 {
    24
}
