use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub use common::ScoringConfig;

/// Fallback session secret for local development. Override it in any shared
/// deployment through `SCOREBOARD__SESSION__SECRET_KEY`.
pub const DEV_SECRET_KEY: &str = "scoreboard-development-secret-change-me";

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Origins allowed to call the JSON API. Default: none.
    #[serde(default)]
    pub allow_origins: Vec<String>,
    /// Preflight cache lifetime in seconds. Default: 3600.
    #[serde(default = "default_cors_max_age")]
    pub max_age: u64,
}

fn default_cors_max_age() -> u64 {
    3600
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origins: Vec::new(),
            max_age: default_cors_max_age(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Secret used to sign flash cookies.
    pub secret_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("SCOREBOARD_CONFIG").unwrap_or_else(|_| "config/config".to_string());
        Self::load_from(&config_path, Environment::default())
    }

    /// Layer defaults, the optional config file and `env` (read with the
    /// `SCOREBOARD__` prefix, e.g. `SCOREBOARD__SCORING__SEED`).
    fn load_from(config_path: &str, env: Environment) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("database.url", "sqlite://student.db?mode=rwc")?
            .set_default("session.secret_key", DEV_SECRET_KEY)?
            // Load from config/config.toml
            .add_source(File::with_name(config_path).required(false))
            .add_source(env.prefix("SCOREBOARD").separator("__").try_parsing(true))
            .build()?;

        s.try_deserialize()
    }
}
