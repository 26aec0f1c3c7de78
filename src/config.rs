use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub query: QuerySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            environment: default_environment(),
        }
    }
}

impl ServerSettings {
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }
fn default_environment() -> String { "development".to_string() }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuerySettings {
    /// Upper bound applied to positive query limits; unset means no cap
    pub max_limit: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration files (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with MATCHING__)
    /// 4. Plain PORT and ENVIRONMENT variables
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MATCHING__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        apply_plain_env_overrides(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        apply_plain_env_overrides(settings)?.try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("MATCHING")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Honor the bare PORT and ENVIRONMENT variables used by container platforms
fn apply_plain_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Some(port) = env::var("PORT").ok().filter(|v| !v.is_empty()) {
        let port: u16 = port
            .parse()
            .map_err(|_| ConfigError::Message(format!("PORT is not a valid port: {}", port)))?;
        builder = builder.set_override("server.port", i64::from(port))?;
    }
    if let Some(environment) = env::var("ENVIRONMENT").ok().filter(|v| !v.is_empty()) {
        builder = builder.set_override("server.environment", environment)?;
    }

    builder.build()
}
