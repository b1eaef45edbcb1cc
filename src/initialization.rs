use std::env;
use std::fs;
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::logging::setup_logger;

#[derive(Deserialize)]
pub struct WebServer {
    pub bind_address: String,
    pub bind_port: u16,
}

#[derive(Deserialize)]
pub struct Provider {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_city")]
    pub default_city: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

#[derive(Deserialize, Default)]
pub struct Auth {
    pub login_url: Option<String>,
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Deserialize)]
pub struct Config {
    pub web_server: WebServer,
    pub provider: Provider,
    #[serde(default)]
    pub auth: Auth,
    pub general: General,
}

fn default_base_url() -> String { "https://api.openweathermap.org/data/2.5".to_string() }
fn default_city() -> String { "Delhi".to_string() }
fn default_timeout() -> u64 { 30 }
fn default_log_level() -> String { "info".to_string() }

/// Loads the configuration file given as first argument (default config.toml) and starts logging.
/// The OWM_API_KEY environment variable, when set, overrides the configured api key.
///
pub fn config() -> Result<Config, ConfigError> {
    let path = env::args().nth(1).unwrap_or_else(|| "config.toml".to_string());
    let toml = fs::read_to_string(&path)?;

    let config = parse_config(&toml, env::var("OWM_API_KEY").ok())?;
    setup_logger(&config.general.log_level, config.general.log_path.as_deref())?;

    Ok(config)
}

/// Parses and checks a configuration document
///
/// # Arguments
///
/// * 'toml' - the configuration document
/// * 'api_key_override' - api key taking precedence over the one in the document
fn parse_config(toml: &str, api_key_override: Option<String>) -> Result<Config, ConfigError> {
    let mut config: Config = toml::from_str(toml)?;

    if let Some(key) = api_key_override {
        config.provider.api_key = key;
    }
    if config.provider.api_key.is_empty() {
        return Err(ConfigError::from("missing provider api_key"));
    }

    Ok(config)
}
