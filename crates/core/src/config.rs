//! Layered application configuration.
//!
//! Sources, lowest precedence first: built-in defaults, optional
//! `config/default`, `config/{ESTATE_CHAT_ENV}` and `config/local` files, then
//! `APP__SECTION__KEY` environment variables. The provider key is read from
//! `GEMINI_API_KEY` and is mandatory.

use std::collections::HashMap;
use std::ffi::OsString;

use config::{Config, ConfigError, Environment, File};
use secrecy::Secret;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Environment variable holding the provider API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Environment variable selecting the config file profile.
pub const PROFILE_VAR: &str = "ESTATE_CHAT_ENV";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai/";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Origins of the website front-ends allowed to call the chat endpoint.
const DEFAULT_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "https://real-estate-website-snowy-eight.vercel.app",
    "https://tester-chatbot.onrender.com",
];

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub gateway: GatewayConfig,
    pub model: ModelConfig,
    pub runner: RunnerConfig,
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GatewayConfig {
    pub allowed_origins: Vec<String>,
    pub enable_tracing: bool,
}

impl GatewayConfig {
    /// Origins in the form browsers send them: no trailing slash, no path.
    pub fn normalized_origins(&self) -> Vec<String> {
        self.allowed_origins
            .iter()
            .map(|origin| origin.trim().trim_end_matches('/').to_string())
            .filter(|origin| !origin.is_empty())
            .collect()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Secret<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RunnerConfig {
    pub max_turns: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelemetryConfig {
    pub json_logs: bool,
    pub log_filter: String,
}

impl AppConfig {
    /// Load configuration from files and the process environment.
    pub fn load() -> Result<Self> {
        Self::from_vars(utf8_vars(std::env::vars_os()))
    }

    /// Load configuration from files and the given environment variables.
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Result<Self> {
        let vars: HashMap<String, String> = vars.into_iter().collect();

        let api_key = vars
            .get(API_KEY_VAR)
            .map(|key| key.trim())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                Error::configuration(format!("{} environment variable is not set.", API_KEY_VAR))
            })?
            .to_string();

        let profile = vars
            .get(PROFILE_VAR)
            .cloned()
            .unwrap_or_else(|| "development".into());

        let app_vars: config::Map<String, String> = vars
            .iter()
            .filter(|(key, _)| key.starts_with("APP__"))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        let config = Self::build(&profile, app_vars, api_key)
            .map_err(|e| Error::configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.runner.max_turns == 0 {
            return Err(Error::configuration("runner.max_turns must be at least 1"));
        }
        Ok(())
    }

    fn build(
        profile: &str,
        app_vars: config::Map<String, String>,
        api_key: String,
    ) -> std::result::Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("gateway.allowed_origins", DEFAULT_ORIGINS.to_vec())?
            .set_default("gateway.enable_tracing", true)?
            .set_default("model.base_url", DEFAULT_BASE_URL)?
            .set_default("model.model", DEFAULT_MODEL)?
            .set_default("runner.max_turns", 10)?
            .set_default("telemetry.json_logs", false)?
            .set_default("telemetry.log_filter", "info,estate_chat=debug")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", profile)).required(false))
            .add_source(File::with_name("config/local").required(false))
            // Map APP__SERVER__PORT=8000 to server.port
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("gateway.allowed_origins")
                    .source(Some(app_vars)),
            )
            .set_override("model.api_key", api_key)?
            .build()?;

        s.try_deserialize()
    }
}

/// Keep the variables whose name and value are valid UTF-8.
///
/// Variables unrelated to the service may hold arbitrary bytes.
fn utf8_vars(vars: impl IntoIterator<Item = (OsString, OsString)>) -> Vec<(String, String)> {
    vars.into_iter()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}
