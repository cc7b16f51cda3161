use crate::core::ResultExtractor;
use crate::models::Language;
use crate::services::openai::{
    ClassifierOptions, DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS,
};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub openai: OpenAiSettings,
    #[serde(default)]
    pub analysis: AnalysisSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiSettings {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String { DEFAULT_ENDPOINT.to_string() }
fn default_model() -> String { DEFAULT_MODEL.to_string() }
fn default_max_tokens() -> u32 { DEFAULT_MAX_TOKENS }
fn default_timeout_secs() -> u64 { DEFAULT_TIMEOUT_SECS }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisSettings {
    #[serde(default)]
    pub language: Language,
    /// Reject structured replies with an unknown category or out-of-range confidence
    #[serde(default)]
    pub validate_structured: bool,
}

impl OpenAiSettings {
    /// The API key, treating blank values as unset
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn classifier_options(&self) -> ClassifierOptions {
        ClassifierOptions {
            endpoint: self.endpoint.clone(),
            api_key: self.api_key().map(str::to_string),
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

impl AnalysisSettings {
    pub fn extractor(&self) -> ResultExtractor {
        ResultExtractor::new(self.language, self.validate_structured)
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with COLOR_)
    /// 5. OPENAI_API_KEY, if set
    pub fn load() -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., COLOR__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        apply_api_key_override(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        apply_api_key_override(settings)?.try_deserialize()
    }
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("openai.endpoint", DEFAULT_ENDPOINT)?
        .set_default("openai.model", DEFAULT_MODEL)?
        .set_default("openai.max_tokens", i64::from(DEFAULT_MAX_TOKENS))?
        .set_default("openai.timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
        .set_default("analysis.language", "ko")?
        .set_default("analysis.validate_structured", false)
}

fn environment() -> Environment {
    Environment::with_prefix("COLOR")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// The plain OPENAI_API_KEY variable wins over file and prefixed settings
fn apply_api_key_override(settings: Config) -> Result<Config, ConfigError> {
    let Ok(api_key) = std::env::var("OPENAI_API_KEY") else {
        return Ok(settings);
    };

    Config::builder()
        .add_source(settings)
        .set_override("openai.api_key", api_key)?
        .build()
}
