//! Configuration management for Inkwell.
//!
//! Configuration is resolved in layers, later layers winning:
//! - Built-in defaults
//! - An optional YAML config file
//! - Environment variables
//! - Command-line flags
//!
//! The config file is only ever read. Inkwell writes nothing to disk.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Default text-generation provider.
pub const DEFAULT_PROVIDER: &str = "gemini";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variables consulted for the API key, in order.
pub const DEFAULT_API_KEY_ENVS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

const KNOWN_PROVIDERS: [&str; 2] = ["gemini", "google"];

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Config file the settings were merged from, if any
    pub config_file: Option<PathBuf>,

    /// Text-generation provider (e.g., "gemini")
    pub provider: String,

    /// Model identifier sent with every request
    pub model: String,

    /// Custom provider endpoint (base URL)
    pub endpoint: Option<String>,

    /// Environment variable named by the config file for the API key
    pub api_key_env: Option<String>,

    /// API key for the provider
    pub api_key: Option<String>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    llm: Option<LlmSection>,
    logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct LlmSection {
    provider: Option<String>,
    model: Option<String>,
    endpoint: Option<String>,
    #[serde(rename = "apiKeyEnv")]
    api_key_env: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct LoggingSection {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_file: None,
            provider: DEFAULT_PROVIDER.to_string(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: None,
            api_key_env: None,
            api_key: None,
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional config file and the process environment.
    ///
    /// Environment variables:
    /// - `INKWELL_PROVIDER`: Provider name
    /// - `INKWELL_MODEL`: Model identifier
    /// - `INKWELL_ENDPOINT`: Provider base URL
    /// - `API_KEY`, then `GEMINI_API_KEY`: API key (after the config file's `apiKeyEnv`)
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// # Example
    /// ```no_run
    /// use inkwell_core::config::AppConfig;
    ///
    /// let config = AppConfig::load(None).expect("Failed to load config");
    /// println!("Model: {}", config.model);
    /// ```
    pub fn load(config_file: Option<&Path>) -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_file {
            config = config.merge_yaml(path)?;
        }

        Ok(config.apply_env(|key| std::env::var(key).ok()))
    }

    /// Merge a YAML configuration file into this config.
    ///
    /// An explicitly named file that does not exist is an error.
    pub fn merge_yaml(&self, path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();
        result.config_file = Some(path.to_path_buf());

        if let Some(llm) = config_file.llm {
            if let Some(provider) = llm.provider {
                result.provider = provider;
            }
            if let Some(model) = llm.model {
                result.model = model;
            }
            if llm.endpoint.is_some() {
                result.endpoint = llm.endpoint;
            }
            if llm.api_key_env.is_some() {
                result.api_key_env = llm.api_key_env;
            }
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        tracing::debug!("Merged config file {:?}", path);
        Ok(result)
    }

    /// Apply environment overrides using the given variable lookup.
    pub fn apply_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(provider) = lookup("INKWELL_PROVIDER") {
            self.provider = provider;
        }

        if let Some(model) = lookup("INKWELL_MODEL") {
            self.model = model;
        }

        if let Some(endpoint) = lookup("INKWELL_ENDPOINT") {
            self.endpoint = Some(endpoint);
        }

        self.api_key = self
            .api_key_env
            .iter()
            .map(String::as_str)
            .chain(DEFAULT_API_KEY_ENVS)
            .filter_map(|name| lookup(name))
            .find(|key| !key.is_empty());

        if let Some(level) = lookup("RUST_LOG") {
            self.log_level = Some(level);
        }

        if lookup("NO_COLOR").is_some() {
            self.no_color = true;
        }

        self
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// CLI flags take precedence over the environment and the config file.
    pub fn with_overrides(
        mut self,
        provider: Option<String>,
        model: Option<String>,
        endpoint: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(provider) = provider {
            self.provider = provider;
        }

        if let Some(model) = model {
            self.model = model;
        }

        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint);
        }

        if verbose {
            self.verbose = true;
            // Verbose beats RUST_LOG and the config file, not an explicit --log-level
            self.log_level = Some("debug".to_string());
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Validate configuration for the active provider.
    ///
    /// A missing API key is not an error here; the provider call fails instead.
    pub fn validate(&self) -> AppResult<()> {
        let provider = self.provider.to_lowercase();
        if !KNOWN_PROVIDERS.contains(&provider.as_str()) {
            return Err(AppError::Config(format!(
                "Unknown provider: {}. Supported: {}",
                self.provider,
                KNOWN_PROVIDERS.join(", ")
            )));
        }

        if self.model.trim().is_empty() {
            return Err(AppError::Config("Model identifier cannot be empty".to_string()));
        }

        Ok(())
    }
}
