//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from an optional TOML file with environment variable
//! overrides for the bot token and the allowed chat.
//!
//! # Example
//!
//! ```no_run
//! use dealwatch::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_or_default("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::io::ErrorKind;
use std::path::Path;

use reqwest::header::HeaderValue;
use serde::Deserialize;

use super::logging::LoggingConfig;
use super::scan::ScanConfig;
use super::telegram::{TelegramAppConfig, BOT_TOKEN_ENV, BOT_TOKEN_ENV_ALIAS, CHAT_ID_ENV};
use crate::adapter::outbound::json_file::DEFAULT_PRODUCTS_FILE;
use crate::error::{ConfigError, Result};

/// Environment variable overriding [`Config::products_file`].
pub const PRODUCTS_FILE_ENV: &str = "DEALWATCH_PRODUCTS_FILE";

/// Main application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path of the JSON product list.
    ///
    /// Defaults to "products.json" in the current directory.
    #[serde(default = "default_products_file")]
    pub products_file: String,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Telegram bot configuration.
    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// Fetch timeouts, sweep pacing, and reply limits.
    #[serde(default)]
    pub scan: ScanConfig,
}

fn default_products_file() -> String {
    DEFAULT_PRODUCTS_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            products_file: default_products_file(),
            logging: LoggingConfig::default(),
            telegram: TelegramAppConfig::default(),
            scan: ScanConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML content and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed, an override is invalid, or
    /// validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_env(content, |key| std::env::var(key).ok())
    }

    /// Same as [`Config::parse_toml`] with an explicit environment lookup.
    ///
    /// # Errors
    ///
    /// See [`Config::parse_toml`].
    pub fn parse_toml_with_env<F>(content: &str, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed,
    /// or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration, falling back to defaults when the file is absent.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`], except a missing file is not an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse_toml(&content),
            Err(err) if err.kind() == ErrorKind::NotFound => Self::parse_toml(""),
            Err(err) => Err(ConfigError::ReadFile(err).into()),
        }
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// The bot token, required to run the bot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when no token was supplied.
    pub fn require_bot_token(&self) -> Result<&str> {
        self.telegram
            .bot_token
            .as_deref()
            .ok_or_else(|| ConfigError::MissingField {
                field: BOT_TOKEN_ENV,
            })
            .map_err(Into::into)
    }

    fn apply_env<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        self.telegram.bot_token = non_empty(BOT_TOKEN_ENV)
            .or_else(|| non_empty(BOT_TOKEN_ENV_ALIAS))
            .map(|t| t.trim().to_string());

        if let Some(raw) = non_empty(CHAT_ID_ENV) {
            let chat_id = raw
                .trim()
                .parse::<i64>()
                .map_err(|e| ConfigError::InvalidValue {
                    field: CHAT_ID_ENV,
                    reason: e.to_string(),
                })?;
            self.telegram.allowed_chat_id = Some(chat_id);
        }

        if let Some(path) = non_empty(PRODUCTS_FILE_ENV) {
            self.products_file = path;
        }

        Ok(())
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.products_file.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "products_file",
            }
            .into());
        }

        let scan = &self.scan;
        if scan.check_timeout_secs == 0 || scan.sweep_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "fetch timeouts must be greater than 0".to_string(),
            }
            .into());
        }
        if scan.check_display_limit == 0
            || scan.sweep_matches_per_store == 0
            || scan.sweep_stores_shown == 0
            || self.telegram.list_display_limit == 0
        {
            return Err(ConfigError::InvalidValue {
                field: "display_limits",
                reason: "display limits must be greater than 0".to_string(),
            }
            .into());
        }
        if scan.user_agent.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "user_agent",
            }
            .into());
        }
        if let Err(e) = HeaderValue::from_str(&scan.user_agent) {
            return Err(ConfigError::InvalidValue {
                field: "user_agent",
                reason: e.to_string(),
            }
            .into());
        }

        Ok(())
    }
}
