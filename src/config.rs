//! Configuration management for the address book demo.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is loaded first if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::str::FromStr;

/// How the demo prints records to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `Display` rendering, one record per line
    #[default]
    Text,

    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("Must be one of: text, json, got: {}", other)),
        }
    }
}

/// Configuration for the address book demo.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,

    /// Output format for printed records (default: text)
    pub output_format: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `ADDRESS_BOOK_OUTPUT`: `text` or `json` (default: "text")
    pub fn from_env() -> ConfigResult<Self> {
        Self::check_dotenv(dotenvy::dotenv())?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        let output_format = Self::parse_env("ADDRESS_BOOK_OUTPUT", OutputFormat::default())?;

        Ok(Config {
            log_level,
            output_format,
        })
    }

    /// Accept a missing .env file; reject a malformed one.
    fn check_dotenv<T>(result: Result<T, dotenvy::Error>) -> ConfigResult<()> {
        match result {
            Ok(_) => Ok(()),
            Err(e) if e.not_found() => Ok(()),
            Err(e) => Err(ConfigError::DotenvError(e.to_string())),
        }
    }

    /// Parse an environment variable with a default value.
    fn parse_env<T>(var_name: &str, default: T) -> ConfigResult<T>
    where
        T: FromStr<Err = String>,
    {
        match env::var(var_name) {
            Ok(val) => val.parse::<T>().map_err(|reason| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason,
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            output_format: OutputFormat::Text,
        }
    }
}
