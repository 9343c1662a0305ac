//! Configuration types.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Location of the HR API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8888".to_string(),
        }
    }
}

/// Where statements are written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving the PDF files. Created on demand.
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

/// Batch pacing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Pause after each generated statement, in milliseconds.
    pub delay_ms: u64,
}

impl BatchConfig {
    /// Returns the pause as a [`Duration`].
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { delay_ms: 100 }
    }
}

/// Statement appearance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatementConfig {
    /// Prefix placed before every amount.
    pub currency_symbol: String,
    /// Author recorded in the document properties.
    pub author: String,
}

impl Default for StatementConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "¥".to_string(),
            author: "Salary System".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// The complete engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HR API settings.
    pub api: ApiConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Batch settings.
    pub batch: BatchConfig,
    /// Statement settings.
    pub statement: StatementConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}
