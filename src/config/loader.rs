//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StatementError, StatementResult};

use super::types::AppConfig;

/// Configuration file used when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "./config/statement-engine.yaml";

/// Loads and provides access to the engine configuration.
///
/// # File Layout
///
/// ```text
/// api:
///   base_url: "http://localhost:8888"
/// output:
///   directory: "./statements"
/// batch:
///   delay_ms: 100
/// statement:
///   currency_symbol: "¥"
///   author: "Salary System"
/// logging:
///   level: "info"
///   json: false
/// ```
///
/// Sections and keys may be omitted; missing values take their defaults.
///
/// # Example
///
/// ```no_run
/// use statement_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/statement-engine.yaml")?;
/// println!("Writing statements to {}", loader.config().output.directory.display());
/// # Ok::<(), statement_engine::error::StatementError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file does not exist or cannot be read
    /// - The file contains invalid YAML or mistyped values
    pub fn load<P: AsRef<Path>>(path: P) -> StatementResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| StatementError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            StatementError::ConfigParseError { message, .. } => StatementError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml(content: &str) -> StatementResult<Self> {
        // An empty document is a valid "all defaults" configuration
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = serde_yaml::from_str::<AppConfig>(content).map_err(|e| {
            StatementError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    /// Replaces the output directory.
    pub fn with_output_dir(mut self, directory: impl Into<PathBuf>) -> Self {
        self.config.output.directory = directory.into();
        self
    }
}
