//! Configuration loading for the Salary Statement Engine.
//!
//! This module loads the engine's settings (HR API location, output
//! directory, batch pacing, statement appearance, logging) from a YAML file.
//! Every setting has a default, so a partial file is valid.
//!
//! # Example
//!
//! ```no_run
//! use statement_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/statement-engine.yaml").unwrap();
//! println!("HR API: {}", loader.config().api.base_url);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_PATH};
pub use types::{
    ApiConfig, AppConfig, BatchConfig, LoggingConfig, OutputConfig, StatementConfig,
};
