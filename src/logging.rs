//! Logging setup.
//!
//! Installs a `tracing-subscriber` registry with an [`EnvFilter`] and a
//! single fmt layer on stderr, so stdout stays free for batch notices.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::{StatementError, StatementResult};

/// Builds the filter: `RUST_LOG` when set, otherwise `level`.
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialises the global logger.
///
/// # Arguments
/// * `level` - Default filter directive (e.g. "info", "statement_engine=debug")
/// * `json` - Emit JSON lines instead of human-readable output
///
/// # Examples
/// ```no_run
/// statement_engine::logging::init_logger("debug", false)?;
/// # Ok::<(), statement_engine::error::StatementError>(())
/// ```
pub fn init_logger(level: &str, json: bool) -> StatementResult<()> {
    let registry = tracing_subscriber::registry().with(env_filter(level));

    let result = if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
    };

    result.map_err(|e| StatementError::Logging {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        let _ = init_logger("warn", false);
        let second = init_logger("warn", true);

        assert!(matches!(second, Err(StatementError::Logging { .. })));
    }

    #[test]
    fn test_env_filter_accepts_directives() {
        let filter = env_filter("statement_engine=debug,warn");
        assert!(!filter.to_string().is_empty());
    }
}
