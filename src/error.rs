//! Error types for the Salary Statement Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while fetching salary records
//! and rendering statements.

use thiserror::Error;

/// The main error type for the Salary Statement Engine.
///
/// Errors never escape the batch driver: it turns them into notices and
/// per-record outcomes. They surface directly only from startup code
/// (configuration, logger, HTTP client construction).
///
/// # Example
///
/// ```
/// use statement_engine::error::StatementError;
///
/// let error = StatementError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum StatementError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The HR API could not be reached or the connection failed mid-request.
    #[error("Transport error: {message}")]
    Transport {
        /// A description of the transport failure.
        message: String,
    },

    /// The HR API answered with a non-success HTTP status.
    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus {
        /// The HTTP status code.
        status: u16,
        /// The response body, as text.
        body: String,
    },

    /// The HR API answered with a body that could not be decoded.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// A description of the decoding failure.
        message: String,
    },

    /// A font could not be registered with the drawing surface.
    #[error("Font error: {message}")]
    Font {
        /// A description of the font failure.
        message: String,
    },

    /// The drawing surface failed while laying out a statement.
    #[error("Render error: {message}")]
    Render {
        /// A description of the render failure.
        message: String,
    },

    /// A statement could not be written to its output location.
    #[error("Failed to persist '{path}': {message}")]
    Persist {
        /// The path of the artifact being written.
        path: String,
        /// A description of the write failure.
        message: String,
    },

    /// A salary record input file could not be read or parsed.
    #[error("Invalid input file '{path}': {message}")]
    Input {
        /// The path of the input file.
        path: String,
        /// A description of the failure.
        message: String,
    },

    /// The logging subscriber could not be installed.
    #[error("Failed to initialise logging: {message}")]
    Logging {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return StatementError.
pub type StatementResult<T> = Result<T, StatementError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = StatementError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = StatementError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_unexpected_status_displays_status_and_body() {
        let error = StatementError::UnexpectedStatus {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(error.to_string(), "Unexpected HTTP status 502: bad gateway");
    }

    #[test]
    fn test_persist_displays_path_and_message() {
        let error = StatementError::Persist {
            path: "2024-3-Jane_Doe.pdf".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to persist '2024-3-Jane_Doe.pdf': permission denied"
        );
    }

    #[test]
    fn test_render_error_displays_message() {
        let error = StatementError::Render {
            message: "surface closed".to_string(),
        };
        assert_eq!(error.to_string(), "Render error: surface closed");
    }

    #[test]
    fn test_input_error_displays_path() {
        let error = StatementError::Input {
            path: "salary.json".to_string(),
            message: "expected value".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid input file 'salary.json': expected value"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<StatementError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_transport() -> StatementResult<()> {
            Err(StatementError::Transport {
                message: "connection refused".to_string(),
            })
        }

        fn propagates_error() -> StatementResult<()> {
            returns_transport()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
