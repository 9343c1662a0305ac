//! User-facing batch feedback.

use std::fmt;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::{info, warn};

/// A notification emitted at the end of a batch stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// Salary records could not be fetched; nothing was generated.
    FetchFailed {
        /// What went wrong.
        message: String,
    },
    /// The pay period has no salary records.
    NoData,
    /// One employee's statement could not be generated.
    StatementFailed {
        /// The employee's name.
        employee: String,
        /// What went wrong.
        message: String,
    },
    /// Every record has been processed.
    Completed {
        /// Statements written.
        generated: usize,
        /// Statements that failed.
        failed: usize,
    },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::FetchFailed { message } => {
                write!(f, "Failed to fetch salary data: {}", message)
            }
            Notice::NoData => write!(f, "No salary data found for the selected period"),
            Notice::StatementFailed { employee, message } => write!(
                f,
                "An error occurred while generating the statement for {}: {}",
                employee, message
            ),
            Notice::Completed { generated, failed } if *failed == 0 => {
                write!(f, "All salary statements generated ({})", generated)
            }
            Notice::Completed { generated, failed } => write!(
                f,
                "Salary statements generated ({} generated, {} failed)",
                generated, failed
            ),
        }
    }
}

/// Receives batch notices.
pub trait Notifier: Send + Sync {
    /// Delivers one notice.
    fn notify(&self, notice: &Notice);
}

/// Prints notices to stdout and mirrors them to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: &Notice) {
        match notice {
            Notice::FetchFailed { .. } | Notice::StatementFailed { .. } => {
                warn!(notice = %notice, "Batch notice")
            }
            Notice::NoData | Notice::Completed { .. } => info!(notice = %notice, "Batch notice"),
        }
        println!("{}", notice);
    }
}

/// Keeps notices in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl MemoryNotifier {
    /// Creates an empty notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the notices received so far, oldest first.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|notices| notices.clone())
            .unwrap_or_default()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notice: &Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice.clone());
        }
    }
}
