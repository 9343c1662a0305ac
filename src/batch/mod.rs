//! Batch generation of salary statements.
//!
//! [`BatchDriver`] fetches one pay period from a [`SalarySource`], renders
//! each record through a [`crate::render::SurfaceProvider`], and reports
//! progress to a [`Notifier`].

mod driver;
mod notifier;
mod source;

pub use driver::{BatchDriver, BatchReport, DEFAULT_DELAY, StatementOutcome};
pub use notifier::{ConsoleNotifier, MemoryNotifier, Notice, Notifier};
pub use source::SalarySource;
