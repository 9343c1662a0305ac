//! Calculation logic for the Salary Statement Engine.
//!
//! This module contains the pure functions behind a statement: totals
//! computation over a salary record, payment and deduction line assembly,
//! currency formatting, label translation, artifact naming, and date
//! formatting. Nothing here touches a drawing surface.

mod currency;
mod dates;
pub mod labels;
mod naming;
mod totals;

pub use currency::format_currency;
pub use dates::{INVALID_DATE_TEXT, format_generated_at, format_payment_date, parse_payment_date};
pub use labels::translate;
pub use naming::statement_file_name;
pub use totals::{compute_totals, deduction_lines, payment_lines};
