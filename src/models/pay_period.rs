//! Pay period model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A `(year, month)` pair identifying which month's salary is reported.
///
/// The month is not range-checked; whatever the caller supplies is passed
/// through to the HR API as-is.
///
/// # Example
///
/// ```
/// use statement_engine::models::PayPeriod;
///
/// let period = PayPeriod::new(2024, 3);
/// assert_eq!(period.to_string(), "2024/3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayPeriod {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-based.
    pub month: u32,
}

impl PayPeriod {
    /// Creates a pay period.
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.year, self.month)
    }
}
