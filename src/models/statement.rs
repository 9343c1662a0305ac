//! Statement models.
//!
//! This module contains the values derived while rendering a statement:
//! the table lines, the computed totals, and the [`StatementSummary`]
//! describing what was produced.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a payment or deduction table.
///
/// `label` is the untranslated domain label (for example `基本給`); the
/// layout engine translates it when drawing.
///
/// # Example
///
/// ```
/// use statement_engine::models::StatementLine;
/// use rust_decimal::Decimal;
///
/// let line = StatementLine::new("基本給", Decimal::from(300000));
/// assert_eq!(line.label, "基本給");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    /// Untranslated domain label.
    pub label: String,
    /// Amount shown in the amount column.
    pub amount: Decimal,
}

impl StatementLine {
    /// Creates a table line.
    pub fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Totals computed from a salary record's components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatementTotals {
    /// Base salary plus allowances.
    pub total_pay: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// Total pay minus total deductions. May be negative.
    pub net_pay: Decimal,
}

/// What rendering one statement produced.
///
/// The `*_end_y` fields are page coordinates in millimetres, measured from
/// the top edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementSummary {
    /// File name the artifact was saved under.
    pub file_name: String,
    /// Totals shown on the statement.
    pub totals: StatementTotals,
    /// Number of data rows in the payment table, including the total row.
    pub payment_rows: usize,
    /// Number of data rows in the deduction table, including the total row.
    pub deduction_rows: usize,
    /// Bottom edge of the payment table.
    pub payment_table_end_y: f32,
    /// Bottom edge of the deduction table.
    pub deduction_table_end_y: f32,
    /// Bottom edge of the net-pay box.
    pub net_pay_box_end_y: f32,
}
