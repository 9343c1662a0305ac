//! Totals computation and table line assembly.
//!
//! Totals are always recomputed from a record's components. Missing
//! components count as zero; net pay is not clamped.

use rust_decimal::Decimal;

use super::labels;
use crate::error::{StatementError, StatementResult};
use crate::models::{SalaryRecord, StatementLine, StatementTotals};

fn amount(value: Option<Decimal>) -> Decimal {
    value.unwrap_or(Decimal::ZERO)
}

/// Sums `components`, failing when the result leaves the Decimal range.
fn checked_sum(what: &str, components: &[Option<Decimal>]) -> StatementResult<Decimal> {
    components
        .iter()
        .try_fold(Decimal::ZERO, |sum, value| sum.checked_add(amount(*value)))
        .ok_or_else(|| StatementError::Render {
            message: format!("{} overflows the decimal range", what),
        })
}

/// Computes total pay, total deductions, and net pay for a record.
///
/// # Examples
///
/// ```
/// use statement_engine::calculation::compute_totals;
/// use statement_engine::models::SalaryRecord;
/// use rust_decimal::Decimal;
///
/// let record = SalaryRecord {
///     base_salary: Some(Decimal::from(200)),
///     income_tax: Some(Decimal::from(50)),
///     ..SalaryRecord::default()
/// };
///
/// let totals = compute_totals(&record).unwrap();
/// assert_eq!(totals.total_pay, Decimal::from(200));
/// assert_eq!(totals.total_deductions, Decimal::from(50));
/// assert_eq!(totals.net_pay, Decimal::from(150));
/// ```
///
/// # Errors
///
/// Returns [`StatementError::Render`] when a total does not fit in a
/// [`Decimal`].
pub fn compute_totals(record: &SalaryRecord) -> StatementResult<StatementTotals> {
    let total_pay = checked_sum(
        "total pay",
        &[
            record.base_salary,
            record.overtime_allowance,
            record.commuting_allowance,
        ],
    )?;

    let total_deductions = checked_sum(
        "total deductions",
        &[
            record.health_insurance,
            record.pension,
            record.employment_insurance,
            record.income_tax,
            record.resident_tax,
        ],
    )?;

    let net_pay = total_pay
        .checked_sub(total_deductions)
        .ok_or_else(|| StatementError::Render {
            message: "net pay overflows the decimal range".to_string(),
        })?;

    Ok(StatementTotals {
        total_pay,
        total_deductions,
        net_pay,
    })
}

/// Builds the payment table rows, ending with the total-pay row.
pub fn payment_lines(record: &SalaryRecord, totals: &StatementTotals) -> Vec<StatementLine> {
    vec![
        StatementLine::new(labels::BASE_SALARY, amount(record.base_salary)),
        StatementLine::new(labels::OVERTIME_ALLOWANCE, amount(record.overtime_allowance)),
        StatementLine::new(labels::COMMUTING_ALLOWANCE, amount(record.commuting_allowance)),
        StatementLine::new(labels::TOTAL, totals.total_pay),
    ]
}

/// Builds the deduction table rows, ending with the total-deductions row.
pub fn deduction_lines(record: &SalaryRecord, totals: &StatementTotals) -> Vec<StatementLine> {
    vec![
        StatementLine::new(labels::HEALTH_INSURANCE, amount(record.health_insurance)),
        StatementLine::new(labels::PENSION, amount(record.pension)),
        StatementLine::new(labels::EMPLOYMENT_INSURANCE, amount(record.employment_insurance)),
        StatementLine::new(labels::INCOME_TAX, amount(record.income_tax)),
        StatementLine::new(labels::RESIDENT_TAX, amount(record.resident_tax)),
        StatementLine::new(labels::TOTAL, totals.total_deductions),
    ]
}
