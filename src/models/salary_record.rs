//! Salary record model.
//!
//! A [`SalaryRecord`] is one pay period for one employee, exactly as the HR
//! API returns it. Every monetary component is optional; absent components
//! count as zero wherever they are used.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Employee, PayPeriod};
use crate::calculation::parse_payment_date;

/// One month of pay for one employee.
///
/// Amounts travel as JSON numbers and are held as [`Decimal`]. Totals are
/// never stored on the record; see [`crate::calculation::compute_totals`].
///
/// # Example
///
/// ```
/// use statement_engine::models::SalaryRecord;
/// use rust_decimal::Decimal;
///
/// let json = r#"{
///     "year": 2024,
///     "month": 3,
///     "paymentDate": "2024-03-25",
///     "baseSalary": 300000,
///     "employee": { "employeeId": 1, "name": "Jane Doe", "employeeCode": 101 }
/// }"#;
///
/// let record: SalaryRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(record.base_salary, Some(Decimal::from(300000)));
/// assert_eq!(record.pension, None);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
    /// Database identifier of the record, when it has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Year of the pay period.
    #[serde(default)]
    pub year: i32,
    /// Month of the pay period.
    #[serde(default)]
    pub month: u32,
    /// Disbursement date as sent by the API (`YYYY-MM-DD`).
    #[serde(default)]
    pub payment_date: Option<String>,
    /// Base salary.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub base_salary: Option<Decimal>,
    /// Overtime allowance.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub overtime_allowance: Option<Decimal>,
    /// Commuting allowance.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub commuting_allowance: Option<Decimal>,
    /// Health insurance premium.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub health_insurance: Option<Decimal>,
    /// Pension contribution.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub pension: Option<Decimal>,
    /// Employment insurance premium.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub employment_insurance: Option<Decimal>,
    /// Withheld income tax.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub income_tax: Option<Decimal>,
    /// Withheld resident tax.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub resident_tax: Option<Decimal>,
    /// The employee this record belongs to.
    pub employee: Employee,
}

impl SalaryRecord {
    /// Returns the pay period this record covers.
    pub fn period(&self) -> PayPeriod {
        PayPeriod::new(self.year, self.month)
    }

    /// Parses the payment date, returning `None` when it is absent or malformed.
    pub fn payment_date(&self) -> Option<NaiveDate> {
        self.payment_date.as_deref().and_then(parse_payment_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record_json() -> &'static str {
        r#"{
            "id": 12,
            "year": 2024,
            "month": 3,
            "paymentDate": "2024-03-25",
            "baseSalary": 300000,
            "overtimeAllowance": 20000,
            "commutingAllowance": 10000,
            "healthInsurance": 15000,
            "pension": 25000,
            "employmentInsurance": 3000,
            "incomeTax": 8000,
            "residentTax": 6000,
            "employee": { "employeeId": 1, "name": "Jane Doe", "employeeCode": 101 }
        }"#
    }

    #[test]
    fn test_deserialize_full_record() {
        let record: SalaryRecord = serde_json::from_str(full_record_json()).unwrap();

        assert_eq!(record.id, Some(12));
        assert_eq!(record.period(), PayPeriod::new(2024, 3));
        assert_eq!(record.base_salary, Some(Decimal::from(300000)));
        assert_eq!(record.resident_tax, Some(Decimal::from(6000)));
        assert_eq!(record.employee.name, "Jane Doe");
        assert_eq!(
            record.payment_date(),
            NaiveDate::from_ymd_opt(2024, 3, 25)
        );
    }

    #[test]
    fn test_missing_amounts_deserialize_as_none() {
        let json = r#"{
            "year": 2024,
            "month": 3,
            "employee": { "employeeId": 1, "name": "Jane Doe", "employeeCode": 101 }
        }"#;

        let record: SalaryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.base_salary, None);
        assert_eq!(record.income_tax, None);
        assert_eq!(record.payment_date, None);
    }

    #[test]
    fn test_null_amounts_deserialize_as_none() {
        let json = r#"{
            "year": 2024,
            "month": 3,
            "baseSalary": null,
            "paymentDate": null,
            "employee": { "employeeId": 1, "name": "Jane Doe", "employeeCode": 101 }
        }"#;

        let record: SalaryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.base_salary, None);
        assert_eq!(record.payment_date(), None);
    }

    #[test]
    fn test_fractional_amount_deserializes() {
        let json = r#"{
            "year": 2024,
            "month": 3,
            "baseSalary": 1234.5,
            "employee": { "employeeId": 1, "name": "Jane Doe", "employeeCode": 101 }
        }"#;

        let record: SalaryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.base_salary, Some(Decimal::new(12345, 1)));
    }

    #[test]
    fn test_missing_employee_is_rejected() {
        let json = r#"{ "year": 2024, "month": 3 }"#;

        let result: Result<SalaryRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_payment_date_parses_to_none() {
        let record = SalaryRecord {
            payment_date: Some("not-a-date".to_string()),
            ..SalaryRecord::default()
        };
        assert_eq!(record.payment_date(), None);
    }

    #[test]
    fn test_amounts_serialize_as_numbers() {
        let record: SalaryRecord = serde_json::from_str(full_record_json()).unwrap();
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["baseSalary"], serde_json::json!(300000.0));
        assert_eq!(value["employee"]["name"], "Jane Doe");
    }
}
