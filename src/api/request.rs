//! Request bodies sent to the HR API.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{StatementError, StatementResult};
use crate::models::SalaryRecord;

/// Body of `POST /salary/add`.
///
/// Unlike [`SalaryRecord`], every amount is present: components left empty
/// are sent as `0`. An absent payment date is sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSalaryRequest {
    /// The employee the record belongs to.
    pub employee_id: i64,
    /// Year of the pay period.
    pub year: i32,
    /// Month of the pay period.
    pub month: u32,
    /// Disbursement date (`YYYY-MM-DD`).
    pub payment_date: Option<String>,
    /// Base salary.
    #[serde(with = "rust_decimal::serde::float")]
    pub base_salary: Decimal,
    /// Overtime allowance.
    #[serde(with = "rust_decimal::serde::float")]
    pub overtime_allowance: Decimal,
    /// Commuting allowance.
    #[serde(with = "rust_decimal::serde::float")]
    pub commuting_allowance: Decimal,
    /// Health insurance premium.
    #[serde(with = "rust_decimal::serde::float")]
    pub health_insurance: Decimal,
    /// Pension contribution.
    #[serde(with = "rust_decimal::serde::float")]
    pub pension: Decimal,
    /// Employment insurance premium.
    #[serde(with = "rust_decimal::serde::float")]
    pub employment_insurance: Decimal,
    /// Withheld income tax.
    #[serde(with = "rust_decimal::serde::float")]
    pub income_tax: Decimal,
    /// Withheld resident tax.
    #[serde(with = "rust_decimal::serde::float")]
    pub resident_tax: Decimal,
}

impl NewSalaryRequest {
    /// Reads a salary record from a JSON file and builds the request.
    ///
    /// The file holds one record in the API's camelCase shape; amounts may
    /// be omitted.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> StatementResult<Self> {
        let path = path.as_ref();
        let input_error = |message: String| StatementError::Input {
            path: path.display().to_string(),
            message,
        };

        let content = fs::read_to_string(path).map_err(|e| input_error(e.to_string()))?;
        let record: SalaryRecord =
            serde_json::from_str(&content).map_err(|e| input_error(e.to_string()))?;

        Ok(Self::from(&record))
    }
}

impl From<&SalaryRecord> for NewSalaryRequest {
    fn from(record: &SalaryRecord) -> Self {
        let amount = |value: Option<Decimal>| value.unwrap_or(Decimal::ZERO);

        Self {
            employee_id: record.employee.employee_id,
            year: record.year,
            month: record.month,
            payment_date: record
                .payment_date
                .as_ref()
                .filter(|date| !date.trim().is_empty())
                .cloned(),
            base_salary: amount(record.base_salary),
            overtime_allowance: amount(record.overtime_allowance),
            commuting_allowance: amount(record.commuting_allowance),
            health_insurance: amount(record.health_insurance),
            pension: amount(record.pension),
            employment_insurance: amount(record.employment_insurance),
            income_tax: amount(record.income_tax),
            resident_tax: amount(record.resident_tax),
        }
    }
}

impl From<SalaryRecord> for NewSalaryRequest {
    fn from(record: SalaryRecord) -> Self {
        Self::from(&record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Employee;

    #[test]
    fn test_absent_amounts_become_zero() {
        let record = SalaryRecord {
            year: 2024,
            month: 3,
            base_salary: Some(Decimal::from(300000)),
            employee: Employee {
                employee_id: 7,
                ..Employee::default()
            },
            ..SalaryRecord::default()
        };

        let request = NewSalaryRequest::from(&record);

        assert_eq!(request.employee_id, 7);
        assert_eq!(request.base_salary, Decimal::from(300000));
        assert_eq!(request.pension, Decimal::ZERO);
        assert_eq!(request.payment_date, None);
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("salary.json");
        fs::write(
            &path,
            r#"{
                "year": 2024,
                "month": 3,
                "paymentDate": "2024-03-25",
                "baseSalary": 300000,
                "incomeTax": 8000,
                "employee": { "employeeId": 1, "name": "Jane Doe", "employeeCode": 101 }
            }"#,
        )
        .unwrap();

        let request = NewSalaryRequest::from_json_file(&path).unwrap();

        assert_eq!(request.employee_id, 1);
        assert_eq!(request.payment_date.as_deref(), Some("2024-03-25"));
        assert_eq!(request.income_tax, Decimal::from(8000));
        assert_eq!(request.overtime_allowance, Decimal::ZERO);
    }

    #[test]
    fn test_from_json_file_rejects_malformed_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("salary.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            NewSalaryRequest::from_json_file(&path),
            Err(StatementError::Input { .. })
        ));
        assert!(matches!(
            NewSalaryRequest::from_json_file(dir.path().join("missing.json")),
            Err(StatementError::Input { .. })
        ));
    }

    #[test]
    fn test_serializes_camel_case_with_null_date() {
        let request = NewSalaryRequest::from(SalaryRecord {
            year: 2024,
            month: 4,
            payment_date: Some("  ".to_string()),
            ..SalaryRecord::default()
        });

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["employeeId"], 0);
        assert_eq!(json["month"], 4);
        assert!(json["paymentDate"].is_null());
        assert_eq!(json["residentTax"], 0.0);
    }
}
