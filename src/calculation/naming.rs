//! Artifact file naming.

use crate::models::SalaryRecord;

/// Builds the file name a statement is saved under.
///
/// The name is `{year}-{month}-{employee name}.pdf`, with every run of
/// whitespace in the employee name replaced by a single underscore. An
/// empty name leaves the name part empty.
///
/// # Examples
///
/// ```
/// use statement_engine::calculation::statement_file_name;
/// use statement_engine::models::{Employee, SalaryRecord};
///
/// let record = SalaryRecord {
///     year: 2024,
///     month: 3,
///     employee: Employee {
///         employee_id: 1,
///         name: "Jane Doe".to_string(),
///         employee_code: 101,
///     },
///     ..SalaryRecord::default()
/// };
/// assert_eq!(statement_file_name(&record), "2024-3-Jane_Doe.pdf");
/// ```
pub fn statement_file_name(record: &SalaryRecord) -> String {
    format!(
        "{}-{}-{}.pdf",
        record.year,
        record.month,
        underscore_whitespace(&record.employee.name)
    )
}

fn underscore_whitespace(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                result.push('_');
            }
            in_whitespace = true;
        } else {
            result.push(ch);
            in_whitespace = false;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Employee;

    fn record_for(name: &str, year: i32, month: u32) -> SalaryRecord {
        SalaryRecord {
            year,
            month,
            employee: Employee {
                employee_id: 1,
                name: name.to_string(),
                employee_code: 101,
            },
            ..SalaryRecord::default()
        }
    }

    /// FN-001: single space
    #[test]
    fn test_single_space_becomes_underscore() {
        assert_eq!(
            statement_file_name(&record_for("Jane Doe", 2024, 3)),
            "2024-3-Jane_Doe.pdf"
        );
    }

    /// FN-002: runs of mixed whitespace collapse to one underscore
    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(
            statement_file_name(&record_for("Jane   Q \t Doe", 2024, 11)),
            "2024-11-Jane_Q_Doe.pdf"
        );
    }

    /// FN-003: leading and trailing whitespace is replaced, not trimmed
    #[test]
    fn test_edge_whitespace_is_replaced() {
        assert_eq!(
            statement_file_name(&record_for(" Jane ", 2024, 3)),
            "2024-3-_Jane_.pdf"
        );
    }

    /// FN-004: an empty name does not fail
    #[test]
    fn test_empty_name() {
        assert_eq!(statement_file_name(&record_for("", 2024, 3)), "2024-3-.pdf");
    }

    #[test]
    fn test_non_ascii_name_is_kept() {
        assert_eq!(
            statement_file_name(&record_for("山田　太郎", 2024, 3)),
            "2024-3-山田_太郎.pdf"
        );
    }
}
