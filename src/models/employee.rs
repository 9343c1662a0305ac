//! Employee models.
//!
//! [`Employee`] is the reference embedded in every salary record;
//! [`EmployeeProfile`] is the fuller row returned by the employee listing.

use serde::{Deserialize, Serialize};

/// The employee a salary record belongs to.
///
/// Only the name is needed to render a statement. A record whose employee
/// has no name still deserializes, with an empty name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Database identifier of the employee.
    #[serde(default)]
    pub employee_id: i64,
    /// Display name, used on the statement and in the artifact file name.
    #[serde(default)]
    pub name: String,
    /// The company-issued employee number.
    #[serde(default)]
    pub employee_code: i64,
}

/// An employee row as returned by `GET /employee`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProfile {
    /// Database identifier of the employee.
    pub employee_id: i64,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Contact mail address.
    #[serde(default)]
    pub mail: String,
    /// The company-issued employee number.
    #[serde(default)]
    pub employee_code: i64,
    /// Job title or duty.
    #[serde(default)]
    pub duty: String,
}
