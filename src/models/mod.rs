//! Core data models for the Salary Statement Engine.
//!
//! This module contains the records exchanged with the HR API and the
//! derived values computed while rendering a statement.

mod employee;
mod pay_period;
mod salary_record;
mod statement;

pub use employee::{Employee, EmployeeProfile};
pub use pay_period::PayPeriod;
pub use salary_record::SalaryRecord;
pub use statement::{StatementLine, StatementSummary, StatementTotals};
