//! Client side of the HR API.
//!
//! The engine reads salary records for a pay period, and can also create
//! records and list employees, through [`HrApiClient`].

mod client;
mod request;
mod response;

pub use client::HrApiClient;
pub use request::NewSalaryRequest;
pub use response::{ApiResponse, SUCCESS_CODE};
