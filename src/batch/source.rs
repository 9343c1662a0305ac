//! Where the batch driver reads salary records from.

use async_trait::async_trait;

use crate::api::ApiResponse;
use crate::error::StatementResult;
use crate::models::SalaryRecord;

/// A source of salary records for one pay period.
///
/// [`crate::api::HrApiClient`] is the HTTP implementation. An `Err` means
/// the records could not be fetched at all; a response whose code is not
/// `200` or whose data is empty means there is nothing to generate.
#[async_trait]
pub trait SalarySource: Send + Sync {
    /// Fetches every salary record for `year`/`month`.
    async fn search_salary_by_year_and_month(
        &self,
        year: i32,
        month: u32,
    ) -> StatementResult<ApiResponse<Vec<SalaryRecord>>>;
}
