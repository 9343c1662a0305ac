//! HTTP client for the HR API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::batch::SalarySource;
use crate::error::{StatementError, StatementResult};
use crate::models::{EmployeeProfile, SalaryRecord};

use super::request::NewSalaryRequest;
use super::response::ApiResponse;

/// Client for the HR API's salary and employee endpoints.
///
/// # Example
///
/// ```no_run
/// use statement_engine::api::HrApiClient;
///
/// # async fn run() -> statement_engine::error::StatementResult<()> {
/// let client = HrApiClient::new("http://localhost:8888")?;
/// let response = client.search_salary_by_year_and_month(2024, 3).await?;
/// println!("{} records", response.data.unwrap_or_default().len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HrApiClient {
    client: Client,
    base_url: String,
}

impl HrApiClient {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// No request timeout is set; calls wait as long as the transport does.
    pub fn new(base_url: impl Into<String>) -> StatementResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| StatementError::Transport {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> StatementResult<T> {
        let url = self.url(path);
        debug!(url = %url, "GET");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(transport)?;
        Self::handle_response(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> StatementResult<T> {
        let url = self.url(path);
        debug!(url = %url, "POST");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        Self::handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> StatementResult<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StatementError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(transport)?;
        serde_json::from_slice(&bytes).map_err(|e| StatementError::InvalidResponse {
            message: e.to_string(),
        })
    }

    // ========== Salary API ==========

    /// Fetches every salary record for one pay period.
    pub async fn search_salary_by_year_and_month(
        &self,
        year: i32,
        month: u32,
    ) -> StatementResult<ApiResponse<Vec<SalaryRecord>>> {
        self.get(
            "salary/findByYAM",
            &[("year", year.to_string()), ("month", month.to_string())],
        )
        .await
    }

    /// Creates a salary record.
    pub async fn add_salary(&self, request: &NewSalaryRequest) -> StatementResult<ApiResponse<serde_json::Value>> {
        self.post("salary/add", request).await
    }

    // ========== Employee API ==========

    /// Lists every employee.
    pub async fn list_employees(&self) -> StatementResult<ApiResponse<Vec<EmployeeProfile>>> {
        self.get("employee", &[]).await
    }
}

fn transport(error: reqwest::Error) -> StatementError {
    StatementError::Transport {
        message: error.to_string(),
    }
}

#[async_trait]
impl SalarySource for HrApiClient {
    async fn search_salary_by_year_and_month(
        &self,
        year: i32,
        month: u32,
    ) -> StatementResult<ApiResponse<Vec<SalaryRecord>>> {
        HrApiClient::search_salary_by_year_and_month(self, year, month).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = HrApiClient::new("http://localhost:8888/").unwrap();
        assert_eq!(client.url("/salary/add"), "http://localhost:8888/salary/add");
        assert_eq!(client.url("employee"), "http://localhost:8888/employee");
    }

    #[test]
    fn test_url_keeps_base_path() {
        let client = HrApiClient::new("http://hr.internal/api").unwrap();
        assert_eq!(
            client.url("salary/findByYAM"),
            "http://hr.internal/api/salary/findByYAM"
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Port 9 (discard) is closed on test hosts
        let client = HrApiClient::new("http://127.0.0.1:9").unwrap();
        let result = client.search_salary_by_year_and_month(2024, 3).await;
        assert!(matches!(result, Err(StatementError::Transport { .. })));
    }
}
