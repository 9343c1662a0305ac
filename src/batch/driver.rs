//! The batch driver: fetch one pay period, then render every record.

use std::time::{Duration, Instant};

use tokio::time::sleep;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::error::StatementResult;
use crate::models::{PayPeriod, SalaryRecord, StatementSummary};
use crate::render::{StatementLayout, SurfaceProvider};

use super::notifier::{Notice, Notifier};
use super::source::SalarySource;

/// Pause after each generated statement unless configured otherwise.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

/// What happened to one record.
#[derive(Debug, Clone, PartialEq)]
pub enum StatementOutcome {
    /// The statement was written.
    Generated {
        /// The employee's name.
        employee: String,
        /// Details of the written statement.
        summary: StatementSummary,
    },
    /// The statement could not be generated.
    Failed {
        /// The employee's name.
        employee: String,
        /// What went wrong.
        message: String,
    },
}

impl StatementOutcome {
    /// Returns the employee this outcome belongs to.
    pub fn employee(&self) -> &str {
        match self {
            StatementOutcome::Generated { employee, .. } | StatementOutcome::Failed { employee, .. } => {
                employee
            }
        }
    }

    /// Returns true when the statement was written.
    pub fn is_generated(&self) -> bool {
        matches!(self, StatementOutcome::Generated { .. })
    }
}

/// Result of one batch run.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchReport {
    /// The records could not be fetched.
    FetchFailed {
        /// What went wrong.
        message: String,
    },
    /// The pay period had nothing to generate.
    NoData,
    /// Every record was attempted, in fetch order.
    Completed {
        /// One outcome per record.
        outcomes: Vec<StatementOutcome>,
    },
}

impl BatchReport {
    /// Returns the per-record outcomes, empty unless the batch ran.
    pub fn outcomes(&self) -> &[StatementOutcome] {
        match self {
            BatchReport::Completed { outcomes } => outcomes,
            _ => &[],
        }
    }

    /// Number of statements written.
    pub fn generated(&self) -> usize {
        self.outcomes().iter().filter(|o| o.is_generated()).count()
    }

    /// Number of statements that failed.
    pub fn failed(&self) -> usize {
        self.outcomes().len() - self.generated()
    }
}

/// Generates statements for every salary record of a pay period.
///
/// Records are processed strictly one at a time, each on a fresh surface.
/// A failing record is reported and skipped; it never stops the batch.
///
/// # Example
///
/// ```no_run
/// use statement_engine::api::HrApiClient;
/// use statement_engine::batch::{BatchDriver, ConsoleNotifier};
/// use statement_engine::models::PayPeriod;
/// use statement_engine::render::{PdfSurfaceProvider, StatementLayout};
///
/// # async fn run() -> statement_engine::error::StatementResult<()> {
/// let driver = BatchDriver::new(
///     HrApiClient::new("http://localhost:8888")?,
///     PdfSurfaceProvider::new("./statements"),
///     ConsoleNotifier,
///     StatementLayout::default(),
/// );
/// let report = driver.run(PayPeriod::new(2024, 3)).await;
/// println!("{} written", report.generated());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct BatchDriver<S, P, N> {
    source: S,
    provider: P,
    notifier: N,
    layout: StatementLayout,
    delay: Duration,
}

impl<S, P, N> BatchDriver<S, P, N>
where
    S: SalarySource,
    P: SurfaceProvider,
    N: Notifier,
{
    /// Creates a driver with the default inter-record delay.
    pub fn new(source: S, provider: P, notifier: N, layout: StatementLayout) -> Self {
        Self {
            source,
            provider,
            notifier,
            layout,
            delay: DEFAULT_DELAY,
        }
    }

    /// Sets the pause after each generated statement.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Returns the surface provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Runs the batch for `period`.
    #[instrument(skip(self, period), fields(correlation_id = %Uuid::new_v4(), period = %period))]
    pub async fn run(&self, period: PayPeriod) -> BatchReport {
        let started = Instant::now();

        let response = match self
            .source
            .search_salary_by_year_and_month(period.year, period.month)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Salary fetch failed");
                let message = e.to_string();
                self.notifier.notify(&Notice::FetchFailed {
                    message: message.clone(),
                });
                return BatchReport::FetchFailed { message };
            }
        };

        let ok_code = response.is_ok_code();
        let records = match response.data {
            Some(records) if ok_code && !records.is_empty() => records,
            _ => {
                info!(code = %response.code, "No salary data for period");
                self.notifier.notify(&Notice::NoData);
                return BatchReport::NoData;
            }
        };

        info!(records = records.len(), "Generating salary statements");

        let mut outcomes = Vec::with_capacity(records.len());
        for record in &records {
            let employee = record.employee.name.clone();

            match self.render(record) {
                Ok(summary) => {
                    info!(employee = %employee, file_name = %summary.file_name, "Statement generated");
                    outcomes.push(StatementOutcome::Generated { employee, summary });
                    sleep(self.delay).await;
                }
                Err(e) => {
                    warn!(employee = %employee, error = %e, "Statement generation failed");
                    let message = e.to_string();
                    self.notifier.notify(&Notice::StatementFailed {
                        employee: employee.clone(),
                        message: message.clone(),
                    });
                    outcomes.push(StatementOutcome::Failed { employee, message });
                }
            }
        }

        let report = BatchReport::Completed { outcomes };
        self.notifier.notify(&Notice::Completed {
            generated: report.generated(),
            failed: report.failed(),
        });

        info!(
            generated = report.generated(),
            failed = report.failed(),
            duration_us = started.elapsed().as_micros() as u64,
            "Batch complete"
        );

        report
    }

    fn render(&self, record: &SalaryRecord) -> StatementResult<StatementSummary> {
        let mut surface = self.provider.create_surface()?;
        self.layout.generate(record, &mut surface)
    }
}
