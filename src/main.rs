use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use statement_engine::api::{HrApiClient, NewSalaryRequest};
use statement_engine::batch::{BatchDriver, BatchReport, ConsoleNotifier};
use statement_engine::config::{AppConfig, ConfigLoader, DEFAULT_CONFIG_PATH};
use statement_engine::error::{StatementError, StatementResult};
use statement_engine::logging::init_logger;
use statement_engine::models::PayPeriod;
use statement_engine::render::{PdfSurfaceProvider, StatementLayout};
use tracing::info;

#[derive(Parser)]
#[command(author, version, about = "Generates monthly salary statements", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./config/statement-engine.yaml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one PDF statement per salary record of a pay period
    Generate {
        /// Year of the pay period
        #[arg(long)]
        year: i32,

        /// Month of the pay period
        #[arg(long)]
        month: u32,

        /// Directory for the PDF files, overriding the configuration
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Create a salary record from a JSON file
    AddSalary {
        /// JSON file holding one salary record
        #[arg(long)]
        input: PathBuf,
    },

    /// List employees known to the HR API
    Employees,
}

fn load_config(path: Option<&Path>) -> StatementResult<AppConfig> {
    match path {
        Some(path) => Ok(ConfigLoader::load(path)?.into_config()),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            Ok(ConfigLoader::load(DEFAULT_CONFIG_PATH)?.into_config())
        }
        None => Ok(AppConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<(), StatementError> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    init_logger(&config.logging.level, config.logging.json)?;

    let client = HrApiClient::new(config.api.base_url.clone())?;

    match cli.command {
        Command::Generate {
            year,
            month,
            output_dir,
        } => {
            if let Some(dir) = output_dir {
                config.output.directory = dir;
            }
            info!(
                period = %PayPeriod::new(year, month),
                output_dir = %config.output.directory.display(),
                "Starting statement generation"
            );

            let driver = BatchDriver::new(
                client,
                PdfSurfaceProvider::new(&config.output.directory),
                ConsoleNotifier,
                StatementLayout::new(config.statement.clone()),
            )
            .with_delay(config.batch.delay());

            if let BatchReport::Completed { outcomes } = driver.run(PayPeriod::new(year, month)).await {
                for outcome in outcomes.iter().filter(|o| !o.is_generated()) {
                    eprintln!("failed: {}", outcome.employee());
                }
            }
        }
        Command::AddSalary { input } => {
            let request = NewSalaryRequest::from_json_file(&input)?;
            let response = client.add_salary(&request).await?;
            if response.is_ok_code() {
                println!(
                    "Salary record added for employee {} ({}/{})",
                    request.employee_id, request.year, request.month
                );
            } else {
                println!(
                    "Salary record was not added: {}",
                    response.message.unwrap_or_else(|| format!("code {}", response.code))
                );
            }
        }
        Command::Employees => {
            let response = client.list_employees().await?;
            for employee in response.data.unwrap_or_default() {
                println!(
                    "{}\t{}\t{}\t{}",
                    employee.employee_code, employee.name, employee.mail, employee.duty
                );
            }
        }
    }

    Ok(())
}
