//! Schedules a single transfer against an in-memory store.
//!
//! Prints the created transfer as JSON, or the list of errors and exits
//! with status 1.
//!
//! ```text
//! schedule_transfer --source 0123456789 --destination 9876543210 \
//!     --amount 1000.00 --in-days 15
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use transfer_scheduler::application::dto::TransferView;
use transfer_scheduler::application::use_cases::{CreateTransferCommand, CreateTransferUseCase};
use transfer_scheduler::domain::value_objects::Timestamp;
use transfer_scheduler::infrastructure::config::AppConfig;
use transfer_scheduler::infrastructure::persistence::in_memory::InMemoryTransferRepository;
use transfer_scheduler::infrastructure::telemetry::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "schedule_transfer", version, about = "Schedule a funds transfer")]
struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Account to debit
    #[arg(long)]
    source: String,

    /// Account to credit
    #[arg(long)]
    destination: String,

    /// Amount to transfer
    #[arg(long)]
    amount: Decimal,

    /// Execution date, RFC 3339
    #[arg(long, conflicts_with = "in_days")]
    date: Option<Timestamp>,

    /// Execution date as days from now
    #[arg(long, default_value_t = 0)]
    in_days: i64,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    init_tracing(&config.logging).context("initialising tracing")?;

    let repository = InMemoryTransferRepository::with_fee_tiers(config.fee_tiers());
    let use_case = CreateTransferUseCase::new(Arc::new(repository));

    let scheduled_date = match cli.date {
        Some(date) => date,
        None => Timestamp::now()
            .checked_add_days(cli.in_days)
            .with_context(|| format!("--in-days {} is out of range", cli.in_days))?,
    };
    let command = CreateTransferCommand::new(cli.source, cli.destination, cli.amount, scheduled_date);

    match use_case.execute(command).await {
        Ok(transfer) => {
            let view = TransferView::try_from(&transfer).context("pricing transfer")?;
            println!("{}", serde_json::to_string_pretty(&view)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}", serde_json::to_string_pretty(&err.errors())?);
            Ok(ExitCode::FAILURE)
        }
    }
}
