//! Distributed Series Pipeline CLI
//!
//! One binary, three process roles selected by `--process-number`:
//! 0 = producer, 1 = accumulator, 2 or higher = worker (the exact value is
//! not otherwise significant among workers). All roles connect to the same
//! broker, and a Ctrl+C interrupt takes every role down the clean path:
//! cancel the run loop between messages, close the broker connection, exit
//! with status zero.

use distributed_series::accumulator::store::TotalStore;
use distributed_series::config::{Precision, DEFAULT_PRECISION};
use distributed_series::queue::broker::Broker;
use distributed_series::series::engine::SeriesEngine;
use distributed_series::{accumulator, producer, series};

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::Level;

#[derive(Parser)]
#[command(name = "distributed-series")]
#[command(about = "Distributed Gregory-Leibniz series pipeline over durable work queues")]
#[command(version)]
struct Cli {
    /// Role selector: 0 = producer, 1 = accumulator, 2+ = worker
    #[arg(short = 'p', long)]
    process_number: u32,

    /// Exclusive upper bound for series indices (producer role)
    #[arg(short = 'e', long)]
    end_integer: Option<u64>,

    /// Series indices handed to a worker in a single block (producer role)
    #[arg(short = 's', long, default_value_t = 1_000_000, value_parser = clap::value_parser!(u64).range(1..))]
    step_size: u64,

    /// AMQP broker URL
    #[arg(long, default_value = "amqp://127.0.0.1:5672/%2f")]
    amqp_url: String,

    /// Directory for the running total and contribution records (accumulator role)
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Decimal digits carried by all series arithmetic
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let broker = Broker::connect(&cli.amqp_url).await?;

    // Interrupt path: flip the token, let the run loop finish its current
    // message, then fall through to the clean close below.
    let cancel = CancellationToken::new();
    let interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupt received, shutting down");
            interrupt.cancel();
        }
    });

    let outcome = match cli.process_number {
        0 => {
            let end_integer = cli
                .end_integer
                .ok_or_else(|| anyhow::anyhow!("--end-integer is required for the producer role"))?;
            producer::service::run(&broker, end_integer, cli.step_size, &cancel)
                .await
                .map(|_| ())
        }
        1 => {
            let store = TotalStore::open(&cli.data_dir)?;
            accumulator::service::run(&broker, &store, &cancel).await
        }
        _ => {
            let engine = Arc::new(SeriesEngine::new(Precision::new(cli.precision)));
            series::service::run(&broker, engine, &cancel).await
        }
    };

    // Release broker resources on both the clean and the failing path.
    let closed = broker.close().await;
    outcome?;
    closed?;

    Ok(())
}
