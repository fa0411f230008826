//! # Checking-ledger
//! Without arguments application starts an interactive menu on stdin/stdout. With a csv file it
//! replays the operations from it and prints every account to output.
//!
//! ## Input format
//! csv with columns `type`, `tax_id`, `amount`, `name`
//!
//! ```csv
//! type,tax_id,amount,name
//! client,111,,Ana Lima
//! account,111,,
//! deposit,111,1000.00,
//! withdrawal,111,200.00,
//! ```

#![deny(missing_docs)]

use anyhow::Context;
use checking_ledger::{
    config::Cli,
    csv::{self, RawOperation},
    ledger::Ledger,
    shell::Shell,
};
use clap::Parser;
use std::path::PathBuf;
use tokio::{
    io::{stdin, stdout, BufReader},
    spawn,
    sync::mpsc::{channel, Sender},
};
use tracing_subscriber::EnvFilter;

async fn read_operations_from_file(
    filename: PathBuf,
    sender: Sender<RawOperation>,
) -> anyhow::Result<()> {
    let f = tokio::fs::File::open(&filename)
        .await
        .with_context(|| format!("access input file {}", filename.display()))?;

    let bf = BufReader::new(f);
    csv::deserialize_operations_from_csv_reader(bf, sender)
        .await
        .context("improper content of file")
}

async fn run_replay(ledger: &mut Ledger, filename: PathBuf) -> anyhow::Result<()> {
    // read data from csv file
    let (tx_raw_op, rx_raw_op) = channel(8192);
    let task_read_csv = spawn(read_operations_from_file(filename, tx_raw_op));

    // apply rows in file order
    let rejected = csv::replay(ledger, rx_raw_op).await;
    task_read_csv.await??;
    if rejected > 0 {
        tracing::warn!(rejected, "some rows were not applied");
    }

    csv::summarize_accounts(ledger, stdout())
        .await
        .context("failed to save output")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let terms = cli.terms().context("invalid withdrawal limit")?;
    let mut ledger = Ledger::new(terms);

    match cli.file {
        Some(filename) => run_replay(&mut ledger, filename).await,
        None => Shell::new(&mut ledger, BufReader::new(stdin()), stdout())
            .run()
            .await
            .context("terminal i/o failed"),
    }
}
