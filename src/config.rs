//! Command line configuration

use crate::account::CheckingTerms;
use crate::amount::{Amount, InvalidAmountErr};
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// In-memory checking account ledger
#[derive(Parser, Debug)]
#[command(name = "checking-ledger")]
#[command(version, about)]
pub struct Cli {
    /// csv file with operations to replay, interactive menu is started when omitted
    pub file: Option<PathBuf>,

    /// Highest amount of a single withdrawal
    #[arg(long, default_value = "500.00")]
    pub withdrawal_limit: Decimal,

    /// How many withdrawals an account can ever make
    #[arg(long, default_value_t = 3)]
    pub max_withdrawals: u32,

    /// Enable debug logs
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Terms for every opened account
    pub fn terms(&self) -> Result<CheckingTerms, InvalidAmountErr> {
        let limit = Amount::try_from(self.withdrawal_limit)?;
        Ok(CheckingTerms {
            withdrawal_limit: limit.into(),
            max_withdrawals: self.max_withdrawals,
        })
    }

    /// Log filter used when `RUST_LOG` is not set
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
