//! In-memory checking account ledger

#![deny(missing_docs)]

pub mod account;
pub mod amount;
pub mod client;
pub mod config;
pub mod csv;
pub mod errors;
pub mod ledger;
pub mod shell;
pub mod statement;
pub mod transaction;

/// Account number. Unique across all accounts, assigned sequentially from 1
pub type AccountNumber = u32;
/// Client tax identifier. Unique across all [`client::Client`]s of a ledger
pub type TaxId = String;

/// Branch code shared by every account
pub const BRANCH_CODE: &str = "0001";
