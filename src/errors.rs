//! Possible errors

use crate::{account::transactions::TransKind, TaxId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Group errors for account balance
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BalanceErr {
    #[error("not enough found available for this operation")]
    NotEnoughAvailableFounds,
    #[error("balance would go over the largest representable amount")]
    Overflow,
}

/// Group all rejected deposit and withdraw outcomes. None of them changes the account.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountErr {
    /// Requested amount was zero, negative or had fractions of a cent
    #[error("invalid {kind} amount, enter a value greater than zero with at most two decimal places")]
    InvalidAmount {
        /// operation that was rejected
        kind: TransKind,
    },
    /// Withdraw asked for more than the balance
    #[error("insufficient funds: tried to withdraw R$ {requested:.2} but only R$ {available:.2} is available")]
    InsufficientFunds {
        /// requested amount
        requested: Decimal,
        /// balance at the moment of the request
        available: Decimal,
    },
    /// Withdraw asked for more than the per withdrawal limit
    #[error("limit exceeded: withdrawal of R$ {requested:.2} is over the allowed limit of R$ {limit:.2}")]
    LimitExceeded {
        /// requested amount
        requested: Decimal,
        /// configured per withdrawal limit
        limit: Decimal,
    },
    /// Deposit would push the balance over the largest representable amount
    #[error("deposit of R$ {requested:.2} rejected: balance of R$ {balance:.2} cannot grow any further")]
    BalanceOverflow {
        /// requested amount
        requested: Decimal,
        /// balance at the moment of the request
        balance: Decimal,
    },
    /// Account already made its lifetime number of withdrawals
    #[error("withdrawal count exceeded: the maximum of {max} withdrawals was already reached")]
    WithdrawalCountExceeded {
        /// configured lifetime withdrawal count
        max: u32,
    },
}

/// Errors at the ledger boundary: lookups by tax id and client registration
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerErr {
    #[error("client {0} not found")]
    ClientNotFound(TaxId),
    #[error("client {0} has no account")]
    AccountNotFound(TaxId),
    #[error("a client with tax id {0} already exists")]
    DuplicateTaxId(TaxId),
    #[error(transparent)]
    Account(#[from] AccountErr),
}

/// Reasons why a replayed csv row was not applied
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReplayErr {
    #[error("row has no {0}")]
    MissingField(&'static str),
    #[error(transparent)]
    Ledger(#[from] LedgerErr),
}
