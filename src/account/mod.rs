//! Account traits and structs
use crate::{amount::Amount, errors::AccountErr, AccountNumber};
use rust_decimal::Decimal;
use std::fmt;

pub(crate) mod balance;
pub(crate) mod base;
pub(crate) mod checking;
pub mod transactions;

pub use base::{AccountBase, PlainAccount};
pub use checking::{CheckingAccount, CheckingTerms};
use transactions::{TransKind, TransLog};

/// Represent basic account information and balance operations.
///
/// Implementors embed an [`AccountBase`] and may override [`Account::withdraw`] to add their own
/// rules before delegating to the base. Neither `deposit` nor `withdraw` touches the history,
/// recording is done by [`crate::transaction::Transaction`] only after success.
pub trait Account: fmt::Debug {
    /// shared balance and history
    fn base(&self) -> &AccountBase;
    /// shared balance and history
    fn base_mut(&mut self) -> &mut AccountBase;

    /// sequential account number
    fn number(&self) -> AccountNumber {
        self.base().number()
    }

    /// branch code
    fn branch(&self) -> &str {
        self.base().branch()
    }

    /// tax id of the owning client
    fn holder(&self) -> &str {
        self.base().holder()
    }

    /// current balance
    fn balance(&self) -> Decimal {
        self.base().balance()
    }

    /// executed transactions
    fn history(&self) -> &TransLog {
        self.base().history()
    }

    /// increase balance by `amount`
    fn deposit(&mut self, amount: Decimal) -> Result<Receipt, AccountErr> {
        self.base_mut().deposit(amount)
    }

    /// decrease balance by `amount`
    fn withdraw(&mut self, amount: Decimal) -> Result<Receipt, AccountErr> {
        self.base_mut().withdraw(amount)
    }
}

/// Confirmation of a successful balance change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// executed operation
    pub kind: TransKind,
    /// moved amount
    pub amount: Amount,
    /// balance after the operation
    pub balance: Decimal,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of R$ {} completed successfully",
            self.kind.label(),
            self.amount
        )
    }
}

/// Validate requested amount for operation `kind`
pub(crate) fn positive(kind: TransKind, amount: Decimal) -> Result<Amount, AccountErr> {
    Amount::try_from(amount).map_err(|_| AccountErr::InvalidAmount { kind })
}
