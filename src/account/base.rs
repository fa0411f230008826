use super::balance::Balance;
use super::transactions::{TransKind, TransLog};
use super::{positive, Account, Receipt};
use crate::{amount::Amount, errors::AccountErr, AccountNumber, TaxId, BRANCH_CODE};
use chrono::{DateTime, Local};
use rust_decimal::Decimal;

/// Balance and history shared by every account variant
#[derive(Debug, Clone)]
pub struct AccountBase {
    number: AccountNumber,
    branch: &'static str,
    holder: TaxId,
    balance: Balance,
    history: TransLog,
}

impl AccountBase {
    /// Create empty account `number` owned by client with `holder` tax id
    pub fn new(number: AccountNumber, holder: impl Into<TaxId>) -> Self {
        Self {
            number,
            branch: BRANCH_CODE,
            holder: holder.into(),
            balance: Default::default(),
            history: TransLog::new(),
        }
    }

    /// sequential account number
    pub fn number(&self) -> AccountNumber {
        self.number
    }

    /// branch code
    pub fn branch(&self) -> &str {
        self.branch
    }

    /// tax id of the owning client
    pub fn holder(&self) -> &str {
        &self.holder
    }

    /// current balance
    pub fn balance(&self) -> Decimal {
        self.balance.available()
    }

    /// executed transactions
    pub fn history(&self) -> &TransLog {
        &self.history
    }

    /// Increase balance. Fails without any change when amount is not positive or the balance
    /// would overflow.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Receipt, AccountErr> {
        let amount = positive(TransKind::Deposit, amount)?;
        let balance = self.balance();
        self.balance
            .try_deposit(&amount)
            .map_err(|_| AccountErr::BalanceOverflow {
                requested: *amount,
                balance,
            })?;

        Ok(Receipt {
            kind: TransKind::Deposit,
            amount,
            balance: self.balance(),
        })
    }

    /// Decrease balance. Fails without any change when amount is not positive or is over the
    /// balance.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Receipt, AccountErr> {
        let amount = positive(TransKind::Withdrawal, amount)?;
        let available = self.balance();
        self.balance
            .try_withdraw(&amount)
            .map_err(|_| AccountErr::InsufficientFunds {
                requested: *amount,
                available,
            })?;

        Ok(Receipt {
            kind: TransKind::Withdrawal,
            amount,
            balance: self.balance(),
        })
    }

    pub(crate) fn record(&mut self, kind: TransKind, amount: Amount, at: DateTime<Local>) {
        self.history.append(kind, amount, at);
    }
}

/// Account without any rules on top of the balance checks
#[derive(Debug, Clone)]
pub struct PlainAccount {
    base: AccountBase,
}

impl PlainAccount {
    /// Create new empty account
    pub fn new(number: AccountNumber, holder: impl Into<TaxId>) -> Self {
        Self {
            base: AccountBase::new(number, holder),
        }
    }
}

impl Account for PlainAccount {
    fn base(&self) -> &AccountBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut AccountBase {
        &mut self.base
    }
}
