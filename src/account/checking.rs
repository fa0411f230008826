use super::base::AccountBase;
use super::transactions::TransKind;
use super::{positive, Account, Receipt};
use crate::{errors::AccountErr, AccountNumber, TaxId};
use rust_decimal::Decimal;

/// Withdrawal rules of a [`CheckingAccount`], fixed when the account is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckingTerms {
    /// highest amount of a single withdrawal
    pub withdrawal_limit: Decimal,
    /// how many withdrawals the account can ever make
    pub max_withdrawals: u32,
}

impl Default for CheckingTerms {
    fn default() -> Self {
        Self {
            withdrawal_limit: Decimal::new(500_00, 2),
            max_withdrawals: 3,
        }
    }
}

/// Account with a per withdrawal limit and a lifetime withdrawal count
#[derive(Debug, Clone)]
pub struct CheckingAccount {
    base: AccountBase,
    terms: CheckingTerms,
}

impl CheckingAccount {
    /// Create new empty account with default [`CheckingTerms`]
    pub fn new(number: AccountNumber, holder: impl Into<TaxId>) -> Self {
        Self::with_terms(number, holder, CheckingTerms::default())
    }

    /// Create new empty account with custom `terms`
    pub fn with_terms(number: AccountNumber, holder: impl Into<TaxId>, terms: CheckingTerms) -> Self {
        Self {
            base: AccountBase::new(number, holder),
            terms,
        }
    }

    /// withdrawal rules of this account
    pub fn terms(&self) -> &CheckingTerms {
        &self.terms
    }
}

impl Account for CheckingAccount {
    fn base(&self) -> &AccountBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut AccountBase {
        &mut self.base
    }

    /// Check limit and lifetime count, then delegate to the base balance check.
    ///
    /// The count comes from the history, so it only counts withdrawals that were recorded.
    fn withdraw(&mut self, amount: Decimal) -> Result<Receipt, AccountErr> {
        let requested = positive(TransKind::Withdrawal, amount)?;
        let withdrawals = self.history().withdrawal_count();

        if *requested > self.terms.withdrawal_limit {
            return Err(AccountErr::LimitExceeded {
                requested: amount,
                limit: self.terms.withdrawal_limit,
            });
        }

        if withdrawals >= self.terms.max_withdrawals as usize {
            return Err(AccountErr::WithdrawalCountExceeded {
                max: self.terms.max_withdrawals,
            });
        }

        self.base.withdraw(amount)
    }
}
