//! Bank clients and the accounts they hold
use crate::account::{Account, Receipt};
use crate::errors::AccountErr;
use crate::transaction::Transaction;
use crate::TaxId;
use std::{cell::RefCell, rc::Rc};

/// Shared handle to an account. Clients hold strong handles, the ledger registry weak ones.
pub type AccountRef = Rc<RefCell<dyn Account>>;

/// Person holding accounts
#[derive(Debug)]
pub struct Client {
    name: String,
    birth_date: String,
    tax_id: TaxId,
    address: String,
    accounts: Vec<AccountRef>,
}

impl Client {
    /// Create client without accounts
    pub fn new(
        name: impl Into<String>,
        birth_date: impl Into<String>,
        tax_id: impl Into<TaxId>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            birth_date: birth_date.into(),
            tax_id: tax_id.into(),
            address: address.into(),
            accounts: Vec::new(),
        }
    }

    #[allow(missing_docs)]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[allow(missing_docs)]
    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }

    #[allow(missing_docs)]
    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    #[allow(missing_docs)]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Accounts in the order they were added
    pub fn accounts(&self) -> &[AccountRef] {
        &self.accounts
    }

    /// Append `account`. Duplicates are not checked.
    pub fn add_account(&mut self, account: AccountRef) {
        self.accounts.push(account);
    }

    /// First account of the client, if any
    pub fn current_account(&self) -> Option<&AccountRef> {
        self.accounts.first()
    }

    /// Apply `transaction` to `account`
    pub fn apply_transaction(
        &self,
        account: &AccountRef,
        transaction: Transaction,
    ) -> Result<Receipt, AccountErr> {
        let mut account = account.borrow_mut();
        let result = transaction.apply(&mut *account);

        match &result {
            Ok(receipt) => tracing::debug!(
                client = %self.tax_id,
                account = account.number(),
                balance = %receipt.balance,
                "{receipt}"
            ),
            Err(e) => tracing::debug!(
                client = %self.tax_id,
                account = account.number(),
                "transaction rejected: {e}"
            ),
        }
        result
    }
}
