//! Session state: every client and account known to one running ledger

use crate::account::{Account, CheckingAccount, CheckingTerms, Receipt};
use crate::client::{AccountRef, Client};
use crate::errors::LedgerErr;
use crate::statement::Statement;
use crate::transaction::Transaction;
use crate::AccountNumber;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

/// Clients and account registry of one session
#[derive(Debug, Default)]
pub struct Ledger {
    terms: CheckingTerms,
    clients: Vec<Client>,
    // creation order, owned by clients
    registry: Vec<Weak<RefCell<dyn Account>>>,
}

/// One line of the account listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct AccountSummary {
    pub branch: String,
    pub account: AccountNumber,
    pub holder: String,
    pub balance: Decimal,
    pub withdrawals: usize,
}

impl fmt::Display for AccountSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Branch:\t\t{}", self.branch)?;
        writeln!(f, "Account:\t{}", self.account)?;
        write!(f, "Holder:\t\t{}", self.holder)
    }
}

impl Ledger {
    /// Empty ledger opening accounts with `terms`
    pub fn new(terms: CheckingTerms) -> Self {
        Self {
            terms,
            clients: Vec::new(),
            registry: Vec::new(),
        }
    }

    /// Register new client. Tax id must not be used by another client.
    pub fn create_client(&mut self, client: Client) -> Result<&Client, LedgerErr> {
        if self.find_client(client.tax_id()).is_some() {
            return Err(LedgerErr::DuplicateTaxId(client.tax_id().to_owned()));
        }

        tracing::info!(client = client.tax_id(), "client created");
        self.clients.push(client);
        Ok(&self.clients[self.clients.len() - 1])
    }

    /// Find client by exact tax id
    pub fn find_client(&self, tax_id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.tax_id() == tax_id)
    }

    /// All clients in registration order
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Open checking account for client `tax_id` with next sequential number
    pub fn open_account(&mut self, tax_id: &str) -> Result<AccountNumber, LedgerErr> {
        let number = self.next_number();
        let terms = self.terms;
        let client = self
            .clients
            .iter_mut()
            .find(|c| c.tax_id() == tax_id)
            .ok_or_else(|| LedgerErr::ClientNotFound(tax_id.to_owned()))?;

        let account: AccountRef = Rc::new(RefCell::new(CheckingAccount::with_terms(
            number, tax_id, terms,
        )));
        self.registry.push(Rc::downgrade(&account));
        client.add_account(account);

        tracing::info!(client = tax_id, account = number, "account opened");
        Ok(number)
    }

    /// Deposit `amount` into current account of client `tax_id`
    pub fn deposit(&self, tax_id: &str, amount: Decimal) -> Result<Receipt, LedgerErr> {
        self.transact(tax_id, Transaction::Deposit(amount))
    }

    /// Withdraw `amount` from current account of client `tax_id`
    pub fn withdraw(&self, tax_id: &str, amount: Decimal) -> Result<Receipt, LedgerErr> {
        self.transact(tax_id, Transaction::Withdrawal(amount))
    }

    /// Apply `transaction` to current account of client `tax_id`
    pub fn transact(&self, tax_id: &str, transaction: Transaction) -> Result<Receipt, LedgerErr> {
        let (client, account) = self.current_account(tax_id)?;
        Ok(client.apply_transaction(account, transaction)?)
    }

    /// Statement of current account of client `tax_id`
    pub fn statement(&self, tax_id: &str) -> Result<Statement, LedgerErr> {
        let (_, account) = self.current_account(tax_id)?;
        let account = account.borrow();
        Ok(Statement::of(&*account))
    }

    /// All accounts in opening order
    pub fn accounts(&self) -> Vec<AccountSummary> {
        self.registry
            .iter()
            .filter_map(Weak::upgrade)
            .map(|account| {
                let account = account.borrow();
                let holder = self
                    .find_client(account.holder())
                    .map(|c| c.name().to_owned())
                    .unwrap_or_default();
                AccountSummary {
                    branch: account.branch().to_owned(),
                    account: account.number(),
                    holder,
                    balance: account.balance(),
                    withdrawals: account.history().withdrawal_count(),
                }
            })
            .collect()
    }

    fn current_account(&self, tax_id: &str) -> Result<(&Client, &AccountRef), LedgerErr> {
        let client = self
            .find_client(tax_id)
            .ok_or_else(|| LedgerErr::ClientNotFound(tax_id.to_owned()))?;
        let account = client
            .current_account()
            .ok_or_else(|| LedgerErr::AccountNotFound(tax_id.to_owned()))?;
        Ok((client, account))
    }

    fn next_number(&self) -> AccountNumber {
        self.registry.len() as AccountNumber + 1
    }
}
