//! Rendered view of account history with its current balance
use crate::account::{transactions::LogEntry, Account};
use crate::AccountNumber;
use rust_decimal::Decimal;
use std::fmt;

const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Snapshot of account history and balance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// branch code
    pub branch: String,
    /// account number
    pub number: AccountNumber,
    /// executed transactions in execution order
    pub entries: Vec<LogEntry>,
    /// balance at the moment of the snapshot
    pub balance: Decimal,
}

impl Statement {
    /// Take snapshot of `account`
    pub fn of<A: Account + ?Sized>(account: &A) -> Self {
        Self {
            branch: account.branch().to_owned(),
            number: account.number(),
            entries: account.history().entries().to_vec(),
            balance: account.balance(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "================ STATEMENT ================")?;
        writeln!(f, "Branch: {}  Account: {}", self.branch, self.number)?;
        if self.entries.is_empty() {
            writeln!(f, "No transactions recorded.")?;
        }
        for entry in &self.entries {
            writeln!(
                f,
                "{} - {}: R$ {}",
                entry.at.format(TIMESTAMP_FORMAT),
                entry.kind.label(),
                entry.amount
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Balance:")?;
        write!(f, "\tR$ {:.2}", self.balance)
    }
}

#[cfg(test)]
mod test {
    use super::Statement;
    use crate::account::{Account, CheckingAccount};
    use crate::transaction::Transaction;
    use chrono::{Local, TimeZone};
    use rust_decimal::Decimal;

    #[test]
    fn empty_statement() {
        let a = CheckingAccount::new(3, "123");
        let s = Statement::of(&a);

        assert!(s.entries.is_empty());
        assert_eq!(
            s.to_string(),
            "================ STATEMENT ================\n\
             Branch: 0001  Account: 3\n\
             No transactions recorded.\n\
             \n\
             Balance:\n\
             \tR$ 0.00"
        );
    }

    #[test]
    fn lists_entries_in_order() {
        let mut a = CheckingAccount::new(1, "123");
        let t1 = Local.with_ymd_and_hms(2024, 1, 5, 9, 0, 1).unwrap();
        let t2 = Local.with_ymd_and_hms(2024, 1, 6, 18, 30, 0).unwrap();
        Transaction::Deposit(Decimal::new(1000, 0))
            .apply_at(&mut a, t1)
            .unwrap();
        Transaction::Withdrawal(Decimal::new(2005, 1))
            .apply_at(&mut a, t2)
            .unwrap();

        let s = Statement::of(&a);
        assert_eq!(s.balance, a.balance());
        assert_eq!(
            s.to_string(),
            "================ STATEMENT ================\n\
             Branch: 0001  Account: 1\n\
             05-01-2024 09:00:01 - Deposit: R$ 1000.00\n\
             06-01-2024 18:30:00 - Withdrawal: R$ 200.50\n\
             \n\
             Balance:\n\
             \tR$ 799.50"
        );
    }
}
