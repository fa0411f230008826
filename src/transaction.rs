//! Requested money operations
use crate::account::{transactions::TransKind, Account, Receipt};
use crate::errors::AccountErr;
use chrono::{DateTime, Local};
use rust_decimal::Decimal;

/// One requested operation with its amount. Amount is validated only when applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    /// increase balance
    Deposit(Decimal),
    /// decrease balance
    Withdrawal(Decimal),
}

impl Transaction {
    /// kind of this operation
    pub fn kind(&self) -> TransKind {
        match self {
            Transaction::Deposit(_) => TransKind::Deposit,
            Transaction::Withdrawal(_) => TransKind::Withdrawal,
        }
    }

    /// requested amount
    pub fn amount(&self) -> Decimal {
        match self {
            Transaction::Deposit(amount) | Transaction::Withdrawal(amount) => *amount,
        }
    }

    /// Apply to `account` and record it in account history with current time
    pub fn apply<A: Account + ?Sized>(&self, account: &mut A) -> Result<Receipt, AccountErr> {
        self.apply_at(account, Local::now())
    }

    /// Apply to `account` and, only on success, record it in account history with time `at`
    pub fn apply_at<A: Account + ?Sized>(
        &self,
        account: &mut A,
        at: DateTime<Local>,
    ) -> Result<Receipt, AccountErr> {
        let receipt = match self {
            Transaction::Deposit(amount) => account.deposit(*amount)?,
            Transaction::Withdrawal(amount) => account.withdraw(*amount)?,
        };

        account.base_mut().record(receipt.kind, receipt.amount, at);
        Ok(receipt)
    }
}

#[cfg(test)]
mod test {
    use super::Transaction;
    use crate::account::{transactions::TransKind, Account, CheckingAccount, PlainAccount};
    use crate::errors::AccountErr;
    use chrono::{Local, TimeZone};
    use rust_decimal::Decimal;

    fn dec(v: i64) -> Decimal {
        Decimal::new(v * 100, 2)
    }

    #[test]
    fn scenario_deposit_then_withdraw_until_count_is_reached() {
        let mut a = CheckingAccount::new(1, "123");

        let r = Transaction::Deposit(dec(1000)).apply(&mut a).unwrap();
        assert_eq!(r.to_string(), "Deposit of R$ 1000.00 completed successfully");
        assert_eq!(a.balance(), dec(1000));
        assert_eq!(a.history().len(), 1);
        assert_eq!(a.history().entries()[0].kind, TransKind::Deposit);
        assert_eq!(*a.history().entries()[0].amount, dec(1000));

        Transaction::Withdrawal(dec(200)).apply(&mut a).unwrap();
        assert_eq!(a.balance(), dec(800));

        for _ in 0..2 {
            Transaction::Withdrawal(dec(200)).apply(&mut a).unwrap();
        }
        assert_eq!(a.balance(), dec(400));
        assert_eq!(a.history().withdrawal_count(), 3);

        let e = Transaction::Withdrawal(dec(200)).apply(&mut a).unwrap_err();
        assert_eq!(e, AccountErr::WithdrawalCountExceeded { max: 3 });
        assert_eq!(a.balance(), dec(400));
        assert_eq!(a.history().len(), 4);
    }

    #[test]
    fn scenario_limit_on_empty_account() {
        let mut a = CheckingAccount::new(1, "123");
        let e = Transaction::Withdrawal(dec(600)).apply(&mut a).unwrap_err();
        assert!(matches!(e, AccountErr::LimitExceeded { .. }));
        assert!(a.history().is_empty());
    }

    #[test]
    fn scenario_negative_deposit() {
        let mut a = CheckingAccount::new(1, "123");
        let e = Transaction::Deposit(Decimal::new(-500, 2))
            .apply(&mut a)
            .unwrap_err();
        assert_eq!(
            e,
            AccountErr::InvalidAmount {
                kind: TransKind::Deposit
            }
        );
        assert_eq!(
            e.to_string(),
            "invalid deposit amount, enter a value greater than zero with at most two decimal places"
        );
        assert!(a.history().is_empty());
    }

    #[test]
    fn failed_operations_change_nothing() {
        let mut a = CheckingAccount::new(1, "123");
        Transaction::Deposit(dec(100)).apply(&mut a).unwrap();
        let balance = a.balance();
        let history = a.history().entries().to_vec();

        let rejected = [
            Transaction::Deposit(Decimal::ZERO),
            Transaction::Deposit(dec(-1)),
            Transaction::Withdrawal(Decimal::ZERO),
            Transaction::Withdrawal(dec(-1)),
            Transaction::Withdrawal(Decimal::new(10001, 2)),
            Transaction::Withdrawal(dec(501)),
        ];
        for t in rejected {
            t.apply(&mut a).unwrap_err();
            assert_eq!(a.balance(), balance);
            assert_eq!(a.history().entries(), history.as_slice());
        }
    }

    #[test]
    fn overflowing_deposit_is_rejected_and_not_recorded() {
        let mut a = CheckingAccount::new(1, "123");
        Transaction::Deposit(Decimal::MAX).apply(&mut a).unwrap();

        let e = Transaction::Deposit(Decimal::MAX).apply(&mut a).unwrap_err();
        assert_eq!(
            e,
            AccountErr::BalanceOverflow {
                requested: Decimal::MAX,
                balance: Decimal::MAX,
            }
        );
        assert_eq!(a.balance(), Decimal::MAX);
        assert_eq!(a.history().len(), 1);
    }

    #[test]
    fn sub_cent_amounts_are_rejected() {
        let mut a = CheckingAccount::new(1, "123");
        let e = Transaction::Deposit(Decimal::new(1, 3))
            .apply(&mut a)
            .unwrap_err();
        assert_eq!(
            e,
            AccountErr::InvalidAmount {
                kind: TransKind::Deposit
            }
        );
        assert!(a.history().is_empty());
        assert_eq!(a.balance(), Decimal::ZERO);
    }

    #[test]
    fn records_kind_amount_and_time() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let mut a = PlainAccount::new(1, "123");

        Transaction::Deposit(Decimal::new(1234, 2))
            .apply_at(&mut a, at)
            .unwrap();
        Transaction::Withdrawal(Decimal::new(234, 2))
            .apply_at(&mut a, at)
            .unwrap();

        let entries = a.history().entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].kind, TransKind::Withdrawal);
        assert_eq!(*entries[1].amount, Decimal::new(234, 2));
        assert_eq!(entries[1].at, at);
        assert_eq!(a.balance(), dec(10));
    }

    #[test]
    fn works_through_trait_object() {
        let mut a: Box<dyn Account> = Box::new(CheckingAccount::new(1, "123"));
        Transaction::Deposit(dec(5)).apply(a.as_mut()).unwrap();
        assert_eq!(a.balance(), dec(5));
        assert_eq!(Transaction::Deposit(dec(5)).kind(), TransKind::Deposit);
        assert_eq!(Transaction::Withdrawal(dec(5)).amount(), dec(5));
    }
}
