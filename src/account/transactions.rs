//! Represents recorded account transactions
use crate::amount::Amount;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of money operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransKind {
    /// increase balance
    Deposit,
    /// decrease balance
    Withdrawal,
}

impl TransKind {
    /// label used in statements
    pub fn label(&self) -> &'static str {
        match self {
            TransKind::Deposit => "Deposit",
            TransKind::Withdrawal => "Withdrawal",
        }
    }
}

impl fmt::Display for TransKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransKind::Deposit => f.write_str("deposit"),
            TransKind::Withdrawal => f.write_str("withdrawal"),
        }
    }
}

/// Single executed transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// deposit or withdrawal
    pub kind: TransKind,
    /// moved amount
    pub amount: Amount,
    /// wall clock time of execution
    pub at: DateTime<Local>,
}

/// Append only history of executed transactions, in execution order
#[derive(Debug, Clone, Default)]
pub struct TransLog {
    entries: Vec<LogEntry>,
}

impl TransLog {
    /// Create empty log
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, kind: TransKind, amount: Amount, at: DateTime<Local>) {
        self.entries.push(LogEntry { kind, amount, at });
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Number of withdrawals ever recorded
    pub fn withdrawal_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.kind == TransKind::Withdrawal)
            .count()
    }

    /// `true` if nothing was recorded yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
