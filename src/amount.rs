//! Protect before using zero, negative or sub-cent amount for deposits and withdraws.

use std::{borrow::Borrow, fmt, ops::Deref};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Represent strictly positive financial amount of money
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

/// Smallest unit kept by an [`Amount`] is a cent
pub const CENT_SCALE: u32 = 2;

/// represent error when transaction want to operate on amount that is not a positive number of
/// cents
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidAmountErr {
    #[error("amount is zero or negative")]
    #[allow(missing_docs)]
    NonPositive,
    #[error("amount has fractions of a cent")]
    #[allow(missing_docs)]
    SubCent,
}

impl TryFrom<Decimal> for Amount {
    type Error = InvalidAmountErr;
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value <= Decimal::ZERO {
            Err(InvalidAmountErr::NonPositive)
        } else if value.normalize().scale() > CENT_SCALE {
            Err(InvalidAmountErr::SubCent)
        } else {
            Ok(Self(value))
        }
    }
}

impl From<Amount> for Decimal {
    fn from(this: Amount) -> Self {
        this.0
    }
}

impl Borrow<Decimal> for Amount {
    fn borrow(&self) -> &Decimal {
        &self.0
    }
}

impl Deref for Amount {
    type Target = Decimal;
    fn deref(&self) -> &Self::Target {
        self.borrow()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
