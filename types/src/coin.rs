//! Token amounts as (denomination, amount) pairs.
//!
//! Amounts are fixed-point integers (u128, raw units) to avoid
//! floating-point errors inside consensus-critical arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single-denomination token amount.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: u128,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: u128) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    pub fn checked_add(&self, amount: u128) -> Option<Self> {
        self.amount
            .checked_add(amount)
            .map(|total| Self::new(self.denom.clone(), total))
    }

    pub fn checked_sub(&self, amount: u128) -> Option<Self> {
        self.amount
            .checked_sub(amount)
            .map(|rest| Self::new(self.denom.clone(), rest))
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}
