//! Session-local mobile money account
//!
//! A single mutable balance behind a guarded `debit`. The balance is only
//! ever changed through [`Account::debit`], which rejects non-positive and
//! overdraft amounts before touching it, so it can never go negative.

use crate::error::DebitError;

/// Opening balance for a fresh simulation session.
pub const DEFAULT_OPENING_BALANCE: f64 = 50000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    balance: f64,
}

impl Account {
    pub fn new(opening_balance: f64) -> Self {
        Self {
            balance: opening_balance,
        }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Withdraw `amount`, returning the new balance.
    ///
    /// Fails with [`DebitError::InvalidAmount`] for amounts of zero or
    /// less and [`DebitError::Insufficient`] for amounts above the
    /// balance. The balance is untouched on every error path.
    pub fn debit(&mut self, amount: f64) -> Result<f64, DebitError> {
        if amount <= 0.0 {
            return Err(DebitError::InvalidAmount);
        }
        if amount > self.balance {
            return Err(DebitError::Insufficient);
        }
        self.balance -= amount;
        Ok(self.balance)
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new(DEFAULT_OPENING_BALANCE)
    }
}
