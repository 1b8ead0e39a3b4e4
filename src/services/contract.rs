//! Contract service: in-process model of the CampusPay app's global state.
//!
//! Tracks the two counters the on-ledger app keeps (transaction count and
//! volume). Flows bump them after their settlement call confirms.

use serde::Serialize;

use crate::amount::Amount;

pub const GREETING: &str = "Welcome to CampusPay - The Social Finance Platform for Students!";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContractError {
    #[error("Amount must be greater than 0")]
    ZeroAmount,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContractStats {
    pub total_transactions: u64,
    pub total_volume: Amount,
}

impl ContractStats {
    /// Record a transaction of `amount` and return the new transaction count.
    pub fn register_transaction(&mut self, amount: Amount) -> u64 {
        self.total_transactions += 1;
        self.total_volume = self.total_volume.saturating_add(amount);
        self.total_transactions
    }

    /// Log a payment. Zero amounts are rejected and leave the counters untouched.
    pub fn pay_and_log(&mut self, amount: Amount) -> Result<String, ContractError> {
        if amount.is_zero() {
            return Err(ContractError::ZeroAmount);
        }
        self.register_transaction(amount);
        Ok(format!("Transaction of {amount} ALGO logged successfully."))
    }

    #[must_use]
    pub fn stats(&self) -> (u64, Amount) {
        (self.total_transactions, self.total_volume)
    }
}

#[must_use]
pub fn greet() -> &'static str {
    GREETING
}
