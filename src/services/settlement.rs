//! Settlement service: the stand-in for submitting an app call to the ledger.
//!
//! DESIGN
//! ======
//! `SettlementClient` is the seam a real ledger integration would implement
//! (build, sign, submit, poll for confirmation). The only implementation
//! here, `MockSettlement`, waits a fixed delay and fabricates a confirmed
//! receipt. It never validates arguments and never fails. After every call
//! it posts a notification describing the fabricated transaction.

use std::time::Duration;

use rand::Rng;
use serde::Serialize;
use tracing::info;

use super::notify::Notifier;

pub const CONFIRMED: &str = "Confirmed";
const TX_ID_PREFIX: &str = "TX_";
const TX_ID_LEN: usize = 9;
const TX_ID_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const MAX_CONFIRMED_ROUND: u64 = 1_000_000;

/// One app call as issued by a flow.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SettlementRequest {
    pub sender: String,
    pub contract_id: String,
    pub method: String,
    pub args: Vec<serde_json::Value>,
}

impl SettlementRequest {
    #[must_use]
    pub fn new(sender: &str, contract_id: impl Into<String>, method: &str, args: Vec<serde_json::Value>) -> Self {
        Self { sender: sender.to_owned(), contract_id: contract_id.into(), method: method.to_owned(), args }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SettlementReceipt {
    pub tx_id: String,
    pub status: String,
    pub confirmed_round: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum SettlementError {
    #[error("settlement unavailable: {0}")]
    Unavailable(String),
}

#[async_trait::async_trait]
pub trait SettlementClient: Send + Sync {
    async fn call(&self, request: SettlementRequest) -> Result<SettlementReceipt, SettlementError>;
}

// =============================================================================
// MOCK
// =============================================================================

pub struct MockSettlement {
    delay: Duration,
    notifier: Notifier,
    explorer_tx_url: String,
}

impl MockSettlement {
    #[must_use]
    pub fn new(delay: Duration, notifier: Notifier, explorer_tx_url: &str) -> Self {
        Self { delay, notifier, explorer_tx_url: explorer_tx_url.to_owned() }
    }
}

#[async_trait::async_trait]
impl SettlementClient for MockSettlement {
    async fn call(&self, request: SettlementRequest) -> Result<SettlementReceipt, SettlementError> {
        info!(
            method = %request.method,
            contract_id = %request.contract_id,
            sender = %request.sender,
            "settlement: app call"
        );

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let receipt = SettlementReceipt {
            tx_id: generate_tx_id(),
            status: CONFIRMED.to_owned(),
            confirmed_round: rand::rng().random_range(0..MAX_CONFIRMED_ROUND),
        };
        info!(tx_id = %receipt.tx_id, round = receipt.confirmed_round, "settlement: confirmed");

        self.notifier
            .notify(settlement_message(&request, &receipt, &self.explorer_tx_url));
        Ok(receipt)
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// `TX_` followed by nine uppercase base-36 characters.
#[must_use]
pub fn generate_tx_id() -> String {
    let mut rng = rand::rng();
    let mut id = String::with_capacity(TX_ID_PREFIX.len() + TX_ID_LEN);
    id.push_str(TX_ID_PREFIX);
    for _ in 0..TX_ID_LEN {
        id.push(char::from(TX_ID_ALPHABET[rng.random_range(0..TX_ID_ALPHABET.len())]));
    }
    id
}

/// Shorten an address to its first six and last four characters.
#[must_use]
pub fn format_address(address: &str) -> String {
    if address.is_empty() {
        return String::new();
    }
    let chars: Vec<char> = address.chars().collect();
    let head: String = chars.iter().take(6).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{head}...{tail}")
}

/// Explorer link for a transaction id.
#[must_use]
pub fn explorer_link(explorer_tx_url: &str, tx_id: &str) -> String {
    format!("{explorer_tx_url}/{tx_id}")
}

/// Markdown body posted after each settlement.
#[must_use]
pub fn settlement_message(request: &SettlementRequest, receipt: &SettlementReceipt, explorer_tx_url: &str) -> String {
    let link = explorer_link(explorer_tx_url, &receipt.tx_id);
    format!(
        "⚡ **New App Call Detected**\n\
         👤 **Sender**: `{}`\n\
         📜 **Method**: `{}`\n\
         🆔 **App ID**: `{}`\n\
         🔗 **TX ID**: [`{}`]({link})\n\
         ✅ **Status**: {} on LocalNet",
        format_address(&request.sender),
        request.method,
        request.contract_id,
        receipt.tx_id,
        receipt.status,
    )
}

#[cfg(test)]
#[path = "settlement_test.rs"]
mod tests;
