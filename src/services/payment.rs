//! Payment service: peer-to-peer sends through the settlement call.
//!
//! ERROR HANDLING
//! ==============
//! Blank recipients and missing or zero amounts are rejected before any
//! settlement work. Settlement failures are logged and returned; the form
//! state (last tx id) stays cleared in that case.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use super::activity::{NewRecord, TransactionKind, TransactionRecord};
use super::settlement::{SettlementError, SettlementRequest, explorer_link};
use super::contract::ContractError;
use crate::amount::Amount;
use crate::processing::{Busy, Flow};
use crate::state::AppState;

pub const PAY_METHOD: &str = "pay_and_log";
const PAYMENT_CATEGORY: &str = "Payments";

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("recipient is required")]
    MissingRecipient,
    #[error("a positive amount is required")]
    MissingAmount,
    #[error(transparent)]
    Busy(#[from] Busy),
    #[error("contract rejected payment: {0}")]
    Contract(#[from] ContractError),
    #[error("settlement failed: {0}")]
    Settlement(#[from] SettlementError),
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestedRecipient {
    pub name: &'static str,
    pub address: &'static str,
}

const SUGGESTED_RECIPIENTS: [SuggestedRecipient; 3] = [
    SuggestedRecipient { name: "Alice (Club Lead)", address: "ALICE...X7Y2" },
    SuggestedRecipient { name: "Bob (Roommate)", address: "BOB...9Z1Q" },
    SuggestedRecipient { name: "Charlie (Tutor)", address: "CHARLIE...K4M8" },
];

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentRequest {
    #[serde(default)]
    pub recipient: String,
    pub amount: Option<Amount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentConfirmation {
    pub tx_id: String,
    pub status: String,
    pub confirmed_round: u64,
    pub explorer_url: String,
    pub recipient: String,
    pub amount: Amount,
    /// Message returned by the contract's logging method.
    pub logged: String,
    pub record_id: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentsOverview {
    pub processing: bool,
    pub last_tx_id: Option<String>,
    pub suggested: Vec<SuggestedRecipient>,
    pub recent: Vec<TransactionRecord>,
}

#[must_use]
pub fn suggested_recipients() -> Vec<SuggestedRecipient> {
    SUGGESTED_RECIPIENTS.to_vec()
}

/// Send `amount` to `recipient` and return the confirmation.
pub async fn submit(state: &AppState, request: PaymentRequest) -> Result<PaymentConfirmation, PaymentError> {
    let recipient = request.recipient.trim().to_owned();
    if recipient.is_empty() {
        return Err(PaymentError::MissingRecipient);
    }
    let amount = request
        .amount
        .filter(|a| !a.is_zero())
        .ok_or(PaymentError::MissingAmount)?;

    let _guard = state.processing.begin(Flow::Payment)?;
    let sender = {
        let mut campus = state.campus.write().await;
        campus.session.last_tx_id = None;
        campus.session.wallet_address.clone().unwrap_or_default()
    };

    let call = SettlementRequest::new(
        &sender,
        state.config.app_id.to_string(),
        PAY_METHOD,
        vec![json!(amount), json!(recipient)],
    );
    let receipt = state.settlement.call(call).await.inspect_err(|e| {
        warn!(error = %e, %recipient, "payment: settlement failed");
    })?;

    let mut campus = state.campus.write().await;
    let logged = campus.contract.pay_and_log(amount)?;
    campus.session.last_tx_id = Some(receipt.tx_id.clone());
    let record_id = campus.activity.append(NewRecord {
        kind: TransactionKind::Payment,
        amount,
        counterparty: &recipient,
        category: PAYMENT_CATEGORY,
        tx_id: &receipt.tx_id,
    });
    info!(tx_id = %receipt.tx_id, %recipient, %amount, "payment: confirmed");

    Ok(PaymentConfirmation {
        explorer_url: explorer_link(&state.config.explorer_tx_url, &receipt.tx_id),
        tx_id: receipt.tx_id,
        status: receipt.status,
        confirmed_round: receipt.confirmed_round,
        recipient,
        amount,
        logged,
        record_id,
    })
}

pub async fn overview(state: &AppState) -> PaymentsOverview {
    let campus = state.campus.read().await;
    PaymentsOverview {
        processing: state.processing.is_active(Flow::Payment),
        last_tx_id: campus.session.last_tx_id.clone(),
        suggested: suggested_recipients(),
        recent: campus.activity.of_kind(TransactionKind::Payment),
    }
}

#[cfg(test)]
#[path = "payment_test.rs"]
mod tests;
