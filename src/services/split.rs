//! Split service: shared-expense drafts deployed through the split factory.
//!
//! DESIGN
//! ======
//! A single draft (title, total, category, friend addresses) is edited in
//! place. Friend addresses are kept unique in insertion order; blanks are
//! ignored. Deploying requires a title, an amount and at least one friend,
//! and consumes the draft whether or not settlement succeeds. Shares are
//! never checked against the total.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use super::settlement::{SettlementError, SettlementRequest};
use crate::amount::Amount;
use crate::processing::{Busy, Flow};
use crate::state::AppState;

pub const SPLIT_FACTORY_ID: &str = "SPLIT_FACTORY_ID";
pub const CREATE_METHOD: &str = "create_split";

#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    #[error("split title is required")]
    MissingTitle,
    #[error("split amount is required")]
    MissingAmount,
    #[error("add at least one friend")]
    NoFriends,
    #[error(transparent)]
    Busy(#[from] Busy),
    #[error("settlement failed: {0}")]
    Settlement(#[from] SettlementError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitCategory {
    #[default]
    Entertainment,
    Food,
    Bills,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SplitDraft {
    pub title: String,
    pub amount: Option<Amount>,
    pub category: SplitCategory,
    pub friends: Vec<String>,
}

impl SplitDraft {
    /// Add a friend address. Returns false for blanks and duplicates.
    pub fn add_friend(&mut self, address: &str) -> bool {
        let address = address.trim();
        if address.is_empty() || self.friends.iter().any(|f| f == address) {
            return false;
        }
        self.friends.push(address.to_owned());
        true
    }

    pub fn remove_friend(&mut self, address: &str) -> bool {
        let before = self.friends.len();
        self.friends.retain(|f| f != address);
        self.friends.len() != before
    }

    /// Check the draft is ready to deploy.
    pub fn validate(&self) -> Result<Amount, SplitError> {
        if self.title.trim().is_empty() {
            return Err(SplitError::MissingTitle);
        }
        let amount = self
            .amount
            .filter(|a| !a.is_zero())
            .ok_or(SplitError::MissingAmount)?;
        if self.friends.is_empty() {
            return Err(SplitError::NoFriends);
        }
        Ok(amount)
    }
}

/// Partial draft update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SplitDraftUpdate {
    pub title: Option<String>,
    pub amount: Option<Amount>,
    pub category: Option<SplitCategory>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SplitDeployment {
    pub tx_id: String,
    pub status: String,
    pub confirmed_round: u64,
    pub title: String,
    pub amount: Amount,
    pub category: SplitCategory,
    pub friends: Vec<String>,
}

// =============================================================================
// OPERATIONS
// =============================================================================

pub async fn draft(state: &AppState) -> SplitDraft {
    state.campus.read().await.split_draft.clone()
}

pub async fn update_draft(state: &AppState, update: SplitDraftUpdate) -> SplitDraft {
    let mut campus = state.campus.write().await;
    let draft = &mut campus.split_draft;
    if let Some(title) = update.title {
        draft.title = title;
    }
    if let Some(amount) = update.amount {
        draft.amount = Some(amount);
    }
    if let Some(category) = update.category {
        draft.category = category;
    }
    draft.clone()
}

pub async fn add_friend(state: &AppState, address: &str) -> SplitDraft {
    let mut campus = state.campus.write().await;
    campus.split_draft.add_friend(address);
    campus.split_draft.clone()
}

pub async fn remove_friend(state: &AppState, address: &str) -> SplitDraft {
    let mut campus = state.campus.write().await;
    campus.split_draft.remove_friend(address);
    campus.split_draft.clone()
}

/// Deploy the current draft. The draft is reset once settlement is attempted.
pub async fn deploy(state: &AppState) -> Result<SplitDeployment, SplitError> {
    let _guard = state.processing.begin(Flow::Split)?;

    let (draft, amount, sender) = {
        let mut campus = state.campus.write().await;
        let amount = campus.split_draft.validate()?;
        let draft = std::mem::take(&mut campus.split_draft);
        let sender = campus.session.wallet_address.clone().unwrap_or_default();
        (draft, amount, sender)
    };

    let call = SettlementRequest::new(
        &sender,
        SPLIT_FACTORY_ID,
        CREATE_METHOD,
        vec![json!(draft.title), json!(amount), json!(draft.friends)],
    );
    let receipt = state.settlement.call(call).await.inspect_err(|e| {
        warn!(error = %e, title = %draft.title, "split: settlement failed");
    })?;

    info!(tx_id = %receipt.tx_id, friends = draft.friends.len(), "split: deployed");
    Ok(SplitDeployment {
        tx_id: receipt.tx_id,
        status: receipt.status,
        confirmed_round: receipt.confirmed_round,
        title: draft.title,
        amount,
        category: draft.category,
        friends: draft.friends,
    })
}

#[cfg(test)]
#[path = "split_test.rs"]
mod tests;
