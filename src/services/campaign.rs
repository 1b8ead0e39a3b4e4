//! Campaign service: fundraising campaigns and donations.
//!
//! DESIGN
//! ======
//! Campaigns live in `CampusState` and are mutated optimistically once the
//! donation's settlement call confirms: raised grows by exactly the donated
//! amount and the donor count by one. A campaign whose raised total reaches
//! its target flips to `Completed` and stops accepting donations.
//!
//! ERROR HANDLING
//! ==============
//! Unknown ids map to `NotFound`, funded or completed campaigns to `Closed`.
//! Settlement failures leave the campaign untouched.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use super::activity::{NewRecord, TransactionKind};
use super::settlement::{SettlementError, SettlementRequest};
use crate::amount::{Amount, progress_percent};
use crate::processing::{Busy, Flow};
use crate::state::AppState;

pub const DONATE_METHOD: &str = "donate";
pub const DEFAULT_DONATION: Amount = Amount::from_whole(10);
const DONATION_CATEGORY: &str = "Fundraising";

#[derive(Debug, thiserror::Error)]
pub enum CampaignError {
    #[error("campaign title is required")]
    MissingTitle,
    #[error("a positive target is required")]
    MissingTarget,
    #[error("donation amount must be positive")]
    ZeroDonation,
    #[error("campaign not found: {0}")]
    NotFound(u64),
    #[error("campaign {0} is no longer accepting donations")]
    Closed(u64),
    #[error(transparent)]
    Busy(#[from] Busy),
    #[error("settlement failed: {0}")]
    Settlement(#[from] SettlementError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignStatus {
    Active,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Campaign {
    pub id: u64,
    pub title: String,
    pub target: Amount,
    pub raised: Amount,
    pub donors: u32,
    pub status: CampaignStatus,
}

impl Campaign {
    #[must_use]
    pub fn progress(&self) -> u8 {
        progress_percent(self.raised, self.target)
    }

    #[must_use]
    pub fn accepts_donations(&self) -> bool {
        self.status == CampaignStatus::Active && self.progress() < 100
    }
}

/// Campaign plus its computed progress percentage.
#[derive(Debug, Clone, Serialize)]
pub struct CampaignView {
    #[serde(flatten)]
    pub campaign: Campaign,
    pub progress: u8,
}

impl From<&Campaign> for CampaignView {
    fn from(campaign: &Campaign) -> Self {
        Self { progress: campaign.progress(), campaign: campaign.clone() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewCampaign {
    #[serde(default)]
    pub title: String,
    pub target: Option<Amount>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DonationRequest {
    pub amount: Option<Amount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DonationReceipt {
    pub tx_id: String,
    pub status: String,
    pub confirmed_round: u64,
    pub amount: Amount,
    pub campaign: CampaignView,
}

#[must_use]
pub fn seed_campaigns() -> Vec<Campaign> {
    let campaign = |id, title: &str, target, raised, donors, status| Campaign {
        id,
        title: title.to_owned(),
        target: Amount::from_whole(target),
        raised: Amount::from_whole(raised),
        donors,
        status,
    };
    vec![
        campaign(1, "Campus Tech Fest 2026", 15_000, 12_450, 142, CampaignStatus::Active),
        campaign(2, "IEEE Student Chapter", 5_000, 1_200, 38, CampaignStatus::Active),
        campaign(3, "Relief Fund: Shelter", 8_000, 8_000, 215, CampaignStatus::Completed),
    ]
}

// =============================================================================
// OPERATIONS
// =============================================================================

pub async fn list(state: &AppState) -> Vec<CampaignView> {
    state.campus.read().await.campaigns.iter().map(CampaignView::from).collect()
}

/// Create an active campaign with the next local id.
pub async fn create(state: &AppState, request: NewCampaign) -> Result<CampaignView, CampaignError> {
    let title = request.title.trim().to_owned();
    if title.is_empty() {
        return Err(CampaignError::MissingTitle);
    }
    let target = request
        .target
        .filter(|t| !t.is_zero())
        .ok_or(CampaignError::MissingTarget)?;

    let mut campus = state.campus.write().await;
    let id = campus.next_campaign_id;
    campus.next_campaign_id += 1;
    let campaign = Campaign { id, title, target, raised: Amount::ZERO, donors: 0, status: CampaignStatus::Active };
    let view = CampaignView::from(&campaign);
    campus.campaigns.push(campaign);
    info!(id, target = %target, "campaign: created");
    Ok(view)
}

/// Donate to campaign `id`; a missing amount donates the default.
pub async fn donate(state: &AppState, id: u64, amount: Option<Amount>) -> Result<DonationReceipt, CampaignError> {
    let amount = amount.unwrap_or(DEFAULT_DONATION);
    if amount.is_zero() {
        return Err(CampaignError::ZeroDonation);
    }

    let _guard = state.processing.begin(Flow::Donation)?;
    {
        let campus = state.campus.read().await;
        let campaign = campus.campaigns.iter().find(|c| c.id == id).ok_or(CampaignError::NotFound(id))?;
        if !campaign.accepts_donations() {
            return Err(CampaignError::Closed(id));
        }
    }

    let sender = state.sender().await;
    let call = SettlementRequest::new(&sender, format!("CAMPAIGN_{id}"), DONATE_METHOD, vec![json!(amount)]);
    let receipt = state.settlement.call(call).await.inspect_err(|e| {
        warn!(error = %e, id, "campaign: donation settlement failed");
    })?;

    let mut campus = state.campus.write().await;
    let campaign = campus
        .campaigns
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or(CampaignError::NotFound(id))?;
    campaign.raised = campaign.raised.saturating_add(amount);
    campaign.donors += 1;
    if campaign.raised >= campaign.target {
        campaign.status = CampaignStatus::Completed;
    }
    let view = CampaignView::from(&*campaign);

    campus.contract.register_transaction(amount);
    campus.activity.append(NewRecord {
        kind: TransactionKind::Donation,
        amount,
        counterparty: &view.campaign.title,
        category: DONATION_CATEGORY,
        tx_id: &receipt.tx_id,
    });
    info!(tx_id = %receipt.tx_id, id, %amount, progress = view.progress, "campaign: donation confirmed");

    Ok(DonationReceipt {
        tx_id: receipt.tx_id,
        status: receipt.status,
        confirmed_round: receipt.confirmed_round,
        amount,
        campaign: view,
    })
}

#[cfg(test)]
#[path = "campaign_test.rs"]
mod tests;
