//! Fundraising campaign routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;

use super::auth::SignedIn;
use crate::services::campaign::{self, CampaignError, CampaignView, DonationReceipt, DonationRequest, NewCampaign};
use crate::state::AppState;

/// `GET /api/campaigns`: campaigns with progress.
pub async fn list(State(state): State<AppState>, _auth: SignedIn) -> Json<Vec<CampaignView>> {
    Json(campaign::list(&state).await)
}

/// `POST /api/campaigns`: start a campaign.
pub async fn create(
    State(state): State<AppState>,
    _auth: SignedIn,
    Json(body): Json<NewCampaign>,
) -> Result<(StatusCode, Json<CampaignView>), StatusCode> {
    let view = campaign::create(&state, body).await.map_err(campaign_error_to_status)?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// `POST /api/campaigns/{id}/donate`: donate `amount` (default 10). The body is optional.
pub async fn donate(
    State(state): State<AppState>,
    _auth: SignedIn,
    Path(id): Path<u64>,
    body: Option<Json<DonationRequest>>,
) -> Result<Json<DonationReceipt>, StatusCode> {
    let Json(body) = body.unwrap_or_default();
    campaign::donate(&state, id, body.amount)
        .await
        .map(Json)
        .map_err(campaign_error_to_status)
}

pub(crate) fn campaign_error_to_status(err: CampaignError) -> StatusCode {
    match err {
        CampaignError::MissingTitle | CampaignError::MissingTarget | CampaignError::ZeroDonation => {
            StatusCode::BAD_REQUEST
        }
        CampaignError::NotFound(_) => StatusCode::NOT_FOUND,
        CampaignError::Closed(_) | CampaignError::Busy(_) => StatusCode::CONFLICT,
        CampaignError::Settlement(e) => {
            tracing::error!(error = %e, "donation settlement failed");
            StatusCode::BAD_GATEWAY
        }
    }
}

#[cfg(test)]
#[path = "campaigns_test.rs"]
mod tests;
