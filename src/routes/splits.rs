//! Split routes: draft editing and deployment.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use super::auth::SignedIn;
use crate::services::split::{self, SplitDeployment, SplitDraft, SplitDraftUpdate, SplitError};
use crate::state::AppState;

/// `GET /api/splits/draft`
pub async fn get_draft(State(state): State<AppState>, _auth: SignedIn) -> Json<SplitDraft> {
    Json(split::draft(&state).await)
}

/// `PUT /api/splits/draft`: set title, amount or category.
pub async fn update_draft(
    State(state): State<AppState>,
    _auth: SignedIn,
    Json(body): Json<SplitDraftUpdate>,
) -> Json<SplitDraft> {
    Json(split::update_draft(&state, body).await)
}

#[derive(Deserialize)]
pub struct FriendBody {
    #[serde(default)]
    pub address: String,
}

/// `POST /api/splits/draft/friends`: add a friend address; blanks and repeats are ignored.
pub async fn add_friend(
    State(state): State<AppState>,
    _auth: SignedIn,
    Json(body): Json<FriendBody>,
) -> Json<SplitDraft> {
    Json(split::add_friend(&state, &body.address).await)
}

/// `DELETE /api/splits/draft/friends/{address}`
pub async fn remove_friend(
    State(state): State<AppState>,
    _auth: SignedIn,
    Path(address): Path<String>,
) -> Json<SplitDraft> {
    Json(split::remove_friend(&state, &address).await)
}

/// `POST /api/splits/deploy`: deploy the draft through the split factory.
pub async fn deploy(State(state): State<AppState>, _auth: SignedIn) -> Result<Json<SplitDeployment>, StatusCode> {
    split::deploy(&state).await.map(Json).map_err(split_error_to_status)
}

pub(crate) fn split_error_to_status(err: SplitError) -> StatusCode {
    match err {
        SplitError::MissingTitle | SplitError::MissingAmount | SplitError::NoFriends => StatusCode::BAD_REQUEST,
        SplitError::Busy(_) => StatusCode::CONFLICT,
        SplitError::Settlement(e) => {
            tracing::error!(error = %e, "split settlement failed");
            StatusCode::BAD_GATEWAY
        }
    }
}

#[cfg(test)]
#[path = "splits_test.rs"]
mod tests;
