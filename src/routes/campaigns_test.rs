use super::*;
use crate::amount::Amount;
use crate::processing::{Busy, Flow};
use crate::services::session;
use crate::state::test_helpers;

async fn signed_in(state: &AppState) -> SignedIn {
    test_helpers::sign_in(state).await;
    SignedIn { session: session::snapshot(state).await }
}

#[test]
fn campaign_error_to_status_maps_not_found_and_conflicts() {
    assert_eq!(campaign_error_to_status(CampaignError::NotFound(9)), StatusCode::NOT_FOUND);
    assert_eq!(campaign_error_to_status(CampaignError::Closed(3)), StatusCode::CONFLICT);
    assert_eq!(campaign_error_to_status(CampaignError::Busy(Busy(Flow::Donation))), StatusCode::CONFLICT);
    assert_eq!(campaign_error_to_status(CampaignError::MissingTitle), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_returns_created() {
    let state = test_helpers::test_app_state();
    let auth = signed_in(&state).await;
    let body = NewCampaign { title: "Music Fest".into(), target: Some(Amount::from_whole(1000)) };
    let (status, Json(view)) = create(State(state), auth, Json(body)).await.unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(view.campaign.id, 4);
}

#[tokio::test]
async fn donate_without_body_uses_default() {
    let state = test_helpers::test_app_state();
    let auth = signed_in(&state).await;
    let Json(receipt) = donate(State(state), auth, Path(2), None).await.unwrap();
    assert_eq!(receipt.amount, Amount::from_whole(10));
    assert_eq!(receipt.campaign.campaign.donors, 39);
}

#[tokio::test]
async fn donate_with_explicit_amount() {
    let state = test_helpers::test_app_state();
    let auth = signed_in(&state).await;
    let body = DonationRequest { amount: Some(Amount::from_whole(25)) };
    let Json(receipt) = donate(State(state), auth, Path(2), Some(Json(body))).await.unwrap();
    assert_eq!(receipt.amount, Amount::from_whole(25));
    assert_eq!(receipt.campaign.campaign.raised, Amount::from_whole(1_225));
}

#[tokio::test]
async fn donate_to_unknown_campaign_is_not_found() {
    let state = test_helpers::test_app_state();
    let auth = signed_in(&state).await;
    let result = donate(State(state), auth, Path(77), None).await;
    assert!(matches!(result, Err(StatusCode::NOT_FOUND)));
}
