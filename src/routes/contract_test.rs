use super::*;
use crate::services::{campaign, session};
use crate::state::test_helpers;

async fn signed_in(state: &AppState) -> SignedIn {
    test_helpers::sign_in(state).await;
    SignedIn { session: session::snapshot(state).await }
}

#[tokio::test]
async fn stats_start_at_zero() {
    let state = test_helpers::test_app_state();
    let auth = signed_in(&state).await;
    let Json(stats) = stats(State(state), auth).await;
    assert_eq!(stats.total_transactions, 0);
    assert_eq!(stats.total_volume, Amount::ZERO);
}

#[tokio::test]
async fn stats_count_settled_donations() {
    let state = test_helpers::test_app_state();
    campaign::donate(&state, 1, None).await.unwrap();
    campaign::donate(&state, 2, Some(Amount::from_cents(250))).await.unwrap();

    let auth = signed_in(&state).await;
    let Json(stats) = stats(State(state), auth).await;
    assert_eq!(stats.total_transactions, 2);
    assert_eq!(stats.total_volume, Amount::from_cents(1_250));
}

#[tokio::test]
async fn greet_returns_welcome() {
    let state = test_helpers::test_app_state();
    let Json(greeting) = greet(signed_in(&state).await).await;
    assert_eq!(greeting.message, contract::GREETING);
}
