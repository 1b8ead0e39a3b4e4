use super::*;
use crate::state::test_helpers::{self, RecordingSettlement};

fn ready_update() -> SplitDraftUpdate {
    SplitDraftUpdate {
        title: Some("Cinema Tickets".into()),
        amount: Some(Amount::from_whole(40)),
        category: Some(SplitCategory::Entertainment),
    }
}

// =============================================================================
// SplitDraft
// =============================================================================

#[test]
fn adding_same_friend_twice_keeps_one() {
    let mut draft = SplitDraft::default();
    assert!(draft.add_friend("BOB...9Z1Q"));
    assert!(!draft.add_friend("BOB...9Z1Q"));
    assert!(!draft.add_friend("  BOB...9Z1Q "));
    assert_eq!(draft.friends, vec!["BOB...9Z1Q".to_owned()]);
}

#[test]
fn blank_friend_is_ignored() {
    let mut draft = SplitDraft::default();
    assert!(!draft.add_friend("   "));
    assert!(draft.friends.is_empty());
}

#[test]
fn friends_keep_insertion_order() {
    let mut draft = SplitDraft::default();
    draft.add_friend("C");
    draft.add_friend("A");
    draft.add_friend("B");
    assert_eq!(draft.friends, ["C", "A", "B"]);
}

#[test]
fn remove_friend_reports_change() {
    let mut draft = SplitDraft::default();
    draft.add_friend("A");
    assert!(draft.remove_friend("A"));
    assert!(!draft.remove_friend("A"));
}

#[test]
fn validate_checks_fields_in_order() {
    let mut draft = SplitDraft::default();
    assert!(matches!(draft.validate(), Err(SplitError::MissingTitle)));
    draft.title = "Groceries".into();
    assert!(matches!(draft.validate(), Err(SplitError::MissingAmount)));
    draft.amount = Some(Amount::from_whole(12));
    assert!(matches!(draft.validate(), Err(SplitError::NoFriends)));
    draft.add_friend("A");
    assert_eq!(draft.validate().unwrap(), Amount::from_whole(12));
}

#[test]
fn default_category_is_entertainment() {
    assert_eq!(SplitDraft::default().category, SplitCategory::Entertainment);
}

// =============================================================================
// state operations
// =============================================================================

#[tokio::test]
async fn add_friend_twice_through_state_does_not_duplicate() {
    let state = test_helpers::test_app_state();
    add_friend(&state, "ALICE...X7Y2").await;
    let draft = add_friend(&state, "ALICE...X7Y2").await;
    assert_eq!(draft.friends.len(), 1);
}

#[tokio::test]
async fn update_draft_only_touches_given_fields() {
    let state = test_helpers::test_app_state();
    update_draft(&state, ready_update()).await;
    let draft = update_draft(&state, SplitDraftUpdate { category: Some(SplitCategory::Food), ..Default::default() }).await;
    assert_eq!(draft.title, "Cinema Tickets");
    assert_eq!(draft.amount, Some(Amount::from_whole(40)));
    assert_eq!(draft.category, SplitCategory::Food);
}

#[tokio::test]
async fn deploy_incomplete_draft_keeps_it() {
    let state = test_helpers::test_app_state();
    update_draft(&state, ready_update()).await;
    let err = deploy(&state).await.unwrap_err();
    assert!(matches!(err, SplitError::NoFriends));
    assert_eq!(draft(&state).await.title, "Cinema Tickets");
}

#[tokio::test]
async fn deploy_calls_factory_and_resets_draft() {
    let settlement = RecordingSettlement::confirming();
    let state = test_helpers::test_app_state_with_settlement(settlement.clone());
    test_helpers::sign_in(&state).await;
    update_draft(&state, ready_update()).await;
    add_friend(&state, "ALICE...X7Y2").await;
    add_friend(&state, "BOB...9Z1Q").await;

    let deployment = deploy(&state).await.unwrap();
    assert!(deployment.tx_id.starts_with("TX_"));
    assert_eq!(deployment.friends.len(), 2);

    let calls = settlement.recorded();
    assert_eq!(calls[0].contract_id, SPLIT_FACTORY_ID);
    assert_eq!(calls[0].method, CREATE_METHOD);
    assert_eq!(calls[0].args[0], "Cinema Tickets");
    assert_eq!(calls[0].args[1], "40.00");
    assert_eq!(calls[0].args[2], serde_json::json!(["ALICE...X7Y2", "BOB...9Z1Q"]));

    assert_eq!(draft(&state).await, SplitDraft::default());
}

#[tokio::test]
async fn failed_deploy_still_discards_draft() {
    let state = test_helpers::test_app_state_with_settlement(RecordingSettlement::failing());
    update_draft(&state, ready_update()).await;
    add_friend(&state, "ALICE...X7Y2").await;

    let err = deploy(&state).await.unwrap_err();
    assert!(matches!(err, SplitError::Settlement(_)));
    assert_eq!(draft(&state).await, SplitDraft::default());
    assert!(!state.processing.is_active(Flow::Split));
}
