use super::*;
use crate::processing::{Busy, Flow};
use crate::services::session;
use crate::state::test_helpers;

async fn signed_in(state: &AppState) -> SignedIn {
    test_helpers::sign_in(state).await;
    SignedIn { session: session::snapshot(state).await }
}

#[test]
fn split_error_to_status_maps_every_variant() {
    assert_eq!(split_error_to_status(SplitError::MissingTitle), StatusCode::BAD_REQUEST);
    assert_eq!(split_error_to_status(SplitError::NoFriends), StatusCode::BAD_REQUEST);
    assert_eq!(split_error_to_status(SplitError::Busy(Busy(Flow::Split))), StatusCode::CONFLICT);
}

#[tokio::test]
async fn friend_added_twice_through_route_is_kept_once() {
    let state = test_helpers::test_app_state();
    for _ in 0..2 {
        let auth = signed_in(&state).await;
        let Json(draft) = add_friend(State(state.clone()), auth, Json(FriendBody { address: "BOB...9Z1Q".into() })).await;
        assert_eq!(draft.friends, ["BOB...9Z1Q"]);
    }
    let auth = signed_in(&state).await;
    let Json(draft) = get_draft(State(state), auth).await;
    assert_eq!(draft.friends, ["BOB...9Z1Q"]);
}

#[tokio::test]
async fn remove_friend_by_path() {
    let state = test_helpers::test_app_state();
    let auth = signed_in(&state).await;
    let Json(added) = add_friend(State(state.clone()), auth, Json(FriendBody { address: "BOB...9Z1Q".into() })).await;
    assert_eq!(added.friends.len(), 1);
    let auth = signed_in(&state).await;
    let Json(draft) = remove_friend(State(state), auth, Path("BOB...9Z1Q".into())).await;
    assert!(draft.friends.is_empty());
}

#[tokio::test]
async fn deploying_empty_draft_is_bad_request() {
    let state = test_helpers::test_app_state();
    let auth = signed_in(&state).await;
    assert!(matches!(deploy(State(state), auth).await, Err(StatusCode::BAD_REQUEST)));
}
