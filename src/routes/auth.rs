//! Auth routes: demo login, logout, wallet connection and UI session state.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::services::session::{self, LoginRequest, SessionView, Tab, Theme};
use crate::state::AppState;

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// The signed-in demo session.
/// Use as a handler parameter to require authentication.
pub struct SignedIn {
    pub session: SessionView,
}

impl<S> axum::extract::FromRequestParts<S> for SignedIn
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(_parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let session = session::snapshot(&app_state).await;
        if !session.authenticated {
            return Err(StatusCode::UNAUTHORIZED);
        }
        Ok(Self { session })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/login`: sign in with a student id or the demo wallet.
/// A request without a body is a default student login.
pub async fn login(State(state): State<AppState>, body: Option<Json<LoginRequest>>) -> Json<SessionView> {
    let Json(body) = body.unwrap_or_default();
    Json(session::login(&state, body).await)
}

/// `POST /api/auth/logout`: reset the session.
pub async fn logout(State(state): State<AppState>, _auth: SignedIn) -> Json<SessionView> {
    Json(session::logout(&state).await)
}

/// `GET /api/auth/me`: return the current session.
pub async fn me(auth: SignedIn) -> Json<SessionView> {
    Json(auth.session)
}

/// `POST /api/wallet/connect`: connect the demo wallet.
pub async fn connect_wallet(State(state): State<AppState>, _auth: SignedIn) -> Json<SessionView> {
    Json(session::connect_wallet(&state).await)
}

#[derive(Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

/// `POST /api/ui/theme`: flip between dark and light.
pub async fn toggle_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    Json(ThemeResponse { theme: session::toggle_theme(&state).await })
}

#[derive(Deserialize)]
pub struct SelectTabBody {
    pub tab: String,
}

/// `PUT /api/ui/tab`: select the active tab.
pub async fn select_tab(
    State(state): State<AppState>,
    _auth: SignedIn,
    Json(body): Json<SelectTabBody>,
) -> Result<Json<SessionView>, StatusCode> {
    let Some(tab) = Tab::from_str(&body.tab) else {
        return Err(StatusCode::BAD_REQUEST);
    };
    Ok(Json(session::select_tab(&state, tab).await))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
