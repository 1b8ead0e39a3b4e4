//! Session service: login, wallet connection, theme and tab selection.
//!
//! ARCHITECTURE
//! ============
//! The demo has exactly one session, held in `CampusState`. Logging in only
//! flips the authenticated flag after a simulated auth delay; no credential
//! is checked and nothing is issued. Every login posts a notification.
//!
//! Logout resets the session to its initial shape (dashboard tab, dark
//! theme, wallet disconnected). Domain data is left as is.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::settlement::format_address;
use crate::state::AppState;

pub const DEMO_WALLET_ADDRESS: &str = "ALGO_CAMPUS_7X9Z";
pub const DEFAULT_STUDENT_ID: &str = "STU_2026_99";
pub const STUDENT_ROLE: &str = "Student Representative";
pub const WALLET_USER_NAME: &str = "Wallet User";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Dashboard,
    Payments,
    Splits,
    Fundraising,
    Tickets,
}

impl Tab {
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "dashboard" => Some(Self::Dashboard),
            "payments" => Some(Self::Payments),
            "splits" => Some(Self::Splits),
            "fundraising" => Some(Self::Fundraising),
            "tickets" => Some(Self::Tickets),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionState {
    pub authenticated: bool,
    pub user: Option<SessionUser>,
    pub theme: Theme,
    pub tab: Tab,
    pub wallet_address: Option<String>,
    /// Transaction id of the most recent payment, shown under the form.
    pub last_tx_id: Option<String>,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn wallet_connected(&self) -> bool {
        self.wallet_address.is_some()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginMethod {
    #[default]
    Student,
    Wallet,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub method: LoginMethod,
    pub student_id: Option<String>,
    /// Never checked; only its presence is logged.
    pub password: Option<String>,
}

/// Session view returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub authenticated: bool,
    pub user: Option<SessionUser>,
    pub theme: Theme,
    pub tab: Tab,
    pub wallet_connected: bool,
    pub wallet_address: Option<String>,
    pub wallet_label: Option<String>,
}

impl From<&SessionState> for SessionView {
    fn from(session: &SessionState) -> Self {
        Self {
            authenticated: session.authenticated,
            user: session.user.clone(),
            theme: session.theme,
            tab: session.tab,
            wallet_connected: session.wallet_connected(),
            wallet_address: session.wallet_address.clone(),
            wallet_label: session.wallet_address.as_deref().map(format_address),
        }
    }
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Log in with either method. Wallet logins also connect the demo wallet.
pub async fn login(state: &AppState, request: LoginRequest) -> SessionView {
    match request.method {
        LoginMethod::Student => {
            if !state.config.auth_delay.is_zero() {
                tokio::time::sleep(state.config.auth_delay).await;
            }
            let id = request
                .student_id
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(DEFAULT_STUDENT_ID)
                .to_owned();
            let user = SessionUser { id: id.clone(), name: state.config.demo_user_name.clone(), role: STUDENT_ROLE.into() };
            {
                let mut campus = state.campus.write().await;
                campus.session.authenticated = true;
                campus.session.user = Some(user);
            }
            info!(student_id = %id, has_password = request.password.is_some(), "session: student login");
            state
                .notifier
                .notify(format!("🎓 **Student Logged In**: `{id}` signed in to CampusPay."));
            snapshot(state).await
        }
        LoginMethod::Wallet => {
            {
                let mut campus = state.campus.write().await;
                campus.session.authenticated = true;
                campus.session.user = Some(SessionUser {
                    id: DEMO_WALLET_ADDRESS.into(),
                    name: WALLET_USER_NAME.into(),
                    role: STUDENT_ROLE.into(),
                });
            }
            connect_wallet(state).await
        }
    }
}

/// Connect the demo wallet and return to the dashboard.
pub async fn connect_wallet(state: &AppState) -> SessionView {
    let view = {
        let mut campus = state.campus.write().await;
        campus.session.wallet_address = Some(DEMO_WALLET_ADDRESS.into());
        campus.session.tab = Tab::Dashboard;
        SessionView::from(&campus.session)
    };
    info!(wallet = DEMO_WALLET_ADDRESS, "session: wallet connected");
    state.notifier.notify(format!(
        "👤 **User Logged In**: Wallet `{}` connected to CampusPay.",
        format_address(DEMO_WALLET_ADDRESS)
    ));
    view
}

pub async fn logout(state: &AppState) -> SessionView {
    let mut campus = state.campus.write().await;
    campus.session = SessionState::new();
    info!("session: logout");
    SessionView::from(&campus.session)
}

pub async fn toggle_theme(state: &AppState) -> Theme {
    let mut campus = state.campus.write().await;
    campus.session.theme = campus.session.theme.toggled();
    campus.session.theme
}

pub async fn select_tab(state: &AppState, tab: Tab) -> SessionView {
    let mut campus = state.campus.write().await;
    campus.session.tab = tab;
    SessionView::from(&campus.session)
}

pub async fn snapshot(state: &AppState) -> SessionView {
    SessionView::from(&state.campus.read().await.session)
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
