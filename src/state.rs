//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Everything a single demo session holds (session flags,
//! split draft, campaigns, tickets, chat transcript, activity) lives in one
//! `CampusState` behind a `RwLock`. Nothing is persisted; a restart reseeds.
//!
//! Flows never hold the lock across a settlement call: they read what they
//! need, release, await the call, then re-acquire to apply results.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::amount::Amount;
use crate::config::AppConfig;
use crate::ledger::LedgerHandle;
use crate::processing::Processing;
use crate::services::activity::ActivityLog;
use crate::services::assistant::{self, ChatMessage};
use crate::services::campaign::{self, Campaign};
use crate::services::contract::ContractStats;
use crate::services::notify::Notifier;
use crate::services::session::SessionState;
use crate::services::settlement::{MockSettlement, SettlementClient};
use crate::services::split::SplitDraft;
use crate::services::ticket::{self, Ticket};

/// Opening wallet balance shown on the dashboard.
pub const SEED_BALANCE: Amount = Amount::from_cents(124_050);

// =============================================================================
// CAMPUS STATE
// =============================================================================

/// All volatile demo data.
pub struct CampusState {
    pub session: SessionState,
    pub balance: Amount,
    pub activity: ActivityLog,
    pub split_draft: SplitDraft,
    pub campaigns: Vec<Campaign>,
    pub next_campaign_id: u64,
    pub tickets: Vec<Ticket>,
    pub transcript: Vec<ChatMessage>,
    pub next_message_id: u64,
    pub contract: ContractStats,
}

impl CampusState {
    #[must_use]
    pub fn seeded() -> Self {
        let campaigns = campaign::seed_campaigns();
        let next_campaign_id = campaigns.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let transcript = assistant::seed_transcript();
        let next_message_id = transcript.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        Self {
            session: SessionState::new(),
            balance: SEED_BALANCE,
            activity: ActivityLog::seeded(),
            split_draft: SplitDraft::default(),
            campaigns,
            next_campaign_id,
            tickets: ticket::seed_tickets(),
            transcript,
            next_message_id,
            contract: ContractStats::default(),
        }
    }
}

impl Default for CampusState {
    fn default() -> Self {
        Self::seeded()
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub campus: Arc<RwLock<CampusState>>,
    pub settlement: Arc<dyn SettlementClient>,
    pub notifier: Notifier,
    pub ledger: Arc<LedgerHandle>,
    pub processing: Processing,
}

impl AppState {
    /// Build state with the mock settlement client.
    #[must_use]
    pub fn new(config: AppConfig, notifier: Notifier) -> Self {
        let settlement: Arc<dyn SettlementClient> =
            Arc::new(MockSettlement::new(config.settlement_delay, notifier.clone(), &config.explorer_tx_url));
        Self::with_settlement(config, notifier, settlement)
    }

    #[must_use]
    pub fn with_settlement(config: AppConfig, notifier: Notifier, settlement: Arc<dyn SettlementClient>) -> Self {
        let ledger = Arc::new(LedgerHandle::new(&config.algod));
        Self {
            config: Arc::new(config),
            campus: Arc::new(RwLock::new(CampusState::seeded())),
            settlement,
            notifier,
            ledger,
            processing: Processing::new(),
        }
    }

    /// Address used as the sender of settlement calls; empty when no wallet
    /// is connected.
    pub async fn sender(&self) -> String {
        self.campus
            .read()
            .await
            .session
            .wallet_address
            .clone()
            .unwrap_or_default()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;
    use crate::services::session::{SessionUser, Tab, Theme};
    use crate::services::settlement::{CONFIRMED, SettlementError, SettlementReceipt, SettlementRequest};

    /// Config with every simulated delay set to zero.
    #[must_use]
    pub fn test_config() -> AppConfig {
        AppConfig {
            settlement_delay: Duration::ZERO,
            auth_delay: Duration::ZERO,
            assistant_delay: Duration::ZERO,
            ..AppConfig::default()
        }
    }

    /// Create a test `AppState` with zero delays and notifications disabled.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(test_config(), Notifier::disabled("test"))
    }

    /// Create a test `AppState` backed by a custom settlement client.
    #[must_use]
    pub fn test_app_state_with_settlement(settlement: Arc<dyn SettlementClient>) -> AppState {
        AppState::with_settlement(test_config(), Notifier::disabled("test"), settlement)
    }

    /// Mark the session authenticated with the demo wallet connected.
    pub async fn sign_in(state: &AppState) -> SessionUser {
        let user = SessionUser { id: "STU_TEST".into(), name: "Test Student".into(), role: "Student".into() };
        let mut campus = state.campus.write().await;
        campus.session.authenticated = true;
        campus.session.user = Some(user.clone());
        campus.session.wallet_address = Some("ALGO_CAMPUS_7X9Z".into());
        campus.session.theme = Theme::Dark;
        campus.session.tab = Tab::Dashboard;
        user
    }

    /// Settlement client that records requests and either confirms or fails.
    pub struct RecordingSettlement {
        pub calls: Mutex<Vec<SettlementRequest>>,
        fail: bool,
    }

    impl RecordingSettlement {
        #[must_use]
        pub fn confirming() -> Arc<Self> {
            Arc::new(Self { calls: Mutex::new(Vec::new()), fail: false })
        }

        #[must_use]
        pub fn failing() -> Arc<Self> {
            Arc::new(Self { calls: Mutex::new(Vec::new()), fail: true })
        }

        pub fn recorded(&self) -> Vec<SettlementRequest> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl SettlementClient for RecordingSettlement {
        async fn call(&self, request: SettlementRequest) -> Result<SettlementReceipt, SettlementError> {
            let n = {
                let mut calls = self.calls.lock().unwrap();
                calls.push(request);
                calls.len()
            };
            if self.fail {
                return Err(SettlementError::Unavailable("node offline".into()));
            }
            Ok(SettlementReceipt { tx_id: format!("TX_TEST{n:05}"), status: CONFIRMED.into(), confirmed_round: n as u64 })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_state_matches_demo_data() {
        let campus = CampusState::seeded();
        assert_eq!(campus.balance.to_string(), "1240.50");
        assert_eq!(campus.campaigns.len(), 3);
        assert_eq!(campus.next_campaign_id, 4);
        assert_eq!(campus.tickets.len(), 3);
        assert_eq!(campus.transcript.len(), 1);
        assert_eq!(campus.next_message_id, 2);
        assert!(!campus.session.authenticated);
        assert!(campus.split_draft.friends.is_empty());
    }

    #[tokio::test]
    async fn sender_is_empty_without_wallet() {
        let state = test_helpers::test_app_state();
        assert_eq!(state.sender().await, "");
        test_helpers::sign_in(&state).await;
        assert_eq!(state.sender().await, "ALGO_CAMPUS_7X9Z");
    }
}
