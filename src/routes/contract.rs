//! Contract and network info routes.

use axum::extract::State;
use axum::response::Json;
use serde::Serialize;

use super::auth::SignedIn;
use crate::amount::Amount;
use crate::ledger::{self, NetworkInfo};
use crate::services::contract;
use crate::state::AppState;

#[derive(Serialize)]
pub struct GreetResponse {
    pub message: &'static str,
}

/// `GET /api/contract/greet`
pub async fn greet(_auth: SignedIn) -> Json<GreetResponse> {
    Json(GreetResponse { message: contract::greet() })
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub total_transactions: u64,
    pub total_volume: Amount,
}

/// `GET /api/contract/stats`: transaction count and volume.
pub async fn stats(State(state): State<AppState>, _auth: SignedIn) -> Json<StatsResponse> {
    let (total_transactions, total_volume) = state.campus.read().await.contract.stats();
    Json(StatsResponse { total_transactions, total_volume })
}

/// `GET /api/network`: app id, token parameters and the ledger handle.
pub async fn network(State(state): State<AppState>, _auth: SignedIn) -> Json<NetworkInfo> {
    Json(ledger::network_info(&state.config, &state.ledger))
}

#[cfg(test)]
#[path = "contract_test.rs"]
mod tests;
