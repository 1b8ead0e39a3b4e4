//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! All endpoints are JSON under `/api`, plus `/healthz`. Domain routes take
//! the `SignedIn` extractor and answer 401 until a demo login has happened.
//! Service errors are mapped to status codes per module.

pub mod assistant;
pub mod auth;
pub mod campaigns;
pub mod contract;
pub mod dashboard;
pub mod payments;
pub mod splits;
pub mod tickets;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full API router with CORS, compression and request tracing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/wallet/connect", post(auth::connect_wallet))
        .route("/api/ui/theme", post(auth::toggle_theme))
        .route("/api/ui/tab", put(auth::select_tab))
        .route("/api/dashboard", get(dashboard::summary))
        .route("/api/dashboard/charts", get(dashboard::charts))
        .route("/api/categories", get(dashboard::categories))
        .route("/api/transactions", get(dashboard::transactions))
        .route("/api/payments", get(payments::overview).post(payments::submit))
        .route("/api/splits/draft", get(splits::get_draft).put(splits::update_draft))
        .route("/api/splits/draft/friends", post(splits::add_friend))
        .route("/api/splits/draft/friends/{address}", delete(splits::remove_friend))
        .route("/api/splits/deploy", post(splits::deploy))
        .route("/api/campaigns", get(campaigns::list).post(campaigns::create))
        .route("/api/campaigns/{id}/donate", post(campaigns::donate))
        .route("/api/tickets", get(tickets::list))
        .route("/api/tickets/{id}/buy", post(tickets::buy))
        .route("/api/assistant/messages", get(assistant::transcript).post(assistant::send))
        .route("/api/contract/greet", get(contract::greet))
        .route("/api/contract/stats", get(contract::stats))
        .route("/api/network", get(contract::network))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "router_test.rs"]
mod tests;
