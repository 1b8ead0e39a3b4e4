//! Dashboard routes: summary, charts, categories and the transaction list.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use super::auth::SignedIn;
use crate::services::activity::{TransactionKind, TransactionRecord};
use crate::services::dashboard::{self, Category, ChartData, DashboardSummary};
use crate::state::AppState;

/// `GET /api/dashboard`: balance, pending splits, campaigns and recent activity.
pub async fn summary(State(state): State<AppState>, _auth: SignedIn) -> Json<DashboardSummary> {
    Json(dashboard::summary(&state).await)
}

/// `GET /api/dashboard/charts`
pub async fn charts(_auth: SignedIn) -> Json<ChartData> {
    Json(dashboard::charts())
}

/// `GET /api/categories`
pub async fn categories(_auth: SignedIn) -> Json<Vec<Category>> {
    Json(dashboard::categories())
}

#[derive(Deserialize)]
pub struct TransactionsQuery {
    pub kind: Option<String>,
}

/// `GET /api/transactions?kind=`: records newest first.
pub async fn transactions(
    State(state): State<AppState>,
    _auth: SignedIn,
    Query(query): Query<TransactionsQuery>,
) -> Result<Json<Vec<TransactionRecord>>, StatusCode> {
    let kind = match query.kind.as_deref() {
        None => None,
        Some(raw) => Some(TransactionKind::from_str(raw).ok_or(StatusCode::BAD_REQUEST)?),
    };
    Ok(Json(dashboard::transactions(&state, kind).await))
}
