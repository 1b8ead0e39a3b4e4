//! Ticket routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use super::auth::SignedIn;
use crate::services::ticket::{self, TicketError, TicketFilter, TicketPurchase, TicketView};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct TicketsQuery {
    pub view: Option<String>,
}

/// `GET /api/tickets?view=upcoming|mine`: defaults to upcoming.
pub async fn list(
    State(state): State<AppState>,
    _auth: SignedIn,
    Query(query): Query<TicketsQuery>,
) -> Result<Json<Vec<TicketView>>, StatusCode> {
    let filter = match query.view.as_deref() {
        None => TicketFilter::default(),
        Some(raw) => TicketFilter::from_str(raw).ok_or(StatusCode::BAD_REQUEST)?,
    };
    Ok(Json(ticket::list(&state, filter).await))
}

/// `POST /api/tickets/{id}/buy`
pub async fn buy(
    State(state): State<AppState>,
    _auth: SignedIn,
    Path(id): Path<u64>,
) -> Result<Json<TicketPurchase>, StatusCode> {
    ticket::buy(&state, id).await.map(Json).map_err(ticket_error_to_status)
}

pub(crate) fn ticket_error_to_status(err: TicketError) -> StatusCode {
    match err {
        TicketError::NotFound(_) => StatusCode::NOT_FOUND,
        TicketError::AlreadySold(_) | TicketError::Busy(_) => StatusCode::CONFLICT,
        TicketError::Settlement(e) => {
            tracing::error!(error = %e, "ticket settlement failed");
            StatusCode::BAD_GATEWAY
        }
    }
}

#[cfg(test)]
#[path = "tickets_test.rs"]
mod tests;
