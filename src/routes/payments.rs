//! Payment routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

use super::auth::SignedIn;
use crate::services::payment::{self, PaymentConfirmation, PaymentError, PaymentRequest, PaymentsOverview};
use crate::state::AppState;

/// `GET /api/payments`: form state, suggested recipients and payment history.
pub async fn overview(State(state): State<AppState>, _auth: SignedIn) -> Json<PaymentsOverview> {
    Json(payment::overview(&state).await)
}

/// `POST /api/payments`: send a payment through the settlement call.
pub async fn submit(
    State(state): State<AppState>,
    _auth: SignedIn,
    Json(body): Json<PaymentRequest>,
) -> Result<Json<PaymentConfirmation>, StatusCode> {
    payment::submit(&state, body)
        .await
        .map(Json)
        .map_err(payment_error_to_status)
}

pub(crate) fn payment_error_to_status(err: PaymentError) -> StatusCode {
    match err {
        PaymentError::MissingRecipient | PaymentError::MissingAmount | PaymentError::Contract(_) => {
            StatusCode::BAD_REQUEST
        }
        PaymentError::Busy(_) => StatusCode::CONFLICT,
        PaymentError::Settlement(e) => {
            tracing::error!(error = %e, "payment settlement failed");
            StatusCode::BAD_GATEWAY
        }
    }
}

#[cfg(test)]
#[path = "payments_test.rs"]
mod tests;
