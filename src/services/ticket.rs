//! Ticket service: event tickets bought through per-event ticket apps.

use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

use super::activity::{NewRecord, TransactionKind};
use super::settlement::{SettlementError, SettlementRequest};
use crate::amount::Amount;
use crate::processing::{Busy, Flow};
use crate::state::AppState;

pub const BUY_METHOD: &str = "buy_ticket";
const TICKET_CATEGORY: &str = "Events";

#[derive(Debug, thiserror::Error)]
pub enum TicketError {
    #[error("ticket not found: {0}")]
    NotFound(u64),
    #[error("ticket {0} is already sold")]
    AlreadySold(u64),
    #[error(transparent)]
    Busy(#[from] Busy),
    #[error("settlement failed: {0}")]
    Settlement(#[from] SettlementError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    pub id: u64,
    pub title: String,
    /// Display label such as "Feb 20"; not a parsed date.
    pub date: String,
    pub price: Amount,
    pub sold: bool,
}

impl Ticket {
    #[must_use]
    pub fn price_label(&self) -> String {
        price_label(self.price)
    }
}

/// "Free" for zero, otherwise the price in ALGO without trailing zero cents.
#[must_use]
pub fn price_label(price: Amount) -> String {
    if price.is_zero() {
        "Free".to_owned()
    } else if price.is_whole() {
        format!("{} ALGO", price.whole())
    } else {
        format!("{price} ALGO")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TicketFilter {
    #[default]
    Upcoming,
    Mine,
}

impl TicketFilter {
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "upcoming" => Some(Self::Upcoming),
            "mine" => Some(Self::Mine),
            _ => None,
        }
    }

    fn matches(self, ticket: &Ticket) -> bool {
        match self {
            Self::Upcoming => !ticket.sold,
            Self::Mine => ticket.sold,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TicketView {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub price_label: String,
}

impl From<&Ticket> for TicketView {
    fn from(ticket: &Ticket) -> Self {
        Self { price_label: ticket.price_label(), ticket: ticket.clone() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TicketPurchase {
    pub tx_id: String,
    pub status: String,
    pub confirmed_round: u64,
    pub ticket: TicketView,
}

#[must_use]
pub fn seed_tickets() -> Vec<Ticket> {
    let ticket = |id, title: &str, date: &str, price| Ticket {
        id,
        title: title.to_owned(),
        date: date.to_owned(),
        price: Amount::from_whole(price),
        sold: false,
    };
    vec![
        ticket(1, "Zumba Campus Night", "Feb 20", 0),
        ticket(2, "Hackathon Finals", "Feb 24", 2),
        ticket(3, "Farewell Party 2026", "Mar 05", 25),
    ]
}

// =============================================================================
// OPERATIONS
// =============================================================================

pub async fn list(state: &AppState, filter: TicketFilter) -> Vec<TicketView> {
    state
        .campus
        .read()
        .await
        .tickets
        .iter()
        .filter(|t| filter.matches(t))
        .map(TicketView::from)
        .collect()
}

/// Buy ticket `id`. The sold flag only flips after settlement confirms.
pub async fn buy(state: &AppState, id: u64) -> Result<TicketPurchase, TicketError> {
    let _guard = state.processing.begin(Flow::Ticket)?;
    let price = {
        let campus = state.campus.read().await;
        let ticket = campus.tickets.iter().find(|t| t.id == id).ok_or(TicketError::NotFound(id))?;
        if ticket.sold {
            return Err(TicketError::AlreadySold(id));
        }
        ticket.price
    };

    let sender = state.sender().await;
    let call = SettlementRequest::new(&sender, format!("TICKET_APP_{id}"), BUY_METHOD, vec![json!(price)]);
    let receipt = state.settlement.call(call).await.inspect_err(|e| {
        warn!(error = %e, id, "ticket: settlement failed");
    })?;

    let mut campus = state.campus.write().await;
    let ticket = campus
        .tickets
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(TicketError::NotFound(id))?;
    ticket.sold = true;
    let view = TicketView::from(&*ticket);

    campus.contract.register_transaction(price);
    campus.activity.append(NewRecord {
        kind: TransactionKind::Ticket,
        amount: price,
        counterparty: &view.ticket.title,
        category: TICKET_CATEGORY,
        tx_id: &receipt.tx_id,
    });
    info!(tx_id = %receipt.tx_id, id, %price, "ticket: purchased");

    Ok(TicketPurchase {
        tx_id: receipt.tx_id,
        status: receipt.status,
        confirmed_round: receipt.confirmed_round,
        ticket: view,
    })
}

#[cfg(test)]
#[path = "ticket_test.rs"]
mod tests;
