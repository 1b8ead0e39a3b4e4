//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the demo's business rules and state mutation so route
//! handlers can stay focused on request decoding, auth and status mapping.
//! Flows that settle on the ledger go through the `settlement` seam.

pub mod activity;
pub mod assistant;
pub mod campaign;
pub mod contract;
pub mod dashboard;
pub mod notify;
pub mod payment;
pub mod session;
pub mod settlement;
pub mod split;
pub mod ticket;
