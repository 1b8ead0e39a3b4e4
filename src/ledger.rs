//! Ledger node handle and network metadata.
//!
//! The handle records where an algod node would live. Nothing signs,
//! submits, or queries through it; settlement goes through
//! [`crate::services::settlement`].

use serde::Serialize;

use crate::amount::DECIMALS;
use crate::config::{AlgodConfig, AppConfig};

pub const TOKEN_NAME: &str = "CAMPUS";
pub const UNIT_NAME: &str = "CMP";
/// Flat network fee, in micro-ALGO.
pub const FEE_MICROALGOS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct LedgerHandle {
    server: String,
    port: u16,
    token: String,
}

impl LedgerHandle {
    #[must_use]
    pub fn new(config: &AlgodConfig) -> Self {
        Self {
            server: config.server.trim_end_matches('/').to_owned(),
            port: config.port,
            token: config.token.clone(),
        }
    }

    /// Base URL of the algod REST API.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.server, self.port)
    }

    /// True when an API token is configured. The token itself is never exposed.
    #[must_use]
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }

    /// The handle is never connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        false
    }
}

/// Network description returned by `GET /api/network`.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkInfo {
    pub app_id: u64,
    pub token_name: &'static str,
    pub unit_name: &'static str,
    pub decimals: u32,
    pub fee_microalgos: u64,
    pub algod_endpoint: String,
    pub algod_token_configured: bool,
    pub connected: bool,
}

#[must_use]
pub fn network_info(config: &AppConfig, ledger: &LedgerHandle) -> NetworkInfo {
    NetworkInfo {
        app_id: config.app_id,
        token_name: TOKEN_NAME,
        unit_name: UNIT_NAME,
        decimals: DECIMALS,
        fee_microalgos: FEE_MICROALGOS,
        algod_endpoint: ledger.endpoint(),
        algod_token_configured: ledger.has_token(),
        connected: ledger.is_connected(),
    }
}
