//! Dashboard service: summary figures, chart series and the category catalogue.
//!
//! The summary is derived from live state on every request. Chart series and
//! the category catalogue are static display data.

use serde::Serialize;

use super::activity::{TransactionKind, TransactionRecord};
use super::campaign::CampaignStatus;
use crate::amount::Amount;
use crate::processing::Flow;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub balance: Amount,
    pub pending_splits: usize,
    pub pending_split_total: Amount,
    pub active_campaigns: usize,
    /// Funding percentage of the first active campaign, if any.
    pub lead_campaign_progress: Option<u8>,
    pub recent: Vec<TransactionRecord>,
    pub processing: Vec<Flow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VolumePoint {
    pub name: &'static str,
    pub volume: u32,
    pub transactions: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    pub name: &'static str,
    pub value: u8,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub weekly: Vec<VolumePoint>,
    pub categories: Vec<CategoryShare>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

const WEEKLY_VOLUME: [VolumePoint; 7] = [
    VolumePoint { name: "Mon", volume: 400, transactions: 24 },
    VolumePoint { name: "Tue", volume: 300, transactions: 13 },
    VolumePoint { name: "Wed", volume: 200, transactions: 98 },
    VolumePoint { name: "Thu", volume: 278, transactions: 39 },
    VolumePoint { name: "Fri", volume: 189, transactions: 48 },
    VolumePoint { name: "Sat", volume: 239, transactions: 38 },
    VolumePoint { name: "Sun", volume: 349, transactions: 43 },
];

const CATEGORY_SHARES: [CategoryShare; 4] = [
    CategoryShare { name: "Food", value: 45, color: "#00ffd5" },
    CategoryShare { name: "Entertainment", value: 25, color: "#9d00ff" },
    CategoryShare { name: "Transport", value: 15, color: "#00ff88" },
    CategoryShare { name: "Education", value: 15, color: "#ff0088" },
];

const CATEGORIES: [Category; 4] = [
    Category { id: "food", label: "Food & Dining", color: "#00ffd5" },
    Category { id: "bills", label: "Accommodation & Bills", color: "#9d00ff" },
    Category { id: "travel", label: "Transport", color: "#00ff88" },
    Category { id: "events", label: "Events & Fun", color: "#ff0088" },
];

pub async fn summary(state: &AppState) -> DashboardSummary {
    let campus = state.campus.read().await;
    let (pending_splits, pending_split_total) = campus.activity.pending_splits();
    let mut active = campus
        .campaigns
        .iter()
        .filter(|c| c.status == CampaignStatus::Active)
        .peekable();
    let lead_campaign_progress = active.peek().map(|c| c.progress());
    DashboardSummary {
        balance: campus.balance,
        pending_splits,
        pending_split_total,
        active_campaigns: active.count(),
        lead_campaign_progress,
        recent: campus.activity.recent(),
        processing: state.processing.snapshot(),
    }
}

#[must_use]
pub fn charts() -> ChartData {
    ChartData { weekly: WEEKLY_VOLUME.to_vec(), categories: CATEGORY_SHARES.to_vec() }
}

#[must_use]
pub fn categories() -> Vec<Category> {
    CATEGORIES.to_vec()
}

/// Transaction records, newest first, optionally limited to one kind.
pub async fn transactions(state: &AppState, kind: Option<TransactionKind>) -> Vec<TransactionRecord> {
    let campus = state.campus.read().await;
    match kind {
        Some(kind) => campus.activity.of_kind(kind),
        None => campus.activity.all().iter().rev().cloned().collect(),
    }
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
