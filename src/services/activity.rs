//! Activity log: transaction records shown on the dashboard.
//!
//! Seeded with three sample records. Payment, donation and ticket flows
//! append optimistically once their settlement call returns. Records are
//! never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::amount::Amount;

const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Payment,
    Split,
    Ticket,
    Donation,
}

impl TransactionKind {
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "payment" => Some(Self::Payment),
            "split" => Some(Self::Split),
            "ticket" => Some(Self::Ticket),
            "donation" => Some(Self::Donation),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Completed,
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: u64,
    pub kind: TransactionKind,
    pub amount: Amount,
    pub counterparty: String,
    pub date: String,
    pub category: String,
    pub status: TransactionStatus,
    /// Settlement transaction id, when the record came from a settled flow.
    pub tx_id: Option<String>,
}

/// Fields a flow supplies when appending a record.
pub struct NewRecord<'a> {
    pub kind: TransactionKind,
    pub amount: Amount,
    pub counterparty: &'a str,
    pub category: &'a str,
    pub tx_id: &'a str,
}

pub struct ActivityLog {
    records: Vec<TransactionRecord>,
    next_id: u64,
}

impl ActivityLog {
    #[must_use]
    pub fn seeded() -> Self {
        let records = seed_records();
        let next_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self { records, next_id }
    }

    /// Append a completed record dated today and return its id.
    pub fn append(&mut self, record: NewRecord<'_>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(TransactionRecord {
            id,
            kind: record.kind,
            amount: record.amount,
            counterparty: record.counterparty.to_owned(),
            date: today(),
            category: record.category.to_owned(),
            status: TransactionStatus::Completed,
            tx_id: Some(record.tx_id.to_owned()),
        });
        id
    }

    /// All records, oldest first.
    #[must_use]
    pub fn all(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Records of one kind, newest first.
    #[must_use]
    pub fn of_kind(&self, kind: TransactionKind) -> Vec<TransactionRecord> {
        self.records
            .iter()
            .rev()
            .filter(|r| r.kind == kind)
            .cloned()
            .collect()
    }

    /// The most recent records, newest first.
    #[must_use]
    pub fn recent(&self) -> Vec<TransactionRecord> {
        self.records.iter().rev().take(RECENT_LIMIT).cloned().collect()
    }

    /// Count and total of pending split records.
    #[must_use]
    pub fn pending_splits(&self) -> (usize, Amount) {
        self.records
            .iter()
            .filter(|r| r.kind == TransactionKind::Split && r.status == TransactionStatus::Pending)
            .fold((0, Amount::ZERO), |(n, total), r| (n + 1, total.saturating_add(r.amount)))
    }
}

fn today() -> String {
    time::OffsetDateTime::now_utc().date().to_string()
}

fn seed_records() -> Vec<TransactionRecord> {
    let record = |id, kind, cents, counterparty: &str, date: &str, category: &str, status| TransactionRecord {
        id,
        kind,
        amount: Amount::from_cents(cents),
        counterparty: counterparty.to_owned(),
        date: date.to_owned(),
        category: category.to_owned(),
        status,
        tx_id: None,
    };
    vec![
        record(1, TransactionKind::Payment, 5000, "shreya.algo", "2024-02-09", "Food", TransactionStatus::Completed),
        record(2, TransactionKind::Split, 2000, "Roommates", "2024-02-08", "Rent", TransactionStatus::Pending),
        record(3, TransactionKind::Ticket, 1000, "Tech Fest 2026", "2024-02-07", "Ent.", TransactionStatus::Completed),
    ]
}

#[cfg(test)]
#[path = "activity_test.rs"]
mod tests;
