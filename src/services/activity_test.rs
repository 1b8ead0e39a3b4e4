use super::*;

#[test]
fn seeded_log_has_three_samples() {
    let log = ActivityLog::seeded();
    assert_eq!(log.all().len(), 3);
    assert_eq!(log.all()[0].counterparty, "shreya.algo");
    assert!(log.all().iter().all(|r| r.tx_id.is_none()));
}

#[test]
fn append_assigns_next_id_and_today() {
    let mut log = ActivityLog::seeded();
    let id = log.append(NewRecord {
        kind: TransactionKind::Donation,
        amount: Amount::from_whole(10),
        counterparty: "IEEE Student Chapter",
        category: "Fundraising",
        tx_id: "TX_AAAAAAAAA",
    });
    assert_eq!(id, 4);
    let last = log.all().last().unwrap();
    assert_eq!(last.status, TransactionStatus::Completed);
    assert_eq!(last.tx_id.as_deref(), Some("TX_AAAAAAAAA"));
    assert_eq!(last.date.len(), "2026-01-01".len());
}

#[test]
fn of_kind_is_newest_first() {
    let mut log = ActivityLog::seeded();
    log.append(NewRecord {
        kind: TransactionKind::Payment,
        amount: Amount::from_whole(1),
        counterparty: "BOB...9Z1Q",
        category: "Payments",
        tx_id: "TX_1",
    });
    let payments = log.of_kind(TransactionKind::Payment);
    assert_eq!(payments.len(), 2);
    assert_eq!(payments[0].counterparty, "BOB...9Z1Q");
}

#[test]
fn pending_splits_sums_pending_records() {
    let log = ActivityLog::seeded();
    assert_eq!(log.pending_splits(), (1, Amount::from_whole(20)));
}

#[test]
fn recent_is_capped() {
    let mut log = ActivityLog::seeded();
    for i in 0..10 {
        log.append(NewRecord {
            kind: TransactionKind::Ticket,
            amount: Amount::from_whole(i),
            counterparty: "event",
            category: "Events",
            tx_id: "TX",
        });
    }
    let recent = log.recent();
    assert_eq!(recent.len(), 5);
    assert_eq!(recent[0].amount, Amount::from_whole(9));
}

#[test]
fn kind_from_str_round_trips_known_values() {
    assert_eq!(TransactionKind::from_str("donation"), Some(TransactionKind::Donation));
    assert_eq!(TransactionKind::from_str("refund"), None);
}
