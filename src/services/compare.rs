//! Cross-stream comparison of a sender report against a receiver report.

use crate::domain::models::{ComparisonReport, IntegrityReport};
use std::collections::BTreeSet;

/// Compare the unique sets of two integrity reports. Order matters: the
/// sender is the source of truth for what was transmitted.
pub fn compare(sender: &IntegrityReport, receiver: &IntegrityReport) -> ComparisonReport {
    compare_sets(&sender.unique_set, &receiver.unique_set)
}

pub fn compare_sets(sent: &BTreeSet<i64>, received: &BTreeSet<i64>) -> ComparisonReport {
    let common: BTreeSet<i64> = sent.intersection(received).copied().collect();
    let lost_in_transit: BTreeSet<i64> = sent.difference(received).copied().collect();
    let received_never_sent: BTreeSet<i64> = received.difference(sent).copied().collect();

    let sent_unique = sent.len();
    let reception_efficiency = if sent_unique > 0 {
        100.0 * common.len() as f64 / sent_unique as f64
    } else {
        0.0
    };
    let lost_in_transit_rate = if sent_unique > 0 {
        100.0 * lost_in_transit.len() as f64 / sent_unique as f64
    } else {
        0.0
    };

    ComparisonReport {
        sent_unique,
        received_unique: received.len(),
        common,
        lost_in_transit,
        lost_in_transit_rate,
        received_never_sent,
        reception_efficiency,
    }
}
