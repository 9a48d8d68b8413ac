//! Loss/duplicate/gap statistics over one arrival-ordered sequence stream.

use crate::domain::errors::AnalysisError;
use crate::domain::models::{DuplicateEntry, IntegrityReport, MissingRange};
use std::collections::{BTreeSet, HashMap};

/// Analyze one device's stream.
///
/// `expected` spans the observed numeric range (`max - min + 1`), so a
/// single-sample stream has `expected = 1` and a loss rate of zero. An
/// empty stream produces `EmptyDataset` rather than a report.
pub fn analyze(device: &str, stream: &[i64]) -> Result<IntegrityReport, AnalysisError> {
    if stream.is_empty() {
        return Err(AnalysisError::EmptyDataset {
            context: format!("device {device}"),
        });
    }

    let total = stream.len();
    let mut counts: HashMap<i64, usize> = HashMap::new();
    for &seq in stream {
        *counts.entry(seq).or_insert(0) += 1;
    }

    let unique_set: BTreeSet<i64> = counts.keys().copied().collect();
    let unique = unique_set.len();
    let duplicates = total - unique;

    let mut duplicate_detail: Vec<DuplicateEntry> = counts
        .iter()
        .filter(|(_, &count)| count > 1)
        .map(|(&sequence, &count)| DuplicateEntry { sequence, count })
        .collect();
    duplicate_detail.sort_by(|a, b| b.count.cmp(&a.count).then(a.sequence.cmp(&b.sequence)));

    let min_seq = unique_set.first().copied().unwrap_or_default();
    let max_seq = unique_set.last().copied().unwrap_or_default();
    // abs_diff stays exact even when the span exceeds i64::MAX.
    let expected = min_seq.abs_diff(max_seq).saturating_add(1);
    let lost = expected - unique as u64;

    let loss_rate = if expected > 0 {
        100.0 * lost as f64 / expected as f64
    } else {
        0.0
    };
    let duplicate_rate = if total > 0 {
        100.0 * duplicates as f64 / total as f64
    } else {
        0.0
    };

    let missing = missing_ranges(&unique_set);
    let missing_total = missing.iter().map(MissingRange::span).sum();

    Ok(IntegrityReport {
        device: device.to_string(),
        total,
        unique,
        duplicates,
        duplicate_rate,
        min_seq,
        max_seq,
        expected,
        lost,
        loss_rate,
        duplicate_detail,
        missing,
        missing_total,
        unique_set,
    })
}

/// Compress the gaps of a sorted observation set into closed ranges.
fn missing_ranges(observed: &BTreeSet<i64>) -> Vec<MissingRange> {
    let mut ranges = Vec::new();
    let mut prev: Option<i64> = None;
    for &seq in observed {
        if let Some(p) = prev {
            if seq > p + 1 {
                ranges.push(MissingRange {
                    first: p + 1,
                    last: seq - 1,
                });
            }
        }
        prev = Some(seq);
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_stream_with_one_duplicate_and_one_gap() {
        let report = analyze("dev", &[1, 2, 2, 4, 5]).unwrap();
        assert_eq!(report.total, 5);
        assert_eq!(report.unique, 4);
        assert_eq!(report.duplicates, 1);
        assert_eq!(report.min_seq, 1);
        assert_eq!(report.max_seq, 5);
        assert_eq!(report.expected, 5);
        assert_eq!(report.lost, 1);
        assert_eq!(report.missing, vec![MissingRange { first: 3, last: 3 }]);
        assert_eq!(report.missing_total, 1);
        assert!((report.loss_rate - 20.0).abs() < 1e-9);
        assert!((report.duplicate_rate - 20.0).abs() < 1e-9);
    }

    #[test]
    fn single_sample_stream_has_no_loss() {
        let report = analyze("dev", &[10]).unwrap();
        assert_eq!(report.total, 1);
        assert_eq!(report.unique, 1);
        assert_eq!(report.expected, 1);
        assert_eq!(report.lost, 0);
        assert!(report.missing.is_empty());
        assert_eq!(report.loss_rate, 0.0);
    }

    #[test]
    fn empty_stream_is_an_empty_dataset() {
        let err = analyze("dev", &[]).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyDataset { .. }));
    }

    #[test]
    fn counting_invariants_hold() {
        let stream = [7, 3, 3, 3, 9, 12, 7, 20, 20, 15];
        let report = analyze("dev", &stream).unwrap();
        assert_eq!(report.unique + report.duplicates, report.total);
        assert!(report.lost <= report.expected);
        assert_eq!(report.lost + report.unique as u64, report.expected);
    }

    #[test]
    fn missing_ranges_round_trip_to_the_exact_gap_set() {
        let stream = [100, 101, 105, 106, 110, 120];
        let report = analyze("dev", &stream).unwrap();

        let expanded: BTreeSet<i64> = report
            .missing
            .iter()
            .flat_map(|r| r.first..=r.last)
            .collect();
        let direct: BTreeSet<i64> = (report.min_seq..=report.max_seq)
            .filter(|seq| !report.unique_set.contains(seq))
            .collect();
        assert_eq!(expanded, direct);
        assert_eq!(report.missing_total, expanded.len() as u64);
        assert_eq!(
            report.missing,
            vec![
                MissingRange { first: 102, last: 104 },
                MissingRange { first: 107, last: 109 },
                MissingRange { first: 111, last: 119 },
            ]
        );
    }

    #[test]
    fn duplicate_detail_sorted_by_count_then_sequence() {
        let stream = [5, 5, 5, 9, 9, 2, 2, 2, 8];
        let report = analyze("dev", &stream).unwrap();

        assert_eq!(
            report.duplicate_detail,
            vec![
                DuplicateEntry { sequence: 2, count: 3 },
                DuplicateEntry { sequence: 5, count: 3 },
                DuplicateEntry { sequence: 9, count: 2 },
            ]
        );
        for entry in &report.duplicate_detail {
            assert!(entry.count > 1);
        }
        let overcount: usize = report
            .duplicate_detail
            .iter()
            .map(|entry| entry.count - 1)
            .sum();
        assert_eq!(overcount, report.duplicates);
    }

    #[test]
    fn extreme_span_does_not_overflow() {
        let report = analyze("dev", &[i64::MIN, i64::MAX]).unwrap();
        assert_eq!(report.min_seq, i64::MIN);
        assert_eq!(report.max_seq, i64::MAX);
        assert_eq!(report.expected, u64::MAX);
        assert_eq!(report.lost, u64::MAX - 2);
        assert_eq!(
            report.missing,
            vec![MissingRange {
                first: i64::MIN + 1,
                last: i64::MAX - 1,
            }]
        );
        assert_eq!(report.missing_total, u64::MAX - 1);
        assert!(report.loss_rate > 99.9 && report.loss_rate <= 100.0);
    }

    #[test]
    fn negative_sequences_are_handled() {
        let report = analyze("dev", &[-3, -1, 0]).unwrap();
        assert_eq!(report.min_seq, -3);
        assert_eq!(report.max_seq, 0);
        assert_eq!(report.expected, 4);
        assert_eq!(report.lost, 1);
        assert_eq!(report.missing, vec![MissingRange { first: -2, last: -2 }]);
    }
}
