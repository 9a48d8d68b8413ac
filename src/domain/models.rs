use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Closed range of consecutive missing sequence numbers.
/// A single missing value has `first == last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MissingRange {
    pub first: i64,
    pub last: i64,
}

impl MissingRange {
    pub fn span(&self) -> u64 {
        self.first.abs_diff(self.last).saturating_add(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DuplicateEntry {
    pub sequence: i64,
    pub count: usize,
}

/// Per-device sequence-integrity statistics. Built once by the analyzer
/// and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct IntegrityReport {
    pub device: String,
    pub total: usize,
    pub unique: usize,
    pub duplicates: usize,
    pub duplicate_rate: f64,
    pub min_seq: i64,
    pub max_seq: i64,
    pub expected: u64,
    pub lost: u64,
    pub loss_rate: f64,
    /// Only sequences seen more than once, most frequent first,
    /// ties by ascending sequence number.
    pub duplicate_detail: Vec<DuplicateEntry>,
    /// Exact gap list for `min_seq..=max_seq`, in ascending order.
    /// Display truncation is the renderer's business, never computed here.
    pub missing: Vec<MissingRange>,
    pub missing_total: u64,
    /// Retained for cross-stream comparison; not part of the JSON output.
    #[serde(skip)]
    pub unique_set: BTreeSet<i64>,
}

/// Set relationship between a sender-side and a receiver-side report.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub sent_unique: usize,
    pub received_unique: usize,
    pub common: BTreeSet<i64>,
    /// Sent but never received.
    pub lost_in_transit: BTreeSet<i64>,
    pub lost_in_transit_rate: f64,
    /// Received but never sent. Anomalous: points at corrupted sequence
    /// numbers upstream, so it is reported apart from loss accounting.
    pub received_never_sent: BTreeSet<i64>,
    pub reception_efficiency: f64,
}

/// Output of a single-file analysis: one report per device identifier,
/// plus totals and the average per-device loss rate across all of them.
#[derive(Debug, Serialize)]
pub struct FileAnalysis {
    pub file: String,
    pub devices: usize,
    pub malformed_lines: usize,
    pub total_records: usize,
    pub total_unique: usize,
    pub total_duplicates: usize,
    pub average_loss_rate: f64,
    pub reports: Vec<IntegrityReport>,
}

/// Output of a two-file sender/receiver analysis.
#[derive(Debug, Serialize)]
pub struct ComparisonAnalysis {
    pub sender: IntegrityReport,
    pub receiver: IntegrityReport,
    pub comparison: ComparisonReport,
}
