//! Collect extracted sequence numbers per device, in arrival order.

use crate::domain::errors::AnalysisError;
use crate::services::extract::{self, Extraction};
use log::warn;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Accumulator for one capture file.
///
/// Streams keep duplicates and arrival order; device iteration is
/// lexicographic so repeated runs enumerate devices identically. The flat
/// `arrivals` stream spans all devices and feeds two-file comparison, which
/// treats a capture as a single stream.
#[derive(Debug, Default)]
pub struct SequenceAggregator {
    streams: BTreeMap<String, Vec<i64>>,
    arrivals: Vec<i64>,
    malformed: usize,
    without_sequence: usize,
}

impl SequenceAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, device: String, sequence: i64) {
        self.streams.entry(device).or_default().push(sequence);
        self.arrivals.push(sequence);
    }

    /// Feed one raw line. Malformed lines are logged with their 1-based
    /// line number and counted; lines without a sequence are counted only.
    pub fn ingest_line(&mut self, line_no: usize, line: &str) {
        match extract::extract_line(line) {
            Ok(Some(Extraction::Sample { device, sequence })) => self.record(device, sequence),
            Ok(Some(Extraction::NoSequence)) => self.without_sequence += 1,
            Ok(None) => {}
            Err(err) => {
                self.malformed += 1;
                warn!("line {line_no}: malformed record: {err}");
            }
        }
    }

    /// Device streams in lexicographic identifier order.
    pub fn devices(&self) -> impl Iterator<Item = (&str, &[i64])> {
        self.streams.iter().map(|(d, s)| (d.as_str(), s.as_slice()))
    }

    pub fn device_count(&self) -> usize {
        self.streams.len()
    }

    /// Every sequence in file arrival order, all devices merged.
    pub fn arrivals(&self) -> &[i64] {
        &self.arrivals
    }

    pub fn malformed(&self) -> usize {
        self.malformed
    }

    pub fn without_sequence(&self) -> usize {
        self.without_sequence
    }

    pub fn is_empty(&self) -> bool {
        self.arrivals.is_empty()
    }
}

/// Read a capture file and aggregate every line.
pub fn collect_path(path: &Path) -> Result<SequenceAggregator, AnalysisError> {
    let raw = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => AnalysisError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => AnalysisError::Io {
            path: path.to_path_buf(),
            source: err,
        },
    })?;

    let mut agg = SequenceAggregator::new();
    for (idx, line) in raw.lines().enumerate() {
        agg.ingest_line(idx + 1, line);
    }
    Ok(agg)
}
