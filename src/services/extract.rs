//! Extract a (device, sequence) sample from one raw log line.
//!
//! Two record shapes are understood:
//!
//! ```text
//! {"boat": {"name": "AA:BB:CC", "sequenceNumber": 42, ...}, ...}
//! {"sequenceNumber": 42, ...}
//! ```
//!
//! The nested shape is probed first; its `name` field identifies the
//! transmitter (falling back to `"UNKNOWN"`). The flat shape maps to the
//! implicit single device. Any other parseable object carries no usable
//! sequence and is skipped without noise.

use serde_json::Value;

/// Device identifier used when a record carries a top-level sequence number
/// with no transmitter sub-object.
pub const IMPLICIT_DEVICE: &str = "(default)";

/// Device identifier used when the transmitter sub-object has no `name`.
pub const UNKNOWN_DEVICE: &str = "UNKNOWN";

/// Outcome for a non-blank line that parsed as JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Sample { device: String, sequence: i64 },
    /// Valid JSON, but no sequence number on either path. Typically a
    /// different record type sharing the log; skipped silently.
    NoSequence,
}

/// Extract a sample from one raw line.
///
/// Returns `Ok(None)` for blank/whitespace-only lines and `Err` for lines
/// that are not valid JSON. Both are non-fatal to the surrounding pass.
pub fn extract_line(line: &str) -> Result<Option<Extraction>, serde_json::Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: Value = serde_json::from_str(trimmed)?;

    if let Some(boat) = value.get("boat") {
        if let Some(sequence) = boat.get("sequenceNumber").and_then(Value::as_i64) {
            let device = boat
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_DEVICE)
                .to_string();
            return Ok(Some(Extraction::Sample { device, sequence }));
        }
    }
    if let Some(sequence) = value.get("sequenceNumber").and_then(Value::as_i64) {
        return Ok(Some(Extraction::Sample {
            device: IMPLICIT_DEVICE.to_string(),
            sequence,
        }));
    }
    Ok(Some(Extraction::NoSequence))
}
