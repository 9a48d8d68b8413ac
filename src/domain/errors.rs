use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal outcomes of a single file or device analysis.
///
/// Line-level trouble (malformed JSON, records without a sequence number)
/// never reaches this enum: it is recovered at the aggregation pass so a
/// partially corrupt log still yields statistics for the lines it can.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Zero usable sequence numbers after the whole input was scanned.
    /// No report exists for this case; an empty dataset must not read as a
    /// loss-free transmission.
    #[error("no usable sequence numbers in {context}")]
    EmptyDataset { context: String },
}
