use crate::cli::Cli;
use crate::domain::errors::AnalysisError;
use crate::domain::models::FileAnalysis;
use crate::services::{aggregate, integrity, output};
use log::{debug, error};
use std::path::Path;

/// Single-file mode: one integrity report per device identifier found,
/// in lexicographic order.
pub fn handle_analyze(cli: &Cli, file: &Path) -> anyhow::Result<()> {
    let agg = aggregate::collect_path(file)?;
    if agg.is_empty() {
        return Err(AnalysisError::EmptyDataset {
            context: file.display().to_string(),
        }
        .into());
    }

    if agg.without_sequence() > 0 {
        debug!(
            "{}: {} records without a sequence number skipped",
            file.display(),
            agg.without_sequence()
        );
    }

    let mut reports = Vec::new();
    for (device, stream) in agg.devices() {
        // One bad device must not block the others.
        match integrity::analyze(device, stream) {
            Ok(report) => reports.push(report),
            Err(err) => error!("skipping device {device} in {}: {err}", file.display()),
        }
    }

    let total_records: usize = reports.iter().map(|r| r.total).sum();
    let total_unique: usize = reports.iter().map(|r| r.unique).sum();
    let average_loss_rate = if reports.is_empty() {
        0.0
    } else {
        reports.iter().map(|r| r.loss_rate).sum::<f64>() / reports.len() as f64
    };

    let analysis = FileAnalysis {
        file: file.display().to_string(),
        devices: agg.device_count(),
        malformed_lines: agg.malformed(),
        total_records,
        total_unique,
        total_duplicates: total_records - total_unique,
        average_loss_rate,
        reports,
    };
    output::emit(cli.json, &analysis, |a| {
        output::print_lines(&output::analysis_lines(a, cli.missing_display_limit));
    })
}
