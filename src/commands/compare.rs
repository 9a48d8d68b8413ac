use crate::cli::Cli;
use crate::domain::errors::AnalysisError;
use crate::domain::models::{ComparisonAnalysis, IntegrityReport};
use crate::services::aggregate::{self, SequenceAggregator};
use crate::services::{compare, integrity, output};
use std::path::Path;

/// Two-file mode: integrity report for each capture (analyzed as one
/// whole-file stream) plus the sender/receiver comparison. Either file
/// failing aborts the comparison.
pub fn handle_compare(cli: &Cli, sender: &Path, receiver: &Path) -> anyhow::Result<()> {
    let sent = aggregate::collect_path(sender)?;
    let received = aggregate::collect_path(receiver)?;

    let sender_report = analyze_capture(sender, "sender", &sent)?;
    let receiver_report = analyze_capture(receiver, "receiver", &received)?;
    let comparison = compare::compare(&sender_report, &receiver_report);

    let analysis = ComparisonAnalysis {
        sender: sender_report,
        receiver: receiver_report,
        comparison,
    };
    output::emit(cli.json, &analysis, |a| {
        let mut lines = output::report_lines(&a.sender, cli.missing_display_limit);
        lines.push(String::new());
        lines.extend(output::report_lines(&a.receiver, cli.missing_display_limit));
        lines.push(String::new());
        lines.extend(output::comparison_lines(&a.comparison));
        output::print_lines(&lines);
    })
}

fn analyze_capture(
    path: &Path,
    role: &str,
    agg: &SequenceAggregator,
) -> anyhow::Result<IntegrityReport> {
    if agg.is_empty() {
        return Err(AnalysisError::EmptyDataset {
            context: format!("{} ({role})", path.display()),
        }
        .into());
    }
    Ok(integrity::analyze(role, agg.arrivals())?)
}
