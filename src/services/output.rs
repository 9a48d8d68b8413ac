//! JSON/text output helpers and plain-text report rendering.

use crate::domain::models::{ComparisonReport, FileAnalysis, IntegrityReport, JsonOut};
use serde::Serialize;

/// Duplicate-detail entries shown before truncating to a count.
const DUPLICATE_DISPLAY_LIMIT: usize = 10;
/// Missing ranges grouped per output line.
const MISSING_GROUPS_PER_LINE: usize = 10;

/// Emit one value: pretty JSON under the `{ok, data}` envelope, or the
/// text rendering.
pub fn emit<T: Serialize>(json: bool, data: &T, render: impl Fn(&T)) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        render(data);
    }
    Ok(())
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

pub fn analysis_lines(analysis: &FileAnalysis, missing_display_limit: u64) -> Vec<String> {
    let mut out = Vec::new();
    out.push(format!("file: {}", analysis.file));
    if analysis.devices > 1 {
        out.push(format!("devices detected: {}", analysis.devices));
    }
    for report in &analysis.reports {
        out.push(String::new());
        out.extend(report_lines(report, missing_display_limit));
    }
    if analysis.devices > 1 {
        out.push(String::new());
        out.push("overall:".to_string());
        out.push(format!("  total records:      {}", analysis.total_records));
        out.push(format!("  total unique:       {}", analysis.total_unique));
        out.push(format!(
            "  total duplicates:   {}",
            analysis.total_duplicates
        ));
        out.push(format!(
            "  average loss rate:  {:.1}%",
            analysis.average_loss_rate
        ));
    }
    if analysis.malformed_lines > 0 {
        out.push(String::new());
        out.push(format!(
            "parse anomalies: {} malformed lines skipped",
            analysis.malformed_lines
        ));
    }
    out
}

pub fn report_lines(report: &IntegrityReport, missing_display_limit: u64) -> Vec<String> {
    let mut out = vec![
        format!("-- device {} --", report.device),
        "packets:".to_string(),
        format!("  total records:      {}", report.total),
        format!("  unique sequences:   {}", report.unique),
        format!(
            "  duplicates:         {} ({:.1}%)",
            report.duplicates, report.duplicate_rate
        ),
        "range:".to_string(),
        format!("  first sequence:     #{}", report.min_seq),
        format!("  last sequence:      #{}", report.max_seq),
        format!("  span:               {} packets expected", report.expected),
        "losses:".to_string(),
        format!("  packets lost:       {}", report.lost),
        format!("  loss rate:          {:.1}%", report.loss_rate),
    ];

    if !report.duplicate_detail.is_empty() {
        out.push("duplicate detail:".to_string());
        for entry in report.duplicate_detail.iter().take(DUPLICATE_DISPLAY_LIMIT) {
            out.push(format!("  sequence #{}: {} times", entry.sequence, entry.count));
        }
        let remainder = report.duplicate_detail.len().saturating_sub(DUPLICATE_DISPLAY_LIMIT);
        if remainder > 0 {
            out.push(format!("  ... and {remainder} more duplicated numbers"));
        }
    }

    if report.missing_total > 0 {
        if report.missing_total <= missing_display_limit {
            out.push("missing sequences:".to_string());
            let groups: Vec<String> = report
                .missing
                .iter()
                .map(|r| {
                    if r.first == r.last {
                        format!("#{}", r.first)
                    } else {
                        format!("#{}-#{}", r.first, r.last)
                    }
                })
                .collect();
            for chunk in groups.chunks(MISSING_GROUPS_PER_LINE) {
                out.push(format!("  {}", chunk.join(", ")));
            }
        } else {
            out.push(format!(
                "missing sequences: {} (too many to display)",
                report.missing_total
            ));
        }
    }
    out
}

pub fn comparison_lines(comparison: &ComparisonReport) -> Vec<String> {
    let mut out = vec![
        "correspondence:".to_string(),
        format!("  sequences sent:     {}", comparison.sent_unique),
        format!("  sequences received: {}", comparison.received_unique),
        format!("  matched:            {}", comparison.common.len()),
        format!(
            "  lost in transit:    {} ({:.1}%)",
            comparison.lost_in_transit.len(),
            comparison.lost_in_transit_rate
        ),
    ];
    if !comparison.received_never_sent.is_empty() {
        out.push(format!(
            "  received but never sent: {} (anomalous)",
            comparison.received_never_sent.len()
        ));
    }
    out.push(format!(
        "reception efficiency: {:.1}%",
        comparison.reception_efficiency
    ));
    out
}
