//! Finding rendering: human-readable text and machine-readable JSON.

use crate::app::dto::{FindingRecord, ReportDto, SummaryDto};
use crate::app::engine::CheckReport;
use anyhow::Result;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn render(report: &CheckReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&to_dto(report))?),
    }
}

fn to_dto(report: &CheckReport) -> ReportDto {
    ReportDto {
        findings: report.findings.iter().map(FindingRecord::from).collect(),
        warnings: report.warnings.clone(),
        summary: SummaryDto {
            target_count: report.target_count,
            file_count: report.file_count,
            finding_count: report.findings.len(),
            actionable_count: report.actionable_count(),
        },
    }
}

/// Findings grouped by target; findings arrive already sorted, so groups are
/// contiguous runs.
fn render_text(report: &CheckReport) -> String {
    let mut out = String::new();
    let mut current_target: Option<&str> = None;

    for finding in &report.findings {
        if current_target != Some(finding.target.as_str()) {
            current_target = Some(finding.target.as_str());
            let _ = writeln!(out, "{}:", finding.target);
        }
        let marker = if finding.kind.is_actionable() {
            "!"
        } else {
            "-"
        };
        let _ = writeln!(
            out,
            "  {} {} {}: {}",
            marker, finding.kind, finding.related, finding.explanation
        );
    }

    if !report.warnings.is_empty() {
        let _ = writeln!(out, "warnings:");
        for warning in &report.warnings {
            let _ = writeln!(out, "  {}: {}", warning.path, warning.message);
        }
    }

    let _ = writeln!(
        out,
        "checked {} target(s), {} file(s): {} finding(s), {} actionable",
        report.target_count,
        report.file_count,
        report.findings.len(),
        report.actionable_count()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::finding::{Finding, FindingKind};

    fn sample_report() -> CheckReport {
        CheckReport {
            findings: vec![
                Finding::new(
                    "middle",
                    FindingKind::MissingDependency,
                    "lowest",
                    "'middle_printer.cc' includes \"lowest.h\" owned by 'lowest' but 'middle' does not declare it",
                ),
                Finding::new(
                    "middle",
                    FindingKind::TransitiveOnly,
                    "other",
                    "reachable through a declared chain",
                ),
            ],
            warnings: Vec::new(),
            target_count: 2,
            file_count: 3,
        }
    }

    #[test]
    fn test_text_groups_by_target_and_marks_actionable() {
        let text = render(&sample_report(), OutputFormat::Text).expect("render");
        assert!(text.starts_with("middle:\n"));
        assert!(text.contains("! missing_dependency lowest"));
        assert!(text.contains("- transitive_only other"));
        assert!(text.contains("checked 2 target(s), 3 file(s): 2 finding(s), 1 actionable"));
    }

    #[test]
    fn test_json_round_trips_summary() {
        let json = render(&sample_report(), OutputFormat::Json).expect("render");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["summary"]["finding_count"], 2);
        assert_eq!(value["summary"]["actionable_count"], 1);
        assert_eq!(value["findings"][0]["kind"], "missing_dependency");
        assert_eq!(value["findings"][0]["actionable"], true);
        assert_eq!(value["findings"][1]["actionable"], false);
    }

    #[test]
    fn test_empty_report_renders_summary_only() {
        let report = CheckReport {
            findings: Vec::new(),
            warnings: Vec::new(),
            target_count: 1,
            file_count: 1,
        };
        let text = render(&report, OutputFormat::Text).expect("render");
        assert_eq!(
            text,
            "checked 1 target(s), 1 file(s): 0 finding(s), 0 actionable\n"
        );
    }
}
