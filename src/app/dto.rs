//! Serialized report records for the machine-readable rendering.

use crate::domain::error::ScanWarning;
use crate::domain::finding::{Finding, FindingKind};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ReportDto {
    pub findings: Vec<FindingRecord>,
    pub warnings: Vec<ScanWarning>,
    pub summary: SummaryDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct FindingRecord {
    pub target: String,
    pub kind: FindingKind,
    pub related: String,
    pub explanation: String,
    pub actionable: bool,
}

impl From<&Finding> for FindingRecord {
    fn from(finding: &Finding) -> Self {
        Self {
            target: finding.target.clone(),
            kind: finding.kind,
            related: finding.related.clone(),
            explanation: finding.explanation.clone(),
            actionable: finding.kind.is_actionable(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryDto {
    pub target_count: usize,
    pub file_count: usize,
    pub finding_count: usize,
    pub actionable_count: usize,
}
