use crate::adapters::build_file::json;
use crate::adapters::fs::reader::FileSourceReader;
use crate::adapters::fs::walker::SourceWalker;
use crate::adapters::scan::includes::IncludeScanner;
use crate::domain::error::{CheckError, ConfigError, ScanWarning};
use crate::domain::finding::{Finding, FindingKind};
use crate::domain::loader::GraphLoader;
use crate::domain::reconciler::reconcile;
use std::path::Path;
use tracing::{debug, info};

/// Which actionable finding kinds fail the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FailOn {
    /// Edges that must be added or marked: missing deps and force-link gaps.
    Missing,
    /// Declarations that must be removed: redundant deps and stale
    /// suppressions.
    Redundant,
    /// Every actionable kind.
    All,
}

impl FailOn {
    pub fn covers(self, kind: FindingKind) -> bool {
        match self {
            Self::Missing => matches!(
                kind,
                FindingKind::MissingDependency | FindingKind::MissingForceLink
            ),
            Self::Redundant => matches!(
                kind,
                FindingKind::RedundantDependency | FindingKind::StaleSuppression
            ),
            Self::All => kind.is_actionable(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// File extensions treated as source during the walk.
    pub extensions: Vec<String>,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            extensions: SourceWalker::default_extensions(),
        }
    }
}

/// The whole pipeline as a pure function from (build description, source
/// tree) to a report: load, scan, reconcile. Re-runnable; no global state.
pub struct CheckEngine {
    options: CheckOptions,
}

impl CheckEngine {
    pub fn new(options: CheckOptions) -> Self {
        Self { options }
    }

    pub fn run(&self, build_file: &Path, source_root: &Path) -> Result<CheckReport, CheckError> {
        let description = json::load_description(build_file)?;
        let graph = GraphLoader::load(description)?;
        info!(
            targets = graph.graph.node_count(),
            declared_edges = graph.graph.edge_count(),
            "loaded build description"
        );

        let walker = SourceWalker::new(self.options.extensions.clone());
        let files = walker
            .walk(source_root)
            .map_err(|err| ConfigError::SourceRoot {
                path: source_root.to_string_lossy().into_owned(),
                message: format!("{err:#}"),
            })?;
        debug!(files = files.len(), "walked source tree");

        let reader = FileSourceReader::new(source_root);
        let scanner = IncludeScanner::new();
        let outcome = scanner.scan_all(&files, &reader);

        let findings = reconcile(&graph, &outcome.files);
        info!(
            findings = findings.len(),
            warnings = outcome.warnings.len(),
            "reconciliation complete"
        );

        Ok(CheckReport {
            findings,
            warnings: outcome.warnings,
            target_count: graph.graph.node_count(),
            file_count: outcome.files.len(),
        })
    }
}

impl Default for CheckEngine {
    fn default() -> Self {
        Self::new(CheckOptions::default())
    }
}

#[derive(Debug, Clone)]
pub struct CheckReport {
    /// Sorted by (target, kind, related).
    pub findings: Vec<Finding>,
    pub warnings: Vec<ScanWarning>,
    pub target_count: usize,
    pub file_count: usize,
}

impl CheckReport {
    pub fn actionable_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.kind.is_actionable())
            .count()
    }

    /// `0` when no actionable finding survives the `fail_on` filter, `1`
    /// otherwise. Fatal loader/config errors never reach this point; they
    /// map to `2` at the binary boundary.
    pub fn exit_code(&self, fail_on: FailOn) -> i32 {
        if self.findings.iter().any(|f| fail_on.covers(f.kind)) {
            1
        } else {
            0
        }
    }
}
