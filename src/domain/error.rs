//! Error taxonomy.
//!
//! Two tiers: `ConfigError` and `GraphError` are fatal (exit 2, pipeline
//! aborts); `ScanWarning` is recoverable (degrades completeness of the
//! implied-edge computation but never aborts). Findings are the product of
//! the tool, not errors, and live in [`crate::domain::finding`].

use serde::Serialize;
use thiserror::Error;

/// Fatal: the tool's own inputs are unusable.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read build description '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed build description '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to walk source root '{path}': {message}")]
    SourceRoot { path: String, message: String },
}

/// Fatal: the declared graph violates a structural invariant.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("duplicate target '{name}' in build description")]
    DuplicateTarget { name: String },

    #[error("file '{file}' is owned by both '{first}' and '{second}'")]
    OwnershipConflict {
        file: String,
        first: String,
        second: String,
    },

    #[error("target '{from}' declares a dependency on unknown target '{dep}'")]
    UnknownTarget { from: String, dep: String },

    #[error("dependency cycle: {}", cycle.join(" -> "))]
    CyclicDependency { cycle: Vec<String> },
}

/// Either fatal tier; both map to process exit code 2.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Recoverable: a single source file could not be scanned. Logged and carried
/// in the report; the scan continues over the remaining files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanWarning {
    pub path: String,
    pub message: String,
}
