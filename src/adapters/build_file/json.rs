//! JSON build-description parsing.

use crate::domain::description::BuildDescription;
use crate::domain::error::ConfigError;
use std::path::Path;

/// Read and parse a build description file. Both failure modes are fatal
/// (`ConfigError`, exit 2).
pub fn load_description(path: &Path) -> Result<BuildDescription, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string_lossy().into_owned(),
        source,
    })?;
    parse_description(&content).map_err(|source| ConfigError::Parse {
        path: path.to_string_lossy().into_owned(),
        source,
    })
}

pub fn parse_description(content: &str) -> Result<BuildDescription, serde_json::Error> {
    serde_json::from_str(content)
}
