use anyhow::Result;
use std::path::Path;

/// Source code reader port (implemented by the filesystem adapter; tests
/// substitute an in-memory reader).
pub trait SourceReader: Send + Sync {
    /// Read the full contents of `path`, relative to the scan root.
    fn read(&self, path: &Path) -> Result<String>;
}
