use crate::domain::ports::SourceReader;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// File system source reader rooted at the scan root.
pub struct FileSourceReader {
    root: PathBuf,
}

impl FileSourceReader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SourceReader for FileSourceReader {
    fn read(&self, path: &Path) -> Result<String> {
        let full_path = self.root.join(path);
        std::fs::read_to_string(&full_path)
            .with_context(|| format!("Failed to read source file: {}", full_path.display()))
    }
}
