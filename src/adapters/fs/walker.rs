use anyhow::{Context, Result};
use std::path::Path;

/// Recursive source tree walk with an extension filter.
///
/// Returns paths relative to the root with `/` separators, sorted, so the
/// result is identical regardless of on-disk traversal order.
pub struct SourceWalker {
    extensions: Vec<String>,
}

impl SourceWalker {
    pub fn new(extensions: Vec<String>) -> Self {
        let extensions = extensions
            .into_iter()
            .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
            .collect();
        Self { extensions }
    }

    /// The conventional C/C++ header and source extensions.
    pub fn default_extensions() -> Vec<String> {
        ["h", "hh", "hpp", "c", "cc", "cpp"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    pub fn walk(&self, root: &Path) -> Result<Vec<String>> {
        let mut files = Vec::new();
        self.walk_dir(root, "", &mut files)?;
        files.sort();
        Ok(files)
    }

    fn walk_dir(&self, root: &Path, relative: &str, files: &mut Vec<String>) -> Result<()> {
        let dir = root.join(relative);
        let entries =
            std::fs::read_dir(&dir).with_context(|| format!("read dir {}", dir.display()))?;
        for entry in entries {
            let entry = entry.with_context(|| format!("read dir entry in {}", dir.display()))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let child = if relative.is_empty() {
                name
            } else {
                format!("{relative}/{name}")
            };
            let file_type = entry
                .file_type()
                .with_context(|| format!("stat {}", entry.path().display()))?;
            if file_type.is_dir() {
                self.walk_dir(root, &child, files)?;
            } else if self.matches_extension(&child) {
                files.push(child);
            }
        }
        Ok(())
    }

    fn matches_extension(&self, path: &str) -> bool {
        Path::new(path)
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .is_some_and(|ext| self.extensions.iter().any(|known| *known == ext))
    }
}

impl Default for SourceWalker {
    fn default() -> Self {
        Self::new(Self::default_extensions())
    }
}
