/// Form of an include directive as written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncludeForm {
    /// `#include "path"` — project-relative or file-relative lookup.
    Quoted,
    /// `#include <path>` — system or project search-path lookup.
    Angled,
}

/// A single include directive extracted from a source file.
///
/// The path is the literal string as written; resolution to an owning target
/// happens later, during reconciliation. Textual "impl" header tricks are
/// ordinary directives here — the scanner records include presence, never
/// include purpose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeDirective {
    pub path: String,
    pub form: IncludeForm,
    /// 1-based line number of the directive.
    pub line: u32,
}

/// A scanned source file: identity plus its include directives, in the order
/// they appear. Immutable after scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path relative to the scan root, with `/` separators.
    pub path: String,
    pub includes: Vec<IncludeDirective>,
}

impl SourceFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            includes: Vec::new(),
        }
    }
}

/// Normalize a relative path string: collapse `.` and resolve `..` segments,
/// joining with `/`. Returns `None` when `..` would escape the root.
pub fn normalize_path(path: &str) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                parts.pop()?;
            }
            other => parts.push(other),
        }
    }
    Some(parts.join("/"))
}
