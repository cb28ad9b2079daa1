//! Line-oriented include extraction.
//!
//! A best-effort lexical scan, not a preprocessor: both quoted and angled
//! forms are recognized, and textual "impl" header tricks look like any other
//! include. Per-file scanning is embarrassingly parallel; results are merged
//! deterministically by sorting on path.

use crate::domain::error::ScanWarning;
use crate::domain::ports::SourceReader;
use crate::domain::source::{IncludeDirective, IncludeForm, SourceFile};
use rayon::prelude::*;
use regex::Regex;
use std::path::Path;
use tracing::warn;

/// Result of scanning a file set: scanned files plus per-file warnings for
/// anything unreadable. Warnings degrade completeness but never abort.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub files: Vec<SourceFile>,
    pub warnings: Vec<ScanWarning>,
}

pub struct IncludeScanner {
    pattern: Regex,
}

impl IncludeScanner {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r#"^\s*#\s*include\s*(?:"([^"]+)"|<([^>]+)>)"#)
                .expect("include pattern is valid"),
        }
    }

    /// Scan `paths` (relative to the reader's root) across a worker pool.
    pub fn scan_all(&self, paths: &[String], reader: &dyn SourceReader) -> ScanOutcome {
        let results: Vec<Result<SourceFile, ScanWarning>> = paths
            .par_iter()
            .map(|path| match reader.read(Path::new(path)) {
                Ok(content) => Ok(self.scan_source(path, &content)),
                Err(err) => Err(ScanWarning {
                    path: path.clone(),
                    message: format!("{err:#}"),
                }),
            })
            .collect();

        let mut outcome = ScanOutcome::default();
        for result in results {
            match result {
                Ok(file) => outcome.files.push(file),
                Err(warning) => {
                    warn!(path = %warning.path, "skipping unreadable source file");
                    outcome.warnings.push(warning);
                }
            }
        }
        // par_iter preserves input order, but sort anyway so the outcome is
        // independent of how the path list was produced.
        outcome.files.sort_by(|a, b| a.path.cmp(&b.path));
        outcome.warnings.sort_by(|a, b| a.path.cmp(&b.path));
        outcome
    }

    /// Extract include directives from one file's contents.
    pub fn scan_source(&self, path: &str, content: &str) -> SourceFile {
        let mut file = SourceFile::new(path);
        for (line_idx, line) in content.lines().enumerate() {
            if let Some(captures) = self.pattern.captures(line) {
                let (form, matched) = if let Some(quoted) = captures.get(1) {
                    (IncludeForm::Quoted, quoted)
                } else if let Some(angled) = captures.get(2) {
                    (IncludeForm::Angled, angled)
                } else {
                    continue;
                };
                file.includes.push(IncludeDirective {
                    path: matched.as_str().to_string(),
                    form,
                    line: line_idx as u32 + 1,
                });
            }
        }
        file
    }
}

impl Default for IncludeScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, anyhow};
    use std::collections::HashMap;

    struct InMemoryReader {
        files: HashMap<String, String>,
    }

    impl SourceReader for InMemoryReader {
        fn read(&self, path: &Path) -> Result<String> {
            self.files
                .get(&path.to_string_lossy().into_owned())
                .cloned()
                .ok_or_else(|| anyhow!("no such file: {}", path.display()))
        }
    }

    #[test]
    fn test_extracts_quoted_and_angled_forms() {
        let scanner = IncludeScanner::new();
        let file = scanner.scan_source(
            "middle_printer.cc",
            "#include <cstdio>\n\n#include \"examples/default_good/middle.h\"\n",
        );
        assert_eq!(file.includes.len(), 2);
        assert_eq!(file.includes[0].path, "cstdio");
        assert_eq!(file.includes[0].form, IncludeForm::Angled);
        assert_eq!(file.includes[0].line, 1);
        assert_eq!(file.includes[1].path, "examples/default_good/middle.h");
        assert_eq!(file.includes[1].form, IncludeForm::Quoted);
        assert_eq!(file.includes[1].line, 3);
    }

    #[test]
    fn test_tolerates_whitespace_and_indentation() {
        let scanner = IncludeScanner::new();
        let file = scanner.scan_source("f.cc", "  #  include   \"a.h\"\n\t#include\t<b.h>\n");
        let paths: Vec<_> = file.includes.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["a.h", "b.h"]);
    }

    #[test]
    fn test_impl_header_inside_namespace_is_ordinary_include() {
        // The textual-inclusion trick: a header included mid-file, inside a
        // namespace body. Presence is recorded; purpose is not interpreted.
        let scanner = IncludeScanner::new();
        let file = scanner.scan_source(
            "middle_printer.cc",
            "#include \"middle.h\"\nnamespace examples {\n#include \"middle_impl.h\"\n}\n",
        );
        let paths: Vec<_> = file.includes.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["middle.h", "middle_impl.h"]);
    }

    #[test]
    fn test_non_include_lines_are_ignored() {
        let scanner = IncludeScanner::new();
        // Lines not starting with an include directive are skipped, including
        // line comments and other preprocessor directives.
        let file = scanner.scan_source(
            "f.cc",
            "// #include \"commented.h\"\nint x;\n#define include_like 1\n",
        );
        assert_eq!(file.includes.len(), 0);
    }

    #[test]
    fn test_unreadable_file_becomes_warning_and_scan_continues() {
        let scanner = IncludeScanner::new();
        let reader = InMemoryReader {
            files: HashMap::from([("ok.cc".to_string(), "#include \"a.h\"\n".to_string())]),
        };
        let paths = vec!["broken.cc".to_string(), "ok.cc".to_string()];
        let outcome = scanner.scan_all(&paths, &reader);
        assert_eq!(outcome.files.len(), 1);
        assert_eq!(outcome.files[0].path, "ok.cc");
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].path, "broken.cc");
    }

    #[test]
    fn test_scan_all_output_is_order_independent() {
        let scanner = IncludeScanner::new();
        let reader = InMemoryReader {
            files: HashMap::from([
                ("a.cc".to_string(), "#include \"x.h\"\n".to_string()),
                ("b.cc".to_string(), "#include \"y.h\"\n".to_string()),
            ]),
        };
        let forward = vec!["a.cc".to_string(), "b.cc".to_string()];
        let backward = vec!["b.cc".to_string(), "a.cc".to_string()];
        let out_fwd = scanner.scan_all(&forward, &reader);
        let out_bwd = scanner.scan_all(&backward, &reader);
        assert_eq!(out_fwd.files, out_bwd.files);
    }
}
