//! Temp-workspace fixture builders: a scratch source tree plus a build
//! description file, driven end-to-end through the engine.
#![allow(dead_code)]

use anyhow::Result;
use cc_depcheck::app::engine::{CheckEngine, CheckReport};
use cc_depcheck::domain::error::CheckError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary workspace: the tempdir root is the source root, and the build
/// description lives alongside as `build.json` (not a source extension, so
/// the walker never picks it up).
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn build_file(&self) -> PathBuf {
        self.dir.path().join("build.json")
    }

    /// Write a source file relative to the root, creating parent dirs.
    pub fn write_source(&self, relative: &str, content: &str) -> Result<()> {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    pub fn write_build_file(&self, json: &str) -> Result<()> {
        fs::write(self.build_file(), json)?;
        Ok(())
    }

    /// Run the default engine over this workspace.
    pub fn check(&self) -> Result<CheckReport, CheckError> {
        CheckEngine::default().run(&self.build_file(), self.root())
    }
}

/// The corpus' layered fixture sources: `lowest.h`, `middle.h` including it,
/// and a printer translation unit using the textual impl-header trick.
pub const LOWEST_H: &str = r#"#ifndef LOWEST_H_
#define LOWEST_H_

namespace examples {

constexpr int kLowestValue = 21;

} // namespace examples

#endif // LOWEST_H_
"#;

pub const MIDDLE_H: &str = r#"#ifndef MIDDLE_H_
#define MIDDLE_H_

#include "lowest.h"

namespace examples {

constexpr int kMiddleValue = 2 * kLowestValue;

int get_middle_value();

} // namespace examples

#endif // MIDDLE_H_
"#;

pub const MIDDLE_IMPL_H: &str = r#"constexpr int kMiddleValueHalf = kMiddleValue / 2;

int get_middle_value() { return kMiddleValue; }
"#;

pub const MIDDLE_PRINTER_CC: &str = r#"#include <cstdio>

#include "middle.h"

namespace examples {

#include "middle_impl.h"

} // namespace examples

int main() {
  printf("Middle value is %d\n", examples::get_middle_value());
  return 0;
}
"#;

/// Write the three-layer source tree shared by several scenarios.
pub fn write_layered_sources(ws: &Workspace) -> Result<()> {
    ws.write_source("lowest.h", LOWEST_H)?;
    ws.write_source("middle.h", MIDDLE_H)?;
    ws.write_source("middle_impl.h", MIDDLE_IMPL_H)?;
    ws.write_source("middle_printer.cc", MIDDLE_PRINTER_CC)?;
    Ok(())
}
