//! Idempotence and traversal-order determinism of the full pipeline.

mod common;

use anyhow::Result;
use cc_depcheck::app::report::{OutputFormat, render};
use common::fixtures::{Workspace, write_layered_sources};

const DESCRIPTION: &str = r#"{
    "targets": [
        {"name": "lowest", "files": ["lowest.h"]},
        {
            "name": "middle",
            "files": ["middle.h", "middle_impl.h", "middle_printer.cc"],
            "deps": []
        }
    ]
}"#;

#[test]
fn test_repeated_runs_are_byte_identical() -> Result<()> {
    let ws = Workspace::new()?;
    write_layered_sources(&ws)?;
    ws.write_build_file(DESCRIPTION)?;

    let first = ws.check()?;
    let second = ws.check()?;

    for format in [OutputFormat::Text, OutputFormat::Json] {
        assert_eq!(render(&first, format)?, render(&second, format)?);
    }
    Ok(())
}

/// Two workspaces with identical content but different on-disk creation
/// order must produce the same findings.
#[test]
fn test_file_creation_order_does_not_affect_output() -> Result<()> {
    let forward = Workspace::new()?;
    write_layered_sources(&forward)?;
    forward.write_build_file(DESCRIPTION)?;

    let backward = Workspace::new()?;
    backward.write_source("middle_printer.cc", common::fixtures::MIDDLE_PRINTER_CC)?;
    backward.write_source("middle_impl.h", common::fixtures::MIDDLE_IMPL_H)?;
    backward.write_source("middle.h", common::fixtures::MIDDLE_H)?;
    backward.write_source("lowest.h", common::fixtures::LOWEST_H)?;
    backward.write_build_file(DESCRIPTION)?;

    let report_fwd = forward.check()?;
    let report_bwd = backward.check()?;
    assert_eq!(
        render(&report_fwd, OutputFormat::Text)?,
        render(&report_bwd, OutputFormat::Text)?
    );
    Ok(())
}
