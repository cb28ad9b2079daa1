use crate::app::engine::{CheckEngine, CheckOptions, FailOn};
use crate::app::report::{OutputFormat, render};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "depcheck",
    version,
    about = "Reconcile declared C/C++ build dependencies against actual source includes",
    long_about = None
)]
pub struct Cli {
    /// Path to the build description file (JSON).
    #[arg(long, value_name = "FILE")]
    pub build_file: PathBuf,

    /// Root directory of the source tree to scan.
    #[arg(long, value_name = "DIR")]
    pub source_root: PathBuf,

    /// Output rendering.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Which actionable finding kinds fail the run.
    #[arg(long, value_enum, default_value = "all")]
    pub fail_on: FailOn,

    /// Comma-separated file extensions treated as source.
    #[arg(long, value_delimiter = ',', value_name = "EXT,...")]
    pub extensions: Option<Vec<String>>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the pipeline and print the rendered report. Returns the process exit
/// code: `0` clean, `1` actionable findings. Fatal errors propagate and map
/// to `2` in `main`.
pub fn run(cli: &Cli) -> Result<i32> {
    let options = match &cli.extensions {
        Some(extensions) => CheckOptions {
            extensions: extensions.clone(),
        },
        None => CheckOptions::default(),
    };
    let engine = CheckEngine::new(options);
    let report = engine.run(&cli.build_file, &cli.source_root)?;

    print!("{}", render(&report, cli.format)?);
    Ok(report.exit_code(cli.fail_on))
}
