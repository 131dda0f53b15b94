//! Language Statistics Tool
//!
//! Walks a directory tree, classifies files by extension, counts lines per file and
//! prints a table of file and line shares per language.
//!
//! Recognized languages: Python, Rust, Haskell, Lua, TypeScript, JavaScript, Swift.

mod aggregate;
mod classifier;
mod collector;
mod error;
mod languages;
mod report;

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use colored::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::aggregate::{aggregate_results, AnalysisResults};
use crate::classifier::analyze_file;
use crate::collector::collect_files;
use crate::error::StatsError;
use crate::report::build_report;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Per-language file and line statistics for a source tree",
    long_about = "Recognized languages: Python (.py), Rust (.rs), Haskell (.hs), Lua (.lua), TypeScript (.ts), JavaScript (.js), Swift (.swift). Hidden entries and build, dependency and version-control directories are skipped."
)]
struct Args {
    /// Directory to analyze. Defaults to the current directory.
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .try_init();
}

/// Collect, classify and aggregate everything below `root`.
fn analyze_directory(root: &Path) -> Result<AnalysisResults, StatsError> {
    let files = collect_files(root)?;
    info!("analyzing {} files under {}", files.len(), root.display());

    let results = aggregate_results(files.iter().filter_map(|path| analyze_file(path)));
    info!(
        "matched {} files with {} lines",
        results.total_files, results.total_lines
    );
    Ok(results)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match analyze_directory(&args.directory) {
        Ok(results) => {
            print!("{}", build_report(&results));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {}", "Error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
