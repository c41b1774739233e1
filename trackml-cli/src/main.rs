//! trackml-convert: Command-line converter for TrackML event files.
//!
//! Converts the hits of one event, e.g. `event000000016-hits.csv`, into a
//! JSON event document such as `event000000016.json`.
#![allow(clippy::uninlined_format_args)]

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use trackml_core::{ConversionPlan, InputRole};
use trackml_io::ConversionSummary;

/// Result type for CLI operations.
type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    #[error("{0}")]
    Core(#[from] trackml_core::Error),

    #[error("{0}")]
    Io(#[from] trackml_io::Error),
}

impl CliError {
    /// Returns true for errors caused by how the tool was invoked.
    fn is_usage(&self) -> bool {
        matches!(
            self,
            CliError::Core(trackml_core::Error::NoInputs)
                | CliError::Io(trackml_io::Error::CoreError(trackml_core::Error::NoInputs))
        )
    }
}

/// Convert TrackML hits/truth/particles CSV files into a JSON event.
#[derive(Parser)]
#[command(name = "trackml-convert")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input CSV file(s); roles are inferred from "hits", "truth" or
    /// "particles" in the file name
    input: Vec<PathBuf>,

    /// Write event data to FILE (default: derived from the first input)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Don't print status messages to stdout
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            if err.is_usage() {
                eprintln!("Run 'trackml-convert -h' to see options.");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let verbose = !cli.quiet;
    let plan = ConversionPlan::resolve(&cli.input, cli.output)?;

    if verbose {
        print_plan(&plan);
    }

    let summary = trackml_io::convert(&plan)?;

    if verbose {
        print_summary(&summary);
    }
    Ok(())
}

fn print_plan(plan: &ConversionPlan) {
    let inputs = plan.inputs();
    let shown = |role: InputRole| {
        inputs
            .get(role)
            .map(|path| path.display().to_string())
            .unwrap_or_default()
    };

    println!("Input files are:");
    println!("Hits      :\t{}", shown(InputRole::Hits));
    println!("Truth     :\t{}", shown(InputRole::Truth));
    println!("Particles :\t{}", shown(InputRole::Particles));
    for ignored in inputs.ignored() {
        println!("Ignored   :\t{} ({})", ignored.path.display(), ignored.role);
    }
    println!();
    println!("Output filename: {}", plan.output().display());
    println!("Event number: {}", plan.event_number());
}

fn print_summary(summary: &ConversionSummary) {
    match summary.spacepoints {
        Some(count) => println!(
            "Wrote {} spacepoints for event {} to {}",
            count,
            summary.event_number,
            summary.output.display()
        ),
        None => println!(
            "No hits file given; wrote event {} header to {}",
            summary.event_number,
            summary.output.display()
        ),
    }
}
