//! Lino to Markdown Converter
//!
//! Converts a Links Notation benchmark report written by `intsort --benchmark`
//! into a Markdown table.
//!
//! Usage:
//!   lino2md input.lino [output.md]
//!
//! If output is not specified, prints to stdout.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{error, info};

use intsort::lino_report::parse_lino_report;
use intsort::DriverError;

#[derive(Parser)]
#[command(name = "lino2md", about = "Convert a Links Notation benchmark report to Markdown")]
struct Args {
    /// Path to the Links Notation report file
    input: PathBuf,

    /// Output path (prints to stdout if not specified)
    output: Option<PathBuf>,
}

fn run(args: &Args) -> Result<(), DriverError> {
    let content = fs::read_to_string(&args.input)?;
    let report = parse_lino_report(&content)?;

    match &args.output {
        Some(path) => {
            report.save_markdown(path)?;
            info!("Markdown report written to: {}", path.display());
        }
        None => print!("{}", report.to_markdown_table()),
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        error!("{}: {}", args.input.display(), e);
        process::exit(1);
    }
}
