//! Integer Sorting Driver
//!
//! Builds a shuffled permutation of `0..N`, sorts it with one of the crate's
//! algorithms and verifies the result:
//!
//! ```text
//! intsort [N|max] [--algorithm quick] [--seed S] [--quiet]
//! intsort 10000 --all
//! intsort --benchmark --report results.lino
//! ```

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use log::{error, info, warn};
use rayon::prelude::*;

use intsort::array::{first_inversion, format_array};
use intsort::lino_report::{BenchmarkReport, BenchmarkResult};
use intsort::permutation::{self, MAX_LEN};
use intsort::{Algorithm, DriverError, Inversion};

/// Default array length
const DEFAULT_LEN: usize = 32;

/// Quadratic algorithms are left out of benchmark sizes above this
const QUADRATIC_BENCH_LIMIT: usize = 1 << 14;

/// Arrays larger than this make `--all` slow because of the quadratic sorts
const QUADRATIC_WARN_LIMIT: usize = 100_000;

#[derive(Parser)]
#[command(name = "intsort", about = "Sort a shuffled permutation and verify the result", version)]
struct Cli {
    /// Number of elements to be sorted, or `max` for the largest supported length
    #[arg(default_value_t = DEFAULT_LEN.to_string())]
    length: String,

    /// Sorting algorithm to run
    #[arg(short, long, value_enum, default_value_t = Algorithm::Quick)]
    algorithm: Algorithm,

    /// Seed for the shuffle (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Do not print the array before and after sorting
    #[arg(short, long)]
    quiet: bool,

    /// Run every algorithm on its own copy of the same input
    #[arg(long, conflicts_with = "benchmark")]
    all: bool,

    /// Time every algorithm across a ladder of array sizes
    #[arg(long)]
    benchmark: bool,

    /// Write the benchmark report here (`.md` for Markdown, otherwise Links Notation)
    #[arg(long, requires = "benchmark")]
    report: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let len = match parse_length(&cli.length) {
        Ok(len) => len,
        Err(e) => {
            error!("{}", e);
            print_usage();
            return;
        }
    };

    let outcome = if cli.benchmark {
        run_benchmark(cli.seed, cli.report.as_deref())
    } else if cli.all {
        run_all(len, cli.seed)
    } else {
        run_single(len, &cli)
    };

    if let Err(e) = outcome {
        error!("{}", e);
        process::exit(1);
    }
}

fn parse_length(arg: &str) -> Result<usize, DriverError> {
    if arg == "max" {
        return Ok(MAX_LEN);
    }

    let invalid = || DriverError::InvalidLength {
        requested: arg.to_string(),
        max: MAX_LEN,
    };
    let requested: i64 = arg.trim().parse().map_err(|_| invalid())?;
    if requested <= 0 || requested as u64 > MAX_LEN as u64 {
        return Err(invalid());
    }
    Ok(requested as usize)
}

fn print_usage() {
    let mut command = Cli::command();
    let _ = command.print_help();
    println!();
    println!(
        "The default length is {}. The maximum is {}.",
        DEFAULT_LEN, MAX_LEN
    );
}

fn report_inversion(algorithm: Algorithm, inversion: &Inversion) {
    println!("error: {} failed to sort array.", algorithm);
    println!("\tarr[{}] = {}", inversion.index, inversion.left);
    println!("\tarr[{}] = {}", inversion.index + 1, inversion.right);
}

/// Sort one permutation with the selected algorithm
fn run_single(len: usize, cli: &Cli) -> Result<(), DriverError> {
    let mut data = permutation::shuffled(len, cli.seed)?;

    if !cli.quiet {
        println!("{}", format_array(&data));
    }

    let start = Instant::now();
    cli.algorithm.sort(&mut data);
    let duration = start.elapsed();

    match first_inversion(&data) {
        Some(inversion) => report_inversion(cli.algorithm, &inversion),
        None => info!("{} sort verified: OK", cli.algorithm),
    }

    if !cli.quiet {
        println!("{}", format_array(&data));
    }

    info!(
        "{} sort time: {:.3} ms ({} elements)",
        cli.algorithm,
        duration.as_secs_f64() * 1000.0,
        len
    );
    Ok(())
}

/// Sort the same permutation with every algorithm, one algorithm per worker
fn run_all(len: usize, seed: Option<u64>) -> Result<(), DriverError> {
    if len > QUADRATIC_WARN_LIMIT {
        warn!(
            "{} elements: the quadratic algorithms will take a long time",
            len
        );
    }

    let data = permutation::shuffled(len, seed)?;

    // Every copy is allocated before any sort starts
    let copies = Algorithm::ALL
        .iter()
        .map(|&algorithm| -> Result<_, DriverError> {
            Ok((algorithm, permutation::copy_array(&data)?))
        })
        .collect::<Result<Vec<_>, _>>()?;
    drop(data);

    let outcomes: Vec<(Algorithm, f64, Option<Inversion>)> = copies
        .into_par_iter()
        .map(|(algorithm, mut copy)| {
            let start = Instant::now();
            algorithm.sort(&mut copy);
            let ms = start.elapsed().as_secs_f64() * 1000.0;
            (algorithm, ms, first_inversion(&copy))
        })
        .collect();

    println!("{:>14} | {:>12} | {:>8} | {:>8}", "Algorithm", "Time (ms)", "Stable", "Result");
    println!("{:-<14}-+-{:-<12}-+-{:-<8}-+-{:-<8}", "", "", "", "");
    for (algorithm, ms, inversion) in &outcomes {
        println!(
            "{:>14} | {:>12.3} | {:>8} | {:>8}",
            algorithm.name(),
            ms,
            if algorithm.is_stable() { "yes" } else { "no" },
            if inversion.is_none() { "OK" } else { "FAILED" }
        );
    }

    for (algorithm, _, inversion) in &outcomes {
        if let Some(inversion) = inversion {
            report_inversion(*algorithm, inversion);
        }
    }
    Ok(())
}

/// Time every algorithm across multiple array sizes
fn run_benchmark(seed: Option<u64>, report_path: Option<&str>) -> Result<(), DriverError> {
    println!("Running benchmark...\n");

    let sizes: Vec<usize> = vec![
        1 << 8,  // 256
        1 << 10, // 1K
        1 << 12, // 4K
        1 << 14, // 16K
        1 << 16, // 64K
        1 << 18, // 256K
        1 << 20, // 1M
    ];

    let mut rng = permutation::rng(seed);
    let mut report = BenchmarkReport::new("intsort benchmark over shuffled permutations");

    print!("{:>10}", "Size");
    for algorithm in Algorithm::ALL {
        print!(" | {:>12}", algorithm.name());
    }
    println!();

    for &size in &sizes {
        let data = permutation::init_array(size, &mut rng)?;
        print!("{:>10}", size);

        for algorithm in Algorithm::ALL {
            if algorithm.is_quadratic() && size > QUADRATIC_BENCH_LIMIT {
                print!(" | {:>12}", "skipped");
                continue;
            }

            let mut copy = permutation::copy_array(&data)?;
            let start = Instant::now();
            algorithm.sort(&mut copy);
            let time_ms = start.elapsed().as_secs_f64() * 1000.0;
            let verified = first_inversion(&copy).is_none();

            if verified {
                print!(" | {:>12.3}", time_ms);
            } else {
                print!(" | {:>12}", "ERROR");
            }

            report.add_result(BenchmarkResult {
                algorithm: algorithm.name().to_string(),
                array_size: size,
                time_ms,
                verified,
            });
        }
        println!();
    }

    println!("\nTimes in ms. Quadratic algorithms are skipped above {} elements.", QUADRATIC_BENCH_LIMIT);

    if let Some(path) = report_path {
        let path = Path::new(path);
        if path.extension().map_or(false, |ext| ext == "md") {
            report.save_markdown(path)?;
        } else {
            report.save_lino(path)?;
        }
        info!("Benchmark report written to: {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length("32").unwrap(), 32);
        assert_eq!(parse_length("max").unwrap(), MAX_LEN);
        assert!(parse_length("0").is_err());
        assert!(parse_length("-5").is_err());
        assert!(parse_length("ten").is_err());
        assert!(parse_length(&(MAX_LEN as u64 + 1).to_string()).is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["intsort"]).unwrap();
        assert_eq!(cli.length, "32");
        assert_eq!(cli.algorithm, Algorithm::Quick);
        assert!(!cli.all && !cli.benchmark);
    }

    #[test]
    fn test_cli_algorithm_names() {
        let cli = Cli::try_parse_from(["intsort", "100", "-a", "radix_signed"]).unwrap();
        assert_eq!(cli.algorithm, Algorithm::RadixSigned);

        // Every name the driver prints is accepted back by `-a`
        for algorithm in Algorithm::ALL {
            let cli = Cli::try_parse_from(["intsort", "-a", algorithm.name()]).unwrap();
            assert_eq!(cli.algorithm, algorithm);
        }
        assert!(Cli::try_parse_from(["intsort", "-a", "bogo"]).is_err());
    }

    #[test]
    fn test_cli_report_requires_benchmark() {
        assert!(Cli::try_parse_from(["intsort", "--report", "out.lino"]).is_err());
        assert!(Cli::try_parse_from(["intsort", "--benchmark", "--report", "out.lino"]).is_ok());
    }

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }
}
