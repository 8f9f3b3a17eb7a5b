use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use scan_exercises::bench::{BenchConfig, Benchmark};
use scan_exercises::fixtures::{render_optional, render_words};
use scan_exercises::{check, report, top_words, SinglyLinkedList};

#[derive(Parser, Debug)]
#[command(name = "scan-exercises")]
#[command(about = "Linear-scan selection exercises - Rust Implementation", long_about = None)]
struct Args {
    /// Verbose output
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Longest candidate drawn from the allowed characters, no adjacent repeats
    Longest {
        /// Allowed characters
        #[arg(short = 'a', long = "allowed")]
        allowed: String,

        /// Candidate strings
        candidates: Vec<String>,
    },

    /// First item that occurs exactly once
    Unique {
        items: Vec<String>,
    },

    /// Smallest distance between two occurrences of the minimum
    NearestMin {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Most frequent words, listed alphabetically
    TopWords {
        /// Number of words to select
        #[arg(short = 'k', default_value_t = top_words::DEFAULT_TOP_K)]
        k: usize,

        sentence: String,
    },

    /// Rotate a list right
    Rotate {
        /// Rotation count
        #[arg(short = 'n', long = "by", allow_negative_numbers = true)]
        by: i64,

        values: Vec<String>,
    },

    /// Run every worked scenario and report PASS/FAIL
    Check,

    /// Time every exercise over its scenarios
    Bench {
        /// Passes over each scenario table
        #[arg(short = 'i', long = "iterations", default_value_t = 10_000)]
        iterations: usize,

        /// Use multi-processing
        #[arg(long = "mp")]
        multi_processing: bool,

        /// Output file
        #[arg(short = 'o', long = "output")]
        output_file: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // Log to stderr to keep stdout for results
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Longest {
            allowed,
            candidates,
        } => {
            let candidates: Vec<Option<&str>> =
                candidates.iter().map(|s| Some(s.as_str())).collect();
            let longest = scan_exercises::longest_valid_string(
                Some(allowed.as_str()),
                Some(candidates.as_slice()),
            )?;
            println!("{}", longest);
        }
        Command::Unique { items } => {
            let items: Vec<Option<&str>> = items.iter().map(|s| Some(s.as_str())).collect();
            let found = scan_exercises::first_unique(Some(items.as_slice()))?;
            println!("{}", render_optional(found));
        }
        Command::NearestMin { values } => {
            let nearest = scan_exercises::nearest_minimum_distance(Some(values.as_slice()))?;
            println!("{}", render_optional(nearest.as_ref()));
        }
        Command::TopWords { k, sentence } => {
            let words = scan_exercises::top_k_words(Some(sentence.as_str()), k)?;
            println!("{}", render_words(&words));
        }
        Command::Rotate { by, values } => {
            let mut list: SinglyLinkedList<String> = values.into_iter().collect();
            list.rotate_right(by)?;
            println!("{}", list);
        }
        Command::Check => return Ok(run_check()),
        Command::Bench {
            iterations,
            multi_processing,
            output_file,
        } => {
            let config = BenchConfig {
                iterations,
                verbose: args.verbose,
                multi_processing,
                progress: args.verbose,
            };
            run_bench(config, output_file)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run_check() -> ExitCode {
    let outcomes = check::run_checks();
    for outcome in &outcomes {
        let status = if outcome.passed() { "PASS" } else { "FAIL" };
        println!("{} {} - {}", status, outcome.scenario.name, outcome.describe());
    }

    let summary = check::summarize(&outcomes);
    println!();
    println!("Total tests: {}", summary.total());
    println!("Passed: {}", summary.passed);
    println!("Failed: {}", summary.failed);
    println!("Success rate: {:.1}%", summary.success_rate());

    if summary.failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_bench(config: BenchConfig, output_file: Option<PathBuf>) -> Result<()> {
    let started = chrono::Local::now();
    println!("Start time: {}", started.format("%Y-%m-%d %H:%M:%S"));
    println!("Benchmarking {} passes per exercise", config.iterations);

    let start_time = Instant::now();
    let results = Benchmark::new(config.clone()).run();
    let elapsed = start_time.elapsed();

    for result in &results {
        println!(
            "{:<16} {:>10} calls {:>12.1} ns/call",
            result.exercise.name(),
            result.calls,
            result.nanos_per_call()
        );
    }
    println!("Elapsed time: {:.6} seconds", elapsed.as_secs_f64());

    let option_str = report::option_string(&config);
    let output_file = match output_file {
        Some(path) => path,
        None => report::default_report_path(&option_str)?,
    };
    report::write_report(&output_file, &results, &config, started)?;
    println!("Results written to {}", output_file.display());

    Ok(())
}
