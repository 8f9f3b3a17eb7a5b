//! Module writing benchmark results as a `key=value` report

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::bench::{BenchConfig, BenchResult};

/// Short tag naming the options a run used, `std` when none
pub fn option_string(config: &BenchConfig) -> String {
    let mut options = Vec::new();

    if config.multi_processing {
        options.push("mp");
    }

    if config.verbose {
        options.push("v");
    }

    if options.is_empty() {
        "std".to_string()
    } else {
        options.join("_")
    }
}

/// `./out/BENCH_<options>.txt`, creating `./out` if needed
pub fn default_report_path(options: &str) -> io::Result<PathBuf> {
    let mut path = PathBuf::from("./out");
    fs::create_dir_all(&path)?;
    path.push(format!("BENCH_{}.txt", options));
    Ok(path)
}

/// Writes one block per exercise followed by the run totals
pub fn write_report(
    path: &Path,
    results: &[BenchResult],
    config: &BenchConfig,
    started: DateTime<Local>,
) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);

    writeln!(out, "started={}", started.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out, "iterations={}", config.iterations)?;
    let threads = results.iter().map(|r| r.batches).max().unwrap_or(0);
    writeln!(out, "threads={}", threads)?;
    writeln!(out, "options={}", option_string(config))?;

    for result in results {
        writeln!(out)?;
        writeln!(out, "exercise={}", result.exercise.name())?;
        writeln!(out, "calls={}", result.calls)?;
        writeln!(out, "batches={}", result.batches)?;
        writeln!(out, "seconds={}", result.elapsed.as_secs_f64())?;
        writeln!(out, "ns_per_call={:.1}", result.nanos_per_call())?;
    }

    let total_secs: f64 = results.iter().map(|r| r.elapsed.as_secs_f64()).sum();
    writeln!(out)?;
    writeln!(out, "time={:.3} s", total_secs)?;
    out.flush()
}
