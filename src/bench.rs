//! Module timing every exercise over its scenario table

use std::hint::black_box;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::fixtures::{self, Exercise, Scenario};

/// Configuration for the benchmark
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Passes over the scenario table of each exercise
    pub iterations: usize,

    /// Enable verbose output
    pub verbose: bool,

    /// Split the passes over a rayon pool
    pub multi_processing: bool,

    /// Draw a progress bar on stderr
    pub progress: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            verbose: false,
            multi_processing: false,
            progress: false,
        }
    }
}

/// Timing for one exercise
#[derive(Debug, Clone)]
pub struct BenchResult {
    pub exercise: Exercise,

    /// Number of calls made, every scenario counted once per pass
    pub calls: usize,

    /// Wall-clock time for all calls
    pub elapsed: Duration,

    /// Batches the passes were split into, one per worker
    pub batches: usize,
}

impl BenchResult {
    pub fn nanos_per_call(&self) -> f64 {
        if self.calls == 0 {
            return 0.0;
        }
        self.elapsed.as_nanos() as f64 / self.calls as f64
    }
}

/// A contiguous share of the passes, run by one worker
struct Batch {
    passes: usize,
}

/// Runs the benchmark described by a [`BenchConfig`]
pub struct Benchmark {
    config: BenchConfig,
}

impl Benchmark {
    pub fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    /// Times every exercise in turn
    pub fn run(&self) -> Vec<BenchResult> {
        let batches_per_exercise = self.batches().len() as u64;
        let progress = self.progress_bar(batches_per_exercise * Exercise::ALL.len() as u64);

        let results: Vec<BenchResult> = Exercise::ALL
            .iter()
            .map(|&exercise| self.run_exercise(exercise, &progress))
            .collect();

        progress.finish_and_clear();
        results
    }

    fn run_exercise(&self, exercise: Exercise, progress: &ProgressBar) -> BenchResult {
        let scenarios: Vec<&Scenario> = fixtures::scenarios_for(exercise).collect();
        let batches = self.batches();
        let batch_count = batches.len();
        progress.set_message(exercise.name());

        if self.config.verbose {
            tracing::info!(
                exercise = exercise.name(),
                scenarios = scenarios.len(),
                batches = batch_count,
                "benchmarking"
            );
        }

        let start = Instant::now();
        let calls: usize = if self.config.multi_processing {
            batches
                .into_par_iter()
                .map(|batch| {
                    let calls = run_batch(&scenarios, batch.passes);
                    progress.inc(1);
                    calls
                })
                .sum()
        } else {
            batches
                .into_iter()
                .map(|batch| {
                    let calls = run_batch(&scenarios, batch.passes);
                    progress.inc(1);
                    calls
                })
                .sum()
        };

        BenchResult {
            exercise,
            calls,
            elapsed: start.elapsed(),
            batches: batch_count,
        }
    }

    /// Number of workers the passes are spread over
    pub fn workers(&self) -> usize {
        self.batches().len()
    }

    /// Splits the passes into one batch per worker
    fn batches(&self) -> Vec<Batch> {
        let iterations = self.config.iterations;
        let workers = if self.config.multi_processing {
            num_cpus::get().clamp(1, iterations.max(1))
        } else {
            1
        };

        let base = iterations / workers;
        let extra = iterations % workers;
        (0..workers)
            .map(|i| Batch {
                passes: base + usize::from(i < extra),
            })
            .filter(|batch| batch.passes > 0)
            .collect()
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.config.progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(len);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|e| {
                    tracing::warn!("Progress template error: {}, using default", e);
                    ProgressStyle::default_bar()
                }),
        );
        pb
    }
}

/// Evaluates every scenario `passes` times, returning the number of calls
fn run_batch(scenarios: &[&Scenario], passes: usize) -> usize {
    for _ in 0..passes {
        for scenario in scenarios {
            let _ = black_box(scenario.input.evaluate());
        }
    }
    passes * scenarios.len()
}
