//! Runs the scenario table and compares outcomes with expectations

use crate::error::{ExerciseError, Result};
use crate::fixtures::{Expected, Scenario, SCENARIOS};

/// The observed outcome of one scenario
#[derive(Debug)]
pub struct CheckOutcome {
    pub scenario: &'static Scenario,
    pub actual: Result<String>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        match (&self.scenario.expected, &self.actual) {
            (Expected::Output(expected), Ok(actual)) => expected == actual,
            (Expected::InvalidInput, Err(ExerciseError::InvalidInput(_))) => true,
            _ => false,
        }
    }

    /// One-line description of what happened
    pub fn describe(&self) -> String {
        let expected = match &self.scenario.expected {
            Expected::Output(output) => format!("'{}'", output),
            Expected::InvalidInput => "invalid input".to_string(),
        };
        let actual = match &self.actual {
            Ok(output) => format!("'{}'", output),
            Err(err) => err.to_string(),
        };
        format!("expected {}, got {}", expected, actual)
    }
}

/// Totals over a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub passed: usize,
    pub failed: usize,
}

impl CheckSummary {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn success_rate(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        self.passed as f64 * 100.0 / self.total() as f64
    }
}

/// Evaluates every scenario in table order
pub fn run_checks() -> Vec<CheckOutcome> {
    let scenarios: &'static [Scenario] = &SCENARIOS;
    scenarios
        .iter()
        .map(|scenario| {
            let actual = scenario.input.evaluate();
            let outcome = CheckOutcome { scenario, actual };
            if !outcome.passed() {
                tracing::warn!(scenario = scenario.name, "{}", outcome.describe());
            }
            outcome
        })
        .collect()
}

pub fn summarize(outcomes: &[CheckOutcome]) -> CheckSummary {
    let passed = outcomes.iter().filter(|o| o.passed()).count();
    CheckSummary {
        passed,
        failed: outcomes.len() - passed,
    }
}
