//! Pass/fail/skip counters for a run and for each suite.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::result::{TestCase, TestStatus};
use crate::suite::SuiteResults;

/// Aggregate counts for one scope (the whole run or a single suite).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub pass: usize,
    pub fail: usize,
    pub skip: usize,
}

impl Stats {
    pub fn new(pass: usize, fail: usize, skip: usize) -> Self {
        Self { pass, fail, skip }
    }

    /// Count one result with the given status.
    ///
    /// Expected failures count as passes and unexpected successes as failures.
    pub fn record(&mut self, status: TestStatus) {
        match status {
            TestStatus::Passed | TestStatus::ExpectedFailure => self.pass += 1,
            TestStatus::Failed | TestStatus::UnexpectedSuccess => self.fail += 1,
            TestStatus::Skipped => self.skip += 1,
        }
    }

    /// Sum of all counters.
    pub fn total(&self) -> usize {
        self.pass + self.fail + self.skip
    }
}

/// Statistics for a whole run, as consumed by [`Printer::print_summary`].
///
/// [`Printer::print_summary`]: crate::printer::Printer::print_summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Total number of tests in the run.
    pub num_tests: usize,
    /// Counts across every suite.
    pub global_stats: Stats,
    /// Counts per suite name.
    #[serde(default)]
    pub suite_stats: HashMap<String, Stats>,
}

impl RunStats {
    /// Build statistics from a results collection.
    pub fn from_results(results: &SuiteResults<TestCase>) -> Self {
        let mut stats = Self::default();
        for (suite, cases) in results.iter() {
            let suite_stats = stats.suite_stats.entry(suite.to_string()).or_default();
            for case in cases {
                suite_stats.record(case.status);
                stats.global_stats.record(case.status);
            }
            stats.num_tests += cases.len();
        }
        stats
    }

    /// Statistics for `suite`, if any were recorded.
    pub fn suite(&self, suite: &str) -> Option<&Stats> {
        self.suite_stats.get(suite)
    }
}
