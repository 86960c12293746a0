//! Ordered collection of results grouped by suite.

use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::core::error::{Error, Result};
use crate::result::TestResult;

/// Results of one named suite, in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Suite<R> {
    pub suite: String,
    #[serde(default = "Vec::new")]
    pub results: Vec<R>,
}

/// Mapping from suite name to its results that keeps insertion order.
///
/// Both the order suites were first seen and the order of results within a
/// suite are preserved, so printing follows execution order.
///
/// Deserializes from a JSON array of `{ "suite": ..., "results": [...] }`
/// objects. Repeated suite names are merged into the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<Suite<R>>", bound(deserialize = "R: Deserialize<'de>"))]
pub struct SuiteResults<R> {
    suites: Vec<Suite<R>>,
}

impl<R> SuiteResults<R> {
    pub fn new() -> Self {
        Self { suites: Vec::new() }
    }

    /// Append `result` to `suite`, adding the suite at the end if it is new.
    pub fn push(&mut self, suite: impl Into<String>, result: R) {
        let suite = suite.into();
        match self.position(&suite) {
            Some(idx) => self.suites[idx].results.push(result),
            None => self.suites.push(Suite {
                suite,
                results: vec![result],
            }),
        }
    }

    /// Set the results of `suite`, keeping its position if it already exists.
    pub fn insert_suite(&mut self, suite: impl Into<String>, results: Vec<R>) {
        let suite = suite.into();
        match self.position(&suite) {
            Some(idx) => self.suites[idx].results = results,
            None => self.suites.push(Suite { suite, results }),
        }
    }

    /// Results recorded for `suite`.
    pub fn get(&self, suite: &str) -> Option<&[R]> {
        self.position(suite).map(|idx| self.suites[idx].results.as_slice())
    }

    /// Iterate suites in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[R])> {
        self.suites
            .iter()
            .map(|s| (s.suite.as_str(), s.results.as_slice()))
    }

    /// Iterate every result across all suites, in order.
    pub fn results(&self) -> impl Iterator<Item = &R> {
        self.suites.iter().flat_map(|s| s.results.iter())
    }

    /// Number of suites.
    pub fn len(&self) -> usize {
        self.suites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }

    /// Total number of results across all suites.
    pub fn num_tests(&self) -> usize {
        self.suites.iter().map(|s| s.results.len()).sum()
    }

    fn position(&self, suite: &str) -> Option<usize> {
        self.suites.iter().position(|s| s.suite == suite)
    }
}

impl<R: TestResult> SuiteResults<R> {
    /// Whether any result in any suite counts as a failure.
    pub fn any_failed(&self) -> bool {
        self.results().any(|result| result.failed())
    }
}

impl<R: DeserializeOwned> SuiteResults<R> {
    /// Parse results from their JSON array form.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read and parse a JSON results file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

impl<R> Default for SuiteResults<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> From<Vec<Suite<R>>> for SuiteResults<R> {
    fn from(suites: Vec<Suite<R>>) -> Self {
        let mut merged = Self::new();
        for Suite { suite, results } in suites {
            match merged.position(&suite) {
                Some(idx) => merged.suites[idx].results.extend(results),
                None => merged.suites.push(Suite { suite, results }),
            }
        }
        merged
    }
}

impl<S: Into<String>, R> FromIterator<(S, R)> for SuiteResults<R> {
    fn from_iter<I: IntoIterator<Item = (S, R)>>(iter: I) -> Self {
        let mut results = Self::new();
        for (suite, result) in iter {
            results.push(suite, result);
        }
        results
    }
}
