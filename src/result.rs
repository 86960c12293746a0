//! Individual test outcomes and how they render.

use serde::{Deserialize, Serialize};

use crate::color::{Color, paint};

/// A single test outcome that a printer can render.
///
/// Implemented by [`TestCase`], but printers accept any type that can render
/// itself and say whether it counts as a failure.
pub trait TestResult {
    /// Render the result as one line of text, colorized when `colored` is set.
    fn render(&self, colored: bool) -> String;

    /// Whether this result counts as a failure.
    fn failed(&self) -> bool;
}

impl<T: TestResult + ?Sized> TestResult for &T {
    fn render(&self, colored: bool) -> String {
        (**self).render(colored)
    }

    fn failed(&self) -> bool {
        (**self).failed()
    }
}

/// Status of a single test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestStatus {
    #[serde(alias = "pass")]
    Passed,
    #[serde(alias = "fail")]
    Failed,
    #[serde(alias = "skip")]
    Skipped,
    /// Failed, but was marked as expected to fail.
    ExpectedFailure,
    /// Passed, but was marked as expected to fail.
    UnexpectedSuccess,
}

impl TestStatus {
    /// Label printed in front of the test name.
    pub fn label(self) -> &'static str {
        match self {
            TestStatus::Passed => "PASS",
            TestStatus::Failed => "FAIL",
            TestStatus::Skipped => "SKIP",
            TestStatus::ExpectedFailure => "KNOWN FAIL",
            TestStatus::UnexpectedSuccess => "SHOULD FAIL",
        }
    }

    /// Color applied to the label.
    pub fn color(self) -> Color {
        match self {
            TestStatus::Passed => Color::Green,
            TestStatus::Failed | TestStatus::UnexpectedSuccess => Color::Red,
            TestStatus::Skipped | TestStatus::ExpectedFailure => Color::Yellow,
        }
    }

    /// Whether a test with this status fails the run.
    pub fn is_failure(self) -> bool {
        matches!(self, TestStatus::Failed | TestStatus::UnexpectedSuccess)
    }
}

/// Result of a single test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub status: TestStatus,
    /// Failure output or skip reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TestCase {
    pub fn new(name: impl Into<String>, status: TestStatus) -> Self {
        Self {
            name: name.into(),
            status,
            message: None,
        }
    }

    pub fn passed(name: impl Into<String>) -> Self {
        Self::new(name, TestStatus::Passed)
    }

    pub fn failure(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, TestStatus::Failed).with_message(message)
    }

    pub fn skipped(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(name, TestStatus::Skipped).with_message(reason)
    }

    pub fn expected_failure(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(name, TestStatus::ExpectedFailure).with_message(reason)
    }

    pub fn unexpected_success(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(name, TestStatus::UnexpectedSuccess).with_message(reason)
    }

    /// Attach a message to the result.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl TestResult for TestCase {
    fn render(&self, colored: bool) -> String {
        let label = paint(self.status.label(), self.status.color(), colored);
        match &self.message {
            Some(message) => format!("{label} {}: {message}", self.name),
            None => format!("{label} {}", self.name),
        }
    }

    fn failed(&self) -> bool {
        self.status.is_failure()
    }
}
