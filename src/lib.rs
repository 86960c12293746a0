//! result-printer: human-readable printing of test results.
//!
//! This library renders test outcomes computed elsewhere. It prints each result
//! as it arrives and finishes with a summary: one global
//! `PASS p/t FAIL f/t SKIP s/t` line followed by a section per suite.
//!
//! # Quick Start
//!
//! ```
//! use result_printer::{FilePrinter, Printer, PrinterConfig, RunStats, SuiteResults, TestCase};
//!
//! # fn main() -> result_printer::Result<()> {
//! let mut results = SuiteResults::new();
//! results.push("math", TestCase::passed("add"));
//! results.push("math", TestCase::failure("div", "division by zero"));
//! let stats = RunStats::from_results(&results);
//!
//! let mut printer = FilePrinter::new(Vec::new(), PrinterConfig::default());
//! for case in results.results() {
//!     printer.print_result(case)?;
//! }
//! printer.print_summary(&results, &stats)?;
//!
//! let text = String::from_utf8(printer.into_inner()).unwrap();
//! assert!(text.ends_with("math: PASS 1/2 FAIL 1/2 SKIP 0/2\nFAIL div: division by zero\n"));
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - [`TestResult`](result::TestResult): anything that renders as a line and
//!   reports failure. [`TestCase`](result::TestCase) is the built-in one.
//! - [`Printer`](printer::Printer): the printing capability, implemented by
//!   [`FilePrinter`](printer::FilePrinter) for any `Write` destination and
//!   [`StdoutPrinter`](printer::StdoutPrinter) for standard output.
//! - [`format_stats_str`](printer::format_stats_str): the one-line summary.
//!
//! # Features
//!
//! - `default` - Enables `cli`
//! - `cli` - The `result-printer` binary

pub mod color;
pub mod config;
pub mod core;
pub mod printer;
pub mod result;
pub mod stats;
pub mod suite;

// Re-export commonly used types
pub use crate::core::{Error, Result};
pub use config::{ColorChoice, Config};
pub use printer::{FilePrinter, Printer, PrinterConfig, StdoutPrinter, format_stats_str};
pub use result::{TestCase, TestResult, TestStatus};
pub use stats::{RunStats, Stats};
pub use suite::SuiteResults;
