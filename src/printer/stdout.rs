//! Printer bound to the process's standard output.

use std::io::{self, Stdout};

use super::{Printer, PrinterConfig, write_result, write_summary};
use crate::core::error::Result;
use crate::result::TestResult;
use crate::stats::RunStats;
use crate::suite::SuiteResults;

/// [`FilePrinter`](super::FilePrinter) behavior with the destination fixed to stdout.
///
/// Stdout is locked once per call, so a summary is never interleaved with
/// other writers in the same process.
#[derive(Debug)]
pub struct StdoutPrinter {
    out: Stdout,
    config: PrinterConfig,
}

impl StdoutPrinter {
    pub fn new(config: PrinterConfig) -> Self {
        Self {
            out: io::stdout(),
            config,
        }
    }

    /// Create a printer with the given color and show-all settings.
    pub fn with_options(use_color: bool, show_all: bool) -> Self {
        Self::new(PrinterConfig::new(use_color, show_all))
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }
}

impl Default for StdoutPrinter {
    fn default() -> Self {
        Self::new(PrinterConfig::default())
    }
}

impl<R: TestResult> Printer<R> for StdoutPrinter {
    fn print_result(&mut self, result: &R) -> Result<()> {
        write_result(&mut self.out.lock(), result, &self.config)
    }

    fn print_summary(&mut self, results: &SuiteResults<R>, stats: &RunStats) -> Result<()> {
        write_summary(&mut self.out.lock(), results, stats, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::TestCase;

    #[test]
    fn test_stdout_printer_creation() {
        let printer = StdoutPrinter::with_options(true, false);
        assert_eq!(*printer.config(), PrinterConfig::new(true, false));
        assert_eq!(*StdoutPrinter::default().config(), PrinterConfig::default());
    }

    #[test]
    fn test_stdout_printer_does_not_fail() {
        let mut printer = StdoutPrinter::default();
        let mut results = SuiteResults::new();
        results.push("math", TestCase::passed("add"));
        let stats = RunStats::from_results(&results);
        printer.print_result(&TestCase::passed("add")).unwrap();
        printer.print_summary(&results, &stats).unwrap();
    }
}
