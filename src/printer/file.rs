//! Printer writing to any [`Write`] destination.

use std::io::Write;

use super::{Printer, PrinterConfig, write_result, write_summary};
use crate::core::error::Result;
use crate::result::TestResult;
use crate::stats::RunStats;
use crate::suite::SuiteResults;

/// Writes results and summaries to an owned destination.
///
/// The destination can be a file, a locked terminal, or an in-memory buffer.
/// Writes go straight to it; wrap it in a `BufWriter` to buffer.
#[derive(Debug)]
pub struct FilePrinter<W: Write> {
    out: W,
    config: PrinterConfig,
}

impl<W: Write> FilePrinter<W> {
    /// Create a printer writing to `out`.
    pub fn new(out: W, config: PrinterConfig) -> Self {
        Self { out, config }
    }

    /// Create a printer with the given color and show-all settings.
    pub fn with_options(out: W, use_color: bool, show_all: bool) -> Self {
        Self::new(out, PrinterConfig::new(use_color, show_all))
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consume the printer, returning the destination.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write, R: TestResult> Printer<R> for FilePrinter<W> {
    fn print_result(&mut self, result: &R) -> Result<()> {
        write_result(&mut self.out, result, &self.config)
    }

    fn print_summary(&mut self, results: &SuiteResults<R>, stats: &RunStats) -> Result<()> {
        write_summary(&mut self.out, results, stats, &self.config)
    }
}
