//! Printers that write individual results and run summaries.
//!
//! A caller creates a printer, calls [`Printer::print_result`] once per test as
//! results arrive, then [`Printer::print_summary`] once at the end.
//!
//! The shared output logic lives in [`write_result`] and [`write_summary`],
//! which take the destination as a parameter. [`FilePrinter`] and
//! [`StdoutPrinter`] are thin wrappers that own a destination and a
//! [`PrinterConfig`].

mod file;
mod formatter;
mod stdout;

pub use file::FilePrinter;
pub use formatter::format_stats_str;
pub use stdout::StdoutPrinter;

use std::io::Write;

use crate::core::error::{Error, Result};
use crate::result::TestResult;
use crate::stats::RunStats;
use crate::suite::SuiteResults;

/// Something that can present test results.
pub trait Printer<R: TestResult> {
    /// Emit a single result.
    fn print_result(&mut self, result: &R) -> Result<()>;

    /// Emit the global summary, then one section per suite.
    fn print_summary(&mut self, results: &SuiteResults<R>, stats: &RunStats) -> Result<()>;
}

/// Options shared by every printer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Colorize labels and result lines.
    pub use_color: bool,
    /// Print every result in the summary rather than only failures.
    pub show_all: bool,
}

impl PrinterConfig {
    pub fn new(use_color: bool, show_all: bool) -> Self {
        Self {
            use_color,
            show_all,
        }
    }
}

/// Write one result's rendering followed by a newline.
pub fn write_result<W, R>(out: &mut W, result: &R, config: &PrinterConfig) -> Result<()>
where
    W: Write + ?Sized,
    R: TestResult + ?Sized,
{
    let line = result.render(config.use_color);
    tracing::trace!(%line, "result");
    writeln!(out, "{line}")?;
    Ok(())
}

/// Write the summary for a run.
///
/// Every suite in `results` must have an entry in `stats.suite_stats`. Output
/// written before a missing suite is encountered stays written.
pub fn write_summary<W, R>(
    out: &mut W,
    results: &SuiteResults<R>,
    stats: &RunStats,
    config: &PrinterConfig,
) -> Result<()>
where
    W: Write + ?Sized,
    R: TestResult,
{
    tracing::debug!(
        num_tests = stats.num_tests,
        suites = results.len(),
        show_all = config.show_all,
        "writing summary"
    );

    writeln!(out)?;
    writeln!(
        out,
        "{}",
        format_stats_str(stats.num_tests, &stats.global_stats, config.use_color)
    )?;

    for (suite, suite_results) in results.iter() {
        let suite_stats = stats
            .suite(suite)
            .ok_or_else(|| Error::missing_suite_stats(suite))?;
        let stats_str = format_stats_str(suite_results.len(), suite_stats, config.use_color);
        writeln!(out)?;
        writeln!(out, "{suite}: {stats_str}")?;

        let mut shown = 0usize;
        for result in suite_results {
            if config.show_all || result.failed() {
                write_result(out, result, config)?;
                shown += 1;
            }
        }
        tracing::trace!(suite, shown, total = suite_results.len(), "suite section");
    }

    Ok(())
}
