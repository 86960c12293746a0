use clap::Parser;
use result_printer::config::env;
use result_printer::{ColorChoice, Config, Printer, Result, RunStats, StdoutPrinter};
use result_printer::{SuiteResults, TestCase};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "result-printer")]
#[command(about = "Print test results with per-suite and global summaries", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON file holding an array of `{ "suite": ..., "results": [...] }` objects
    results: PathBuf,

    /// When to colorize output: auto, always, never
    #[arg(long, value_name = "WHEN")]
    color: Option<ColorChoice>,

    /// Print every result in the summary, not only failures
    #[arg(long)]
    show_all: bool,

    /// Path to a TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

/// Print every result and the summary. Returns whether all results passed.
fn run(cli: Cli) -> Result<bool> {
    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_overrides(cli.color, cli.show_all, cli.verbose);

    init_tracing(config.verbose);
    for (key, value) in env::detect_active_overrides() {
        tracing::debug!(%key, %value, "env override active");
    }

    let results = SuiteResults::<TestCase>::from_json_file(&cli.results)?;
    let stats = RunStats::from_results(&results);
    tracing::debug!(
        suites = results.len(),
        num_tests = stats.num_tests,
        "loaded results"
    );

    let mut printer = StdoutPrinter::new(config.printer_config(std::io::stdout().is_terminal()));
    for case in results.results() {
        printer.print_result(case)?;
    }
    printer.print_summary(&results, &stats)?;

    Ok(!results.any_failed())
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}
