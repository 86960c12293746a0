//! One-line summary formatting for aggregate counts.

use crate::color::{Color, paint};
use crate::stats::Stats;

/// Format `stats` against `num_tests` as `PASS p/t FAIL f/t SKIP s/t`.
///
/// Only the three labels are colored, and only when `use_color` is set. The
/// counts are printed as given; they are not checked against `num_tests`.
pub fn format_stats_str(num_tests: usize, stats: &Stats, use_color: bool) -> String {
    let pass_label = paint("PASS", Color::Green, use_color);
    let fail_label = paint("FAIL", Color::Red, use_color);
    let skip_label = paint("SKIP", Color::Yellow, use_color);
    format!(
        "{pass_label} {}/{num_tests} {fail_label} {}/{num_tests} {skip_label} {}/{num_tests}",
        stats.pass, stats.fail, stats.skip
    )
}
