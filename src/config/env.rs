//! Environment variable processing for runtime configuration overrides.
//!
//! Env var prefix: `RESULT_PRINTER_`
//!
//! - `RESULT_PRINTER_COLOR` — override color choice (auto/always/never)
//! - `RESULT_PRINTER_SHOW_ALL` — print every result in the summary (1/true/yes)
//! - `RESULT_PRINTER_VERBOSE` — enable verbose output (1/true/yes)

use super::{ColorChoice, Config};

const PREFIX: &str = "RESULT_PRINTER_";

/// Apply individual env var overrides to a config.
///
/// Each override is applied only if the env var is set and parses correctly.
/// Invalid values are silently ignored.
pub fn apply_env_overrides(config: &mut Config) {
    if let Some(val) = env_parse::<ColorChoice>("COLOR") {
        config.color = val;
    }

    if let Some(val) = env_bool("SHOW_ALL") {
        config.show_all = val;
    }

    if let Some(val) = env_bool("VERBOSE") {
        config.verbose = val;
    }
}

/// Summarize which env var overrides are currently active.
///
/// Returns a list of `(env_var_name, value)` pairs for verbose logging.
pub fn detect_active_overrides() -> Vec<(String, String)> {
    let keys = ["COLOR", "SHOW_ALL", "VERBOSE"];

    let mut active = Vec::new();
    for key in keys {
        let full = format!("{PREFIX}{key}");
        if let Ok(val) = std::env::var(&full) {
            if !val.is_empty() {
                active.push((full, val));
            }
        }
    }
    active
}

// --- helpers ---

fn env_str(suffix: &str) -> Option<String> {
    std::env::var(format!("{PREFIX}{suffix}"))
        .ok()
        .filter(|s| !s.is_empty())
}

fn env_parse<T: std::str::FromStr>(suffix: &str) -> Option<T> {
    env_str(suffix).and_then(|s| s.parse().ok())
}

fn env_bool(suffix: &str) -> Option<bool> {
    env_str(suffix).map(|s| matches!(s.to_lowercase().as_str(), "1" | "true" | "yes"))
}
