//! Configuration types and loading from a TOML file plus `RESULT_PRINTER_*` env vars.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::core::error::{Error, Result};
use crate::printer::PrinterConfig;

pub mod env;

/// Complete configuration for the reporting binary.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// When to colorize output.
    #[serde(default)]
    pub color: ColorChoice,

    /// Print every result in the summary, not only failures.
    #[serde(default)]
    pub show_all: bool,

    /// Enable verbose (debug-level) logging.
    #[serde(default)]
    pub verbose: bool,
}

/// When to emit color escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color when the destination is a terminal.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl ColorChoice {
    /// Decide whether to color given whether the destination is a terminal.
    pub fn resolve(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

impl FromStr for ColorChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        serde_plain::from_str(&s.to_lowercase()).map_err(|_| Error::invalid_config("color", s))
    }
}

impl Config {
    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load configuration.
    ///
    /// Priority (later sources override earlier):
    /// 1. Default values
    /// 2. The TOML file at `path`, if given
    /// 3. Individual env var overrides (`RESULT_PRINTER_*`)
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };
        env::apply_env_overrides(&mut config);
        Ok(config)
    }

    /// Merge command-line flags on top of the loaded configuration.
    ///
    /// A given `color` replaces the configured choice. `show_all` and
    /// `verbose` can only switch their settings on, since an absent flag
    /// means "not asked for" rather than "off".
    pub fn apply_overrides(&mut self, color: Option<ColorChoice>, show_all: bool, verbose: bool) {
        if let Some(color) = color {
            self.color = color;
        }
        self.show_all |= show_all;
        self.verbose |= verbose;
    }

    /// Printer options for a destination that is (or is not) a terminal.
    pub fn printer_config(&self, is_terminal: bool) -> PrinterConfig {
        PrinterConfig::new(self.color.resolve(is_terminal), self.show_all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.color, ColorChoice::Auto);
        assert!(!config.show_all);
        assert!(!config.verbose);
    }

    #[test]
    fn test_from_toml_str() {
        let config = Config::from_toml_str(
            r#"
            color = "never"
            show-all = true
            "#,
        )
        .unwrap();
        assert_eq!(config.color, ColorChoice::Never);
        assert!(config.show_all);
        assert!(!config.verbose);
    }

    #[test]
    fn test_from_toml_str_invalid_color() {
        let err = Config::from_toml_str(r#"color = "rainbow""#).unwrap_err();
        assert!(matches!(err, Error::TomlDe(_)));
    }

    #[test]
    fn test_color_choice_resolve() {
        assert!(ColorChoice::Auto.resolve(true));
        assert!(!ColorChoice::Auto.resolve(false));
        assert!(ColorChoice::Always.resolve(false));
        assert!(!ColorChoice::Never.resolve(true));
    }

    #[test]
    fn test_color_choice_from_str() {
        assert_eq!("always".parse::<ColorChoice>().unwrap(), ColorChoice::Always);
        assert_eq!("NEVER".parse::<ColorChoice>().unwrap(), ColorChoice::Never);
        let err = "sometimes".parse::<ColorChoice>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration value for color: sometimes"
        );
    }

    #[test]
    fn test_printer_config() {
        let config = Config {
            color: ColorChoice::Auto,
            show_all: true,
            verbose: false,
        };
        assert_eq!(config.printer_config(true), PrinterConfig::new(true, true));
        assert_eq!(config.printer_config(false), PrinterConfig::new(false, true));
    }

    #[test]
    fn test_apply_overrides_color_replaces() {
        let mut config = Config {
            color: ColorChoice::Never,
            ..Config::default()
        };
        config.apply_overrides(Some(ColorChoice::Always), false, false);
        assert_eq!(config.color, ColorChoice::Always);
        assert!(config.printer_config(false).use_color);
    }

    #[test]
    fn test_apply_overrides_absent_flags_keep_config() {
        let mut config = Config {
            color: ColorChoice::Never,
            show_all: true,
            verbose: true,
        };
        config.apply_overrides(None, false, false);
        assert_eq!(
            config,
            Config {
                color: ColorChoice::Never,
                show_all: true,
                verbose: true,
            }
        );
    }

    #[test]
    fn test_apply_overrides_flags_turn_on() {
        let mut config = Config::default();
        config.apply_overrides(None, true, true);
        assert!(config.show_all);
        assert!(config.verbose);
        assert_eq!(config.color, ColorChoice::Auto);
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_toml_file(Path::new("/nonexistent/printer.toml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }
}
