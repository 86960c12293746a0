use result_printer::{ColorChoice, Config, Error, PrinterConfig};

#[test]
fn test_full_config_parsing() {
    let toml_str = r#"
color = "always"
show-all = true
verbose = true
"#;
    let config = Config::from_toml_str(toml_str).unwrap();

    assert_eq!(config.color, ColorChoice::Always);
    assert!(config.show_all);
    assert!(config.verbose);
    assert_eq!(config.printer_config(false), PrinterConfig::new(true, true));
}

#[test]
fn test_empty_config_uses_defaults() {
    let config = Config::from_toml_str("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.printer_config(false), PrinterConfig::default());
}

#[test]
fn test_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("printer.toml");
    std::fs::write(&path, "color = \"never\"\n").unwrap();

    let config = Config::from_toml_file(&path).unwrap();
    assert_eq!(config.color, ColorChoice::Never);
    assert!(!config.printer_config(true).use_color);
}

#[test]
fn test_config_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = Config::from_toml_file(&path).unwrap_err();
    assert!(matches!(err, Error::FileNotFound(p) if p == path));
}

#[test]
fn test_config_unknown_color_rejected() {
    let err = Config::from_toml_str("color = \"sometimes\"").unwrap_err();
    assert!(err.to_string().starts_with("TOML parsing error"));
}
