// Config loading and validation tests

use nodecost::config::{AppConfig, OutputFormat};

const VALID_CONFIG: &str = r#"
[input]
nodes_path = "data/nodes.json"

[report]
currency = "EUR"
precision = 2
only_priced = true
format = "json"
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.input.nodes_path, "data/nodes.json");
    assert_eq!(config.report.currency, "EUR");
    assert_eq!(config.report.precision, 2);
    assert!(config.report.only_priced);
    assert_eq!(config.report.format, OutputFormat::Json);
}

#[test]
fn test_config_report_defaults_when_omitted() {
    let config = AppConfig::load_from_str("[input]\nnodes_path = \"nodes.json\"\n").expect("valid");
    assert_eq!(config.report.currency, "USD");
    assert_eq!(config.report.precision, 4);
    assert!(!config.report.only_priced);
    assert_eq!(config.report.format, OutputFormat::Text);
}

#[test]
fn test_config_validation_rejects_empty_nodes_path() {
    let bad = VALID_CONFIG.replace("nodes_path = \"data/nodes.json\"", "nodes_path = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("input.nodes_path"));
}

#[test]
fn test_config_validation_rejects_empty_currency() {
    let bad = VALID_CONFIG.replace("currency = \"EUR\"", "currency = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("report.currency"));
}

#[test]
fn test_config_validation_rejects_large_precision() {
    let bad = VALID_CONFIG.replace("precision = 2", "precision = 13");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("report.precision"));
}

#[test]
fn test_config_rejects_unknown_format() {
    let bad = VALID_CONFIG.replace("format = \"json\"", "format = \"yaml\"");
    assert!(AppConfig::load_from_str(&bad).is_err());
}

#[test]
fn test_config_rejects_missing_input() {
    assert!(AppConfig::load_from_str("[report]\ncurrency = \"USD\"\n").is_err());
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_config_load_from_file_via_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    unsafe { std::env::set_var("CONFIG_FILE", path.to_str().unwrap()) };
    let result = AppConfig::load();
    unsafe { std::env::remove_var("CONFIG_FILE") };
    let config = result.expect("load from CONFIG_FILE");
    assert_eq!(config.input.nodes_path, "data/nodes.json");
    assert_eq!(config.report.currency, "EUR");
}
