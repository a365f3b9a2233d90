// Config loading and validation tests

use gpu_timeline::config::AppConfig;

const VALID_CONFIG: &str = r#"
[server]
port = 8081
host = "0.0.0.0"

[panel]
band_size = 20.0
drift_tolerance = 15.0
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.panel.band_size, 20.0);
    assert_eq!(config.panel.drift_tolerance, 15.0);
    assert!(config.panel.bands.is_empty());
}

#[test]
fn test_config_panel_defaults_when_omitted() {
    let minimal = r#"
[server]
port = 8081
host = "0.0.0.0"
"#;
    let config = AppConfig::load_from_str(minimal).expect("valid");
    assert_eq!(config.panel.band_size, 20.0);
    assert_eq!(config.panel.drift_tolerance, 15.0);
    let options = config.panel.options();
    assert_eq!(options.bands.bands().len(), 5);
}

#[test]
fn test_config_validation_rejects_invalid_port() {
    let bad = VALID_CONFIG.replace("port = 8081", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_config_validation_rejects_band_size_zero() {
    let bad = VALID_CONFIG.replace("band_size = 20.0", "band_size = 0.0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("band_size"));
}

#[test]
fn test_config_validation_rejects_negative_drift_tolerance() {
    let bad = VALID_CONFIG.replace("drift_tolerance = 15.0", "drift_tolerance = -1.0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("drift_tolerance"));
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
    assert_eq!(config.server.port, 8081);
}

const CONFIG_WITH_BANDS: &str = r##"
[server]
port = 8081
host = "0.0.0.0"

[[panel.bands]]
upper = 50.0
color = "#73BF69"
label = "Ok"
legend = "Ok (0-50%)"

[[panel.bands]]
upper = 100.0
color = "#F2495C"
label = "Busy"
legend = "Busy (50-100%)"
"##;

#[test]
fn test_config_custom_bands_build_the_scale() {
    let config = AppConfig::load_from_str(CONFIG_WITH_BANDS).expect("valid");
    assert_eq!(config.panel.bands.len(), 2);
    let options = config.panel.options();
    assert_eq!(options.bands.classify(10.0).label, "Ok");
    assert_eq!(options.bands.classify(75.0).label, "Busy");
}

#[test]
fn test_config_validation_rejects_descending_bands() {
    let bad = CONFIG_WITH_BANDS.replace("upper = 100.0", "upper = 40.0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("ascend"));
}

#[test]
fn test_config_validation_rejects_band_without_color() {
    let bad = CONFIG_WITH_BANDS.replace("color = \"#73BF69\"", "color = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("color"));
}
