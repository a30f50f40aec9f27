//! Integration tests for Settings config loading.
//!
//! These tests run without a global config (temp directories only),
//! so they effectively test local config merging with defaults.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use landtree::config::{local_config_path, RenderStyle, Settings};

#[test]
fn given_no_local_config_when_load_then_uses_defaults() {
    let dir = TempDir::new().unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(settings.companies_file, "company_relations.csv");
    assert_eq!(settings.lands_file, "land_ownership.csv");
    assert_eq!(settings.style, RenderStyle::Lines);
}

#[test]
fn given_local_config_when_load_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let local = r#"
data_dir = "/srv/registry"
lands_file = "parcels.csv"
mode = "from_root"
style = "boxed"
"#;
    fs::write(local_config_path(dir.path()), local).unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(settings.data_dir, PathBuf::from("/srv/registry"));
    assert_eq!(settings.lands_path(), PathBuf::from("/srv/registry/parcels.csv"));
    assert_eq!(
        settings.companies_path(),
        PathBuf::from("/srv/registry/company_relations.csv")
    );
    assert_eq!(settings.mode.as_deref(), Some("from_root"));
    assert_eq!(settings.style, RenderStyle::Boxed);
}

#[test]
fn given_malformed_local_config_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), "style = [unclosed").unwrap();

    let err = Settings::load(Some(dir.path())).unwrap_err();

    assert!(err.to_string().starts_with("config error: parse"));
}

#[test]
fn given_template_when_parsed_then_is_valid_toml() {
    let template = Settings::template();

    let parsed: Settings = toml::from_str(&template).expect("template parses");

    assert_eq!(parsed, Settings::default());
}
