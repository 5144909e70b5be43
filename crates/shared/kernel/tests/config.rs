use dpi_domain::config::SiteConfig;
use dpi_kernel::config::{ConfigError, load_config};
use serial_test::serial;
use std::fs;
use std::path::PathBuf;

#[test]
#[serial]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("site.toml"),
        "[content]\nroot = \"/srv/www\"\nfallback = \"app.html\"\n",
    )
    .expect("write site.toml");

    let cfg: SiteConfig = load_config(Some(dir.path().join("site"))).expect("config loads");
    assert_eq!(cfg.content.root, PathBuf::from("/srv/www"));
    assert_eq!(cfg.content.fallback, PathBuf::from("app.html"));
}

#[test]
#[serial]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg: SiteConfig = load_config(Some(dir.path().join("absent"))).expect("defaults");
    assert_eq!(cfg.content.root, PathBuf::from("dpi-website"));
}

#[test]
#[serial]
fn malformed_values_are_reported_with_context() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("site.toml"), "[server]\naddress = \"not-an-ip\"\n").expect("write");

    let err = load_config::<SiteConfig>(Some(dir.path().join("site"))).expect_err("bad address");
    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
    assert!(err.to_string().starts_with("Config error (Failed to deserialize config)"));
}
