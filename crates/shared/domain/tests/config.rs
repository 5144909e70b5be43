use dpi_domain::config::{ContentConfig, ServerConfig, SiteConfig};
use serde_json::json;
use std::path::PathBuf;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 3000);
    assert!(server.address.is_unspecified());

    let content = ContentConfig::default();
    assert_eq!(content.root, PathBuf::from("dpi-website"));
    assert_eq!(content.fallback, PathBuf::from("index.html"));
}

#[test]
fn site_config_deserializes_partial_tables() {
    let raw = json!({
        "server": { "port": 8080 },
        "content": { "root": "/srv/site" }
    });

    let cfg: SiteConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert!(cfg.server.address.is_unspecified());
    assert_eq!(cfg.content.root, PathBuf::from("/srv/site"));
    assert_eq!(cfg.content.fallback, PathBuf::from("index.html"));
}

#[test]
fn clones_share_until_mutated() {
    let original = SiteConfig::default();
    let mut copy = original.clone();
    copy.server.port = 9000;

    assert_eq!(original.server.port, 3000);
    assert_eq!(copy.server.port, 9000);
}
