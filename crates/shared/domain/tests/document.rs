use dpi_domain::dom::{ElementId, LayoutUpdate, Node, Patch, PatchSink, Scope};
use dpi_domain::geometry::Rect;

#[test]
fn scope_as_sink_applies_document_patches() {
    let mut scope = Scope::new([
        Node::new("hero", "section").rect(Rect::new(0.0, 0.0, 1280.0, 600.0)),
        Node::new("about", "section").rect(Rect::new(900.0, 0.0, 1280.0, 600.0)),
    ]);

    scope.emit(Patch::ScrollIntoView { target: ElementId::from("about") });
    assert!((scope.document.scroll_top - 900.0).abs() < f64::EPSILON);

    scope.emit(Patch::ScrollTo { top: -40.0 });
    assert!(scope.document.scroll_top.abs() < f64::EPSILON);

    scope.emit(Patch::LockBodyScroll { locked: true });
    scope.emit(Patch::PushHistory { hash: "#about".into() });
    assert!(scope.document.body_scroll_locked);
    assert_eq!(scope.document.location_hash.as_deref(), Some("#about"));
}

#[test]
fn snapshot_round_trips_through_host_json() {
    let raw = r#"{
        "nodes": [
            { "id": "stat", "tag": "span", "classes": ["counter"], "attributes": { "data-count": "42" } }
        ]
    }"#;
    let scope: Scope = serde_json::from_str(raw).expect("scope json");
    let node = scope.get(&"stat".into()).expect("stat node");
    assert_eq!(node.attribute("data-count"), Some("42"));
    assert!(node.has_class("counter"));
    assert!(node.parent.is_none());
}

#[test]
fn reflow_updates_only_reported_geometry() {
    let mut scope = Scope::new([Node::new("panel", "div").rect(Rect::new(300.0, 0.0, 600.0, 0.0)).scroll_height(64.0)]);

    assert!(scope.reflow(&LayoutUpdate::new("panel").scroll_height(180.0)));
    let panel = scope.get(&ElementId::from("panel")).expect("panel");
    assert!((panel.scroll_height - 180.0).abs() < f64::EPSILON);
    assert!((panel.rect.top - 300.0).abs() < f64::EPSILON);

    assert!(!scope.reflow(&LayoutUpdate::new("gone").scroll_height(1.0)));
}
