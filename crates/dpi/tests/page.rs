use dpi::domain::capabilities::Capabilities;
use dpi::domain::dom::{ElementId, LayoutUpdate, Node, Patch, Scope};
use dpi::domain::event::Event;
use dpi::domain::geometry::{Rect, Viewport};
use dpi::features::contact::{ContactError, ContactSubmission, FormState, Submitter, TracingSubmitter};
use dpi::{Page, PageError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Debug, Default)]
struct CountingSubmitter {
    calls: AtomicUsize,
}

impl Submitter for CountingSubmitter {
    async fn submit(&self, _: &ContactSubmission) -> Result<(), ContactError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn site() -> Scope {
    let mut scope = Scope::new([
        Node::new("site-header", "header").class("header").rect(Rect::new(0.0, 0.0, 1280.0, 70.0)),
        Node::new("q0", "button").class("faq-question"),
        Node::new("a0", "div").scroll_height(120.0),
        Node::new("q1", "button").class("faq-question"),
        Node::new("a1", "div").scroll_height(80.0),
        Node::new("contactForm", "form"),
        Node::new("name", "input").child_of("contactForm"),
        Node::new("email", "input").child_of("contactForm"),
        Node::new("subject", "input").child_of("contactForm"),
        Node::new("message", "textarea").child_of("contactForm"),
        Node::new("privacy", "input").attr("type", "checkbox").child_of("contactForm"),
        Node::new("send", "button").class("submit-btn").child_of("contactForm"),
        Node::new("formSuccess", "div"),
        Node::new("formError", "div"),
    ]);
    scope.document.location_path = "/contact.html".to_owned();
    scope
}

fn node<'a>(page: &'a Page, id: &str) -> &'a Node {
    page.scope().get(&ElementId::from(id)).expect("node exists")
}

const fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn input(target: &str, value: &str) -> Event {
    Event::Input { target: target.into(), value: value.to_owned(), checked: None }
}

fn tick_box(target: &str, checked: bool) -> Event {
    Event::Input { target: target.into(), value: "on".to_owned(), checked: Some(checked) }
}

fn fill(page: &mut Page, email: &str) {
    for (at, event) in [
        input("name", "Ada"),
        input("email", email),
        input("subject", "Website"),
        input("message", "Hello"),
        tick_box("privacy", true),
    ]
    .iter()
    .enumerate()
    {
        page.dispatch(ms(100 + at as u64), event);
    }
}

#[test]
fn mounts_only_what_the_page_has() {
    let page = Page::new(site(), Capabilities::BROWSER);
    assert_eq!(page.behaviors(), ["header-scroll", "faq", "contact-form"]);
    assert_eq!(page.contact_state(), Some(FormState::Editing));
    assert!(Page::new(Scope::default(), Capabilities::BROWSER).behaviors().is_empty());
}

#[test]
fn dispatch_applies_patches_to_the_scope() {
    let mut page = Page::new(site(), Capabilities::BROWSER);

    page.dispatch(ms(0), &Event::Ready);
    assert_eq!(node(&page, "q0").attribute("aria-expanded"), Some("true"));
    assert_eq!(node(&page, "a0").style("max-height"), Some("120px"));

    page.dispatch(ms(10), &Event::Click { target: "q1".into() });
    assert_eq!(node(&page, "q0").attribute("aria-expanded"), Some("false"));
    assert_eq!(node(&page, "a1").style("max-height"), Some("80px"));

    page.dispatch(ms(20), &Event::Scroll { top: 80.0 });
    assert!((page.scope().document.scroll_top - 80.0).abs() < f64::EPSILON);
    assert!(node(&page, "site-header").has_class("scrolled"));
}

#[test]
fn resize_updates_viewport() {
    let mut page = Page::new(site(), Capabilities::BROWSER).with_viewport(Viewport::new(1024.0, 768.0));
    page.dispatch(ms(0), &Event::Resize { viewport: Viewport::new(390.0, 844.0), layout: Vec::new() });
    assert_eq!(page.viewport(), Viewport::new(390.0, 844.0));
}

#[test]
fn resize_layout_feeds_panel_recompute() {
    let snapshot = r#"{
        "nodes": [
            { "id": "q0", "tag": "button", "classes": ["faq-question"] },
            { "id": "a0", "tag": "div", "scroll_height": 64.0 }
        ]
    }"#;
    let mut page = Page::from_json(snapshot, Capabilities::BROWSER).expect("valid snapshot");
    page.dispatch(ms(0), &Event::Ready);
    assert_eq!(node(&page, "a0").style("max-height"), Some("64px"));

    let resize = Event::Resize {
        viewport: Viewport::new(390.0, 844.0),
        layout: vec![LayoutUpdate::new("a0").scroll_height(180.0), LayoutUpdate::new("gone").scroll_height(1.0)],
    };
    assert!(page.dispatch(ms(1000), &resize).is_empty());
    assert!((node(&page, "a0").scroll_height - 180.0).abs() < f64::EPSILON);

    let patches = page.dispatch(ms(1300), &Event::Tick);
    assert_eq!(patches, vec![Patch::style(&ElementId::from("a0"), "max-height", "180px")]);
    assert_eq!(node(&page, "a0").style("max-height"), Some("180px"));
}

#[test]
fn input_events_update_values_and_checkboxes() {
    let mut page = Page::new(site(), Capabilities::BROWSER);
    fill(&mut page, "ada@dpi.dev");
    assert_eq!(node(&page, "email").value, "ada@dpi.dev");
    assert!(node(&page, "privacy").checked);
    assert_eq!(node(&page, "privacy").value, "");

    page.dispatch(ms(500), &tick_box("privacy", false));
    assert!(!node(&page, "privacy").checked);
    assert_eq!(node(&page, "privacy").value, "");
}

#[tokio::test]
async fn submit_event_is_delivered_once() {
    let mut page = Page::new(site(), Capabilities::BROWSER);
    let submitter = CountingSubmitter::default();
    fill(&mut page, "ada@dpi.dev");

    page.dispatch(ms(1000), &Event::Submit { target: "contactForm".into() });
    assert_eq!(page.contact_state(), Some(FormState::Submitting));
    assert_eq!(node(&page, "send").attribute("disabled"), Some("true"));

    page.dispatch(ms(1010), &Event::Submit { target: "contactForm".into() });
    page.flush_submissions(&submitter).await;
    assert_eq!(page.contact_state(), Some(FormState::Succeeded));
    assert_eq!(node(&page, "formSuccess").style("display"), Some("block"));
    assert_eq!(node(&page, "send").attribute("disabled"), None);

    assert!(page.flush_submissions(&submitter).await.is_empty());
    assert_eq!(submitter.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn invalid_submission_focuses_first_error() {
    let mut page = Page::new(site(), Capabilities::BROWSER);
    fill(&mut page, "not-an-email");

    page.submit_contact(&TracingSubmitter).await;
    assert_eq!(page.contact_state(), Some(FormState::Editing));
    assert_eq!(page.scope().document.focused, Some(ElementId::from("email")));
}

#[test]
fn snapshot_json() {
    let snapshot = r#"{
        "nodes": [
            { "id": "q0", "tag": "button", "classes": ["faq-question"] },
            { "id": "a0", "tag": "div", "scroll_height": 64.0 }
        ],
        "document": { "location_path": "/faq.html" }
    }"#;
    let page = Page::from_json(snapshot, Capabilities::empty()).expect("valid snapshot");
    assert_eq!(page.behaviors(), ["faq"]);

    let err = Page::from_json("{ nodes: [] }", Capabilities::empty()).expect_err("not json");
    assert!(matches!(err, PageError::Snapshot { .. }));
    assert!(err.to_string().starts_with("Invalid page snapshot (Parsing page snapshot)"));
}
