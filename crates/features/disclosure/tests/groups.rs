use dpi_disclosure::{DisclosureGroup, Policy, init};
use dpi_kernel::domain::capabilities::Capabilities;
use dpi_kernel::domain::dom::{ElementId, LayoutUpdate, Node, Patch, Scope};
use dpi_kernel::domain::event::{Event, Key};
use dpi_kernel::domain::geometry::Viewport;
use dpi_kernel::domain::registry::{Behavior, Context};
use std::time::Duration;

fn dispatch(behavior: &mut dyn Behavior, scope: &mut Scope, at_ms: u64, event: &Event) -> Vec<Patch> {
    let mut patches = Vec::new();
    let now = Duration::from_millis(at_ms);
    let mut cx = Context::new(now, Viewport::DESKTOP, Capabilities::BROWSER, scope, &mut patches);
    behavior.handle(event, &mut cx);
    for patch in &patches {
        scope.apply(patch);
    }
    patches
}

fn faq_page() -> Scope {
    Scope::new([
        Node::new("faq", "section"),
        Node::new("q0", "button").class("faq-question").child_of("faq"),
        Node::new("a0", "div").class("faq-answer").child_of("faq").scroll_height(80.0),
        Node::new("q1", "button").class("faq-question").child_of("faq"),
        Node::new("a1", "div").class("faq-answer").child_of("faq").scroll_height(120.0),
        Node::new("q1-icon", "i").child_of("q1"),
        Node::new("q2", "button").class("faq-question").child_of("faq"),
        Node::new("a2", "div").class("faq-answer").child_of("faq").scroll_height(40.0),
    ])
}

fn attr<'a>(scope: &'a Scope, id: &str, name: &str) -> Option<&'a str> {
    scope.get(&ElementId::from(id)).and_then(|n| n.attribute(name))
}

fn max_height<'a>(scope: &'a Scope, id: &str) -> Option<&'a str> {
    scope.get(&ElementId::from(id)).and_then(|n| n.style("max-height"))
}

#[test]
fn faq_opens_first_question_on_ready() {
    let mut scope = faq_page();
    let mut group = DisclosureGroup::mount(&scope, "faq", "faq-question", Policy::Single).expect("mounted");
    dispatch(&mut group, &mut scope, 0, &Event::Ready);

    assert_eq!(attr(&scope, "q0", "aria-expanded"), Some("true"));
    assert_eq!(max_height(&scope, "a0"), Some("80px"));
    assert_eq!(attr(&scope, "q1", "aria-expanded"), Some("false"));
    assert_eq!(max_height(&scope, "a1"), Some("0"));
}

#[test]
fn clicking_inside_a_trigger_switches_the_open_answer() {
    let mut scope = faq_page();
    let mut group = DisclosureGroup::mount(&scope, "faq", "faq-question", Policy::Single).expect("mounted");
    dispatch(&mut group, &mut scope, 0, &Event::Ready);
    dispatch(&mut group, &mut scope, 10, &Event::Click { target: "q1-icon".into() });

    assert_eq!(attr(&scope, "q0", "aria-expanded"), Some("false"));
    assert_eq!(max_height(&scope, "a0"), Some("0"));
    assert_eq!(attr(&scope, "q1", "aria-expanded"), Some("true"));
    assert_eq!(max_height(&scope, "a1"), Some("120px"));

    dispatch(&mut group, &mut scope, 20, &Event::Click { target: "q1".into() });
    assert_eq!(group.expanded().count(), 0);
}

#[test]
fn enter_and_space_act_like_click() {
    let mut scope = faq_page();
    let mut group = DisclosureGroup::mount(&scope, "faq", "faq-question", Policy::Single).expect("mounted");

    dispatch(&mut group, &mut scope, 0, &Event::Key { target: Some("q2".into()), key: Key::Enter });
    assert!(group.is_expanded(&"q2".into()));

    dispatch(&mut group, &mut scope, 0, &Event::Key { target: Some("q2".into()), key: Key::Space });
    assert!(!group.is_expanded(&"q2".into()));

    let patches = dispatch(&mut group, &mut scope, 0, &Event::Key { target: Some("q2".into()), key: Key::Tab });
    assert!(patches.is_empty());
}

#[test]
fn resize_recomputes_open_panel_after_quiet_period() {
    let mut scope = faq_page();
    let mut group = DisclosureGroup::mount(&scope, "faq", "faq-question", Policy::Single).expect("mounted");
    dispatch(&mut group, &mut scope, 0, &Event::Ready);

    let layout = vec![LayoutUpdate::new("a0").scroll_height(140.0)];
    for update in &layout {
        scope.reflow(update);
    }
    let resize = Event::Resize { viewport: Viewport::new(390.0, 844.0), layout };
    dispatch(&mut group, &mut scope, 1000, &resize);
    dispatch(&mut group, &mut scope, 1100, &resize);

    assert!(dispatch(&mut group, &mut scope, 1300, &Event::Tick).is_empty(), "second resize restarted the wait");

    let patches = dispatch(&mut group, &mut scope, 1350, &Event::Tick);
    assert_eq!(patches, vec![Patch::style(&"a0".into(), "max-height", "140px")]);
    assert_eq!(attr(&scope, "q0", "aria-expanded"), Some("true"));
    assert!(dispatch(&mut group, &mut scope, 2000, &Event::Tick).is_empty());
}

#[test]
fn accordion_uses_aria_controls_and_independent_sections() {
    let mut scope = Scope::new([
        Node::new("h1", "button").class("accordion-header").attr("aria-controls", "c1").attr("aria-expanded", "true"),
        Node::new("h2", "button").class("accordion-header").attr("aria-controls", "c2").attr("aria-expanded", "false"),
        Node::new("h3", "button").class("accordion-header").attr("aria-controls", "gone"),
        Node::new("c1", "div").scroll_height(50.0),
        Node::new("c2", "div").scroll_height(60.0),
    ]);
    let mut group =
        DisclosureGroup::mount(&scope, "accordion", "accordion-header", Policy::Multiple).expect("mounted");
    assert_eq!(group.items().len(), 2, "trigger without a panel is skipped");

    dispatch(&mut group, &mut scope, 0, &Event::Ready);
    dispatch(&mut group, &mut scope, 5, &Event::Click { target: "h2".into() });

    assert_eq!(max_height(&scope, "c1"), Some("50px"));
    assert_eq!(max_height(&scope, "c2"), Some("60px"));
}

#[test]
fn init_skips_pages_without_triggers() {
    let scope = Scope::new([Node::new("hero", "section")]);
    assert!(init(&scope, Capabilities::BROWSER).is_empty());

    let behaviors = init(&faq_page(), Capabilities::BROWSER);
    assert_eq!(behaviors.iter().map(|b| b.name()).collect::<Vec<_>>(), vec!["faq"]);
}

fn accordion(container: Node) -> Scope {
    Scope::new([
        container,
        Node::new("h1", "button").class("accordion-header").attr("aria-controls", "c1").child_of("details"),
        Node::new("c1", "div").scroll_height(50.0).child_of("details"),
        Node::new("h2", "button").class("accordion-header").attr("aria-controls", "c2").child_of("details"),
        Node::new("c2", "div").scroll_height(60.0).child_of("details"),
    ])
}

fn open_both(scope: &mut Scope) {
    let mut behaviors = init(scope, Capabilities::BROWSER);
    assert_eq!(behaviors.len(), 1);
    let group = behaviors[0].as_mut();
    dispatch(group, scope, 0, &Event::Ready);
    dispatch(group, scope, 5, &Event::Click { target: "h2".into() });
}

#[test]
fn contact_page_accordion_keeps_one_section_open() {
    let mut scope = accordion(Node::new("details", "div").class("accordion"));
    assert_eq!(init(&scope, Capabilities::BROWSER)[0].name(), "accordion");

    open_both(&mut scope);
    assert_eq!(attr(&scope, "h1", "aria-expanded"), Some("false"));
    assert_eq!(max_height(&scope, "c1"), Some("0"));
    assert_eq!(max_height(&scope, "c2"), Some("60px"));
}

#[test]
fn marked_accordion_toggles_sections_independently() {
    let mut scope = accordion(Node::new("details", "div").class("accordion").attr("data-accordion", "multiple"));
    assert_eq!(init(&scope, Capabilities::BROWSER)[0].name(), "accordion-sections");
    assert_eq!(Policy::for_trigger(&scope, &"h1".into()), Policy::Multiple);

    open_both(&mut scope);
    assert_eq!(attr(&scope, "h1", "aria-expanded"), Some("true"));
    assert_eq!(max_height(&scope, "c1"), Some("50px"));
    assert_eq!(max_height(&scope, "c2"), Some("60px"));
}
