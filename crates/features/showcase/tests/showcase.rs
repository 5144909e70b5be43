use dpi_kernel::domain::capabilities::Capabilities;
use dpi_kernel::domain::dom::{ElementId, Node, Patch, Scope};
use dpi_kernel::domain::event::{Event, Key};
use dpi_kernel::domain::geometry::Viewport;
use dpi_kernel::domain::registry::{Behavior, Context};
use dpi_showcase::{Lightbox, PortfolioFilter, ProjectHero, ShowcaseError, TestimonialCarousel, TextRotator, init};
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

fn node<'a>(scope: &'a Scope, id: &str) -> &'a Node {
    scope.get(&ElementId::from(id)).expect("node in scope")
}

fn style<'a>(scope: &'a Scope, id: &str, property: &str) -> Option<&'a str> {
    node(scope, id).style(property)
}

fn click(id: &str) -> Event {
    Event::Click { target: id.into() }
}

fn portfolio_page() -> Scope {
    Scope::new([
        Node::new("btn-all", "button").class("filter-btn").attr("data-filter", "all"),
        Node::new("btn-web", "button").class("filter-btn").attr("data-filter", "web"),
        Node::new("btn-web-label", "span").child_of("btn-web"),
        Node::new("grid", "div").class("portfolio-grid"),
        Node::new("p1", "div").class("portfolio-item").attr("data-category", "web").child_of("grid"),
        Node::new("p2", "div").class("portfolio-item").attr("data-category", "brand").child_of("grid"),
        Node::new("p3", "div").class("portfolio-item").attr("data-category", "web").child_of("grid"),
    ])
}

#[test]
fn portfolio_items_stagger_in_on_ready() {
    let mut scope = portfolio_page();
    let mut filter = PortfolioFilter::mount(&scope).expect("filter");

    dispatch(&mut filter, &mut scope, 0, &Event::Ready);
    assert_eq!(style(&scope, "p1", "opacity"), Some("1"));
    assert_eq!(style(&scope, "p2", "opacity"), Some("0"));
    assert_eq!(style(&scope, "p3", "opacity"), Some("0"));

    dispatch(&mut filter, &mut scope, 150, &Event::Tick);
    assert_eq!(style(&scope, "p2", "opacity"), Some("1"));
    assert_eq!(style(&scope, "p3", "opacity"), Some("0"));

    dispatch(&mut filter, &mut scope, 200, &Event::Tick);
    assert_eq!(style(&scope, "p3", "transform"), Some("translateY(0)"));
}

#[test]
fn category_filter_fades_then_hides() {
    let mut scope = portfolio_page();
    let mut filter = PortfolioFilter::mount(&scope).expect("filter");
    dispatch(&mut filter, &mut scope, 0, &Event::Ready);
    dispatch(&mut filter, &mut scope, 500, &Event::Tick);

    let patches = dispatch(&mut filter, &mut scope, 1000, &click("btn-web-label"));
    assert_eq!(filter.active(), Some("web"));
    assert!(node(&scope, "btn-web").has_class("active"));
    assert!(!node(&scope, "btn-all").has_class("active"));
    assert!(patches.contains(&Patch::ScrollIntoView { target: "grid".into() }));
    assert_eq!(style(&scope, "p1", "display"), Some("block"));
    assert_eq!(style(&scope, "p2", "opacity"), Some("0"));
    assert_eq!(style(&scope, "p2", "display"), None, "still fading out");

    dispatch(&mut filter, &mut scope, 1010, &Event::Tick);
    assert_eq!(style(&scope, "p1", "opacity"), Some("1"));

    dispatch(&mut filter, &mut scope, 1300, &Event::Tick);
    assert_eq!(style(&scope, "p2", "display"), Some("none"));
    assert_eq!(style(&scope, "p3", "display"), Some("block"));
    assert_eq!(filter.matching("web").collect::<Vec<_>>(), vec![&ElementId::from("p1"), &ElementId::from("p3")]);
}

#[test]
fn newer_filter_cancels_pending_hide() {
    let mut scope = portfolio_page();
    let mut filter = PortfolioFilter::mount(&scope).expect("filter");

    dispatch(&mut filter, &mut scope, 2000, &click("btn-web"));
    dispatch(&mut filter, &mut scope, 2100, &click("btn-all"));
    dispatch(&mut filter, &mut scope, 2400, &Event::Tick);

    assert_eq!(style(&scope, "p2", "display"), Some("block"));
    assert_eq!(style(&scope, "p2", "opacity"), Some("1"));
    assert!(node(&scope, "btn-all").has_class("active"));
}

fn gallery_page() -> Scope {
    Scope::new([
        Node::new("card", "div").class("portfolio-img"),
        Node::new("shot", "img").child_of("card").attr("src", "/img/bridge.jpg").attr("alt", "Bridge"),
        Node::new("card2", "div").class("portfolio-img"),
        Node::new("shot2", "img").child_of("card2").attr("src", "/img/tower.jpg"),
        Node::new("lightbox", "div"),
        Node::new("lb-content", "div").class("lightbox-content").child_of("lightbox"),
        Node::new("lb-close", "span").class("close-lightbox").child_of("lb-content"),
        Node::new("lb-img", "img").child_of("lb-content"),
        Node::new("lb-caption", "div").class("lightbox-caption").child_of("lb-content"),
    ])
}

#[test]
fn lightbox_opens_with_image_and_caption() {
    let mut scope = gallery_page();
    let mut lightbox = Lightbox::mount(&scope).expect("lightbox");

    dispatch(&mut lightbox, &mut scope, 0, &click("shot"));
    assert!(lightbox.is_open());
    assert_eq!(node(&scope, "lb-img").attribute("src"), Some("/img/bridge.jpg"));
    assert_eq!(node(&scope, "lb-caption").text, "Bridge");
    assert!(node(&scope, "lightbox").has_class("show"));
    assert!(scope.document.body_scroll_locked);

    assert!(dispatch(&mut lightbox, &mut scope, 10, &click("lb-img")).is_empty(), "content click keeps it open");

    dispatch(&mut lightbox, &mut scope, 20, &click("lb-close"));
    assert!(!lightbox.is_open());
    assert!(!node(&scope, "lightbox").has_class("show"));
    assert!(!scope.document.body_scroll_locked);
}

#[test]
fn lightbox_defaults_caption_and_closes_on_escape_or_backdrop() {
    let mut scope = gallery_page();
    let mut lightbox = Lightbox::mount(&scope).expect("lightbox");

    dispatch(&mut lightbox, &mut scope, 0, &click("shot2"));
    assert_eq!(node(&scope, "lb-caption").text, "Portfolio Item");

    dispatch(&mut lightbox, &mut scope, 10, &Event::Key { target: None, key: Key::Escape });
    assert!(!lightbox.is_open());
    assert!(dispatch(&mut lightbox, &mut scope, 20, &Event::Key { target: None, key: Key::Escape }).is_empty());

    dispatch(&mut lightbox, &mut scope, 30, &click("shot"));
    dispatch(&mut lightbox, &mut scope, 40, &click("lightbox"));
    assert!(!lightbox.is_open());
}

#[test]
fn lightbox_needs_overlay_and_images() {
    let scope = Scope::new([Node::new("card", "div").class("portfolio-img"), Node::new("lightbox", "div")]);
    assert!(Lightbox::mount(&scope).is_none());
}

#[test]
fn carousel_rotates_every_five_seconds() {
    let mut scope = Scope::new(["t1", "t2", "t3"].map(|id| Node::new(id, "blockquote").class("testimonial")));
    let mut carousel = TestimonialCarousel::mount(&scope).expect("carousel");

    dispatch(&mut carousel, &mut scope, 0, &Event::Ready);
    assert_eq!(style(&scope, "t1", "display"), Some("block"));
    assert_eq!(style(&scope, "t2", "display"), Some("none"));

    assert!(dispatch(&mut carousel, &mut scope, 4999, &Event::Tick).is_empty());
    dispatch(&mut carousel, &mut scope, 5000, &Event::Tick);
    assert_eq!(carousel.current(), &ElementId::from("t2"));
    assert_eq!(style(&scope, "t1", "display"), Some("none"));

    dispatch(&mut carousel, &mut scope, 16_000, &Event::Tick);
    assert_eq!(carousel.current(), &ElementId::from("t1"));
}

#[test]
fn single_testimonial_is_static() {
    let scope = Scope::new([Node::new("t1", "blockquote").class("testimonial")]);
    assert!(TestimonialCarousel::mount(&scope).is_none());
}

fn hero(words: &str) -> Scope {
    Scope::new([
        Node::new("rotator", "h1").class("text-rotator").attr("data-rotate", words),
        Node::new("word", "span").class("rotating-text").child_of("rotator").text("Websites"),
    ])
}

#[test]
fn rotator_fades_swaps_and_fades_back() {
    let mut scope = hero(r#"["Websites", "Brands", "Apps"]"#);
    let mut rotator = TextRotator::mount(&scope).expect("rotator");

    dispatch(&mut rotator, &mut scope, 0, &Event::Ready);
    assert!(dispatch(&mut rotator, &mut scope, 3999, &Event::Tick).is_empty(), "lead-in plus one interval");

    let patches = dispatch(&mut rotator, &mut scope, 4000, &Event::Tick);
    assert_eq!(patches, vec![Patch::style(&"word".into(), "opacity", "0")]);

    dispatch(&mut rotator, &mut scope, 4500, &Event::Tick);
    assert_eq!(node(&scope, "word").text, "Brands");
    assert_eq!(style(&scope, "word", "opacity"), Some("0"));

    dispatch(&mut rotator, &mut scope, 4550, &Event::Tick);
    assert_eq!(style(&scope, "word", "opacity"), Some("1"));

    dispatch(&mut rotator, &mut scope, 7000, &Event::Tick);
    dispatch(&mut rotator, &mut scope, 7600, &Event::Tick);
    assert_eq!(rotator.word(), "Apps");
    assert_eq!(style(&scope, "word", "opacity"), Some("1"));
}

#[test]
fn rotator_rejects_bad_markup() {
    let err = TextRotator::from_markup(&hero("[oops")).expect_err("invalid json");
    assert!(matches!(err, ShowcaseError::Markup { .. }));
    assert!(err.to_string().starts_with("Showcase markup error (data-rotate)"));
    assert!(TextRotator::mount(&hero("[oops")).is_none());

    let headless = Scope::new([Node::new("rotator", "h1").class("text-rotator").attr("data-rotate", r#"["A"]"#)]);
    let err = TextRotator::from_markup(&headless).expect_err("no rotating text");
    assert!(matches!(err, ShowcaseError::MissingElement { .. }));

    assert!(TextRotator::from_markup(&hero("[]")).expect("empty list is fine").is_none());
}

#[test]
fn init_mounts_what_the_page_has() {
    let mut nodes = portfolio_page().nodes().to_vec();
    nodes.extend(gallery_page().nodes().iter().cloned());
    nodes.extend(hero(r#"["A", "B"]"#).nodes().iter().cloned());
    let scope = Scope::new(nodes);

    let names: Vec<_> = init(&scope, Capabilities::BROWSER).iter().map(|b| b.name()).collect();
    assert_eq!(names, ["portfolio-filter", "lightbox", "text-rotator"]);
}

#[test]
fn project_hero_follows_a_fifth_of_the_scroll() {
    let mut scope = Scope::new([Node::new("hero", "section").class("project-hero")]);
    let mut hero = ProjectHero::mount(&scope).expect("hero");

    assert!(dispatch(&mut hero, &mut scope, 0, &Event::Ready).is_empty(), "nothing to offset at the top");

    dispatch(&mut hero, &mut scope, 10, &Event::Scroll { top: 500.0 });
    assert_eq!(style(&scope, "hero", "transform"), Some("translateY(100px)"));

    dispatch(&mut hero, &mut scope, 20, &Event::Scroll { top: 0.0 });
    assert_eq!(style(&scope, "hero", "transform"), Some("translateY(0px)"));

    scope.document.scroll_top = 1000.0;
    dispatch(&mut hero, &mut scope, 30, &Event::Ready);
    assert_eq!(style(&scope, "hero", "transform"), Some("translateY(200px)"));
}
