use dpi_kernel::domain::constants::CLASS_SCROLLED;
use dpi_kernel::domain::dom::{ElementId, Patch, Scope};
use dpi_kernel::domain::event::Event;
use dpi_kernel::domain::registry::{Behavior, Context};

pub const SCROLLED_THRESHOLD: f64 = 50.0;
pub const HIDE_AFTER: f64 = 100.0;

const SHOWN: &str = "translate3d(0, 0, 0)";
const HIDDEN: &str = "translate3d(0, -100%, 0)";

/// The page header's element: `.header`, else `#navbar`, else `.navbar`.
#[must_use]
pub fn find_header(scope: &Scope) -> Option<ElementId> {
    scope
        .by_class("header")
        .next()
        .or_else(|| scope.get(&"navbar".into()))
        .or_else(|| scope.by_class("navbar").next())
        .map(|n| n.id.clone())
}

/// Marks the header `scrolled` past a threshold and slides it away while scrolling down.
#[derive(Debug)]
pub struct HeaderScroll {
    header: ElementId,
    threshold: f64,
    last_top: f64,
    scrolled: Option<bool>,
    hidden: Option<bool>,
}

impl HeaderScroll {
    #[must_use]
    pub fn mount(scope: &Scope) -> Option<Self> {
        Some(Self::new(find_header(scope)?))
    }

    #[must_use]
    pub const fn new(header: ElementId) -> Self {
        Self { header, threshold: SCROLLED_THRESHOLD, last_top: 0.0, scrolled: None, hidden: None }
    }

    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    fn update(&mut self, top: f64, cx: &mut Context<'_>) {
        let scrolled = top > self.threshold;
        if self.scrolled != Some(scrolled) {
            self.scrolled = Some(scrolled);
            cx.emit(Patch::class(&self.header, CLASS_SCROLLED, scrolled));
        }

        let hidden = top > self.last_top && top > HIDE_AFTER;
        if self.hidden != Some(hidden) {
            self.hidden = Some(hidden);
            cx.emit(Patch::style(&self.header, "transform", if hidden { HIDDEN } else { SHOWN }));
        }
        self.last_top = top.max(0.0);
    }
}

impl Behavior for HeaderScroll {
    fn name(&self) -> &'static str {
        "header-scroll"
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) {
        match event {
            Event::Ready => self.update(cx.scroll_top(), cx),
            Event::Scroll { top } => self.update(*top, cx),
            _ => {},
        }
    }
}
