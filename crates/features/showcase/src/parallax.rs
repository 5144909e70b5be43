use dpi_kernel::domain::dom::{ElementId, Patch, Scope};
use dpi_kernel::domain::event::Event;
use dpi_kernel::domain::registry::{Behavior, Context};

pub const PROJECT_HERO: &str = "project-hero";
/// Share of the scroll distance the hero image moves by.
pub const PARALLAX_FACTOR: f64 = 0.2;

/// Project page hero drifting down at a fraction of the scroll speed.
#[derive(Debug)]
pub struct ProjectHero {
    hero: ElementId,
}

impl ProjectHero {
    #[must_use]
    pub fn mount(scope: &Scope) -> Option<Self> {
        let hero = scope.by_class(PROJECT_HERO).next()?;
        Some(Self { hero: hero.id.clone() })
    }

    #[must_use]
    pub fn transform(top: f64) -> String {
        format!("translateY({}px)", top * PARALLAX_FACTOR)
    }
}

impl Behavior for ProjectHero {
    fn name(&self) -> &'static str {
        "project-hero"
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) {
        let top = match event {
            Event::Scroll { top } => *top,
            // A restored page may open mid-scroll.
            Event::Ready if cx.scroll_top() > 0.0 => cx.scroll_top(),
            _ => return,
        };
        cx.emit(Patch::style(&self.hero, "transform", Self::transform(top)));
    }
}
