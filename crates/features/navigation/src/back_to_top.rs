use dpi_kernel::domain::constants::CLASS_SHOW;
use dpi_kernel::domain::dom::{ElementId, Patch, Scope};
use dpi_kernel::domain::event::Event;
use dpi_kernel::domain::registry::{Behavior, Context};

pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

#[derive(Debug)]
pub struct BackToTop {
    button: ElementId,
    visible: bool,
}

impl BackToTop {
    /// `#backToTop`, else the first `.back-to-top`.
    #[must_use]
    pub fn mount(scope: &Scope) -> Option<Self> {
        let button = scope.get(&"backToTop".into()).or_else(|| scope.by_class("back-to-top").next())?;
        Some(Self { button: button.id.clone(), visible: false })
    }
}

impl Behavior for BackToTop {
    fn name(&self) -> &'static str {
        "back-to-top"
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) {
        match event {
            Event::Scroll { top } => {
                let visible = *top > BACK_TO_TOP_THRESHOLD;
                if visible != self.visible {
                    self.visible = visible;
                    cx.emit(Patch::class(&self.button, CLASS_SHOW, visible));
                }
            },
            Event::Click { target } if cx.scope().is_within(target, &self.button) => {
                cx.emit(Patch::ScrollTo { top: 0.0 });
            },
            _ => {},
        }
    }
}
