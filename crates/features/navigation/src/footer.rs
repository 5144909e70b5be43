use dpi_kernel::domain::dom::{ElementId, Patch, Scope};
use dpi_kernel::domain::event::Event;
use dpi_kernel::domain::registry::{Behavior, Context};

pub const CURRENT_YEAR: &str = "current-year";

/// Fills `#current-year` in the footer copyright line from the host clock.
#[derive(Debug)]
pub struct CurrentYear {
    target: ElementId,
}

impl CurrentYear {
    #[must_use]
    pub fn mount(scope: &Scope) -> Option<Self> {
        let target = ElementId::from(CURRENT_YEAR);
        scope.contains(&target).then_some(Self { target })
    }
}

impl Behavior for CurrentYear {
    fn name(&self) -> &'static str {
        "current-year"
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) {
        if !matches!(event, Event::Ready) {
            return;
        }
        // Hosts without a clock leave the year written in the markup.
        if let Some(year) = cx.scope().document.year {
            cx.emit(Patch::text(&self.target, year.to_string()));
        }
    }
}
