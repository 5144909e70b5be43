use dpi_kernel::domain::constants::{CLASS_ANIMATE, DATA_ANIMATE};
use dpi_kernel::domain::dom::{ElementId, Patch, Scope};
use dpi_kernel::domain::event::Event;
use dpi_kernel::domain::registry::{Behavior, Context};

/// Share of the viewport height an element's top has to clear.
pub const REVEAL_LINE_DIVISOR: f64 = 1.3;

/// Adds `animate` to `[data-animate]` elements once their top passes the reveal line.
#[derive(Debug)]
pub struct ScrollReveal {
    pending: Vec<ElementId>,
}

impl ScrollReveal {
    #[must_use]
    pub fn mount(scope: &Scope) -> Option<Self> {
        let pending: Vec<_> = scope.with_attribute(DATA_ANIMATE).map(|n| n.id.clone()).collect();
        (!pending.is_empty()).then_some(Self { pending })
    }

    #[must_use]
    pub fn pending(&self) -> &[ElementId] {
        &self.pending
    }
}

impl Behavior for ScrollReveal {
    fn name(&self) -> &'static str {
        "scroll-reveal"
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) {
        if !matches!(event, Event::Ready | Event::Scroll { .. } | Event::Resize { .. }) {
            return;
        }

        let line = cx.viewport().height / REVEAL_LINE_DIVISOR;
        let scroll_top = cx.scroll_top();
        let scope = cx.scope();

        let (revealed, pending): (Vec<_>, Vec<_>) = self.pending.drain(..).partition(|id| {
            scope.get(id).is_some_and(|n| n.rect.client_top(scroll_top) < line)
        });
        self.pending = pending;
        cx.extend(revealed.iter().map(|id| Patch::class(id, CLASS_ANIMATE, true)));
    }
}
