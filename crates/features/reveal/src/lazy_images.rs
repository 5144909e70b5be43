use crate::visibility::observed_ratios;
use dpi_kernel::domain::capabilities::Capabilities;
use dpi_kernel::domain::constants::{DATA_SRC, SRC};
use dpi_kernel::domain::dom::{ElementId, Patch, Scope};
use dpi_kernel::domain::event::Event;
use dpi_kernel::domain::registry::{Behavior, Context};
use tracing::debug;

/// `img[loading="lazy"]` elements carrying a `data-src` to swap in.
#[derive(Debug)]
pub struct LazyImages {
    pending: Vec<(ElementId, String)>,
}

impl LazyImages {
    #[must_use]
    pub fn mount(scope: &Scope) -> Option<Self> {
        let pending: Vec<_> = scope
            .with_attribute(DATA_SRC)
            .filter(|n| n.tag == "img" && n.attribute("loading") == Some("lazy"))
            .filter_map(|n| Some((n.id.clone(), n.attribute(DATA_SRC)?.to_owned())))
            .collect();

        if pending.is_empty() {
            return None;
        }
        debug!(images = pending.len(), "Lazy images mounted");
        Some(Self { pending })
    }

    #[must_use]
    pub fn is_pending(&self, image: &ElementId) -> bool {
        self.pending.iter().any(|(id, _)| id == image)
    }

    fn load(&mut self, image: &ElementId) -> Option<[Patch; 2]> {
        let index = self.pending.iter().position(|(id, _)| id == image)?;
        let (id, source) = self.pending.swap_remove(index);
        Some([Patch::attribute(&id, SRC, source), Patch::RemoveAttribute { target: id, name: DATA_SRC.to_owned() }])
    }
}

impl Behavior for LazyImages {
    fn name(&self) -> &'static str {
        "lazy-images"
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) {
        if self.pending.is_empty() {
            return;
        }

        // Without an observer the browser's own `loading="lazy"` defers the fetch.
        let visible: Vec<ElementId> =
            if matches!(event, Event::Ready) && !cx.capabilities().contains(Capabilities::INTERSECTION_OBSERVER) {
                self.pending.iter().map(|(id, _)| id.clone()).collect()
            } else {
                observed_ratios(event, cx, self.pending.iter().map(|(id, _)| id))
                    .into_iter()
                    .filter(|(_, ratio)| *ratio > 0.0)
                    .map(|(id, _)| id)
                    .collect()
            };

        for image in &visible {
            if let Some(patches) = self.load(image) {
                cx.extend(patches);
            }
        }
    }
}
