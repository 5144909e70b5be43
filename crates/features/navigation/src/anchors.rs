use crate::error::NavigationError;
use crate::header::find_header;
use dpi_kernel::domain::constants::HREF;
use dpi_kernel::domain::dom::{ElementId, Node, Patch, Scope};
use dpi_kernel::domain::event::Event;
use dpi_kernel::domain::registry::{Behavior, Context};
use tracing::debug;

/// Used when the page has no header element to measure.
pub const DEFAULT_HEADER_HEIGHT: f64 = 80.0;
/// Breathing room between the header and the target's top edge.
pub const ANCHOR_GAP: f64 = 20.0;

/// In-page links scroll below the fixed header and update the URL hash.
#[derive(Debug, Default)]
pub struct AnchorScroll {
    header: Option<ElementId>,
}

impl AnchorScroll {
    #[must_use]
    pub fn mount(scope: &Scope) -> Option<Self> {
        scope
            .nodes()
            .iter()
            .any(is_hash_link)
            .then(|| Self { header: find_header(scope) })
    }

    /// Scroll offset that puts `target` just below the header.
    #[must_use]
    pub fn offset_for(&self, scope: &Scope, target: &Node) -> f64 {
        let header_height = self
            .header
            .as_ref()
            .and_then(|h| scope.get(h))
            .map_or(DEFAULT_HEADER_HEIGHT, |h| h.rect.height);
        target.rect.top - header_height - ANCHOR_GAP
    }
}

fn is_hash_link(node: &Node) -> bool {
    node.tag == "a" && node.attribute(HREF).is_some_and(|h| h.starts_with('#'))
}

/// The element a `#hash` link points at.
pub fn resolve_anchor<'s>(scope: &'s Scope, href: &str) -> Result<&'s Node, NavigationError> {
    if href == "#" || href.starts_with("#!") {
        return Err(NavigationError::PlaceholderAnchor { message: href.to_owned().into(), context: None });
    }
    let id = href.trim_start_matches('#');
    scope.get(&ElementId::from(id)).ok_or_else(|| NavigationError::MissingTarget {
        message: href.to_owned().into(),
        context: None,
    })
}

impl Behavior for AnchorScroll {
    fn name(&self) -> &'static str {
        "anchor-scroll"
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) {
        let Event::Click { target } = event else { return };
        let scope = cx.scope();

        let link = scope
            .get(target)
            .into_iter()
            .chain(scope.ancestors(target))
            .find(|n| is_hash_link(n));
        let Some(href) = link.and_then(|n| n.attribute(HREF)) else { return };

        match resolve_anchor(scope, href) {
            Ok(node) => {
                let top = self.offset_for(scope, node);
                cx.emit(Patch::ScrollTo { top });
                cx.emit(Patch::PushHistory { hash: href.to_owned() });
            },
            Err(err) => debug!(%err, "Anchor click ignored"),
        }
    }
}
