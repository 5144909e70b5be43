use dpi_kernel::domain::constants::{ALT, CLASS_SHOW, SRC};
use dpi_kernel::domain::dom::{ElementId, Node, Patch, Scope};
use dpi_kernel::domain::event::{Event, Key};
use dpi_kernel::domain::registry::{Behavior, Context};
use tracing::debug;

pub const LIGHTBOX: &str = "lightbox";
pub const PORTFOLIO_IMAGE: &str = "portfolio-img";
pub const CLOSE_LIGHTBOX: &str = "close-lightbox";
pub const LIGHTBOX_CAPTION: &str = "lightbox-caption";
/// Caption used when the image has no `alt` text.
pub const DEFAULT_CAPTION: &str = "Portfolio Item";

/// Full-screen view of a portfolio image.
#[derive(Debug)]
pub struct Lightbox {
    overlay: ElementId,
    image: Option<ElementId>,
    caption: Option<ElementId>,
    open: bool,
}

impl Lightbox {
    /// Needs `#lightbox` and at least one image inside `.portfolio-img`.
    #[must_use]
    pub fn mount(scope: &Scope) -> Option<Self> {
        let overlay = ElementId::from(LIGHTBOX);
        scope.get(&overlay)?;
        if !scope.nodes().iter().any(|n| is_portfolio_image(scope, n)) {
            return None;
        }

        let image = scope.nodes().iter().find(|n| n.tag == "img" && n.id != overlay && scope.is_within(&n.id, &overlay));
        let caption = scope.descendants_with_class(&overlay, LIGHTBOX_CAPTION).next();
        Some(Self {
            image: image.map(|n| n.id.clone()),
            caption: caption.map(|n| n.id.clone()),
            overlay,
            open: false,
        })
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    fn show(&mut self, source: &Node) -> Vec<Patch> {
        self.open = true;
        let caption = source.attribute(ALT).filter(|alt| !alt.is_empty()).unwrap_or(DEFAULT_CAPTION);
        debug!(image = %source.id, "Lightbox opened");

        let mut patches = Vec::with_capacity(4);
        if let Some(image) = &self.image {
            patches.push(Patch::attribute(image, SRC, source.attribute(SRC).unwrap_or_default()));
        }
        if let Some(slot) = &self.caption {
            patches.push(Patch::text(slot, caption));
        }
        patches.push(Patch::class(&self.overlay, CLASS_SHOW, true));
        patches.push(Patch::LockBodyScroll { locked: true });
        patches
    }

    fn hide(&mut self) -> [Patch; 2] {
        self.open = false;
        [Patch::class(&self.overlay, CLASS_SHOW, false), Patch::LockBodyScroll { locked: false }]
    }
}

impl Behavior for Lightbox {
    fn name(&self) -> &'static str {
        "lightbox"
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) {
        let scope = cx.scope();
        match event {
            Event::Click { target } if self.open => {
                let on_close = scope.get(target).is_some_and(|n| n.has_class(CLOSE_LIGHTBOX));
                if target == &self.overlay || on_close {
                    cx.extend(self.hide());
                }
            },
            Event::Click { target } => {
                if let Some(source) = scope.get(target).filter(|n| is_portfolio_image(scope, n)) {
                    let patches = self.show(source);
                    cx.extend(patches);
                }
            },
            Event::Key { key: Key::Escape, .. } if self.open => cx.extend(self.hide()),
            _ => {},
        }
    }
}

fn is_portfolio_image(scope: &Scope, node: &Node) -> bool {
    node.tag == "img" && scope.closest_with_class(&node.id, PORTFOLIO_IMAGE).is_some()
}
