use crate::links::NAV_LINK;
use dpi_kernel::domain::constants::{ARIA_EXPANDED, CLASS_ACTIVE};
use dpi_kernel::domain::dom::{ElementId, Patch, Scope};
use dpi_kernel::domain::event::{Event, Key};
use dpi_kernel::domain::registry::{Behavior, Context};
use tracing::debug;

pub const MENU_BUTTON: &str = "mobileMenuBtn";
pub const NAV_MENU: &str = "navMenu";

/// Mobile navigation drawer.
#[derive(Debug)]
pub struct MobileMenu {
    button: ElementId,
    menu: ElementId,
    header: Option<ElementId>,
    open: bool,
}

impl MobileMenu {
    #[must_use]
    pub fn mount(scope: &Scope) -> Option<Self> {
        let button = ElementId::from(MENU_BUTTON);
        let menu = ElementId::from(NAV_MENU);
        if !scope.contains(&button) || !scope.contains(&menu) {
            return None;
        }
        let header = crate::header::find_header(scope);
        Some(Self { button, menu, header, open: false })
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    fn set_open(&mut self, open: bool, cx: &mut Context<'_>) {
        if self.open == open {
            return;
        }
        self.open = open;
        debug!(open, "Mobile menu toggled");
        cx.emit(Patch::attribute(&self.button, ARIA_EXPANDED, if open { "true" } else { "false" }));
        cx.emit(Patch::class(&self.button, CLASS_ACTIVE, open));
        cx.emit(Patch::class(&self.menu, CLASS_ACTIVE, open));
        cx.emit(Patch::LockBodyScroll { locked: open });
    }
}

impl Behavior for MobileMenu {
    fn name(&self) -> &'static str {
        "mobile-menu"
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) {
        let scope = cx.scope();
        match event {
            Event::Click { target } if scope.is_within(target, &self.button) => {
                self.set_open(!self.open, cx);
            },
            Event::Click { target } if self.open => {
                let on_link = scope.closest_with_class(target, NAV_LINK).is_some();
                let outside = self.header.as_ref().is_some_and(|h| !scope.is_within(target, h));
                if on_link || outside {
                    self.set_open(false, cx);
                }
            },
            Event::Key { key: Key::Escape, .. } => self.set_open(false, cx),
            _ => {},
        }
    }
}
