//! Navigation feature slice.
//!
//! Everything around the site header: scroll state, the mobile drawer, active link tracking,
//! in-page anchor scrolling, the back-to-top button and the footer year.
mod anchors;
mod back_to_top;
mod error;
mod footer;
mod header;
mod links;
mod menu;

pub use crate::anchors::{ANCHOR_GAP, AnchorScroll, DEFAULT_HEADER_HEIGHT, resolve_anchor};
pub use crate::back_to_top::{BACK_TO_TOP_THRESHOLD, BackToTop};
pub use crate::error::{NavigationError, NavigationErrorExt};
pub use crate::footer::{CURRENT_YEAR, CurrentYear};
pub use crate::header::{HIDE_AFTER, HeaderScroll, SCROLLED_THRESHOLD, find_header};
pub use crate::links::{ActiveSection, CurrentPage, NAV_LINK, SECTION_OFFSET, page_name};
pub use crate::menu::{MENU_BUTTON, MobileMenu, NAV_MENU};
use dpi_kernel::domain::capabilities::Capabilities;
use dpi_kernel::domain::dom::Scope;
use dpi_kernel::domain::registry::BoxedBehavior;

/// Mount every navigation behavior present in `scope`.
#[must_use]
pub fn init(scope: &Scope, _capabilities: Capabilities) -> Vec<BoxedBehavior> {
    let mut behaviors: Vec<BoxedBehavior> = Vec::new();
    if let Some(header) = HeaderScroll::mount(scope) {
        behaviors.push(Box::new(header));
    }
    if let Some(menu) = MobileMenu::mount(scope) {
        behaviors.push(Box::new(menu));
    }
    if let Some(spy) = ActiveSection::mount(scope) {
        behaviors.push(Box::new(spy));
    }
    if let Some(current) = CurrentPage::mount(scope) {
        behaviors.push(Box::new(current));
    }
    if let Some(anchors) = AnchorScroll::mount(scope) {
        behaviors.push(Box::new(anchors));
    }
    if let Some(back) = BackToTop::mount(scope) {
        behaviors.push(Box::new(back));
    }
    if let Some(year) = CurrentYear::mount(scope) {
        behaviors.push(Box::new(year));
    }
    behaviors
}
