//! Reveal feature slice.
//!
//! Scroll-triggered effects: statistics that count up once visible, elements revealed as they
//! scroll past a line, the impact timeline and lazily loaded images.
mod counter;
mod error;
mod format;
mod lazy_images;
mod scroll_reveal;
mod timeline;
mod visibility;

pub use crate::counter::{COUNTER_CLASSES, CounterTarget, Counters, DEFAULT_DURATION, DEFAULT_THRESHOLD};
pub use crate::error::{RevealError, RevealErrorExt};
pub use crate::format::{NumberFormat, group_thousands};
pub use crate::lazy_images::LazyImages;
pub use crate::scroll_reveal::{REVEAL_LINE_DIVISOR, ScrollReveal};
pub use crate::timeline::{ITEM_STAGGER, TIMELINE_THRESHOLD, Timeline};
use dpi_kernel::domain::capabilities::Capabilities;
use dpi_kernel::domain::dom::Scope;
use dpi_kernel::domain::registry::BoxedBehavior;

/// Mount every reveal behavior present in `scope`.
#[must_use]
pub fn init(scope: &Scope, _capabilities: Capabilities) -> Vec<BoxedBehavior> {
    let mut behaviors: Vec<BoxedBehavior> = Vec::new();
    if let Some(counters) = Counters::mount(scope) {
        behaviors.push(Box::new(counters));
    }
    if let Some(reveal) = ScrollReveal::mount(scope) {
        behaviors.push(Box::new(reveal));
    }
    if let Some(timeline) = Timeline::mount(scope) {
        behaviors.push(Box::new(timeline));
    }
    if let Some(images) = LazyImages::mount(scope) {
        behaviors.push(Box::new(images));
    }
    behaviors
}
