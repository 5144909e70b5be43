//! Disclosure feature slice.
//!
//! Trigger/panel pairs that show or hide content: the FAQ list and the contact page accordion
//! (one panel open at a time), and the project details accordion whose sections are marked
//! `data-accordion="multiple"` and toggle independently.
mod error;
mod group;

pub use crate::error::{DisclosureError, DisclosureErrorExt};
pub use crate::group::{Disclosure, DisclosureGroup, Policy, RESIZE_DEBOUNCE, panel_for};
use dpi_kernel::domain::capabilities::Capabilities;
use dpi_kernel::domain::dom::Scope;
use dpi_kernel::domain::registry::BoxedBehavior;

pub const FAQ_TRIGGER: &str = "faq-question";
pub const ACCORDION_TRIGGER: &str = "accordion-header";

/// Mount every disclosure group present in `scope`.
#[must_use]
pub fn init(scope: &Scope, _capabilities: Capabilities) -> Vec<BoxedBehavior> {
    [
        DisclosureGroup::mount(scope, "faq", FAQ_TRIGGER, Policy::Single),
        DisclosureGroup::mount_where(scope, "accordion", ACCORDION_TRIGGER, Policy::Single, |trigger| {
            Policy::for_trigger(scope, &trigger.id) == Policy::Single
        }),
        DisclosureGroup::mount_where(scope, "accordion-sections", ACCORDION_TRIGGER, Policy::Multiple, |trigger| {
            Policy::for_trigger(scope, &trigger.id) == Policy::Multiple
        }),
    ]
    .into_iter()
    .flatten()
    .map(|group| Box::new(group) as BoxedBehavior)
    .collect()
}
