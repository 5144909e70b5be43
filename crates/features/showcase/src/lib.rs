//! Showcase feature slice.
//!
//! Portfolio page widgets (category filter, image lightbox, testimonial carousel), the
//! rotating headline of the services hero and the project page hero parallax.
mod carousel;
mod error;
mod filter;
mod lightbox;
mod parallax;
mod rotator;

pub use crate::carousel::{SLIDE_INTERVAL, TESTIMONIAL, TestimonialCarousel};
pub use crate::error::{ShowcaseError, ShowcaseErrorExt};
pub use crate::filter::{
    FADE_IN_AFTER, FILTER_ALL, FILTER_BUTTON, HIDE_AFTER, MOUNT_STAGGER, PORTFOLIO_GRID, PORTFOLIO_ITEM,
    PortfolioFilter,
};
pub use crate::lightbox::{CLOSE_LIGHTBOX, DEFAULT_CAPTION, LIGHTBOX, LIGHTBOX_CAPTION, Lightbox, PORTFOLIO_IMAGE};
pub use crate::parallax::{PARALLAX_FACTOR, PROJECT_HERO, ProjectHero};
pub use crate::rotator::{FADE_BACK_AFTER, LEAD_IN, ROTATE_EVERY, ROTATING_TEXT, SWAP_AFTER, TEXT_ROTATOR, TextRotator};
use dpi_kernel::domain::capabilities::Capabilities;
use dpi_kernel::domain::dom::Scope;
use dpi_kernel::domain::registry::BoxedBehavior;

/// Mount every showcase behavior present in `scope`.
#[must_use]
pub fn init(scope: &Scope, _capabilities: Capabilities) -> Vec<BoxedBehavior> {
    let mut behaviors: Vec<BoxedBehavior> = Vec::new();
    if let Some(filter) = PortfolioFilter::mount(scope) {
        behaviors.push(Box::new(filter));
    }
    if let Some(lightbox) = Lightbox::mount(scope) {
        behaviors.push(Box::new(lightbox));
    }
    if let Some(carousel) = TestimonialCarousel::mount(scope) {
        behaviors.push(Box::new(carousel));
    }
    if let Some(rotator) = TextRotator::mount(scope) {
        behaviors.push(Box::new(rotator));
    }
    if let Some(hero) = ProjectHero::mount(scope) {
        behaviors.push(Box::new(hero));
    }
    behaviors
}
