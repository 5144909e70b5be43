//! Facade crate for the `DPi` site.
//! Re-exports domain/kernel primitives and mounts every feature slice on a [`Page`].
//! Keep this crate thin: it should compose other crates, not implement behaviors.
//!
//! ## Usage
//! - Build a [`Page`] from the host's document snapshot and detected [`Capabilities`].
//! - Forward browser events to [`Page::dispatch`] and render the returned patches.
//! - Enable the `server` feature for the static asset responder.
//!
//! [`Capabilities`]: domain::capabilities::Capabilities

mod error;
mod page;

pub use crate::error::{PageError, PageErrorExt};
pub use crate::page::Page;
pub use dpi_domain as domain;
pub use dpi_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub use dpi_kernel::server::router::site_router;
    pub use dpi_kernel::server::{Asset, AssetError, StaticSite, content_type};
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use dpi_contact as contact;
    pub use dpi_disclosure as disclosure;
    pub use dpi_navigation as navigation;
    pub use dpi_reveal as reveal;
    pub use dpi_showcase as showcase;

    /// Slices mounted by [`crate::Page`], in dispatch order.
    pub const ENABLED: &[&str] = &[
        "navigation",
        "disclosure",
        "reveal",
        "showcase",
        "contact",
        #[cfg(feature = "server")]
        "server",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}
