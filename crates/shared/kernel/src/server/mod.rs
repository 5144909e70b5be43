//! Static site serving: sandboxed path resolution and the catch-all router.

mod assets;
pub mod router;

pub use assets::{Asset, AssetError, StaticSite, content_type};
