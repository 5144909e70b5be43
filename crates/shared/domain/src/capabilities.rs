use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Optional browser APIs and third-party libraries detected by the host page.
    ///
    /// A behavior whose dependency is missing degrades to a no-op or a simpler fallback.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Capabilities: u32 {
        const INTERSECTION_OBSERVER = 1 << 0;
        const ANIMATE_ON_SCROLL = 1 << 1;
        const LIGHTBOX_GALLERY = 1 << 2;
        const MAP_TILES = 1 << 3;
        const PARTICLES = 1 << 4;
        const SMOOTH_SCROLL = 1 << 5;

        /// What an evergreen browser provides without page-level scripts.
        const BROWSER = Self::INTERSECTION_OBSERVER.bits() | Self::SMOOTH_SCROLL.bits();
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::BROWSER
    }
}

impl From<&str> for Capabilities {
    fn from(s: &str) -> Self {
        match s {
            "IntersectionObserver" => Self::INTERSECTION_OBSERVER,
            "AOS" => Self::ANIMATE_ON_SCROLL,
            "lightGallery" => Self::LIGHTBOX_GALLERY,
            "L" => Self::MAP_TILES,
            "particlesJS" => Self::PARTICLES,
            "scrollBehavior" => Self::SMOOTH_SCROLL,
            _ => Self::empty(),
        }
    }
}

impl Serialize for Capabilities {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for Capabilities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}
