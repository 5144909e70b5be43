//! Names shared between markup and behaviors.

// Server
pub const DEFAULT_PORT: u16 = 3000;
pub const PORT_ENV: &str = "PORT";
pub const DEFAULT_CONTENT_ROOT: &str = "dpi-website";
pub const FALLBACK_DOCUMENT: &str = "index.html";

// Attribute contract
pub const ARIA_EXPANDED: &str = "aria-expanded";
pub const ARIA_CONTROLS: &str = "aria-controls";
pub const DATA_COUNT: &str = "data-count";
pub const DATA_VALUE: &str = "data-value";
pub const DATA_DURATION: &str = "data-duration";
pub const DATA_FILTER: &str = "data-filter";
pub const DATA_CATEGORY: &str = "data-category";
pub const DATA_ROTATE: &str = "data-rotate";
pub const DATA_ANIMATE: &str = "data-animate";
pub const DATA_ACCORDION: &str = "data-accordion";
pub const DATA_DECIMALS: &str = "data-decimals";
pub const DATA_SRC: &str = "data-src";
pub const HREF: &str = "href";
pub const SRC: &str = "src";
pub const ALT: &str = "alt";
pub const DISABLED: &str = "disabled";

// State classes
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_SHOW: &str = "show";
pub const CLASS_ERROR: &str = "error";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_ANIMATE: &str = "animate";
pub const CLASS_AOS_ANIMATE: &str = "aos-animate";
pub const CLASS_LOADING: &str = "loading";
