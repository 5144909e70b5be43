//! Kernel utilities shared across behaviors and the server.
//! Keep this crate lightweight: config loading, time-based primitives and static asset serving.
//!
//! ## Debouncing
//! ```rust
//! use dpi_kernel::timing::Debouncer;
//! use std::time::Duration;
//!
//! let mut resize = Debouncer::new(Duration::from_millis(250));
//! resize.schedule(Duration::ZERO);
//! resize.schedule(Duration::from_millis(100));
//! assert!(!resize.poll(Duration::from_millis(300)));
//! assert!(resize.poll(Duration::from_millis(350)));
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use dpi_kernel::config::load_config;
//! let cfg: dpi_domain::config::SiteConfig = load_config(Some("site"))?;
//! ```
pub mod animation;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(feature = "server")]
pub mod server;
pub mod timing;

pub use dpi_domain as domain;
