use crate::constants::{DEFAULT_CONTENT_ROOT, DEFAULT_PORT, FALLBACK_DOCUMENT};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level site configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub server: ServerConfig,
    pub content: ContentConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into request handlers.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Listening socket.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
}

/// Where the site lives on disk and which document answers unmatched paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub root: PathBuf,
    /// Relative to `root`.
    pub fallback: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: DEFAULT_PORT }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self { root: PathBuf::from(DEFAULT_CONTENT_ROOT), fallback: PathBuf::from(FALLBACK_DOCUMENT) }
    }
}
