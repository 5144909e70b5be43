//! # DPi Site Server
//!
//! Serves the static site over HTTP: every request gets the matching file under the content
//! root, or the fallback document with `200` so client-side routes keep working.
//!
//! ## Example
//! ```no_run
//! use dpi_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(8080)
//!         .build()
//!         .await?
//!         .run()
//!         .await
//! }
//! ```

mod router;

use anyhow::{Context, Result};
use axum::Router;
use axum_server::Handle;
use dpi::domain::config::SiteConfig;
use dpi::server::StaticSite;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info, warn};

/// How long in-flight requests may run once shutdown starts.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// A fluent builder for configuring and initializing the [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: SiteConfig,
}

impl ServerBuilder {
    /// Set up the server's configuration.
    pub fn config(mut self, cfg: SiteConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    /// Directory the site is served from.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.cfg.content.root = root.into();
        self
    }

    /// Consumes the builder and prepares the site.
    ///
    /// # Errors
    /// Returns an error if the content root is not a readable directory.
    pub async fn build(self) -> Result<Server> {
        let root = &self.cfg.content.root;
        let meta = tokio::fs::metadata(root)
            .await
            .with_context(|| format!("Content root {} is not accessible", root.display()))?;
        anyhow::ensure!(meta.is_dir(), "Content root {} is not a directory", root.display());

        let fallback = root.join(&self.cfg.content.fallback);
        if tokio::fs::metadata(&fallback).await.is_err() {
            warn!(fallback = %fallback.display(), "Fallback document is missing, unmatched paths will fail");
        }

        let site = StaticSite::from_config(&self.cfg.content);
        info!(root = %site.root().display(), "Content root ready");
        Ok(Server { cfg: self.cfg, site })
    }
}

/// A fully initialized server instance ready to run.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    cfg: SiteConfig,
    site: StaticSite,
}

impl Server {
    /// Returns a new [`ServerBuilder`] to configure the server.
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    #[must_use]
    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.cfg.server.address, self.cfg.server.port)
    }

    #[must_use]
    pub const fn config(&self) -> &SiteConfig {
        &self.cfg
    }

    /// The HTTP application with request tracing.
    pub fn router(&self) -> Router {
        router::init(self.site.clone())
    }

    /// Starts the server and runs until the shutdown signal is received.
    ///
    /// # Errors
    /// Returns an error if the server fails to bind to the configured address.
    pub async fn run(self) -> Result<()> {
        let address = self.address();
        let app = self.router();

        let handle = Handle::<SocketAddr>::new();
        let shutdown_handle = handle.clone();

        tokio::spawn(async move {
            if let Err(e) = shutdown_signal().await {
                error!("Error while waiting for shutdown signal: {e}");
                return;
            }
            info!("Shutdown signal received, starting graceful shutdown...");
            shutdown_handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
        });

        info!("Starting HTTP server on http://{address}");
        axum_server::bind(address)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .context("HTTP server failed")?;

        info!("Server shutdown complete");
        Ok(())
    }
}

/// Listens for shutdown signals (Ctrl+C, SIGTERM).
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => {
            res.context("Ctrl+C signal received")?;
        },
        res = terminate => {
            res.context("SIGTERM signal received")?;
        },
    }

    Ok(())
}
