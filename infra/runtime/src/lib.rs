//! # Runtime
//!
//! Builds the [Tokio](https://tokio.rs) runtime used by the site binaries from a small set
//! of named profiles, so every entry point starts with the same thread layout.
//!
//! ## Profiles
//! * **Server**: all detected cores, larger stacks, long keep-alive for idle workers.
//! * **Compact**: half the workers and smaller stacks for tools and local previews.
//! * **Default**: detected worker count with moderate stacks.
//!
//! `DPI_WORKER_THREADS` overrides the detected worker count (1..=1024).
//!
//! ## Example
//!
//! ```rust,ignore
//! #[dpi_runtime::main(server)]
//! async fn main() -> anyhow::Result<()> {
//!     Ok(())
//! }
//! ```

pub use anyhow::Result;
pub use dpi_derive::main;

use anyhow::anyhow;
use std::{sync::OnceLock, thread::available_parallelism, time::Duration};
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

const WORKER_THREADS_ENV: &str = "DPI_WORKER_THREADS";
const FALLBACK_WORKER_THREADS: usize = 4;
const MAX_WORKER_THREADS: usize = 1024;
const DEFAULT_STACK_SIZE: usize = 2 * 1024 * 1024;
const MIN_STACK_SIZE: usize = 1024 * 1024;
const MAX_STACK_SIZE: usize = 16 * 1024 * 1024;
const DEFAULT_THREAD_NAME: &str = "dpi-worker";

static DETECTED_WORKERS: OnceLock<usize> = OnceLock::new();

fn detected_workers() -> usize {
    *DETECTED_WORKERS.get_or_init(|| {
        std::env::var(WORKER_THREADS_ENV)
            .ok()
            .and_then(|raw| raw.parse::<usize>().ok())
            .filter(|&n| (1..=MAX_WORKER_THREADS).contains(&n))
            .unwrap_or_else(|| {
                available_parallelism().map_or(FALLBACK_WORKER_THREADS, std::num::NonZero::get)
            })
    })
}

/// Thread layout for a Tokio multi-thread runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub worker_threads: usize,
    pub stack_size: usize,
    pub thread_name: String,
    pub thread_keep_alive: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            worker_threads: detected_workers(),
            stack_size: DEFAULT_STACK_SIZE,
            thread_name: DEFAULT_THREAD_NAME.to_owned(),
            thread_keep_alive: Duration::from_secs(60),
        }
    }
}

impl RuntimeConfig {
    /// Profile for the static asset server.
    #[must_use]
    pub fn server() -> Self {
        Self {
            worker_threads: detected_workers(),
            stack_size: 4 * 1024 * 1024,
            thread_name: "dpi-http".to_owned(),
            thread_keep_alive: Duration::from_secs(300),
        }
    }

    /// Profile for tools and local previews where footprint matters more than throughput.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            worker_threads: (detected_workers() / 2).max(1),
            stack_size: MIN_STACK_SIZE,
            thread_name: "dpi-compact".to_owned(),
            thread_keep_alive: Duration::from_secs(30),
        }
    }

    #[must_use]
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = threads.clamp(1, MAX_WORKER_THREADS);
        self
    }

    #[must_use]
    pub fn with_stack_size(mut self, size: usize) -> Self {
        self.stack_size = size.clamp(MIN_STACK_SIZE, MAX_STACK_SIZE);
        self
    }

    #[must_use]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.thread_name = if name.trim().is_empty() { DEFAULT_THREAD_NAME.to_owned() } else { name };
        self
    }

    /// Clamps every field into its accepted range.
    fn normalized(&self) -> Self {
        self.clone()
            .with_worker_threads(self.worker_threads)
            .with_stack_size(self.stack_size)
            .with_thread_name(self.thread_name.clone())
    }
}

/// Builds a multi-thread runtime with I/O and timers enabled.
///
/// # Errors
///
/// Returns an error when the OS refuses to spawn the worker threads.
pub fn build_runtime_with_config(config: &RuntimeConfig) -> Result<Runtime> {
    let config = config.normalized();
    debug!(config = ?config, "Building tokio runtime");

    Builder::new_multi_thread()
        .worker_threads(config.worker_threads)
        .thread_name(&config.thread_name)
        .thread_stack_size(config.stack_size)
        .thread_keep_alive(config.thread_keep_alive)
        .enable_all()
        .build()
        .map_err(|e| anyhow!("Failed to initialize runtime: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_threads_are_clamped() {
        assert_eq!(RuntimeConfig::default().with_worker_threads(0).worker_threads, 1);
        assert_eq!(RuntimeConfig::default().with_worker_threads(5000).worker_threads, 1024);
    }

    #[test]
    fn stack_size_is_clamped() {
        assert_eq!(RuntimeConfig::default().with_stack_size(100).stack_size, MIN_STACK_SIZE);
        assert_eq!(
            RuntimeConfig::default().with_stack_size(64 * 1024 * 1024).stack_size,
            MAX_STACK_SIZE
        );
    }

    #[test]
    fn blank_thread_name_falls_back() {
        let config = RuntimeConfig::server().with_thread_name("   ");
        assert_eq!(config.thread_name, DEFAULT_THREAD_NAME);
    }

    #[test]
    fn compact_profile_uses_fewer_workers() {
        let compact = RuntimeConfig::compact();
        assert!(compact.worker_threads >= 1);
        assert!(compact.worker_threads <= RuntimeConfig::server().worker_threads);
    }

    #[test]
    fn builds_and_runs_a_future() -> Result<()> {
        let rt = build_runtime_with_config(&RuntimeConfig::compact().with_worker_threads(1))?;
        let answer = rt.block_on(async { 6 * 7 });
        assert_eq!(answer, 42);
        Ok(())
    }
}
