use config::{Config, Environment, File};
use dpi_domain::constants::PORT_ENV;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[dpi_derive::dpi_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads the site configuration from layered sources.
///
/// 1. **Base File**: settings from a file (e.g. `site.toml`). Defaults to `"site"`; a missing
///    file is not an error, every field has a default.
/// 2. **Environment Overrides**: variables prefixed with `DPI__`, nested with double
///    underscores (`DPI__CONTENT__ROOT` maps to `content.root`).
/// 3. **Platform Port**: the bare `PORT` variable, as set by hosting platforms, wins over
///    `server.port`.
///
/// # Errors
/// Returns an error if a source is malformed or the merged values do not match `T`.
///
/// # Example
/// ```rust
/// use dpi_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("site"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix("DPI")
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        )
        .set_override_option("server.port", std::env::var(PORT_ENV).ok())
        .context("Invalid PORT override")?;

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
