#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the site crates.
//! Two attribute macros live here: [`macro@main`] bootstraps the Tokio runtime profile
//! for binaries and [`macro@dpi_error`] turns a plain enum into a context-aware error type.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! dpi-derive = { path = "../infra/derive" }
//! ```
//!
//! Examples are `ignore`d because proc-macro crates cannot run their own doctests
//! against the consuming crates.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, parse_macro_input};

/// Attribute macro to bootstrap the Tokio runtime with a named profile.
///
/// Turns `async fn main` into a synchronous `fn main` that builds the runtime through
/// `dpi_runtime::build_runtime_with_config` and blocks on the original body.
///
/// # Arguments
///
/// * `server` - Multi-threaded profile for the HTTP server.
/// * `compact` - Fewer workers and smaller stacks for tools and tests.
/// * `default` - Worker count detected from available parallelism.
///
/// # Examples
///
/// ```rust,ignore
/// #[dpi_runtime::main(server)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Attribute macro for declaring crate error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait adding `.context(..)`
///   to `Result<T, Name>` and to `Result<T, Source>` for every wrapped source type.
/// * **Standard Conversions**: Implements `From<Source>` for variants with a `source` field,
///   so `?` works on upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` when an
///   `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants.
/// 2. Variants wrapping an upstream error need `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use dpi_derive::dpi_error;
/// use std::borrow::Cow;
///
/// #[dpi_error]
/// pub enum AssetError {
///     #[error("Asset I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal asset error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load(path: &std::path::Path) -> Result<Vec<u8>, AssetError> {
///     std::fs::read(path).context("Reading fallback document")
/// }
/// ```
#[proc_macro_attribute]
pub fn dpi_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
