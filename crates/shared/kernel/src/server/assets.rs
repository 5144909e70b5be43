use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use dpi_domain::config::ContentConfig;
use dpi_domain::constants::FALLBACK_DOCUMENT;
use std::borrow::Cow;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, warn};

#[dpi_derive::dpi_error]
pub enum AssetError {
    #[error("Path traversal attempt{}: {message}", format_context(.context))]
    PathTraversal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Asset not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Asset I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}

/// File contents ready to be sent.
#[derive(Debug, Clone)]
pub struct Asset {
    pub path: PathBuf,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl IntoResponse for Asset {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, self.content_type)], self.bytes).into_response()
    }
}

#[derive(Debug)]
struct StaticSiteInner {
    root: PathBuf,
    fallback: PathBuf,
}

/// A content root plus the document served for every path it cannot answer.
#[derive(Debug, Clone)]
pub struct StaticSite {
    inner: Arc<StaticSiteInner>,
}

impl StaticSite {
    /// `fallback` is relative to `root`. A root that does not exist yet is kept as given and
    /// resolved again on every request.
    pub fn new(root: impl Into<PathBuf>, fallback: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let root = root.canonicalize().unwrap_or(root);
        Self { inner: Arc::new(StaticSiteInner { root, fallback: fallback.into() }) }
    }

    #[must_use]
    pub fn from_config(content: &ContentConfig) -> Self {
        Self::new(&content.root, &content.fallback)
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.inner.root
    }

    /// Maps a request path onto a file inside the root.
    ///
    /// Directories resolve to their `index.html`. Symlinks pointing outside the root are
    /// rejected like `..` segments.
    pub async fn resolve(&self, request_path: &str) -> Result<PathBuf, AssetError> {
        let relative = normalize_relative(Path::new(request_path.trim_start_matches('/')))?;
        let root = match tokio::fs::canonicalize(&self.inner.root).await {
            Ok(root) => root,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(AssetError::NotFound {
                    message: request_path.to_owned().into(),
                    context: Some("Content root does not exist".into()),
                });
            },
            Err(e) => return Err(AssetError::Io { source: e, context: Some("Resolving content root".into()) }),
        };
        let joined = root.join(relative);

        let canonical = match tokio::fs::canonicalize(&joined).await {
            Ok(canonical) => canonical,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(AssetError::NotFound {
                    message: request_path.to_owned().into(),
                    context: None,
                });
            },
            Err(e) => return Err(AssetError::Io { source: e, context: Some("Resolving".into()) }),
        };

        if !canonical.starts_with(&root) {
            return Err(AssetError::PathTraversal {
                message: canonical.display().to_string().into(),
                context: Some("Path resolved outside the content root".into()),
            });
        }

        let metadata = tokio::fs::metadata(&canonical).await?;
        if metadata.is_file() {
            return Ok(canonical);
        }

        let index = canonical.join(FALLBACK_DOCUMENT);
        match tokio::fs::metadata(&index).await {
            Ok(m) if metadata.is_dir() && m.is_file() => Ok(index),
            _ => Err(AssetError::NotFound {
                message: request_path.to_owned().into(),
                context: Some("Directory without an index document".into()),
            }),
        }
    }

    pub async fn load(&self, request_path: &str) -> Result<Asset, AssetError> {
        let path = self.resolve(request_path).await?;
        let bytes = tokio::fs::read(&path).await.context("Reading asset")?;
        Ok(Asset { content_type: content_type(&path), path, bytes })
    }

    /// The fallback document with `200`, or `500` when it is missing.
    pub async fn fallback(&self) -> Response {
        let path = self.inner.root.join(&self.inner.fallback);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Asset { content_type: content_type(&path), path, bytes }.into_response(),
            Err(e) => {
                error!(path = %path.display(), error = %e, "Fallback document is unavailable");
                (StatusCode::INTERNAL_SERVER_ERROR, "Fallback document is unavailable").into_response()
            },
        }
    }

    /// Serves the requested file, or the fallback document for anything unmatched.
    pub async fn respond(&self, request_path: &str) -> Response {
        match self.load(request_path).await {
            Ok(asset) => asset.into_response(),
            Err(err @ AssetError::PathTraversal { .. }) => {
                warn!(path = %request_path, %err, "Rejected request path, serving fallback");
                self.fallback().await
            },
            Err(err) => {
                debug!(path = %request_path, %err, "No asset, serving fallback");
                self.fallback().await
            },
        }
    }
}

/// Collapse `.` / `..` lexically while ensuring the path never climbs above the root.
fn normalize_relative(path: &Path) -> Result<PathBuf, AssetError> {
    let mut out = PathBuf::new();

    for c in path.components() {
        match c {
            Component::CurDir => {},
            Component::Normal(seg) => out.push(seg),
            Component::ParentDir => {
                if !out.pop() {
                    return Err(AssetError::PathTraversal {
                        message: path.display().to_string().into(),
                        context: Some("Path attempted to escape the root via '..'".into()),
                    });
                }
            },
            Component::RootDir | Component::Prefix(_) => {
                return Err(AssetError::PathTraversal {
                    message: path.display().to_string().into(),
                    context: Some("Absolute paths are not allowed".into()),
                });
            },
        }
    }

    Ok(out)
}

/// Media type by file extension, case-insensitive.
#[must_use]
pub fn content_type(path: &Path) -> &'static str {
    let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "text/javascript; charset=utf-8",
        Some("json" | "map") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("txt") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}
