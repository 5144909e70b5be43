use super::StaticSite;
use axum::Router;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::get;
use tracing::debug;

/// Every path is answered by the site: the matching file, or the fallback document.
///
/// `get` also answers `HEAD`; any other method is rejected with `405`.
pub fn site_router(site: StaticSite) -> Router {
    Router::new()
        .route("/", get(serve_root))
        .route("/{*path}", get(serve_path))
        .with_state(site)
}

async fn serve_root(State(site): State<StaticSite>) -> Response {
    site.respond("").await
}

async fn serve_path(
    State(site): State<StaticSite>,
    path: Result<Path<String>, PathRejection>,
) -> Response {
    match path {
        Ok(Path(path)) => site.respond(&path).await,
        Err(rejection) => {
            debug!(%rejection, "Undecodable request path, serving fallback");
            site.fallback().await
        },
    }
}
