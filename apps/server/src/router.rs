use axum::Router;
use dpi::server::{StaticSite, site_router};
use tower_http::trace::TraceLayer;

#[allow(unreachable_pub)]
pub fn init(site: StaticSite) -> Router {
    site_router(site).layer(TraceLayer::new_for_http())
}
