//! Router for every page of the site

use axum::Router;
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use siteuser::Stores;

/// Create the site router
///
/// Routes:
/// - `GET /` (authenticated)
/// - `GET|POST /register`
/// - `GET|POST /login`
/// - `POST /logout`
/// - `GET /admin/list` (ADMIN only)
///
/// Requests are traced through `tower-http`'s `TraceLayer`.
pub fn site_router(stores: Stores) -> Router {
    site_router_no_trace(stores).layer(
        TraceLayer::new_for_http()
            .make_span_with(
                DefaultMakeSpan::new()
                    .level(Level::INFO)
                    .include_headers(false),
            )
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same routes as [`site_router`] without the HTTP tracing middleware
pub fn site_router_no_trace(stores: Stores) -> Router {
    super::pages::router(&stores).with_state(stores)
}
