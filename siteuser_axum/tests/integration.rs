/// Integration tests for siteuser-axum
///
/// Each test drives the site router in-process through `tower::ServiceExt::oneshot`
/// against its own ephemeral in-memory stores.
mod common;

mod integration {
    pub mod access_control;
    pub mod login_flows;
    pub mod security_controller;
}
