use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};

use siteuser::Stores;

use crate::config::SITE_LOGIN_URL;
use crate::middleware::{require_admin, require_authenticated};

/// Page routes with their access control, still awaiting state
pub(crate) fn router(stores: &Stores) -> Router<Stores> {
    let public = Router::new()
        .route(
            "/register",
            get(super::register::register_page).post(super::register::register),
        )
        .route(
            SITE_LOGIN_URL,
            get(super::login::login_page).post(super::login::login),
        )
        .route("/logout", post(super::logout::logout));

    let authenticated = Router::new()
        .route("/", get(super::home::index))
        .route_layer(from_fn_with_state(stores.clone(), require_authenticated));

    let admin = Router::new()
        .route("/admin/list", get(super::admin::list))
        .route_layer(from_fn_with_state(stores.clone(), require_admin));

    public.merge(authenticated).merge(admin)
}
