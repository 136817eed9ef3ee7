use axum::{
    extract::{Request, State},
    http::{HeaderMap, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use siteuser::{Authority, Principal, Stores, principal_from_headers_core};

use super::session::AuthRedirect;

// Resolve the session principal or produce the response that refuses the request
async fn resolve_principal(
    stores: &Stores,
    headers: &HeaderMap,
    method: &Method,
) -> Result<Principal, Response> {
    match principal_from_headers_core(stores, headers).await {
        Ok(Some(principal)) => Ok(principal),
        Ok(None) => Err(AuthRedirect::new(method.clone()).into_response()),
        Err(e) => {
            tracing::error!("Failed to resolve session: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Session lookup failed").into_response())
        }
    }
}

/// Let any authenticated principal through.
///
/// Anonymous `GET` requests are redirected to the login page, other methods
/// get 401. The principal is inserted into the request extensions.
pub async fn require_authenticated(
    State(stores): State<Stores>,
    mut req: Request,
    next: Next,
) -> Response {
    match resolve_principal(&stores, req.headers(), req.method()).await {
        Ok(principal) => {
            req.extensions_mut().insert(principal);
            next.run(req).await
        }
        Err(response) => response,
    }
}

/// Let only principals holding the ADMIN authority through.
///
/// Anonymous requests are refused as in [`require_authenticated`]; an
/// authenticated principal without ADMIN gets 403.
pub async fn require_admin(
    State(stores): State<Stores>,
    mut req: Request,
    next: Next,
) -> Response {
    let principal = match resolve_principal(&stores, req.headers(), req.method()).await {
        Ok(principal) => principal,
        Err(response) => return response,
    };

    if !principal.has_authority(Authority::Admin) {
        tracing::warn!(username = %principal.username, path = %req.uri().path(), "Admin authority required");
        return (StatusCode::FORBIDDEN, "Forbidden").into_response();
    }

    req.extensions_mut().insert(principal);
    next.run(req).await
}
