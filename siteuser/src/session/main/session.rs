use chrono::{Duration, Utc};
use http::header::HeaderMap;

use crate::session::config::{SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME};
use crate::session::errors::SessionError;
use crate::session::types::{Principal, StoredSession};
use crate::storage::{CacheData, Stores};
use crate::utils::{gen_random_string, get_cookie, header_set_cookie};

const SESSION_PREFIX: &str = "session";

/// Store a new session for the principal and return the `Set-Cookie` headers for it
#[tracing::instrument(skip(stores, principal), fields(username = %principal.username))]
pub(crate) async fn create_session(
    stores: &Stores,
    principal: &Principal,
) -> Result<HeaderMap, SessionError> {
    let session_id = gen_random_string(32)?;
    let ttl = *SESSION_COOKIE_MAX_AGE;
    let expires_at = Utc::now() + Duration::seconds(ttl as i64);

    let stored_session = StoredSession {
        principal: principal.clone(),
        expires_at,
        ttl,
    };
    let data: CacheData = stored_session.try_into()?;

    stores
        .cache
        .lock()
        .await
        .put_with_ttl(SESSION_PREFIX, &session_id, data, ttl as usize)
        .await
        .map_err(|e| SessionError::Storage(e.to_string()))?;

    let mut headers = HeaderMap::new();
    header_set_cookie(&mut headers, &SESSION_COOKIE_NAME, &session_id, ttl as i64)?;

    tracing::debug!("Session created");
    Ok(headers)
}

/// Resolve the principal of the session referenced by the request cookies.
///
/// A missing cookie, an unknown id, an unreadable record and an expired
/// session all yield `Ok(None)`.
pub(crate) async fn get_principal_from_headers(
    stores: &Stores,
    headers: &HeaderMap,
) -> Result<Option<Principal>, SessionError> {
    let Some(session_id) = get_cookie(headers, &SESSION_COOKIE_NAME) else {
        tracing::trace!("No session cookie");
        return Ok(None);
    };

    let cached = stores
        .cache
        .lock()
        .await
        .get(SESSION_PREFIX, &session_id)
        .await
        .map_err(|e| SessionError::Storage(e.to_string()))?;

    let Some(cached) = cached else {
        tracing::debug!("Session cookie does not match a stored session");
        return Ok(None);
    };

    let stored_session: StoredSession = match cached.try_into() {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(error = %e, "Discarding unreadable session record");
            return Ok(None);
        }
    };

    if stored_session.expires_at < Utc::now() {
        tracing::debug!(expires_at = %stored_session.expires_at, "Session expired");
        stores
            .cache
            .lock()
            .await
            .remove(SESSION_PREFIX, &session_id)
            .await
            .map_err(|e| SessionError::Storage(e.to_string()))?;
        return Ok(None);
    }

    Ok(Some(stored_session.principal))
}

/// Delete the request's session and return headers that expire its cookie
pub(crate) async fn prepare_logout_response(
    stores: &Stores,
    headers: &HeaderMap,
) -> Result<HeaderMap, SessionError> {
    if let Some(session_id) = get_cookie(headers, &SESSION_COOKIE_NAME) {
        stores
            .cache
            .lock()
            .await
            .remove(SESSION_PREFIX, &session_id)
            .await
            .map_err(|e| SessionError::Storage(e.to_string()))?;
    }

    let mut response_headers = HeaderMap::new();
    header_set_cookie(&mut response_headers, &SESSION_COOKIE_NAME, "value", -86400)?;
    Ok(response_headers)
}
