use chrono::{Duration, Utc};
use http::header::HeaderMap;
use subtle::ConstantTimeEq;

use crate::session::config::{CSRF_COOKIE_MAX_AGE, CSRF_COOKIE_NAME};
use crate::session::errors::SessionError;
use crate::session::types::StoredCsrfToken;
use crate::storage::{CacheData, Stores};
use crate::utils::{gen_random_string, get_cookie, header_set_cookie};

const CSRF_PREFIX: &str = "csrf";

/// Return a CSRF token for a form page.
///
/// When the request already carries a CSRF cookie bound to a live token,
/// that token is reused and no cookie is set. Otherwise a new token is
/// stored and the returned headers set its id cookie.
#[tracing::instrument(skip_all)]
pub(crate) async fn issue_csrf_token(
    stores: &Stores,
    request_headers: &HeaderMap,
) -> Result<(String, HeaderMap), SessionError> {
    if let Some(csrf_id) = get_cookie(request_headers, &CSRF_COOKIE_NAME) {
        if let Some(stored) = load_token(stores, &csrf_id).await? {
            if stored.expires_at > Utc::now() {
                tracing::trace!("Reusing live CSRF token");
                return Ok((stored.token, HeaderMap::new()));
            }
        }
    }

    let ttl = *CSRF_COOKIE_MAX_AGE;
    let token = gen_random_string(32)?;
    let csrf_id = gen_random_string(32)?;

    let stored = StoredCsrfToken {
        token: token.clone(),
        expires_at: Utc::now() + Duration::seconds(ttl as i64),
        ttl,
    };
    let data: CacheData = stored.try_into()?;

    stores
        .cache
        .lock()
        .await
        .put_with_ttl(CSRF_PREFIX, &csrf_id, data, ttl as usize)
        .await
        .map_err(|e| SessionError::Storage(e.to_string()))?;

    let mut headers = HeaderMap::new();
    header_set_cookie(&mut headers, &CSRF_COOKIE_NAME, &csrf_id, ttl as i64)?;

    tracing::debug!("Issued new CSRF token");
    Ok((token, headers))
}

/// Check a submitted CSRF token against the one bound to the request's CSRF cookie
pub(crate) async fn verify_csrf_token(
    stores: &Stores,
    request_headers: &HeaderMap,
    submitted: Option<&str>,
) -> Result<(), SessionError> {
    let submitted = submitted
        .filter(|token| !token.is_empty())
        .ok_or_else(|| SessionError::CsrfToken("No CSRF token submitted".to_string()))?;

    let csrf_id = get_cookie(request_headers, &CSRF_COOKIE_NAME)
        .ok_or_else(|| SessionError::CsrfToken("No CSRF cookie found".to_string()))?;

    let stored = load_token(stores, &csrf_id)
        .await?
        .ok_or_else(|| SessionError::CsrfToken("CSRF token not found".to_string()))?;

    if !bool::from(submitted.as_bytes().ct_eq(stored.token.as_bytes())) {
        tracing::warn!("CSRF token mismatch");
        return Err(SessionError::CsrfToken("CSRF token mismatch".to_string()));
    }

    if Utc::now() > stored.expires_at {
        tracing::warn!("CSRF token expired");
        return Err(SessionError::CsrfToken("CSRF token expired".to_string()));
    }

    Ok(())
}

async fn load_token(
    stores: &Stores,
    csrf_id: &str,
) -> Result<Option<StoredCsrfToken>, SessionError> {
    let cached = stores
        .cache
        .lock()
        .await
        .get(CSRF_PREFIX, csrf_id)
        .await
        .map_err(|e| SessionError::Storage(e.to_string()))?;

    cached.map(StoredCsrfToken::try_from).transpose()
}
