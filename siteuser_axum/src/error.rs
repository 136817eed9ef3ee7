use http::StatusCode;
use siteuser::CoordinationError;

/// Helper trait for converting errors to a standard response error format
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

/// Maps coordination failures to the status codes the site answers with
impl<T> IntoResponseError<T> for Result<T, CoordinationError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| {
            let status = match e {
                CoordinationError::BadCredentials => StatusCode::UNAUTHORIZED,
                CoordinationError::Forbidden => StatusCode::FORBIDDEN,
                CoordinationError::Csrf(_) => StatusCode::FORBIDDEN,
                CoordinationError::Validation(_) => StatusCode::BAD_REQUEST,
                CoordinationError::UserError(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, e.to_string())
        })
    }
}
