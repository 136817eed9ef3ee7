use askama::Template;
use axum::response::{Html, IntoResponse, Response};
use chrono::{DateTime, Utc};
use chrono_tz::Asia::Tokyo;
use http::{HeaderMap, StatusCode, header::LOCATION};

/// Name of the view a response rendered, attached to the response extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewName(pub &'static str);

impl ViewName {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Render a template as an HTML response tagged with its view name.
///
/// `headers` are added to the response, typically `Set-Cookie` for a CSRF token.
pub(crate) fn render_view<T: Template>(
    name: &'static str,
    template: &T,
    headers: HeaderMap,
) -> Result<Response, (StatusCode, String)> {
    let html = template.render().map_err(|e| {
        tracing::error!(view = name, "Template rendering error: {:?}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Template rendering error: {e}"),
        )
    })?;

    let mut response = (headers, Html(html)).into_response();
    response.extensions_mut().insert(ViewName(name));
    Ok(response)
}

/// `302 Found` to `location`
pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location)]).into_response()
}

/// `YYYY-MM-DD HH:MM JST`
pub(crate) fn format_date_jst(date: &DateTime<Utc>) -> String {
    format!("{} JST", date.with_timezone(&Tokyo).format("%Y-%m-%d %H:%M"))
}
