//! siteuser-axum - Axum pages for registration, login and the admin user list
//!
//! ```no_run
//! use siteuser::Stores;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let stores = Stores::from_env().await?;
//! siteuser_axum::init(&stores).await?;
//! let app = siteuser_axum::site_router(stores);
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

mod config;
mod csrf;
mod error;
mod middleware;
mod pages;
mod router;
mod session;
mod view;

pub use config::{SITE_LOGIN_URL, SITE_REDIRECT_USER};
pub use csrf::{CSRF_HEADER, CsrfForm, CsrfFormRejection, CsrfProtected};
pub use error::IntoResponseError;
pub use middleware::{require_admin, require_authenticated};
pub use router::{site_router, site_router_no_trace};
pub use session::{AuthRedirect, AuthUser};
pub use view::ViewName;

pub use siteuser::{FieldErrors, Stores, init};
