mod config;
mod server;

use siteuser_axum::{Stores, init, site_router};

use crate::config::{SITE_HTTPS_PORT, SITE_PORT, SITE_TLS};
use crate::server::{init_tracing, spawn_http_server, spawn_https_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // axum-server's rustls needs a process-level CryptoProvider
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| "Failed to install default CryptoProvider")?;

    dotenvy::dotenv().ok();
    init_tracing(env!("CARGO_CRATE_NAME"));

    let stores = Stores::from_env().await?;
    init(&stores).await?;

    let app = site_router(stores);

    let http_server = spawn_http_server(*SITE_PORT, app.clone());
    match SITE_TLS.as_ref() {
        Some((cert, key)) => {
            let https_server = spawn_https_server(*SITE_HTTPS_PORT, app, cert, key).await?;
            let (http, https) = tokio::try_join!(http_server, https_server)?;
            http?;
            https?;
        }
        None => http_server.await??,
    }
    Ok(())
}
