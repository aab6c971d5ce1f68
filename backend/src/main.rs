//! Console entry-point: loads DNS API settings, wires the gateway, and serves
//! the login and operation endpoints.

mod server;

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::cookie::{Key, SameSite};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use dns_console::config::ApiSettings;
use dns_console::inbound::http::state::HttpState;
use dns_console::outbound::dns_api::ReqwestOperationTransport;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ApiSettings::load_from_iter(env::args_os().take(1))
        .map_err(|e| std::io::Error::other(format!("failed to load DNS API settings: {e}")))?;
    let client_config = settings.client_config();
    let transport = ReqwestOperationTransport::with_timeout(settings.request_timeout())
        .map_err(|e| std::io::Error::other(format!("failed to build HTTP client: {e}")))?;
    let http_state = HttpState::new(Arc::new(transport), &client_config);
    info!(
        base_uri = client_config.base_uri(),
        raw_errors = client_config.raw_errors(),
        "dns api gateway configured"
    );

    let key = load_session_key()?;
    let cookie_secure = env::var("SESSION_COOKIE_SECURE")
        .map(|v| v != "0")
        .unwrap_or(true);
    let bind_addr = env::var("BIND_ADDR")
        .ok()
        .and_then(|raw| raw.parse::<SocketAddr>().ok())
        .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8080)));

    let config = ServerConfig::new(key, cookie_secure, SameSite::Lax, bind_addr, http_state);
    create_server(config)?.await
}

fn load_session_key() -> std::io::Result<Key> {
    let key_path =
        env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
    match std::fs::read(&key_path) {
        Ok(bytes) => Ok(Key::derive_from(&bytes)),
        Err(e) => {
            let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                Ok(Key::generate())
            } else {
                Err(std::io::Error::other(format!(
                    "failed to read session key at {key_path}: {e}"
                )))
            }
        }
    }
}
