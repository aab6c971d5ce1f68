//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain components, which in turn only depend on the transport
//! port. Tests swap the transport for a mock.

use std::sync::Arc;

use crate::domain::ports::OperationTransport;
use crate::domain::{Authenticator, ClientConfig, OperationExecutor};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Login handshake against the DNS API.
    pub authenticator: Arc<Authenticator>,
    /// Operation calls on behalf of signed-in users.
    pub executor: Arc<OperationExecutor>,
}

impl HttpState {
    /// Wire both components to one transport and configuration.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use dns_console::domain::ClientConfig;
    /// use dns_console::inbound::http::state::HttpState;
    /// use dns_console::outbound::dns_api::ReqwestOperationTransport;
    ///
    /// let transport = ReqwestOperationTransport::new().expect("client");
    /// let state = HttpState::new(Arc::new(transport), &ClientConfig::default());
    /// let _executor = state.executor.clone();
    /// ```
    pub fn new(transport: Arc<dyn OperationTransport>, config: &ClientConfig) -> Self {
        Self {
            authenticator: Arc::new(Authenticator::new(Arc::clone(&transport), config)),
            executor: Arc::new(OperationExecutor::new(transport, config)),
        }
    }
}
