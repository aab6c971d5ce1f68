//! Driven port for sending operation requests to the DNS API.
//!
//! The domain hands the adapter a fully built [`OperationRequest`] and gets
//! back the raw status, token header, and body. Status interpretation stays in
//! the domain so every transport classifies responses the same way.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::OperationRequest;

/// Raw response returned by the DNS API for one operation call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Value of the `X-Auth-Token` response header, when sent.
    pub auth_token: Option<String>,
    /// Response body decoded as text; empty when the server sent none.
    pub body: String,
}

impl TransportResponse {
    /// Convenience constructor for a response without a token header.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            auth_token: None,
            body: body.into(),
        }
    }

    /// Attach an `X-Auth-Token` header value.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }
}

define_port_error! {
    /// Errors raised before a response was received from the DNS API.
    pub enum TransportError {
        /// Connection, TLS, or body read failure.
        Transport { message: String } =>
            "dns api transport failed: {message}",
        /// The transport gave up waiting for the server.
        Timeout { message: String } =>
            "dns api timeout: {message}",
        /// The request could not be expressed on the wire (bad URI or header).
        InvalidRequest { message: String } =>
            "dns api request invalid: {message}",
    }
}

/// Port for POSTing one operation request and collecting the raw response.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OperationTransport: Send + Sync {
    /// Send `request` once. Non-2xx statuses are returned as responses, not
    /// errors.
    async fn post(&self, request: &OperationRequest) -> Result<TransportResponse, TransportError>;
}
