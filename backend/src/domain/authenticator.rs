//! Password login against the DNS API.
//!
//! Logging in is a `Noop` operation sent with the password header; a `200`
//! response carries the session token in `X-Auth-Token`.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use super::ports::{OperationTransport, TransportError};
use super::{ClientConfig, Credential, RequestBuilder, is_auth_rejection};

/// Operation used for the login handshake.
pub const NOOP_OPERATION: &str = "Noop";

/// Verdict of a completed login handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Credentials accepted. The server may omit the token header; the value
    /// is passed on untouched.
    Authenticated {
        /// Session token for later operation calls.
        token: Option<String>,
    },
    /// Credentials rejected (`401`..=`403`).
    Rejected,
}

/// Login failures that are not a credential verdict.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The request never produced a response.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The server answered with a status outside the login contract.
    #[error("authentication failed, status code from rest api was {0}")]
    UnexpectedStatus(u16),
}

/// Performs the login handshake.
#[derive(Clone)]
pub struct Authenticator {
    requests: RequestBuilder,
    transport: Arc<dyn OperationTransport>,
}

impl Authenticator {
    /// Build an authenticator sending requests through `transport`.
    pub fn new(transport: Arc<dyn OperationTransport>, config: &ClientConfig) -> Self {
        Self {
            requests: RequestBuilder::new(config),
            transport,
        }
    }

    /// Exchange `username` and `password` for a session token. Issues exactly
    /// one request and never retries.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthOutcome, AuthError> {
        let request = self
            .requests
            .build(NOOP_OPERATION, username, &Credential::password(password));
        let response = self.transport.post(&request).await.map_err(|error| {
            warn!(%error, "dns api login request failed");
            AuthError::from(error)
        })?;

        match response.status {
            200 => {
                debug!(has_token = response.auth_token.is_some(), "dns api login accepted");
                Ok(AuthOutcome::Authenticated {
                    token: response.auth_token,
                })
            }
            status if is_auth_rejection(status) => {
                debug!(status, "dns api login rejected");
                Ok(AuthOutcome::Rejected)
            }
            status => {
                warn!(status, "dns api login returned unexpected status");
                Err(AuthError::UnexpectedStatus(status))
            }
        }
    }
}
