//! Execution of named DNS API operations on behalf of a signed-in user.
//!
//! Every call ends in exactly one of three ways: a JSON result, an
//! [`OperationError`], or [`OperationOutcome::SessionExpired`]. The last one is
//! not an error: the server refused the token, the executor has already logged
//! the caller out, and the caller must answer with the returned [`Redirect`]
//! instead of rendering a result.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::ports::{CallerContext, OperationTransport, TransportError};
use super::{ClientConfig, Credential, ErrorHumanizer, RequestBuilder, SessionUser, is_auth_rejection};

/// Instruction to send the caller back to `location`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    location: String,
}

impl Redirect {
    /// Redirect to `location`.
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    /// Target URL.
    pub fn location(&self) -> &str {
        self.location.as_str()
    }
}

/// Non-error termination of an operation call.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationOutcome {
    /// The operation succeeded and returned this JSON document.
    Completed(Value),
    /// The token was rejected; the session is gone and the caller must be
    /// redirected.
    SessionExpired(Redirect),
}

/// Failures surfaced to the caller of [`OperationExecutor::execute_operation`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    /// Operation name, user, email, or token missing. Raised before any I/O.
    #[error("invalid input to executeOperation")]
    InvalidInput,
    /// The request never produced a response.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// `200` with a body that is not JSON.
    #[error("invalid JSON returned for {operation}")]
    MalformedResponse {
        /// Operation that was called.
        operation: String,
    },
    /// Failure status with an empty body.
    #[error("invalid status for {operation}")]
    EmptyFailureBody {
        /// Operation that was called.
        operation: String,
    },
    /// Failure status with a fault body, already humanized.
    #[error("{0}")]
    ServerFault(String),
}

/// Runs operations with the caller's session token.
#[derive(Clone)]
pub struct OperationExecutor {
    requests: RequestBuilder,
    humanizer: ErrorHumanizer,
    transport: Arc<dyn OperationTransport>,
}

impl OperationExecutor {
    /// Build an executor sending requests through `transport`.
    pub fn new(transport: Arc<dyn OperationTransport>, config: &ClientConfig) -> Self {
        Self {
            requests: RequestBuilder::new(config),
            humanizer: ErrorHumanizer::new(config.raw_errors()),
            transport,
        }
    }

    /// Call `operation` with `args` as the JSON body.
    ///
    /// The user's email and token authenticate the request; passwords are
    /// never sent from here. On `401`..=`403` the caller is logged out through
    /// `caller` and [`OperationOutcome::SessionExpired`] carries the redirect
    /// back to [`CallerContext::original_url`].
    pub async fn execute_operation<C>(
        &self,
        caller: &C,
        user: Option<&SessionUser>,
        operation: &str,
        args: &Value,
    ) -> Result<OperationOutcome, OperationError>
    where
        C: CallerContext + ?Sized,
    {
        let Some((email, token)) = user.and_then(SessionUser::api_identity) else {
            return Err(OperationError::InvalidInput);
        };
        if operation.is_empty() {
            return Err(OperationError::InvalidInput);
        }

        let request = self
            .requests
            .build(operation, email, &Credential::token(token))
            .with_body(args.to_string());
        let response = self.transport.post(&request).await.map_err(|error| {
            warn!(operation, %error, "dns api operation request failed");
            OperationError::from(error)
        })?;

        match response.status {
            200 => match serde_json::from_str::<Value>(&response.body) {
                Ok(result) => {
                    debug!(operation, "dns api operation completed");
                    Ok(OperationOutcome::Completed(result))
                }
                Err(error) => {
                    warn!(operation, %error, "dns api returned invalid JSON");
                    Err(OperationError::MalformedResponse {
                        operation: operation.to_owned(),
                    })
                }
            },
            status if is_auth_rejection(status) => {
                info!(operation, status, "dns api token rejected; ending session");
                caller.logout();
                Ok(OperationOutcome::SessionExpired(Redirect::to(
                    caller.original_url(),
                )))
            }
            status if response.body.is_empty() => {
                warn!(operation, status, "dns api failure without body");
                Err(OperationError::EmptyFailureBody {
                    operation: operation.to_owned(),
                })
            }
            status => {
                warn!(operation, status, fault = %response.body, "dns api fault");
                Err(OperationError::ServerFault(
                    self.humanizer.humanize(&response.body),
                ))
            }
        }
    }
}

#[cfg(test)]
#[path = "operation_executor_tests.rs"]
mod tests;
