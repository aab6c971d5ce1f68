//! Gateway domain: request construction, login, operation execution, and
//! fault humanization for the DNS API.
//!
//! Public surface:
//! - [`RequestBuilder`] builds [`OperationRequest`]s from a [`ClientConfig`].
//! - [`Authenticator`] exchanges a password for a session token.
//! - [`OperationExecutor`] runs named operations with a [`SessionUser`]'s token.
//! - [`ErrorHumanizer`] turns fault payloads into user-facing text.
//! - [`Error`] is the payload inbound adapters return to browsers.

pub mod authenticator;
pub mod client_config;
pub mod credentials;
pub mod error;
pub mod humanizer;
pub mod operation_executor;
pub mod ports;
pub mod request_builder;
pub mod session_user;

pub use self::authenticator::{AuthError, AuthOutcome, Authenticator, NOOP_OPERATION};
pub use self::client_config::{ClientConfig, DEFAULT_BASE_URI};
pub use self::credentials::{Credential, LoginCredentials, LoginValidationError};
pub use self::error::{Error, ErrorCode};
pub use self::humanizer::{ERROR_MESSAGES, ErrorHumanizer, UNKNOWN_ERROR_TYPE};
pub use self::operation_executor::{
    OperationError, OperationExecutor, OperationOutcome, Redirect,
};
pub use self::request_builder::{
    OperationRequest, PASSWORD_HEADER, RequestBuilder, TOKEN_HEADER, USERNAME_HEADER,
};
pub use self::session_user::SessionUser;

/// Statuses the DNS API uses to refuse credentials or tokens.
pub(crate) fn is_auth_rejection(status: u16) -> bool {
    (401..=403).contains(&status)
}

/// Convenient API result alias.
pub type ApiResult<T> = Result<T, Error>;
