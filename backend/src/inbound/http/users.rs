//! Login and logout handlers.
//!
//! ```text
//! POST /api/v1/login {"username":"ops@example.com","password":"secret"}
//! POST /api/v1/logout
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};

use crate::domain::{
    AuthError, AuthOutcome, Error, LoginCredentials, LoginValidationError, SessionUser,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Login request body for `POST /api/v1/login`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Account email.
    pub username: String,
    /// Account password.
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password)
    }
}

/// Log in against the DNS API and remember the issued token in the session.
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    let outcome = state
        .authenticator
        .authenticate(credentials.username(), credentials.password())
        .await
        .map_err(map_auth_error)?;

    match outcome {
        AuthOutcome::Authenticated { token } => {
            session.persist_user(&SessionUser::new(credentials.username(), token))?;
            info!("user signed in");
            Ok(HttpResponse::Ok().finish())
        }
        AuthOutcome::Rejected => Err(Error::unauthorized("invalid credentials")),
    }
}

/// Drop the session.
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.logout();
    HttpResponse::NoContent().finish()
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::EmptyUsername => Error::invalid_request("username must not be empty")
            .with_details(json!({ "field": "username", "code": "empty_username" })),
        LoginValidationError::EmptyPassword => Error::invalid_request("password must not be empty")
            .with_details(json!({ "field": "password", "code": "empty_password" })),
    }
}

fn map_auth_error(err: AuthError) -> Error {
    error!(error = %err, "login could not be completed");
    match err {
        AuthError::Transport(_) => Error::service_unavailable("DNS service unavailable"),
        AuthError::UnexpectedStatus(_) => Error::service_unavailable(err.to_string()),
    }
}
