//! The signed-in user as stored in the web session.

use serde::{Deserialize, Serialize};

/// Email and DNS API token remembered after login.
///
/// Both fields are optional because the session is client-supplied state: a
/// cookie written by an older build, or a login that returned no token, can
/// leave either one missing. The operation executor refuses to run unless both
/// are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Account name sent as `X-Auth-Username`.
    #[serde(default)]
    pub email: Option<String>,
    /// Token sent as `X-Auth-Token`.
    #[serde(default)]
    pub token: Option<String>,
}

impl SessionUser {
    /// Build a session user from a login result.
    pub fn new(email: impl Into<String>, token: Option<String>) -> Self {
        Self {
            email: Some(email.into()),
            token,
        }
    }

    /// Email and token, when both are present.
    pub fn api_identity(&self) -> Option<(&str, &str)> {
        Some((self.email.as_deref()?, self.token.as_deref()?))
    }
}
