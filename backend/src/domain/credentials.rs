//! Credentials presented to the DNS API.
//!
//! A request carries at most one secret, so [`Credential`] has no "token and
//! password together" state.

use std::fmt;

use zeroize::Zeroizing;

/// Secret attached to an operation request.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Session token issued by a previous `Noop` login.
    Token(String),
    /// Account password, used only for the login handshake.
    Password(Zeroizing<String>),
    /// No secret; the request only identifies the user.
    Anonymous,
}

impl Credential {
    /// Build a token credential.
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(token.into())
    }

    /// Build a password credential.
    pub fn password(password: impl Into<String>) -> Self {
        Self::Password(Zeroizing::new(password.into()))
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(_) => f.write_str("Token(..)"),
            Self::Password(_) => f.write_str("Password(..)"),
            Self::Anonymous => f.write_str("Anonymous"),
        }
    }
}

/// Validation failures for login form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Username and password submitted on the login form.
///
/// ## Invariants
/// - `username` is trimmed and non-empty.
/// - `password` is non-empty; whitespace is preserved as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Validate raw form values.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            username: username.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Account name, which doubles as the user's email address.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password as typed.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn debug_output_hides_secrets() {
        let rendered = format!("{:?}", Credential::password("hunter2"));
        assert!(!rendered.contains("hunter2"), "password leaked: {rendered}");
    }

    #[rstest]
    #[case("", "pw", LoginValidationError::EmptyUsername)]
    #[case("   ", "pw", LoginValidationError::EmptyUsername)]
    #[case("ops@example.com", "", LoginValidationError::EmptyPassword)]
    fn rejects_blank_login_fields(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: LoginValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(username, password)
            .expect_err("blank input must fail");
        assert_eq!(err, expected);
    }

    #[test]
    fn trims_username_but_not_password() {
        let creds = LoginCredentials::try_from_parts("  ops@example.com ", " secret ")
            .expect("valid input");
        assert_eq!(creds.username(), "ops@example.com");
        assert_eq!(creds.password(), " secret ");
    }
}
