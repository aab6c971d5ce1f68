//! Pure construction of DNS API operation requests.

use std::collections::BTreeMap;

use super::{ClientConfig, Credential};

/// Header carrying the account name on every request.
pub const USERNAME_HEADER: &str = "X-Auth-Username";
/// Header carrying a session token.
pub const TOKEN_HEADER: &str = "X-Auth-Token";
/// Header carrying a password during login.
pub const PASSWORD_HEADER: &str = "X-Auth-Password";

/// Transport-neutral description of one operation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRequest {
    /// Absolute URI: normalised base URI followed by the operation name.
    pub uri: String,
    /// Authentication headers, keyed by header name.
    pub headers: BTreeMap<String, String>,
    /// JSON-encoded arguments, if any.
    pub body: Option<String>,
}

impl OperationRequest {
    /// Attach a body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Look up a header value by exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

/// Builds [`OperationRequest`]s against one configured base URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBuilder {
    base_uri: String,
}

impl RequestBuilder {
    /// Resolve the base URI from configuration.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_uri: normalize_base_uri(config.base_uri()),
        }
    }

    /// Base URI with its trailing separator.
    pub fn base_uri(&self) -> &str {
        self.base_uri.as_str()
    }

    /// Build the request for `operation` on behalf of `username`.
    ///
    /// Inputs are not validated; a malformed name simply yields a request that
    /// fails at the transport or server.
    ///
    /// # Examples
    /// ```
    /// use dns_console::domain::{ClientConfig, Credential, RequestBuilder};
    ///
    /// let builder = RequestBuilder::new(&ClientConfig::new(Some("http://dns/api".into()), false));
    /// let request = builder.build("Noop", "ops@example.com", &Credential::password("pw"));
    /// assert_eq!(request.uri, "http://dns/api/Noop");
    /// assert_eq!(request.header("X-Auth-Password"), Some("pw"));
    /// assert_eq!(request.header("X-Auth-Token"), None);
    /// ```
    pub fn build(&self, operation: &str, username: &str, credential: &Credential) -> OperationRequest {
        let mut headers = BTreeMap::new();
        headers.insert(USERNAME_HEADER.to_owned(), username.to_owned());
        match credential {
            Credential::Token(token) => {
                headers.insert(TOKEN_HEADER.to_owned(), token.clone());
            }
            Credential::Password(password) => {
                headers.insert(PASSWORD_HEADER.to_owned(), password.as_str().to_owned());
            }
            Credential::Anonymous => {}
        }

        OperationRequest {
            uri: format!("{}{operation}", self.base_uri),
            headers,
            body: None,
        }
    }
}

/// Append a `/` unless the URI already ends with one.
pub fn normalize_base_uri(base_uri: &str) -> String {
    if base_uri.ends_with('/') {
        base_uri.to_owned()
    } else {
        format!("{base_uri}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_BASE_URI;
    use rstest::rstest;

    fn builder(base_uri: Option<&str>) -> RequestBuilder {
        RequestBuilder::new(&ClientConfig::new(base_uri.map(str::to_owned), false))
    }

    #[test]
    fn falls_back_to_default_endpoint() {
        let request = builder(None).build("Noop", "ops@example.com", &Credential::Anonymous);
        assert_eq!(request.uri, format!("{DEFAULT_BASE_URI}Noop"));
    }

    #[rstest]
    #[case("https://dns.example.com/atomiadns.json")]
    #[case("https://dns.example.com/atomiadns.json/")]
    fn trailing_separator_is_normalised(#[case] base_uri: &str) {
        let request = builder(Some(base_uri)).build(
            "GetZone",
            "ops@example.com",
            &Credential::Anonymous,
        );
        assert_eq!(request.uri, "https://dns.example.com/atomiadns.json/GetZone");
    }

    #[rstest]
    #[case("alice@example.com", "s3cret")]
    #[case("bob", "correct horse battery staple")]
    fn password_requests_never_carry_a_token(#[case] username: &str, #[case] password: &str) {
        let request = builder(None).build("Noop", username, &Credential::password(password));
        assert_eq!(request.header(USERNAME_HEADER), Some(username));
        assert_eq!(request.header(PASSWORD_HEADER), Some(password));
        assert_eq!(request.header(TOKEN_HEADER), None);
    }

    #[rstest]
    #[case("alice@example.com", "tok-1")]
    #[case("bob", "f00dfeed")]
    fn token_requests_never_carry_a_password(#[case] username: &str, #[case] token: &str) {
        let request = builder(None).build("AddDnsRecords", username, &Credential::token(token));
        assert_eq!(request.header(USERNAME_HEADER), Some(username));
        assert_eq!(request.header(TOKEN_HEADER), Some(token));
        assert_eq!(request.header(PASSWORD_HEADER), None);
    }

    #[test]
    fn anonymous_request_only_identifies_the_user() {
        let request = builder(None).build("Noop", "ops@example.com", &Credential::Anonymous);
        assert_eq!(request.headers.len(), 1);
        assert!(request.body.is_none());
    }
}
