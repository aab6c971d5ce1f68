//! Reqwest-backed DNS API transport.
//!
//! This adapter owns wire details only: URI parsing, header encoding, timeout
//! and transport error mapping. Status codes are handed back untouched; the
//! domain decides what they mean.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Url};
use tracing::debug;

use crate::domain::ports::{OperationTransport, TransportError, TransportResponse};
use crate::domain::{OperationRequest, TOKEN_HEADER};

const DEFAULT_USER_AGENT: &str = "dns-console/0.1";

/// Transport that POSTs operation requests with a shared reqwest client.
pub struct ReqwestOperationTransport {
    client: Client,
}

impl ReqwestOperationTransport {
    /// Build a transport without a request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_timeout(None)
    }

    /// Build a transport, optionally bounding each request by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(DEFAULT_USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl OperationTransport for ReqwestOperationTransport {
    async fn post(&self, request: &OperationRequest) -> Result<TransportResponse, TransportError> {
        let url = Url::parse(&request.uri).map_err(|error| {
            TransportError::invalid_request(format!("invalid operation uri {}: {error}", request.uri))
        })?;
        let mut builder = self.client.post(url).headers(header_map(&request.headers)?);
        if let Some(body) = &request.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(body.clone());
        }

        let response = builder.send().await.map_err(map_transport_error)?;
        let status = response.status().as_u16();
        let auth_token = response
            .headers()
            .get(TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.text().await.map_err(map_transport_error)?;
        debug!(uri = %request.uri, status, body_len = body.len(), "dns api responded");

        Ok(TransportResponse {
            status,
            auth_token,
            body,
        })
    }
}

fn header_map(headers: &BTreeMap<String, String>) -> Result<HeaderMap, TransportError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|error| {
            TransportError::invalid_request(format!("invalid header name {name}: {error}"))
        })?;
        // Values may be secrets; keep them out of the error text.
        let header_value = HeaderValue::from_str(value).map_err(|error| {
            TransportError::invalid_request(format!("invalid value for header {name}: {error}"))
        })?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

fn map_transport_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::timeout(error.to_string())
    } else {
        TransportError::transport(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network request mapping helpers.

    use super::*;
    use crate::domain::{PASSWORD_HEADER, USERNAME_HEADER};

    #[test]
    fn encodes_auth_headers() {
        let headers = BTreeMap::from([
            (USERNAME_HEADER.to_owned(), "ops@example.com".to_owned()),
            (PASSWORD_HEADER.to_owned(), "pw".to_owned()),
        ]);
        let map = header_map(&headers).expect("headers should encode");
        assert_eq!(
            map.get("x-auth-username").and_then(|v| v.to_str().ok()),
            Some("ops@example.com")
        );
        assert_eq!(map.get("x-auth-password").and_then(|v| v.to_str().ok()), Some("pw"));
    }

    #[test]
    fn rejects_control_characters_without_echoing_value() {
        let headers = BTreeMap::from([(TOKEN_HEADER.to_owned(), "secret\nvalue".to_owned())]);
        let error = header_map(&headers).expect_err("newline must be rejected");
        assert!(matches!(error, TransportError::InvalidRequest { .. }));
        assert!(!error.to_string().contains("secret"), "leaked value: {error}");
    }

    #[tokio::test]
    async fn invalid_uri_fails_before_sending() {
        let transport = ReqwestOperationTransport::new().expect("client should build");
        let request = OperationRequest {
            uri: "not a uri/Noop".to_owned(),
            headers: BTreeMap::new(),
            body: None,
        };
        let error = transport.post(&request).await.expect_err("uri must fail");
        assert!(matches!(error, TransportError::InvalidRequest { .. }));
    }
}
