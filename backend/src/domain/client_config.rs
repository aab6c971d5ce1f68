//! Resolved, immutable settings shared by the gateway components.

/// Endpoint used when no base URI is configured.
pub const DEFAULT_BASE_URI: &str = "http://127.0.0.1/atomiadns.json/";

/// Settings for talking to the DNS API.
///
/// Built once at startup (see `ApiSettings::client_config`) and handed to each
/// component by reference; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_uri: String,
    raw_errors: bool,
}

impl ClientConfig {
    /// Build a configuration, falling back to [`DEFAULT_BASE_URI`].
    pub fn new(base_uri: Option<String>, raw_errors: bool) -> Self {
        Self {
            base_uri: base_uri.unwrap_or_else(|| DEFAULT_BASE_URI.to_owned()),
            raw_errors,
        }
    }

    /// Base URI exactly as configured (not yet normalised).
    pub fn base_uri(&self) -> &str {
        self.base_uri.as_str()
    }

    /// Whether fault bodies are passed to users untranslated.
    pub fn raw_errors(&self) -> bool {
        self.raw_errors
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(None, false)
    }
}
