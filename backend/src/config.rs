//! DNS API settings loaded via OrthoConfig.
//!
//! Environment variables use the `ATOMIADNS_` prefix:
//! `ATOMIADNS_SOAP_URI`, `ATOMIADNS_RAW_ERRORS`, and
//! `ATOMIADNS_REQUEST_TIMEOUT_SECS`.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Deserializer};

use crate::domain::{ClientConfig, DEFAULT_BASE_URI};

/// Settings controlling how the gateway talks to the DNS API.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ATOMIADNS")]
pub struct ApiSettings {
    /// Base URI of the DNS API JSON endpoint.
    #[ortho_config(default = DEFAULT_BASE_URI.to_owned())]
    pub soap_uri: String,
    /// Any non-empty value disables fault humanization.
    #[serde(default, deserialize_with = "deserialize_toggle")]
    pub raw_errors: Option<String>,
    /// Optional request timeout applied by the HTTP transport.
    pub request_timeout_secs: Option<u64>,
}

/// Scalar shapes the environment layer may produce for a toggle.
#[derive(Deserialize)]
#[serde(untagged)]
enum ToggleValue {
    Text(String),
    Flag(bool),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

// The env provider types `1`, `0`, `true`, and `false`; keep the text the
// operator wrote so only an empty value reads as off.
fn deserialize_toggle<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<ToggleValue>::deserialize(deserializer)?;
    Ok(value.map(|value| match value {
        ToggleValue::Text(text) => text,
        ToggleValue::Flag(flag) => flag.to_string(),
        ToggleValue::Signed(number) => number.to_string(),
        ToggleValue::Unsigned(number) => number.to_string(),
        ToggleValue::Float(number) => number.to_string(),
    }))
}

impl ApiSettings {
    /// Whether raw fault bodies should reach users.
    pub fn raw_errors_enabled(&self) -> bool {
        self.raw_errors
            .as_deref()
            .is_some_and(|value| !value.is_empty())
    }

    /// Transport timeout, if one was configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Resolve into the immutable configuration handed to domain components.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(Some(self.soap_uri.clone()), self.raw_errors_enabled())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for DNS API settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ApiSettings {
        ApiSettings::load_from_iter([OsString::from("dns-console")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env([
            ("ATOMIADNS_SOAP_URI", None::<String>),
            ("ATOMIADNS_RAW_ERRORS", None::<String>),
            ("ATOMIADNS_REQUEST_TIMEOUT_SECS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        let config = settings.client_config();
        assert_eq!(config.base_uri(), DEFAULT_BASE_URI);
        assert!(!config.raw_errors());
        assert!(settings.request_timeout().is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "ATOMIADNS_SOAP_URI",
                Some("https://dns.example.com/atomiadns.json".to_owned()),
            ),
            ("ATOMIADNS_RAW_ERRORS", Some("1".to_owned())),
            ("ATOMIADNS_REQUEST_TIMEOUT_SECS", Some("15".to_owned())),
        ]);

        let settings = load_from_empty_args();
        let config = settings.client_config();
        assert_eq!(config.base_uri(), "https://dns.example.com/atomiadns.json");
        assert!(config.raw_errors());
        assert_eq!(settings.request_timeout(), Some(Duration::from_secs(15)));
    }

    #[rstest]
    #[case::numeric_on("1")]
    #[case::numeric_off("0")]
    #[case::boolean_on("true")]
    #[case::boolean_off("false")]
    #[case::word("yes")]
    fn any_non_empty_raw_errors_value_enables_passthrough(#[case] raw: &str) {
        let _guard = lock_env([
            ("ATOMIADNS_SOAP_URI", None::<String>),
            ("ATOMIADNS_RAW_ERRORS", Some(raw.to_owned())),
            ("ATOMIADNS_REQUEST_TIMEOUT_SECS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.raw_errors.as_deref(), Some(raw));
        assert!(settings.client_config().raw_errors());
        assert_eq!(settings.client_config().base_uri(), DEFAULT_BASE_URI);
    }

    #[rstest]
    #[case(None, false)]
    #[case(Some(""), false)]
    #[case(Some("0"), true)]
    fn raw_errors_toggle_is_plain_non_emptiness(#[case] raw: Option<&str>, #[case] expected: bool) {
        let settings = ApiSettings {
            soap_uri: DEFAULT_BASE_URI.to_owned(),
            raw_errors: raw.map(str::to_owned),
            request_timeout_secs: None,
        };
        assert_eq!(settings.raw_errors_enabled(), expected);
    }
}
