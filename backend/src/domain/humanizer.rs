//! Translation of DNS API fault payloads into messages safe to show users.
//!
//! Fault bodies look like `{"error_type": "LogicalError.Something", ...}`.
//! Only fault types listed in [`ERROR_MESSAGES`] are shown with a specific
//! message; anything else collapses to the unknown-error text so internal
//! details never reach the browser.

use serde_json::Value;
use tracing::debug;

/// Fault type whose message is used when nothing else matches.
pub const UNKNOWN_ERROR_TYPE: &str = "InternalError.UnknownException";

/// Known fault types and their user-facing messages.
pub const ERROR_MESSAGES: &[(&str, &str)] = &[
    (UNKNOWN_ERROR_TYPE, "Unknown error"),
    (
        "LogicalError.DifferentTTLForSameLabelClassAndType",
        "You can't have records for the same name and type but with different TTL values",
    ),
];

/// Look up the message for a fault type.
pub fn message_for(error_type: &str) -> Option<&'static str> {
    ERROR_MESSAGES
        .iter()
        .find(|(known, _)| *known == error_type)
        .map(|(_, message)| *message)
}

/// Message returned when a fault cannot be mapped.
pub fn unknown_error_message() -> &'static str {
    message_for(UNKNOWN_ERROR_TYPE).unwrap_or("Unknown error")
}

/// Maps raw fault text to user-facing messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorHumanizer {
    raw_errors: bool,
}

impl ErrorHumanizer {
    /// When `raw_errors` is set, [`Self::humanize`] returns its input as is.
    pub fn new(raw_errors: bool) -> Self {
        Self { raw_errors }
    }

    /// Translate `raw` into a user-facing message. Never fails.
    ///
    /// # Examples
    /// ```
    /// use dns_console::domain::ErrorHumanizer;
    ///
    /// let humanizer = ErrorHumanizer::new(false);
    /// assert_eq!(humanizer.humanize("garbage"), "Unknown error");
    /// assert_eq!(ErrorHumanizer::new(true).humanize("garbage"), "garbage");
    /// ```
    pub fn humanize(&self, raw: &str) -> String {
        if self.raw_errors {
            return raw.to_owned();
        }

        let fault_type = serde_json::from_str::<Value>(raw)
            .ok()
            .and_then(|fault| fault.get("error_type").and_then(Value::as_str).map(str::to_owned));
        match fault_type.as_deref().and_then(message_for) {
            Some(message) => message.to_owned(),
            None => {
                debug!(fault_type = ?fault_type, "unmapped dns api fault");
                unknown_error_message().to_owned()
            }
        }
    }
}
