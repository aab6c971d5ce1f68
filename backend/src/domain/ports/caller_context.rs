//! Capabilities the operation executor needs from the web request that
//! triggered it.
//!
//! When the DNS API rejects a session token the executor logs the caller out
//! and sends them back to the page they asked for. Both capabilities belong to
//! the web framework, so the domain only sees this trait.

/// Request-scoped hooks for session expiry handling.
#[cfg_attr(test, mockall::automock)]
pub trait CallerContext {
    /// URL (path and query) of the inbound request being served.
    fn original_url(&self) -> String;

    /// Invalidate the caller's session.
    fn logout(&self);
}
