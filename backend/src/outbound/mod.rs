//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **dns_api**: reqwest-backed transport for the DNS API JSON endpoint.
//!
//! Adapters are thin translators between domain types and wire
//! representations. They contain no business logic.

pub mod dns_api;
