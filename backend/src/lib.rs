//! DNS console gateway library modules.
//!
//! The domain talks to the Atomia DNS REST API through the
//! [`domain::ports::OperationTransport`] port; [`outbound`] supplies the
//! reqwest implementation and [`inbound`] exposes Actix handlers to browsers.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
