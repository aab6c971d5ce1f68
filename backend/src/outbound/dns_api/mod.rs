//! DNS API outbound adapters.
//!
//! This module provides a thin HTTP implementation of the
//! `OperationTransport` port.

mod http_transport;

pub use http_transport::ReqwestOperationTransport;
