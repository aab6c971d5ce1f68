//! Domain ports for the DNS API gateway.
//!
//! The transport port is driven (the domain calls out through it); the caller
//! context is supplied by inbound adapters for the duration of one request.

mod macros;
pub(crate) use macros::define_port_error;

mod caller_context;
mod operation_transport;

#[cfg(test)]
pub use caller_context::MockCallerContext;
pub use caller_context::CallerContext;
#[cfg(test)]
pub use operation_transport::MockOperationTransport;
pub use operation_transport::{OperationTransport, TransportError, TransportResponse};
