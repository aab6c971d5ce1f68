//! HTTP inbound adapter exposing the console's REST endpoints.

pub mod caller;
pub mod error;
pub mod operations;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::ApiResult;
