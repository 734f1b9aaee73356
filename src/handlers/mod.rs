//! HTTP handlers for the user routes and the service endpoints.

pub mod common;
pub mod users;
pub use common::*;
pub use users::*;
