//! Base types and error handling.
//!
//! - [`ResolveError`]: a classified lookup failure
//! - [`ErrorKind`]: the failure taxonomy and its HTTP status mapping

pub mod context;
pub mod resolveerror;

pub use resolveerror::{ErrorKind, ResolveError};
