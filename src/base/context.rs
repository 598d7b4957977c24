//! Ergonomic error context helpers.
//!
//! Provides extension traits for turning IO and task errors from the
//! resolution path into classified `ResolveError` values, logging the
//! underlying cause on the way.

use crate::base::resolveerror::ResolveError;
use std::io;
use tokio::task::JoinError;

/// Extension trait for adding lookup context to IO Results.
pub trait IoResultExt<T> {
    /// Classify an OS resolver error for `domain`.
    ///
    /// # Example
    /// ```ignore
    /// use dnsnet::base::context::IoResultExt;
    ///
    /// let addrs = ("example.com", 0).to_socket_addrs()
    ///     .dns_context("example.com")?;
    /// // Error: "Invalid domain name"
    /// ```
    fn dns_context(self, domain: &str) -> Result<T, ResolveError>;
}

impl<T> IoResultExt<T> for Result<T, io::Error> {
    fn dns_context(self, domain: &str) -> Result<T, ResolveError> {
        self.map_err(|e| {
            tracing::debug!(domain = %domain, error = %e, "system resolver rejected name");
            ResolveError::invalid_domain_name()
        })
    }
}

/// Extension trait for blocking-pool results.
pub trait JoinResultExt<T> {
    /// A lookup task that panicked or was cancelled is an unclassified failure.
    fn task_context(self, domain: &str) -> Result<T, ResolveError>;
}

impl<T> JoinResultExt<T> for Result<T, JoinError> {
    fn task_context(self, domain: &str) -> Result<T, ResolveError> {
        self.map_err(|e| {
            tracing::error!(domain = %domain, error = %e, "DNS resolution task failed");
            ResolveError::unknown(format!("Resolution task failed: {e}"))
        })
    }
}
