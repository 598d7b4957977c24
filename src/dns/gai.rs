//! System DNS resolver using getaddrinfo.
//!
//! This resolver uses the operating system's native name resolution via
//! `getaddrinfo`, executed in a thread pool to avoid blocking the async runtime.
//!
//! It behaves like a classic `gethostbyname`: one IPv4 address per lookup,
//! and every failure is reported as an invalid domain. No timeout is applied
//! beyond what the OS itself enforces.

use super::{DomainName, Resolution, Resolve, Resolving, Strategy};
use crate::base::context::{IoResultExt, JoinResultExt};
use crate::base::resolveerror::ResolveError;
use std::net::{IpAddr, SocketAddr, ToSocketAddrs};

/// System DNS resolver using `getaddrinfo` in a thread pool.
///
/// This resolver wraps the standard library's `ToSocketAddrs` trait and
/// executes resolution in `tokio::task::spawn_blocking` so that a slow
/// lookup never stalls other requests.
#[derive(Clone, Debug, Default)]
pub struct SystemResolver;

impl SystemResolver {
    /// Creates a new `SystemResolver`.
    pub fn new() -> Self {
        Self
    }
}

impl Resolve for SystemResolver {
    fn resolve(&self, name: DomainName) -> Resolving {
        Box::pin(async move {
            let host = name.as_str().to_string();
            let domain = host.clone();

            let addrs = tokio::task::spawn_blocking(move || {
                tracing::debug!(host = %host, "resolving via getaddrinfo");
                (host.as_str(), 0u16)
                    .to_socket_addrs()
                    .map(|iter| iter.collect::<Vec<_>>())
            })
            .await
            .task_context(&domain)?
            .dns_context(&domain)?;

            let Some(ip) = first_ipv4(&addrs) else {
                tracing::debug!(domain = %domain, count = addrs.len(), "no IPv4 address returned");
                return Err(ResolveError::invalid_domain_name());
            };

            tracing::debug!(domain = %domain, ip = %ip, "system resolution complete");
            Ok(Resolution::new(name, vec![ip]))
        })
    }

    fn strategy(&self) -> Strategy {
        Strategy::System
    }
}

/// Picks the first IPv4 address, in the order the OS reported them.
fn first_ipv4(addrs: &[SocketAddr]) -> Option<IpAddr> {
    addrs.iter().map(SocketAddr::ip).find(IpAddr::is_ipv4)
}
