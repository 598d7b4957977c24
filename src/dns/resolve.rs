//! Core DNS resolution types and traits.
//!
//! This module defines the `Resolve` trait and supporting types that form
//! the foundation of the resolver adapter.

use crate::base::resolveerror::ResolveError;
use futures::future::BoxFuture;
use std::{fmt, net::IpAddr, str::FromStr, sync::Arc};

/// A domain name to resolve into IP addresses.
///
/// Passed through opaquely: no RFC syntax validation happens here, the
/// resolution mechanism decides what it accepts.
#[derive(Clone, Hash, Eq, PartialEq)]
pub struct DomainName {
    host: Box<str>,
}

impl DomainName {
    /// Creates a new [`DomainName`] from any string-like type.
    #[inline]
    pub fn new(host: impl Into<Box<str>>) -> Self {
        Self { host: host.into() }
    }

    /// View the hostname as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.host
    }
}

impl From<&str> for DomainName {
    fn from(value: &str) -> Self {
        DomainName::new(value)
    }
}

impl From<String> for DomainName {
    fn from(value: String) -> Self {
        DomainName::new(value)
    }
}

impl fmt::Debug for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.host, f)
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.host, f)
    }
}

/// Which resolution mechanism a deployment uses.
///
/// The strategy also fixes the shape of a successful HTTP response:
/// a single `ip_address` for `System`, an `ip_addresses` list for `Direct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// The operating system's stub resolver.
    System,
    /// A direct "A" record query against a DNS server.
    #[default]
    Direct,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::System => "system",
            Strategy::Direct => "direct",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" | "stub" => Ok(Strategy::System),
            "direct" => Ok(Strategy::Direct),
            other => Err(format!("unknown resolver strategy '{other}'")),
        }
    }
}

/// A successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    domain: DomainName,
    addresses: Vec<IpAddr>,
}

impl Resolution {
    pub fn new(domain: DomainName, addresses: Vec<IpAddr>) -> Self {
        Self { domain, addresses }
    }

    pub fn domain(&self) -> &DomainName {
        &self.domain
    }

    /// Addresses in the order the resolver returned them.
    pub fn addresses(&self) -> &[IpAddr] {
        &self.addresses
    }

    pub fn into_addresses(self) -> Vec<IpAddr> {
        self.addresses
    }
}

/// Alias for the `Future` type returned by a DNS resolver.
pub type Resolving = BoxFuture<'static, Result<Resolution, ResolveError>>;

/// Trait for DNS resolution.
///
/// Implementations must be thread-safe; every call is independent and
/// performs exactly one lookup with no retry and no caching.
pub trait Resolve: Send + Sync {
    /// Resolves a domain name to IP addresses.
    fn resolve(&self, name: DomainName) -> Resolving;

    /// The mechanism behind this resolver.
    fn strategy(&self) -> Strategy;
}

/// Blanket implementation for Arc-wrapped resolvers.
impl<R: Resolve + ?Sized> Resolve for Arc<R> {
    fn resolve(&self, name: DomainName) -> Resolving {
        (**self).resolve(name)
    }

    fn strategy(&self) -> Strategy {
        (**self).strategy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::resolveerror::ErrorKind;
    use std::net::Ipv4Addr;

    #[test]
    fn test_name_from_str() {
        let name = DomainName::from("example.com");
        assert_eq!(name.as_str(), "example.com");
        assert_eq!(name.to_string(), "example.com");
    }

    #[test]
    fn test_name_from_string() {
        let domain = String::from("test.example.com");
        let name = DomainName::from(domain);
        assert_eq!(name.as_str(), "test.example.com");
    }

    #[test]
    fn test_name_is_opaque() {
        // No syntax checks: whatever the caller sends is kept verbatim.
        let name = DomainName::new("not a domain!");
        assert_eq!(name.as_str(), "not a domain!");
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("system".parse::<Strategy>(), Ok(Strategy::System));
        assert_eq!("Direct".parse::<Strategy>(), Ok(Strategy::Direct));
        assert_eq!(" stub ".parse::<Strategy>(), Ok(Strategy::System));
        assert!("doh".parse::<Strategy>().is_err());
        assert_eq!(Strategy::default(), Strategy::Direct);
    }

    #[test]
    fn test_resolution_keeps_order() {
        let addrs = vec![
            IpAddr::V4(Ipv4Addr::new(5, 6, 7, 8)),
            IpAddr::V4(Ipv4Addr::new(1, 2, 3, 4)),
        ];
        let resolution = Resolution::new(DomainName::new("example.com"), addrs.clone());
        assert_eq!(resolution.addresses(), addrs.as_slice());
        assert_eq!(resolution.domain().as_str(), "example.com");
    }

    struct FailingResolver;

    impl Resolve for FailingResolver {
        fn resolve(&self, _name: DomainName) -> Resolving {
            Box::pin(async { Err(ResolveError::no_answer()) })
        }

        fn strategy(&self) -> Strategy {
            Strategy::Direct
        }
    }

    #[tokio::test]
    async fn test_arc_resolver_delegates() {
        let resolver: Arc<dyn Resolve> = Arc::new(FailingResolver);
        let err = resolver
            .resolve(DomainName::new("example.com"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NoAnswer);
        assert_eq!(resolver.strategy(), Strategy::Direct);
    }
}
