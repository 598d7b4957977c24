//! Direct "A" record resolver using hickory-dns.
//!
//! Queries DNS servers directly instead of going through the OS stub, which
//! lets failures be told apart:
//! - NXDOMAIN (or a name that cannot be encoded) is an invalid domain
//! - no response before the timeout is a timeout
//! - a NOERROR response without A records is an empty answer
//! - any other response code (SERVFAIL, REFUSED, ...) is unknown
//!
//! Each lookup makes a single attempt per name server and nothing is cached.
//! Names are sent as-is: no hosts file, no search-domain expansion.

use super::{DomainName, Resolution, Resolve, Resolving, Strategy};
use crate::base::resolveerror::ResolveError;
use hickory_resolver::{
    config::{LookupIpStrategy, NameServerConfig, ResolveHosts, ResolverConfig},
    name_server::TokioConnectionProvider,
    proto::{op::ResponseCode, rr::Name as DnsName, xfer::Protocol, ProtoError, ProtoErrorKind},
    ResolveError as HickoryError, TokioResolver,
};
use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
    time::Duration,
};

/// Default per-query timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Settings for [`DirectResolver`].
#[derive(Debug, Clone)]
pub struct DirectConfig {
    /// How long to wait for an answer before reporting a timeout.
    pub timeout: Duration,
    /// Servers to query over UDP. Empty means the system configuration.
    pub name_servers: Vec<SocketAddr>,
}

impl Default for DirectConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            name_servers: Vec::new(),
        }
    }
}

/// Async A-record resolver backed by hickory-dns.
///
/// # Example
///
/// ```rust,ignore
/// use dnsnet::dns::{DirectConfig, DirectResolver, DomainName, Resolve};
///
/// let resolver = DirectResolver::new(DirectConfig::default());
/// let resolution = resolver.resolve(DomainName::new("example.com")).await?;
/// ```
#[derive(Clone)]
pub struct DirectResolver {
    resolver: Arc<TokioResolver>,
    timeout: Duration,
}

impl DirectResolver {
    /// Creates a new `DirectResolver`.
    ///
    /// With no explicit name servers it reads the system DNS configuration;
    /// if that fails, it falls back to hickory's defaults.
    pub fn new(config: DirectConfig) -> Self {
        let mut builder = if config.name_servers.is_empty() {
            match TokioResolver::builder_tokio() {
                Ok(builder) => {
                    tracing::debug!("Using system DNS configuration");
                    builder
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "Failed to read system DNS config, using defaults"
                    );
                    TokioResolver::builder_with_config(
                        ResolverConfig::default(),
                        TokioConnectionProvider::default(),
                    )
                }
            }
        } else {
            let mut resolver_config = ResolverConfig::new();
            for addr in &config.name_servers {
                resolver_config.add_name_server(NameServerConfig::new(*addr, Protocol::Udp));
            }
            tracing::debug!(servers = ?config.name_servers, "Using configured name servers");
            TokioResolver::builder_with_config(resolver_config, TokioConnectionProvider::default())
        };

        let opts = builder.options_mut();
        opts.ip_strategy = LookupIpStrategy::Ipv4Only;
        opts.timeout = config.timeout;
        opts.attempts = 1;
        opts.cache_size = 0;
        opts.use_hosts_file = ResolveHosts::Never;

        Self {
            resolver: Arc::new(builder.build()),
            timeout: config.timeout,
        }
    }

    /// The per-query timeout this resolver was built with.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for DirectResolver {
    fn default() -> Self {
        Self::new(DirectConfig::default())
    }
}

impl std::fmt::Debug for DirectResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectResolver")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Resolve for DirectResolver {
    fn resolve(&self, name: DomainName) -> Resolving {
        let resolver = self.resolver.clone();
        Box::pin(async move {
            let domain = name.as_str();
            tracing::debug!(domain = %domain, "resolving A records via hickory-dns");

            let query = parse_name(domain).map_err(|e| {
                tracing::debug!(domain = %domain, error = %e, "name cannot be encoded");
                ResolveError::domain_does_not_exist()
            })?;

            let lookup = resolver.ipv4_lookup(query).await.map_err(|e| {
                let err = classify(&e);
                tracing::debug!(
                    domain = %domain,
                    error = %e,
                    kind = err.kind().as_str(),
                    "hickory-dns lookup failed"
                );
                err
            })?;

            let addrs: Vec<IpAddr> = lookup.iter().map(|a| IpAddr::V4(a.0)).collect();

            if addrs.is_empty() {
                return Err(ResolveError::no_answer());
            }

            tracing::debug!(domain = %domain, count = addrs.len(), "hickory-dns resolution complete");
            Ok(Resolution::new(name, addrs))
        })
    }

    fn strategy(&self) -> Strategy {
        Strategy::Direct
    }
}

/// Builds the absolute query name.
///
/// ASCII input goes through the permissive parser so service labels such as
/// `_dmarc` survive; anything else is IDNA-encoded.
fn parse_name(domain: &str) -> Result<DnsName, ProtoError> {
    let mut name = if domain.is_ascii() {
        DnsName::from_ascii(domain)?
    } else {
        DnsName::from_utf8(domain)?
    };
    name.set_fqdn(true);
    Ok(name)
}

/// Maps a hickory failure onto the error taxonomy.
///
/// Only NXDOMAIN and an empty NOERROR answer are told apart; other response
/// codes are server failures and stay `Unknown`.
pub(crate) fn classify(err: &HickoryError) -> ResolveError {
    match err.proto().map(ProtoError::kind) {
        Some(ProtoErrorKind::NoRecordsFound { response_code, .. }) => match *response_code {
            ResponseCode::NXDomain => ResolveError::domain_does_not_exist(),
            ResponseCode::NoError => ResolveError::no_answer(),
            _ => ResolveError::unknown(err.to_string()),
        },
        Some(ProtoErrorKind::Timeout) => ResolveError::timed_out(),
        _ => ResolveError::unknown(err.to_string()),
    }
}
