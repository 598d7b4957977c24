//! Service configuration.
//!
//! The defaults alone are a complete deployment: the service listens on
//! port 8000 on all interfaces (`0.0.0.0:8000`), resolves with direct
//! A-record queries against the system's name servers, and gives up on a
//! query after five seconds. No environment is needed to run it.
//!
//! The `DNSNET_*` variables are optional overrides on top of those defaults:
//!
//! - `DNSNET_BIND`: listen address (`ip:port`)
//! - `DNSNET_STRATEGY`: `direct` (default) or `system`
//! - `DNSNET_TIMEOUT_MS`: per-query timeout for the direct strategy
//! - `DNSNET_NAMESERVERS`: comma-separated `ip` or `ip:port` list
//!
//! # Example
//!
//! ```rust,ignore
//! use dnsnet::config::ServerConfig;
//! use dnsnet::dns::Strategy;
//!
//! let config = ServerConfig::builder()
//!     .strategy(Strategy::System)
//!     .bind_addr("127.0.0.1:8080".parse()?)
//!     .build();
//! ```

use crate::dns::{
    DirectConfig, DirectResolver, Resolve, Strategy, SystemResolver, DEFAULT_TIMEOUT,
};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub const ENV_BIND: &str = "DNSNET_BIND";
pub const ENV_STRATEGY: &str = "DNSNET_STRATEGY";
pub const ENV_TIMEOUT_MS: &str = "DNSNET_TIMEOUT_MS";
pub const ENV_NAMESERVERS: &str = "DNSNET_NAMESERVERS";

const DEFAULT_BIND: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8000);
const DNS_PORT: u16 = 53;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(var: &'static str, value: &str, reason: impl ToString) -> Self {
        ConfigError::Invalid {
            var,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Runtime configuration for the resolve service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    bind_addr: SocketAddr,
    strategy: Strategy,
    timeout: Duration,
    name_servers: Vec<SocketAddr>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND,
            strategy: Strategy::default(),
            timeout: DEFAULT_TIMEOUT,
            name_servers: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Create a new config builder.
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load overrides through `lookup`; unset or blank variables keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut builder = Self::builder();

        if let Some(value) = get(ENV_BIND) {
            let addr = value
                .trim()
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::invalid(ENV_BIND, &value, e))?;
            builder = builder.bind_addr(addr);
        }

        if let Some(value) = get(ENV_STRATEGY) {
            let strategy = value
                .parse::<Strategy>()
                .map_err(|e| ConfigError::invalid(ENV_STRATEGY, &value, e))?;
            builder = builder.strategy(strategy);
        }

        if let Some(value) = get(ENV_TIMEOUT_MS) {
            let ms = value
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::invalid(ENV_TIMEOUT_MS, &value, e))?;
            if ms == 0 {
                return Err(ConfigError::invalid(ENV_TIMEOUT_MS, &value, "must be positive"));
            }
            builder = builder.timeout(Duration::from_millis(ms));
        }

        if let Some(value) = get(ENV_NAMESERVERS) {
            builder = builder.name_servers(parse_name_servers(&value)?);
        }

        Ok(builder.build())
    }

    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn name_servers(&self) -> &[SocketAddr] {
        &self.name_servers
    }

    /// Build the resolver this configuration selects.
    pub fn resolver(&self) -> Arc<dyn Resolve> {
        match self.strategy {
            Strategy::System => Arc::new(SystemResolver::new()),
            Strategy::Direct => Arc::new(DirectResolver::new(DirectConfig {
                timeout: self.timeout,
                name_servers: self.name_servers.clone(),
            })),
        }
    }
}

/// Accepts `ip` or `ip:port` entries separated by commas; port defaults to 53.
fn parse_name_servers(value: &str) -> Result<Vec<SocketAddr>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|entry| {
            entry
                .parse::<SocketAddr>()
                .or_else(|_| entry.parse::<IpAddr>().map(|ip| SocketAddr::new(ip, DNS_PORT)))
                .map_err(|e| ConfigError::invalid(ENV_NAMESERVERS, entry, e))
        })
        .collect()
}

/// Builder for creating a [`ServerConfig`].
#[derive(Default)]
pub struct ServerConfigBuilder {
    bind_addr: Option<SocketAddr>,
    strategy: Option<Strategy>,
    timeout: Option<Duration>,
    name_servers: Option<Vec<SocketAddr>>,
}

impl ServerConfigBuilder {
    /// Set the listen address.
    pub fn bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = Some(addr);
        self
    }

    /// Set the resolution strategy.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Set the direct-query timeout (ignored by the system strategy).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Query these servers instead of the system configuration.
    pub fn name_servers(mut self, servers: Vec<SocketAddr>) -> Self {
        self.name_servers = Some(servers);
        self
    }

    /// Build the config.
    pub fn build(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            bind_addr: self.bind_addr.unwrap_or(defaults.bind_addr),
            strategy: self.strategy.unwrap_or(defaults.strategy),
            timeout: self.timeout.unwrap_or(defaults.timeout),
            name_servers: self.name_servers.unwrap_or(defaults.name_servers),
        }
    }
}
