//! DNS Resolution Module
//!
//! Provides the resolver adapter behind `GET /resolve/{domain}`:
//! - System resolver (getaddrinfo via thread pool)
//! - Direct A-record resolver (hickory-dns) with precise failure classes
//!
//! # Architecture
//!
//! The `Resolve` trait is the core abstraction. A deployment picks one
//! implementation at startup; the HTTP layer only ever sees `dyn Resolve`.
//!
//! # Example
//!
//! ```rust,ignore
//! use dnsnet::dns::{DirectResolver, DomainName, Resolve};
//!
//! let resolver = DirectResolver::default();
//! let resolution = resolver.resolve(DomainName::new("example.com")).await?;
//! for addr in resolution.addresses() {
//!     println!("Resolved: {}", addr);
//! }
//! ```

mod gai;
mod hickory;
mod resolve;

pub use gai::SystemResolver;
pub use hickory::{DirectConfig, DirectResolver, DEFAULT_TIMEOUT};
pub use resolve::{DomainName, Resolution, Resolve, Resolving, Strategy};
