//! # dnsnet
//!
//! A small HTTP service that resolves domain names to IP addresses.
//!
//! `dnsnet` exposes `GET /resolve/{domain}` and answers with JSON. One
//! resolution strategy is chosen per deployment:
//!
//! - **System**: the operating system's stub resolver (`getaddrinfo`),
//!   returning a single IPv4 address; every failure is an invalid domain.
//! - **Direct**: an "A" record query via hickory-dns, returning every
//!   address in the answer and telling NXDOMAIN, timeouts and empty answers
//!   apart.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dnsnet::config::ServerConfig;
//! use dnsnet::http::ResolveServer;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig::from_env().unwrap();
//!     let server = ResolveServer::bind(config.bind_addr(), config.resolver())
//!         .await
//!         .unwrap();
//!     server.serve(std::future::pending()).await.unwrap();
//! }
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error taxonomy and HTTP status mapping
//! - [`config`] - Service configuration and environment overrides
//! - [`dns`] - The `Resolve` trait and both resolver implementations
//! - [`http`] - Routing, JSON bodies and the axum server

pub mod base;
pub mod config;
pub mod dns;
pub mod http;
