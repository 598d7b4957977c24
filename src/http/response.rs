//! JSON response bodies.

use crate::base::resolveerror::ResolveError;
use crate::dns::{Resolution, Strategy};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Success body for the system resolver: exactly one address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBody {
    pub domain: String,
    pub ip_address: String,
}

/// Success body for the direct resolver: all answer addresses, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressesBody {
    pub domain: String,
    pub ip_addresses: Vec<String>,
}

/// Error body, `{"detail": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl ErrorBody {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Serialize `value` as the JSON body of a response with the given status.
pub fn json<T: Serialize>(status: StatusCode, value: T) -> Response {
    (status, Json(value)).into_response()
}

/// Render a successful lookup in the shape the strategy dictates.
pub fn resolution(strategy: Strategy, resolution: Resolution) -> Response {
    let domain = resolution.domain().to_string();
    let mut addrs = resolution.into_addresses().into_iter().map(|ip| ip.to_string());

    match strategy {
        Strategy::System => match addrs.next() {
            Some(ip_address) => json(StatusCode::OK, AddressBody { domain, ip_address }),
            None => error(&ResolveError::unknown("Resolver returned no address")),
        },
        Strategy::Direct => json(
            StatusCode::OK,
            AddressesBody {
                domain,
                ip_addresses: addrs.collect(),
            },
        ),
    }
}

/// Render a classified failure.
pub fn error(err: &ResolveError) -> Response {
    json(err.status_code(), ErrorBody::new(err.message()))
}

pub fn not_found() -> Response {
    json(StatusCode::NOT_FOUND, ErrorBody::new("Not Found"))
}

pub fn method_not_allowed() -> Response {
    let mut resp = json(
        StatusCode::METHOD_NOT_ALLOWED,
        ErrorBody::new("Method Not Allowed"),
    );
    resp.headers_mut()
        .insert(header::ALLOW, HeaderValue::from_static("GET"));
    resp
}
