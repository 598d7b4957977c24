//! Request routing for the resolve endpoint.
//!
//! Only one route exists, `GET /resolve/{domain}`. Anything else is a 404,
//! and other methods on that route are a 405. Every body is JSON.

use super::response;
use crate::dns::{DomainName, Resolve};
use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Response,
    routing::get,
    Router,
};
use std::sync::Arc;

/// Shared handler state: the resolver selected at startup.
pub type AppState = Arc<dyn Resolve>;

/// Build the route table around `resolver`.
pub fn create_router(resolver: AppState) -> Router {
    Router::new()
        .route(
            "/resolve/:domain",
            get(resolve_domain).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .with_state(resolver)
}

/// `GET /resolve/{domain}`
///
/// The segment arrives percent-decoded. A decoded `/` or a segment that is
/// not valid UTF-8 does not name a domain and is treated as an unknown route.
pub async fn resolve_domain(
    State(resolver): State<AppState>,
    domain: Result<Path<String>, PathRejection>,
) -> Response {
    let domain = match domain {
        Ok(Path(domain)) if !domain.is_empty() && !domain.contains('/') => domain,
        Ok(Path(domain)) => {
            tracing::debug!(domain = %domain, "domain segment rejected");
            return response::not_found();
        }
        Err(e) => {
            tracing::debug!(error = %e, "domain segment rejected");
            return response::not_found();
        }
    };

    match resolver.resolve(DomainName::new(domain.as_str())).await {
        Ok(resolution) => {
            tracing::info!(
                domain = %domain,
                count = resolution.addresses().len(),
                "resolved"
            );
            response::resolution(resolver.strategy(), resolution)
        }
        Err(e) => {
            tracing::info!(
                domain = %domain,
                kind = e.kind().as_str(),
                status = e.status_code().as_u16(),
                "resolution failed"
            );
            response::error(&e)
        }
    }
}

async fn not_found() -> Response {
    response::not_found()
}

async fn method_not_allowed() -> Response {
    response::method_not_allowed()
}
