pub mod handler;
pub mod response;
pub mod server;

// Re-exports for convenience
pub use handler::{create_router, AppState};
pub use server::{ResolveServer, ServerError};
