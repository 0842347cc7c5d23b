//! service-core: Shared infrastructure for the chat relay workspace.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;

pub use axum;
pub use serde;
pub use tracing;
