//! HTTP server for faststatus.
//!
//! Exposes current resource status over a small REST surface: hex resource
//! ids as path segments, `Accept`-negotiated text or JSON responses, and an
//! embedded [redb](https://docs.rs/redb) database underneath.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

use std::sync::Arc;

use faststatus_store::ResourceStore;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::HealthResponse;
pub use server::StatusServer;

/// The store as shared by the router and every handler.
pub type SharedStore = Arc<dyn ResourceStore>;
