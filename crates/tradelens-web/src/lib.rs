//! HTTP presentation layer for tradelens.
//!
//! A thin adapter over the aggregation engine: every request loads the
//! current trade set from the warehouse, recomputes the requested view, and
//! serializes it. No analytics state lives in the server.

pub mod error;
pub mod handlers;
pub mod server;

pub use error::{ApiError, ServeError};
pub use server::{build_router, serve, AppState};
