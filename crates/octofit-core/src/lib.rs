//! Shared service plumbing for OctoFit: configuration, tracing, middleware,
//! health checks and wire-format helpers.

pub mod config;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
