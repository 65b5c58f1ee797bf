//! # API Shared
//!
//! Shared wire types and services for the names APIs.
//!
//! Contains:
//! - JSON request/response types (`wire` module), with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `names-core` to shape responses and by `api-rest` and `names-cli` to serve them.

pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;
