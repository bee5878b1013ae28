//! # API Shared
//!
//! Shared wire definitions for the candidate service.
//!
//! Contains:
//! - JSON wire types (`wire` module), annotated for OpenAPI generation
//! - Shared services like `HealthService`
//!
//! Used by `citel-core` (which builds reports directly into wire types) and `api-rest`.

pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;
