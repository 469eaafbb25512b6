//! # API Shared
//!
//! Shared utilities and definitions for Vaidya APIs.
//!
//! Contains:
//! - Wire types for request and response bodies (`wire` module)
//! - Shared services like `HealthService`
//! - Authentication utilities
//!
//! Used by `api-rest` and the `vaidya-run` binary.

pub mod auth;
pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;
