//! # Vaidya Core
//!
//! Core business logic for the Vaidya prescription interaction checker.
//!
//! This crate contains the interaction evaluation and the file-backed data it runs over:
//! - Medicine name normalisation, drug-disease and drug-drug rule lookup, verdict aggregation
//! - Doctor and patient registries read from YAML under the data directory
//! - Append-only prescription audit records in sharded JSON storage
//!
//! **No API concerns**: authentication, HTTP servers and request handling belong in `api-rest`
//! or `api-shared`.

pub mod checking;
pub mod config;
pub mod constants;
pub mod error;
pub mod interaction;
pub mod repositories;
pub mod seed;
pub mod uuid;
pub mod validation;

pub use config::CoreConfig;
pub use constants::*;
pub use error::{VaidyaError, VaidyaResult};
pub use uuid::ShardableUuid;

pub use vaidya_types;
