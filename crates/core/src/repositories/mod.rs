//! Data access services.
//!
//! Doctors and patients are read-only YAML registries. Prescription records are append-only
//! JSON files in a sharded directory tree.

pub mod doctors;
pub mod patients;
pub mod prescriptions;
pub(crate) mod shared;
