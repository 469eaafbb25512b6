//! Constants used throughout the Vaidya core crate.
//!
//! File and directory names under the data directory live here so that the repositories, the
//! seed writer and the startup checks agree on the layout.

/// Default data directory when none is configured.
pub const DEFAULT_DATA_DIR: &str = "vaidya_data";

/// Filename of the doctor registry.
pub const DOCTORS_FILENAME: &str = "doctors.yaml";

/// Filename of the patient registry.
pub const PATIENTS_FILENAME: &str = "patients.yaml";

/// Filename of the interaction rule catalogue.
pub const INTERACTIONS_FILENAME: &str = "interactions.yaml";

/// Directory name for prescription audit records.
pub const PRESCRIPTIONS_DIR_NAME: &str = "prescriptions";

/// Filename of a single prescription audit record inside its sharded directory.
pub const PRESCRIPTION_JSON_FILENAME: &str = "prescription.json";

/// Separator used when joining submitted medicine names into a record.
pub const MEDICINE_SEPARATOR: &str = ", ";

