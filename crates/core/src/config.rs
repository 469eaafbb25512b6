//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services. Request
//! handling never reads process-wide environment variables.

use crate::constants::{
    DOCTORS_FILENAME, INTERACTIONS_FILENAME, PATIENTS_FILENAME, PRESCRIPTIONS_DIR_NAME,
};
use crate::{VaidyaError, VaidyaResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`VaidyaError::MissingDataDir`] if `data_dir` is not an existing directory.
    pub fn new(data_dir: PathBuf) -> VaidyaResult<Self> {
        if !data_dir.is_dir() {
            return Err(VaidyaError::MissingDataDir { path: data_dir });
        }

        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn doctors_file(&self) -> PathBuf {
        self.data_dir.join(DOCTORS_FILENAME)
    }

    pub fn patients_file(&self) -> PathBuf {
        self.data_dir.join(PATIENTS_FILENAME)
    }

    pub fn interactions_file(&self) -> PathBuf {
        self.data_dir.join(INTERACTIONS_FILENAME)
    }

    pub fn prescriptions_dir(&self) -> PathBuf {
        self.data_dir.join(PRESCRIPTIONS_DIR_NAME)
    }
}

/// Resolve the data directory from an optional override value.
///
/// `None` or a blank value falls back to [`crate::DEFAULT_DATA_DIR`] relative to the working
/// directory.
pub fn data_dir_from_env_value(value: Option<String>) -> PathBuf {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(crate::DEFAULT_DATA_DIR))
}

/// Check that the reference files the service reads on every request are present.
///
/// Intended to run at startup, after [`CoreConfig::new`], so a misconfigured deployment fails
/// before it accepts traffic.
pub fn validate_data_dir(cfg: &CoreConfig) -> VaidyaResult<()> {
    for path in [
        cfg.doctors_file(),
        cfg.patients_file(),
        cfg.interactions_file(),
    ] {
        if !path.is_file() {
            return Err(VaidyaError::MissingDataFile { path });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_new_rejects_missing_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let missing = temp_dir.path().join("nope");

        let err = CoreConfig::new(missing).expect_err("missing dir should be rejected");
        assert!(matches!(err, VaidyaError::MissingDataDir { .. }));
    }

    #[test]
    fn test_paths_are_derived_from_data_dir() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cfg = CoreConfig::new(temp_dir.path().to_path_buf()).expect("config");

        assert_eq!(cfg.doctors_file(), temp_dir.path().join("doctors.yaml"));
        assert_eq!(cfg.patients_file(), temp_dir.path().join("patients.yaml"));
        assert_eq!(
            cfg.interactions_file(),
            temp_dir.path().join("interactions.yaml")
        );
        assert_eq!(cfg.prescriptions_dir(), temp_dir.path().join("prescriptions"));
    }

    #[test]
    fn test_data_dir_from_env_value_defaults_when_blank() {
        assert_eq!(
            data_dir_from_env_value(None),
            PathBuf::from(crate::DEFAULT_DATA_DIR)
        );
        assert_eq!(
            data_dir_from_env_value(Some("   ".into())),
            PathBuf::from(crate::DEFAULT_DATA_DIR)
        );
        assert_eq!(
            data_dir_from_env_value(Some(" /srv/vaidya ".into())),
            PathBuf::from("/srv/vaidya")
        );
    }

    #[test]
    fn test_validate_data_dir_reports_first_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cfg = CoreConfig::new(temp_dir.path().to_path_buf()).expect("config");
        fs::write(cfg.doctors_file(), "doctors: []\n").unwrap();

        let err = validate_data_dir(&cfg).expect_err("patients.yaml is missing");
        match err {
            VaidyaError::MissingDataFile { path } => assert_eq!(path, cfg.patients_file()),
            other => panic!("unexpected error: {other:?}"),
        }

        fs::write(cfg.patients_file(), "patients: []\n").unwrap();
        fs::write(cfg.interactions_file(), "rules: []\n").unwrap();
        validate_data_dir(&cfg).expect("all files present");
    }
}
