//! Bundled seed data.
//!
//! The doctor and patient registries and the interaction rule catalogue ship with the crate so a
//! fresh data directory can be initialised without any external files.

use crate::constants::{DOCTORS_FILENAME, INTERACTIONS_FILENAME, PATIENTS_FILENAME};
use crate::error::{VaidyaError, VaidyaResult};
use std::fs;
use std::path::{Path, PathBuf};

pub const DOCTORS_YAML: &str = include_str!("../seed/doctors.yaml");
pub const PATIENTS_YAML: &str = include_str!("../seed/patients.yaml");
pub const INTERACTIONS_YAML: &str = include_str!("../seed/interactions.yaml");

/// Writes the bundled registries into `data_dir`, creating the directory if needed.
///
/// Existing files are left alone unless `overwrite` is set. Returns the paths actually written.
///
/// # Errors
///
/// Returns [`VaidyaError::StorageDirCreation`] if `data_dir` cannot be created and
/// [`VaidyaError::FileWrite`] if a file cannot be written.
pub fn write_seed_data(data_dir: &Path, overwrite: bool) -> VaidyaResult<Vec<PathBuf>> {
    fs::create_dir_all(data_dir).map_err(VaidyaError::StorageDirCreation)?;

    let mut written = Vec::new();
    for (name, contents) in [
        (DOCTORS_FILENAME, DOCTORS_YAML),
        (PATIENTS_FILENAME, PATIENTS_YAML),
        (INTERACTIONS_FILENAME, INTERACTIONS_YAML),
    ] {
        let path = data_dir.join(name);
        if path.exists() && !overwrite {
            tracing::info!("keeping existing {}", path.display());
            continue;
        }
        fs::write(&path, contents).map_err(VaidyaError::FileWrite)?;
        tracing::info!("wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{validate_data_dir, CoreConfig};
    use tempfile::TempDir;

    #[test]
    fn test_write_seed_data_creates_valid_data_dir() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("data");

        let written = write_seed_data(&data_dir, false).expect("seed should be written");
        assert_eq!(written.len(), 3);

        let cfg = CoreConfig::new(data_dir).expect("data dir exists now");
        validate_data_dir(&cfg).expect("all reference files present");
    }

    #[test]
    fn test_write_seed_data_keeps_existing_files_unless_overwriting() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let doctors = temp_dir.path().join(DOCTORS_FILENAME);
        fs::write(&doctors, "doctors: []\n").unwrap();

        let written = write_seed_data(temp_dir.path(), false).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(fs::read_to_string(&doctors).unwrap(), "doctors: []\n");

        let written = write_seed_data(temp_dir.path(), true).unwrap();
        assert_eq!(written.len(), 3);
        assert_eq!(fs::read_to_string(&doctors).unwrap(), DOCTORS_YAML);
    }
}
