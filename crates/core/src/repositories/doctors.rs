//! Doctor registry.
//!
//! Doctors are reference data read from `doctors.yaml` under the data directory. The registry
//! holds no credentials; identity is established by the request layer and resolved here.

use crate::config::CoreConfig;
use crate::error::{VaidyaError, VaidyaResult};
use crate::repositories::shared::read_yaml_file;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A registered doctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub specialization: String,
    pub hospital: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct DoctorsFile {
    #[serde(default)]
    doctors: Vec<Doctor>,
}

/// Read access to the doctor registry.
#[derive(Clone, Debug)]
pub struct DoctorService {
    cfg: Arc<CoreConfig>,
}

impl DoctorService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    /// Lists all doctors in file order.
    pub fn list(&self) -> VaidyaResult<Vec<Doctor>> {
        let file: DoctorsFile = read_yaml_file(&self.cfg.doctors_file())?;
        Ok(file.doctors)
    }

    /// Finds a doctor by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`VaidyaError::DoctorNotFound`] if no doctor has `id`, or any error from reading
    /// the registry.
    pub fn find(&self, id: u32) -> VaidyaResult<Doctor> {
        self.list()?
            .into_iter()
            .find(|d| d.id == id)
            .ok_or(VaidyaError::DoctorNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::DOCTORS_YAML;
    use std::fs;
    use tempfile::TempDir;

    fn seeded_service(temp_dir: &TempDir) -> DoctorService {
        let cfg = Arc::new(CoreConfig::new(temp_dir.path().to_path_buf()).expect("config"));
        fs::write(cfg.doctors_file(), DOCTORS_YAML).expect("write doctors.yaml");
        DoctorService::new(cfg)
    }

    #[test]
    fn test_list_returns_seeded_doctors() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let doctors = seeded_service(&temp_dir).list().expect("list should succeed");

        assert_eq!(doctors.len(), 3);
        assert_eq!(doctors[0].name, "Dr. Sarah Johnson");
        assert_eq!(doctors[2].hospital, "Children's Hospital");
    }

    #[test]
    fn test_find_known_and_unknown_doctor() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let service = seeded_service(&temp_dir);

        let doctor = service.find(2).expect("doctor 2 exists");
        assert_eq!(doctor.specialization, "Neurology");

        assert!(matches!(
            service.find(99),
            Err(VaidyaError::DoctorNotFound(99))
        ));
    }

    #[test]
    fn test_missing_registry_is_reported() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cfg = Arc::new(CoreConfig::new(temp_dir.path().to_path_buf()).expect("config"));

        let err = DoctorService::new(cfg).list().expect_err("no doctors.yaml");
        assert!(matches!(err, VaidyaError::MissingDataFile { .. }));
    }
}
