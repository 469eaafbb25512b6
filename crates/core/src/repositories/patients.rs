//! Patient registry.
//!
//! Patients are read from `patients.yaml` under the data directory. Each patient carries the
//! disease list that drug-disease checking is run against.
//!
//! `diseases` may be written either as a YAML list or as a single comma-separated string
//! (`"Diabetes, Hypertension"`); both load to the same ordered list.

use crate::config::CoreConfig;
use crate::error::{VaidyaError, VaidyaResult};
use crate::repositories::shared::read_yaml_file;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

/// A patient record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u32,
    #[serde(default, deserialize_with = "diseases_from_list_or_csv")]
    pub diseases: Vec<String>,
    #[serde(default)]
    pub medical_history: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Patient {
    /// The patient's diseases as a comma-separated display string.
    pub fn diseases_display(&self) -> String {
        self.diseases.join(", ")
    }
}

fn diseases_from_list_or_csv<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Diseases {
        List(Vec<String>),
        Csv(String),
    }

    let raw = match Option::<Diseases>::deserialize(deserializer)? {
        Some(Diseases::List(list)) => list,
        Some(Diseases::Csv(csv)) => csv.split(',').map(str::to_string).collect(),
        None => Vec::new(),
    };

    Ok(raw
        .into_iter()
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .collect())
}

#[derive(Deserialize)]
struct PatientsFile {
    #[serde(default)]
    patients: Vec<Patient>,
}

/// Read access to the patient registry.
#[derive(Clone, Debug)]
pub struct PatientService {
    cfg: Arc<CoreConfig>,
}

impl PatientService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    /// Lists all patients in file order.
    pub fn list(&self) -> VaidyaResult<Vec<Patient>> {
        let file: PatientsFile = read_yaml_file(&self.cfg.patients_file())?;
        Ok(file.patients)
    }

    /// Finds a patient by identifier. Surrounding whitespace in `id` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`VaidyaError::PatientNotFound`] if no patient has `id`, or any error from reading
    /// the registry.
    pub fn find(&self, id: &str) -> VaidyaResult<Patient> {
        let id = id.trim();
        self.list()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| VaidyaError::PatientNotFound(id.to_string()))
    }
}
