//! Prescription audit records.
//!
//! Every completed interaction check leaves exactly one record. Records are written once and
//! never modified or deleted.
//!
//! ## Storage Layout
//!
//! ```text
//! prescriptions/
//!   <s1>/
//!     <s2>/
//!       <uuid>/
//!         prescription.json
//! ```
//!
//! where `s1` and `s2` are the first four hex characters of the record UUID. The JSON file is
//! written to a temporary name and renamed into place, so readers never observe a partial record.

use crate::config::CoreConfig;
use crate::constants::{MEDICINE_SEPARATOR, PRESCRIPTION_JSON_FILENAME};
use crate::error::{VaidyaError, VaidyaResult};
use crate::interaction::EvaluationResult;
use crate::repositories::shared::{create_uuid_and_shard_dir, sharded_record_dirs};
use crate::uuid::ShardableUuid;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use vaidya_types::Verdict;

/// One persisted interaction check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrescriptionRecord {
    pub id: ShardableUuid,
    pub doctor_id: u32,
    pub patient_id: String,
    /// Submitted medicine names, as entered, joined in submission order.
    pub medicines: String,
    pub verdict: Verdict,
    /// JSON array of the matched interactions; absent when nothing matched.
    pub interaction_details: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Verdict counts across a doctor's records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PrescriptionStats {
    pub total: usize,
    pub safe: usize,
    pub warning: usize,
    pub danger: usize,
}

impl PrescriptionStats {
    fn tally<'a>(records: impl IntoIterator<Item = &'a PrescriptionRecord>) -> Self {
        records
            .into_iter()
            .fold(Self::default(), |mut stats, record| {
                stats.total += 1;
                match record.verdict {
                    Verdict::Safe => stats.safe += 1,
                    Verdict::Warning => stats.warning += 1,
                    Verdict::Danger => stats.danger += 1,
                }
                stats
            })
    }
}

/// Writes and reads prescription audit records.
#[derive(Clone, Debug)]
pub struct PrescriptionService {
    cfg: Arc<CoreConfig>,
}

impl PrescriptionService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    /// Persists the outcome of one interaction check.
    ///
    /// # Arguments
    ///
    /// * `doctor_id` - Doctor taken from the request context
    /// * `patient_id` - Patient the medicines were checked against
    /// * `medicines` - Medicine names exactly as submitted
    /// * `evaluation` - The completed evaluation
    ///
    /// # Errors
    ///
    /// Returns `VaidyaError` if the record directory cannot be allocated, or the record cannot be
    /// serialised or written.
    pub fn record<M: AsRef<str>>(
        &self,
        doctor_id: u32,
        patient_id: &str,
        medicines: &[M],
        evaluation: &EvaluationResult,
    ) -> VaidyaResult<PrescriptionRecord> {
        let interaction_details = if evaluation.matches().is_empty() {
            None
        } else {
            Some(
                serde_json::to_string(evaluation.matches())
                    .map_err(VaidyaError::Serialization)?,
            )
        };

        let medicines = medicines
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(MEDICINE_SEPARATOR);

        let (id, record_dir) =
            create_uuid_and_shard_dir(&self.cfg.prescriptions_dir(), ShardableUuid::new)?;

        let record = PrescriptionRecord {
            id,
            doctor_id,
            patient_id: patient_id.to_string(),
            medicines,
            verdict: evaluation.verdict(),
            interaction_details,
            created_at: Utc::now(),
        };

        let json = serde_json::to_string_pretty(&record).map_err(VaidyaError::Serialization)?;
        let final_path = record_dir.join(PRESCRIPTION_JSON_FILENAME);
        let tmp_path = record_dir.join(format!("{PRESCRIPTION_JSON_FILENAME}.tmp"));
        fs::write(&tmp_path, json).map_err(VaidyaError::FileWrite)?;
        fs::rename(&tmp_path, &final_path).map_err(VaidyaError::FileWrite)?;

        tracing::info!(
            record_id = %record.id,
            doctor_id,
            patient_id = %record.patient_id,
            verdict = %record.verdict,
            "prescription record written"
        );

        Ok(record)
    }

    /// Lists every readable record. Unparseable record files are logged and skipped.
    pub fn list_all(&self) -> Vec<PrescriptionRecord> {
        let mut records = Vec::new();

        for dir in sharded_record_dirs(&self.cfg.prescriptions_dir()) {
            let path = dir.join(PRESCRIPTION_JSON_FILENAME);
            if !path.is_file() {
                continue;
            }

            match read_record(&path) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(
                        "skipping prescription record: {} - {}",
                        path.display(),
                        e
                    );
                }
            }
        }

        records
    }

    /// A doctor's records, newest first.
    pub fn history(&self, doctor_id: u32) -> Vec<PrescriptionRecord> {
        let mut records: Vec<_> = self
            .list_all()
            .into_iter()
            .filter(|r| r.doctor_id == doctor_id)
            .collect();
        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.to_string().cmp(&b.id.to_string()))
        });
        records
    }

    /// Verdict counts over a doctor's records.
    pub fn stats(&self, doctor_id: u32) -> PrescriptionStats {
        PrescriptionStats::tally(
            self.list_all()
                .iter()
                .filter(|r| r.doctor_id == doctor_id),
        )
    }
}

fn read_record(path: &Path) -> VaidyaResult<PrescriptionRecord> {
    let contents = fs::read_to_string(path).map_err(VaidyaError::FileRead)?;
    serde_json::from_str(&contents).map_err(VaidyaError::Deserialization)
}
