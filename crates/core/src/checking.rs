//! Prescription interaction checking.
//!
//! [`InteractionCheckService`] is the only caller of the evaluator that persists anything. A check
//! runs in four steps and either completes all of them or leaves no trace:
//!
//! 1. validate the submission
//! 2. resolve the patient and their diseases
//! 3. evaluate the medicines against the rule store
//! 4. write one [`PrescriptionRecord`]
//!
//! The doctor is passed in explicitly by the caller; this module holds no session state.

use crate::config::CoreConfig;
use crate::error::VaidyaResult;
use crate::interaction::{evaluate, EvaluationResult, RuleLookup};
use crate::repositories::doctors::Doctor;
use crate::repositories::patients::{Patient, PatientService};
use crate::repositories::prescriptions::{PrescriptionRecord, PrescriptionService};
use crate::validation::{validate_medicine_list, validate_patient_id};
use std::sync::Arc;

/// Outcome of a persisted check.
#[derive(Debug, Clone)]
pub struct CheckedPrescription {
    pub record: PrescriptionRecord,
    pub evaluation: EvaluationResult,
}

/// Runs interaction checks for a patient and records them.
#[derive(Clone)]
pub struct InteractionCheckService {
    patients: PatientService,
    prescriptions: PrescriptionService,
    rules: Arc<dyn RuleLookup>,
}

impl InteractionCheckService {
    pub fn new(cfg: Arc<CoreConfig>, rules: Arc<dyn RuleLookup>) -> Self {
        Self {
            patients: PatientService::new(cfg.clone()),
            prescriptions: PrescriptionService::new(cfg),
            rules,
        }
    }

    /// Evaluates `medicines` against the diseases of `patient_id` without recording anything.
    ///
    /// # Errors
    ///
    /// - [`VaidyaError::Text`](crate::VaidyaError::Text) for a blank patient id
    /// - [`VaidyaError::InvalidInput`](crate::VaidyaError::InvalidInput) for an empty medicine list
    ///   or one with a blank entry
    /// - [`VaidyaError::PatientNotFound`](crate::VaidyaError::PatientNotFound) for an unknown
    ///   patient
    /// - [`VaidyaError::LookupFailure`](crate::VaidyaError::LookupFailure) if the rule store fails
    pub fn evaluate_for_patient<M: AsRef<str>>(
        &self,
        patient_id: &str,
        medicines: &[M],
    ) -> VaidyaResult<(Patient, EvaluationResult)> {
        let patient_id = validate_patient_id(patient_id)?;
        validate_medicine_list(medicines)?;

        let patient = self.patients.find(patient_id.as_str())?;
        let evaluation = evaluate(medicines, &patient.diseases, self.rules.as_ref())?;

        Ok((patient, evaluation))
    }

    /// Checks a prescription on behalf of `doctor` and persists the outcome.
    ///
    /// Exactly one record is written on success. Any error leaves the audit trail unchanged.
    pub fn check_prescription<M: AsRef<str>>(
        &self,
        doctor: &Doctor,
        patient_id: &str,
        medicines: &[M],
    ) -> VaidyaResult<CheckedPrescription> {
        let (patient, evaluation) = self.evaluate_for_patient(patient_id, medicines)?;

        let record = self
            .prescriptions
            .record(doctor.id, &patient.id, medicines, &evaluation)
            .inspect_err(|e| {
                tracing::error!(
                    doctor_id = doctor.id,
                    patient_id = %patient.id,
                    "failed to record prescription: {e}"
                );
            })?;

        Ok(CheckedPrescription { record, evaluation })
    }
}
