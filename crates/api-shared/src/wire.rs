//! Request and response bodies for the Vaidya HTTP API.
//!
//! Timestamps are RFC 3339 strings. Core types convert into these with `From`, so handlers stay
//! free of field-by-field copying.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use vaidya_core::checking::CheckedPrescription;
use vaidya_core::interaction::InteractionMatch;
use vaidya_core::repositories::doctors::Doctor;
use vaidya_core::repositories::patients::Patient;
use vaidya_core::repositories::prescriptions::{PrescriptionRecord, PrescriptionStats};
use vaidya_types::{Severity, Verdict};

/// Message returned with every completed interaction check.
pub const CHECK_COMPLETED_MESSAGE: &str = "Interaction check completed";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DoctorProfileRes {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub specialization: String,
    pub hospital: String,
}

impl From<Doctor> for DoctorProfileRes {
    fn from(doctor: Doctor) -> Self {
        Self {
            id: doctor.id,
            name: doctor.name,
            email: doctor.email,
            specialization: doctor.specialization,
            hospital: doctor.hospital,
        }
    }
}

/// Patient as listed in `/api/patients`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatientSummary {
    pub id: String,
    pub name: String,
    pub age: u32,
    /// Comma-separated disease names.
    pub diseases: String,
    pub created_at: String,
}

impl From<Patient> for PatientSummary {
    fn from(patient: Patient) -> Self {
        Self {
            diseases: patient.diseases_display(),
            id: patient.id,
            name: patient.name,
            age: patient.age,
            created_at: patient.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatientDetailRes {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub diseases: String,
    pub medical_history: Option<String>,
    pub created_at: String,
}

impl From<Patient> for PatientDetailRes {
    fn from(patient: Patient) -> Self {
        Self {
            diseases: patient.diseases_display(),
            id: patient.id,
            name: patient.name,
            age: patient.age,
            medical_history: patient.medical_history,
            created_at: patient.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CheckInteractionReq {
    pub patient_id: String,
    pub medicines: Vec<String>,
}

/// One matched interaction.
///
/// `medicine` is the submitted medicine for drug-disease matches and `"first + second"` for
/// drug-drug matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InteractionDto {
    pub medicine: String,
    pub description: String,
    pub severity: Severity,
}

impl From<InteractionMatch> for InteractionDto {
    fn from(m: InteractionMatch) -> Self {
        Self {
            medicine: m.label,
            description: m.description,
            severity: m.severity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CheckInteractionRes {
    pub result: Verdict,
    pub interactions: Vec<InteractionDto>,
    pub message: String,
}

impl From<CheckedPrescription> for CheckInteractionRes {
    fn from(checked: CheckedPrescription) -> Self {
        Self {
            result: checked.evaluation.verdict(),
            interactions: checked
                .evaluation
                .into_matches()
                .into_iter()
                .map(InteractionDto::from)
                .collect(),
            message: CHECK_COMPLETED_MESSAGE.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntry {
    pub id: String,
    pub patient_id: String,
    pub medicines: String,
    pub result: Verdict,
    /// JSON array of matched interactions, or null when nothing matched.
    pub interaction_details: Option<String>,
    pub created_at: String,
}

impl From<PrescriptionRecord> for HistoryEntry {
    fn from(record: PrescriptionRecord) -> Self {
        Self {
            id: record.id.to_string(),
            patient_id: record.patient_id,
            medicines: record.medicines,
            result: record.verdict,
            interaction_details: record.interaction_details,
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatsRes {
    pub total_prescriptions: usize,
    pub safe_prescriptions: usize,
    pub warning_prescriptions: usize,
    pub danger_prescriptions: usize,
}

impl From<PrescriptionStats> for StatsRes {
    fn from(stats: PrescriptionStats) -> Self {
        Self {
            total_prescriptions: stats.total,
            safe_prescriptions: stats.safe,
            warning_prescriptions: stats.warning,
            danger_prescriptions: stats.danger,
        }
    }
}
