//! Input validation for interaction checks.
//!
//! Requests are validated before any registry or rule lookup happens, so a rejected request
//! never produces an audit record.

use crate::error::{VaidyaError, VaidyaResult};
use vaidya_types::NonEmptyText;

/// Validates a submitted medicine list.
///
/// The list must be non-empty and no entry may be blank after trimming. Its length is not capped.
///
/// # Errors
///
/// Returns [`VaidyaError::InvalidInput`] describing the first problem found.
pub fn validate_medicine_list<M: AsRef<str>>(medicines: &[M]) -> VaidyaResult<()> {
    if medicines.is_empty() {
        return Err(VaidyaError::InvalidInput(
            "at least one medicine is required".into(),
        ));
    }

    if let Some(pos) = medicines.iter().position(|m| m.as_ref().trim().is_empty()) {
        return Err(VaidyaError::InvalidInput(format!(
            "medicine at position {} is blank",
            pos + 1
        )));
    }

    Ok(())
}

/// Validates a patient identifier, returning it trimmed.
///
/// # Errors
///
/// Returns [`VaidyaError::Text`] if `patient_id` is blank.
pub fn validate_patient_id(patient_id: &str) -> VaidyaResult<NonEmptyText> {
    Ok(NonEmptyText::new(patient_id)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medicine_list_accepts_ordinary_input() {
        assert!(validate_medicine_list(&["Metformin", " aspirin "]).is_ok());
    }

    #[test]
    fn test_medicine_list_rejects_empty_and_blank() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            validate_medicine_list(&empty),
            Err(VaidyaError::InvalidInput(_))
        ));

        match validate_medicine_list(&["Warfarin", "   "]) {
            Err(VaidyaError::InvalidInput(msg)) => assert!(msg.contains("position 2")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_medicine_list_accepts_long_list() {
        let many = vec!["Paracetamol"; 200];
        assert!(validate_medicine_list(&many).is_ok());
    }

    #[test]
    fn test_patient_id_must_not_be_blank() {
        assert_eq!(validate_patient_id(" P001 ").unwrap().as_str(), "P001");
        assert!(matches!(
            validate_patient_id("  "),
            Err(VaidyaError::Text(_))
        ));
    }
}
