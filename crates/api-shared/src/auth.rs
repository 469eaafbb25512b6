//! API key checking.

/// Reasons a request fails authentication.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("missing x-api-key header")]
    MissingApiKey,
    #[error("invalid API key")]
    InvalidApiKey,
    #[error("missing or malformed x-doctor-id header")]
    MissingDoctorId,
    #[error("unknown doctor")]
    UnknownDoctor,
}

/// Validates the provided API key against the key configured at startup.
///
/// Returns `Ok(())` if the key is valid, or an error if invalid or missing.
pub fn validate_api_key(expected_key: &str, provided_key: Option<&str>) -> Result<(), AuthError> {
    let provided_key = provided_key.ok_or(AuthError::MissingApiKey)?;

    if !expected_key.is_empty() && provided_key == expected_key {
        Ok(())
    } else {
        Err(AuthError::InvalidApiKey)
    }
}

/// Parses the `x-doctor-id` header value.
pub fn parse_doctor_id(value: Option<&str>) -> Result<u32, AuthError> {
    value
        .map(str::trim)
        .and_then(|v| v.parse().ok())
        .ok_or(AuthError::MissingDoctorId)
}
