//! Request-scoped doctor identity.
//!
//! Every `/api/*` request carries two headers:
//! - `x-api-key`: the shared key configured at startup
//! - `x-doctor-id`: the numeric id of a registered doctor
//!
//! Handlers take [`DoctorContext`] as an argument and pass the doctor on to the core services
//! explicitly. Nothing about the caller is kept between requests.

use crate::AppState;
use api_shared::auth::{parse_doctor_id, validate_api_key, AuthError};
use axum::{extract::FromRequestParts, http::request::Parts, http::StatusCode};
use vaidya_core::repositories::doctors::Doctor;
use vaidya_core::VaidyaError;

pub const API_KEY_HEADER: &str = "x-api-key";
pub const DOCTOR_ID_HEADER: &str = "x-doctor-id";

/// The authenticated doctor making the current request.
#[derive(Debug, Clone)]
pub struct DoctorContext {
    pub doctor: Doctor,
}

fn header_str<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts.headers.get(name).and_then(|v| v.to_str().ok())
}

#[axum::async_trait]
impl FromRequestParts<AppState> for DoctorContext {
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let unauthorized = |e: AuthError| {
            tracing::warn!("rejected request to {}: {}", parts.uri.path(), e);
            (StatusCode::UNAUTHORIZED, "Authentication required")
        };

        validate_api_key(&state.api_key, header_str(parts, API_KEY_HEADER))
            .map_err(unauthorized)?;
        let doctor_id =
            parse_doctor_id(header_str(parts, DOCTOR_ID_HEADER)).map_err(unauthorized)?;

        match state.doctors.find(doctor_id) {
            Ok(doctor) => Ok(Self { doctor }),
            Err(VaidyaError::DoctorNotFound(_)) => Err(unauthorized(AuthError::UnknownDoctor)),
            Err(e) => {
                tracing::error!("Doctor lookup error: {:?}", e);
                Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
            }
        }
    }
}
