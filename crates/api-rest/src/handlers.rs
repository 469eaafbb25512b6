use crate::context::DoctorContext;
use crate::AppState;
use api_shared::{
    CheckInteractionReq, CheckInteractionRes, DoctorProfileRes, HealthRes, HealthService,
    HistoryEntry, PatientDetailRes, PatientSummary, StatsRes,
};
use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::Json,
};
use vaidya_core::VaidyaError;

type ApiResult<T> = Result<Json<T>, (StatusCode, &'static str)>;

/// Maps a core error to the status and message returned to the client.
pub(crate) fn error_response(e: &VaidyaError) -> (StatusCode, &'static str) {
    match e {
        VaidyaError::InvalidInput(_) | VaidyaError::Text(_) => {
            (StatusCode::BAD_REQUEST, "Invalid request")
        }
        VaidyaError::PatientNotFound(_) => (StatusCode::NOT_FOUND, "Patient not found"),
        VaidyaError::DoctorNotFound(_) => (StatusCode::UNAUTHORIZED, "Authentication required"),
        VaidyaError::LookupFailure(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            "Interaction rules unavailable",
        ),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error"),
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks. Requires no credentials.
#[axum::debug_handler(state = AppState)]
pub(crate) async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/doctor/profile",
    responses(
        (status = 200, description = "Profile of the calling doctor", body = DoctorProfileRes),
        (status = 401, description = "Missing or invalid credentials")
    )
)]
#[axum::debug_handler(state = AppState)]
pub(crate) async fn doctor_profile(ctx: DoctorContext) -> Json<DoctorProfileRes> {
    Json(ctx.doctor.into())
}

#[utoipa::path(
    get,
    path = "/api/patients",
    responses(
        (status = 200, description = "All registered patients", body = [PatientSummary]),
        (status = 401, description = "Missing or invalid credentials"),
        (status = 500, description = "Internal server error")
    )
)]
/// List all patients in the registry
#[axum::debug_handler]
pub(crate) async fn list_patients(
    State(state): State<AppState>,
    _ctx: DoctorContext,
) -> ApiResult<Vec<PatientSummary>> {
    match state.patients.list() {
        Ok(patients) => Ok(Json(patients.into_iter().map(Into::into).collect())),
        Err(e) => {
            tracing::error!("List patients error: {:?}", e);
            Err(error_response(&e))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/patient/{id}",
    params(("id" = String, Path, description = "Patient identifier, e.g. P001")),
    responses(
        (status = 200, description = "Patient record", body = PatientDetailRes),
        (status = 401, description = "Missing or invalid credentials"),
        (status = 404, description = "Patient not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
pub(crate) async fn get_patient(
    State(state): State<AppState>,
    _ctx: DoctorContext,
    AxumPath(id): AxumPath<String>,
) -> ApiResult<PatientDetailRes> {
    match state.patients.find(&id) {
        Ok(patient) => Ok(Json(patient.into())),
        Err(e) => {
            if !matches!(e, VaidyaError::PatientNotFound(_)) {
                tracing::error!("Get patient error: {:?}", e);
            }
            Err(error_response(&e))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/check_interaction",
    request_body = CheckInteractionReq,
    responses(
        (status = 200, description = "Interaction check completed and recorded", body = CheckInteractionRes),
        (status = 400, description = "Empty or invalid medicine list"),
        (status = 401, description = "Missing or invalid credentials"),
        (status = 404, description = "Patient not found"),
        (status = 503, description = "Interaction rules unavailable"),
        (status = 500, description = "Internal server error")
    )
)]
/// Check a medicine list against a patient's diseases and the interaction rules
///
/// The outcome is recorded against the calling doctor. Failed checks record nothing.
#[axum::debug_handler]
pub(crate) async fn check_interaction(
    State(state): State<AppState>,
    ctx: DoctorContext,
    Json(req): Json<CheckInteractionReq>,
) -> ApiResult<CheckInteractionRes> {
    let checks = state.checks.clone();
    let doctor = ctx.doctor;

    // Rule lookups and the record write hit the filesystem.
    let outcome = tokio::task::spawn_blocking(move || {
        checks.check_prescription(&doctor, &req.patient_id, &req.medicines)
    })
    .await;

    match outcome {
        Ok(Ok(checked)) => Ok(Json(checked.into())),
        Ok(Err(e)) => {
            tracing::error!("Check interaction error: {:?}", e);
            Err(error_response(&e))
        }
        Err(e) => {
            tracing::error!("Check interaction task failed: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/history",
    responses(
        (status = 200, description = "Calling doctor's prescription checks, newest first", body = [HistoryEntry]),
        (status = 401, description = "Missing or invalid credentials")
    )
)]
#[axum::debug_handler]
pub(crate) async fn history(
    State(state): State<AppState>,
    ctx: DoctorContext,
) -> Json<Vec<HistoryEntry>> {
    Json(
        state
            .prescriptions
            .history(ctx.doctor.id)
            .into_iter()
            .map(Into::into)
            .collect(),
    )
}

#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Verdict counts for the calling doctor", body = StatsRes),
        (status = 401, description = "Missing or invalid credentials")
    )
)]
#[axum::debug_handler]
pub(crate) async fn stats(State(state): State<AppState>, ctx: DoctorContext) -> Json<StatsRes> {
    Json(state.prescriptions.stats(ctx.doctor.id).into())
}
