//! # API REST
//!
//! REST API implementation for Vaidya.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - Per-request doctor identity (`x-api-key` and `x-doctor-id` headers)
//!
//! Uses `api-shared` for wire types and `vaidya-core` for everything else.

#![warn(rust_2018_idioms)]

pub mod context;
mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use vaidya_core::{
    checking::InteractionCheckService,
    interaction::{RuleCatalogue, RuleLookup},
    repositories::{
        doctors::DoctorService, patients::PatientService, prescriptions::PrescriptionService,
    },
    CoreConfig, VaidyaResult,
};

pub use context::DoctorContext;

/// Application state for the REST API server
///
/// Built once at startup. The rule store is shared by every request and never reloaded.
#[derive(Clone)]
pub struct AppState {
    api_key: Arc<str>,
    doctors: DoctorService,
    patients: PatientService,
    prescriptions: PrescriptionService,
    checks: InteractionCheckService,
}

impl AppState {
    pub fn new(cfg: Arc<CoreConfig>, rules: Arc<dyn RuleLookup>, api_key: &str) -> Self {
        Self {
            api_key: Arc::from(api_key),
            doctors: DoctorService::new(cfg.clone()),
            patients: PatientService::new(cfg.clone()),
            prescriptions: PrescriptionService::new(cfg.clone()),
            checks: InteractionCheckService::new(cfg, rules),
        }
    }

    /// Builds state backed by the rule catalogue in the configured data directory.
    ///
    /// # Errors
    ///
    /// Returns `VaidyaError` if the catalogue is missing or invalid.
    pub fn from_config(cfg: Arc<CoreConfig>, api_key: &str) -> VaidyaResult<Self> {
        let catalogue = RuleCatalogue::load(&cfg.interactions_file())?;
        Ok(Self::new(cfg, Arc::new(catalogue), api_key))
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::doctor_profile,
        handlers::list_patients,
        handlers::get_patient,
        handlers::check_interaction,
        handlers::history,
        handlers::stats,
    ),
    components(schemas(
        api_shared::HealthRes,
        api_shared::DoctorProfileRes,
        api_shared::PatientSummary,
        api_shared::PatientDetailRes,
        api_shared::CheckInteractionReq,
        api_shared::CheckInteractionRes,
        api_shared::InteractionDto,
        api_shared::HistoryEntry,
        api_shared::StatsRes,
        vaidya_core::vaidya_types::Severity,
        vaidya_core::vaidya_types::Verdict,
    ))
)]
pub struct ApiDoc;

/// Builds the REST router with Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/doctor/profile", get(handlers::doctor_profile))
        .route("/api/patients", get(handlers::list_patients))
        .route("/api/patient/:id", get(handlers::get_patient))
        .route("/api/check_interaction", post(handlers::check_interaction))
        .route("/api/history", get(handlers::history))
        .route("/api/stats", get(handlers::stats))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
