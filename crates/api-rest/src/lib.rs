//! # API REST
//!
//! REST API implementation for BiteRight HQ.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON error bodies, CORS, the HTML landing page)
//!
//! Business rules live in `biteright-core`; wire types come from `api-shared`.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod extract;
pub mod handlers;

use axum::{
    routing::{get, patch, post},
    Router,
};
use biteright_core::DashboardStore;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::ApiError;

/// Application state shared across REST API handlers
#[derive(Clone)]
pub struct AppState {
    pub store: DashboardStore,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::get_state,
        handlers::get_stages,
        handlers::complete_stage,
        handlers::toggle_checklist_item,
        handlers::get_finances,
        handlers::add_transaction,
        handlers::get_patients,
        handlers::add_patient,
        handlers::patch_patient,
    ),
    components(schemas(
        api_shared::HealthRes,
        api_shared::Funding,
        api_shared::Targets,
        api_shared::ChecklistItem,
        api_shared::Stage,
        api_shared::TransactionKind,
        api_shared::Transaction,
        api_shared::FinanceSummary,
        api_shared::FinanceData,
        api_shared::Patient,
        api_shared::PatientData,
        api_shared::GlobalState,
        api_shared::AddTransactionReq,
        api_shared::AddTransactionRes,
        api_shared::AddPatientReq,
        api_shared::PatchPatientReq,
        api_shared::PatientRes,
        api_shared::CompleteStageRes,
        api_shared::ToggleChecklistRes,
        api_shared::ErrorRes,
    ))
)]
pub struct ApiDoc;

/// Builds the full REST router over a store.
///
/// Every route answers unsupported methods and unknown paths with `404 {"error":"Not found"}`.
pub fn router(store: DashboardStore) -> Router {
    let fallback = handlers::fallback;

    Router::new()
        .route("/", get(handlers::landing).fallback(fallback))
        .route("/health", get(handlers::health).fallback(fallback))
        .route("/api/state", get(handlers::get_state).fallback(fallback))
        .route("/api/stages", get(handlers::get_stages).fallback(fallback))
        .route(
            "/api/stages/:id/complete",
            post(handlers::complete_stage).fallback(fallback),
        )
        .route(
            "/api/stages/:id/checklist/*item_id",
            patch(handlers::toggle_checklist_item).fallback(fallback),
        )
        .route(
            "/api/finances",
            get(handlers::get_finances)
                .post(handlers::add_transaction)
                .fallback(fallback),
        )
        .route(
            "/api/patients",
            get(handlers::get_patients)
                .post(handlers::add_patient)
                .fallback(fallback),
        )
        .route(
            "/api/patients/:id",
            patch(handlers::patch_patient).fallback(fallback),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(fallback)
        .layer(CorsLayer::permissive())
        .with_state(AppState { store })
}

#[cfg(test)]
mod tests;
