//! REST endpoint handlers.
//!
//! Each handler is a thin shell over [`DashboardStore`](biteright_core::DashboardStore):
//! extract, call one store operation, wrap the result in its response body.

use api_shared::{
    AddPatientReq, AddTransactionReq, AddTransactionRes, CompleteStageRes, ErrorRes,
    FinanceData, GlobalState, HealthRes, HealthService, PatchPatientReq, PatientData, PatientRes,
    Stage, ToggleChecklistRes,
};
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Json, Response},
};
use biteright_core::DashboardError;

use crate::error::ApiError;
use crate::extract::{parse_json, parse_stage_id, JsonBody, PathParams};
use crate::AppState;

/// Landing page with links to the main JSON resources.
pub async fn landing() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
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
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
pub async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/state",
    responses(
        (status = 200, description = "Funding, targets, stages and P&L summary", body = GlobalState)
    )
)]
/// Composite dashboard view
///
/// Combines the funding plan, targets, current stage pointer, the full stage list and a
/// freshly summed finance summary.
#[axum::debug_handler]
pub async fn get_state(State(state): State<AppState>) -> Json<GlobalState> {
    tracing::debug!("reading global state");
    Json(state.store.global_state())
}

#[utoipa::path(
    get,
    path = "/api/stages",
    responses(
        (status = 200, description = "All stages in order", body = [Stage])
    )
)]
#[axum::debug_handler]
pub async fn get_stages(State(state): State<AppState>) -> Json<Vec<Stage>> {
    Json(state.store.stages())
}

#[utoipa::path(
    post,
    path = "/api/stages/{id}/complete",
    params(("id" = u32, Path, description = "Stage id")),
    responses(
        (status = 200, description = "Stage completed, next stage unlocked", body = CompleteStageRes),
        (status = 404, description = "Stage not found", body = ErrorRes)
    )
)]
/// Mark a stage completed
///
/// Completion does not check the checklist. The following stage, if any, is unlocked and
/// becomes the current stage.
///
/// # Errors
/// Returns `404 Not Found` if:
/// - no stage has the given id.
#[axum::debug_handler]
pub async fn complete_stage(
    State(state): State<AppState>,
    PathParams(id): PathParams<String>,
) -> Result<Json<CompleteStageRes>, ApiError> {
    let stage_id = parse_stage_id(&id)?;
    let stages = state.store.complete_stage(stage_id)?;
    Ok(Json(CompleteStageRes {
        success: true,
        stages,
    }))
}

#[utoipa::path(
    patch,
    path = "/api/stages/{id}/checklist/{item_id}",
    params(
        ("id" = u32, Path, description = "Stage id"),
        ("item_id" = String, Path, description = "Checklist item id, e.g. 2-3")
    ),
    responses(
        (status = 200, description = "Item toggled", body = ToggleChecklistRes),
        (status = 404, description = "Stage or checklist item not found", body = ErrorRes)
    )
)]
/// Toggle a checklist item
///
/// Always flips the item; the request carries no target state. Finishing the last open item
/// completes the stage and unlocks the next one.
///
/// # Errors
/// Returns `404 Not Found` if:
/// - no stage has the given id, or
/// - the stage has no item with the given id.
#[axum::debug_handler]
pub async fn toggle_checklist_item(
    State(state): State<AppState>,
    PathParams((id, item_id)): PathParams<(String, String)>,
) -> Result<Json<ToggleChecklistRes>, ApiError> {
    let stage_id = parse_stage_id(&id)?;
    let stage = state.store.toggle_checklist_item(stage_id, &item_id)?;
    Ok(Json(ToggleChecklistRes {
        success: true,
        stage,
    }))
}

#[utoipa::path(
    get,
    path = "/api/finances",
    responses(
        (status = 200, description = "Transactions and P&L summary", body = FinanceData)
    )
)]
#[axum::debug_handler]
pub async fn get_finances(State(state): State<AppState>) -> Json<FinanceData> {
    tracing::debug!("reading finances");
    Json(state.store.finances())
}

#[utoipa::path(
    post,
    path = "/api/finances",
    request_body = AddTransactionReq,
    responses(
        (status = 200, description = "Transaction recorded", body = AddTransactionRes),
        (status = 400, description = "Missing or invalid field, or malformed JSON", body = ErrorRes)
    )
)]
/// Record an income or expense
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - the body is not valid JSON,
/// - `type`, `category`, `description`, `amount` or `date` is missing,
/// - `type` is neither `income` nor `expense`,
/// - `amount` is not a positive number, or
/// - `patientId` does not name a known patient.
#[axum::debug_handler]
pub async fn add_transaction(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<AddTransactionReq>,
) -> Result<Json<AddTransactionRes>, ApiError> {
    let (transaction, summary) = state.store.add_transaction(req)?;
    Ok(Json(AddTransactionRes {
        success: true,
        transaction,
        summary,
    }))
}

#[utoipa::path(
    get,
    path = "/api/patients",
    responses(
        (status = 200, description = "All patients", body = PatientData)
    )
)]
#[axum::debug_handler]
pub async fn get_patients(State(state): State<AppState>) -> Json<PatientData> {
    Json(state.store.patients())
}

#[utoipa::path(
    post,
    path = "/api/patients",
    request_body = AddPatientReq,
    responses(
        (status = 200, description = "Patient created", body = PatientRes),
        (status = 400, description = "Missing field or malformed JSON", body = ErrorRes)
    )
)]
/// Register a patient
///
/// `paid` and `emiCount` default to 0 when absent or not numeric.
#[axum::debug_handler]
pub async fn add_patient(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<AddPatientReq>,
) -> Result<Json<PatientRes>, ApiError> {
    let patient = state.store.add_patient(req)?;
    Ok(Json(PatientRes {
        success: true,
        patient,
    }))
}

#[utoipa::path(
    patch,
    path = "/api/patients/{id}",
    params(("id" = String, Path, description = "Patient id")),
    request_body = PatchPatientReq,
    responses(
        (status = 200, description = "Patient updated", body = PatientRes),
        (status = 400, description = "Unknown field, invalid value or malformed JSON", body = ErrorRes),
        (status = 404, description = "Patient not found", body = ErrorRes)
    )
)]
/// Update selected patient fields
///
/// Only the fields present in the body change. The body is read after the id is resolved so
/// that an unknown patient is reported as such whatever the body holds.
///
/// # Errors
/// Returns `404 Not Found` if:
/// - no patient has the given id.
///
/// Returns `400 Bad Request` if:
/// - the body is not valid JSON,
/// - it names a field that cannot be patched (such as `id` or `createdAt`), or
/// - a supplied value is empty or not a usable number.
#[axum::debug_handler]
pub async fn patch_patient(
    State(state): State<AppState>,
    PathParams(id): PathParams<String>,
    body: Bytes,
) -> Result<Json<PatientRes>, ApiError> {
    if !state.store.has_patient(&id) {
        return Err(DashboardError::patient_not_found().into());
    }
    let req: PatchPatientReq = parse_json(&body)?;
    let patient = state.store.patch_patient(&id, req)?;
    Ok(Json(PatientRes {
        success: true,
        patient,
    }))
}

/// Answers requests no route handles.
///
/// Bare `OPTIONS` requests get an empty 200 so any path can be probed cross-origin; CORS
/// preflights are already answered by the CORS layer.
pub async fn fallback(method: Method) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    ApiError::RouteNotFound.into_response()
}
