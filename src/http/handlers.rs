//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for business logic.

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::{
    HealthResponse, MajorDetail, MajorsResponse, ProgressReport, SaveSuccessResponse, SemesterDto,
    SemesterPlanResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::MajorId;
use crate::db::services as db_services;
use crate::models::Semester;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check / Landing
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the repository
/// is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repo_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "empty-catalog".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository: repo_status,
    }))
}

/// GET /
pub async fn landing() -> &'static str {
    "TransferBuddy API is running"
}

// =============================================================================
// Catalog
// =============================================================================

/// GET /api/majors
///
/// List all majors with their required courses and equivalency mappings.
pub async fn list_majors(State(state): State<AppState>) -> HandlerResult<MajorsResponse> {
    let majors = db_services::all_majors(state.repository.as_ref()).await?;
    Ok(Json(MajorsResponse {
        majors: majors.iter().map(Into::into).collect(),
    }))
}

/// GET /api/majors/{major_id}
pub async fn get_major(
    State(state): State<AppState>,
    Path(major_id): Path<String>,
) -> HandlerResult<MajorDetail> {
    let major_id = MajorId::new(major_id);
    let major = db_services::get_major(state.repository.as_ref(), &major_id).await?;
    Ok(Json(MajorDetail::from(&major)))
}

// =============================================================================
// Semester Plan
// =============================================================================

/// GET /api/semester-plan/{major_id}
///
/// Serves the stored plan for the major, or the default four-semester
/// skeleton if none has been saved yet.
pub async fn get_semester_plan(
    State(state): State<AppState>,
    Path(major_id): Path<String>,
) -> HandlerResult<SemesterPlanResponse> {
    let major_id = MajorId::new(major_id);
    let plan = db_services::load_plan(state.repository.as_ref(), &major_id).await?;
    Ok(Json(SemesterPlanResponse::from(&plan)))
}

/// POST /api/semester-plan/{major_id}
///
/// Whole-document plan replace. The body is received as a raw JSON value so
/// a missing or non-array `semesters` field yields a 400 with a stable error
/// code rather than a framework rejection.
pub async fn save_semester_plan(
    State(state): State<AppState>,
    Path(major_id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> HandlerResult<SaveSuccessResponse> {
    let major_id = MajorId::new(major_id);

    let semesters_value = body
        .as_object()
        .and_then(|obj| obj.get("semesters"))
        .ok_or_else(|| AppError::BadRequest("Missing 'semesters' field".to_string()))?;
    if !semesters_value.is_array() {
        return Err(AppError::BadRequest("'semesters' must be an array".to_string()));
    }

    let semester_dtos: Vec<SemesterDto> = serde_json::from_value(semesters_value.clone())
        .map_err(|e| AppError::BadRequest(format!("Invalid semester entry: {}", e)))?;
    let semesters: Vec<Semester> = semester_dtos.into_iter().map(Into::into).collect();

    db_services::save_plan(state.repository.as_ref(), &major_id, semesters).await?;
    Ok(Json(SaveSuccessResponse { success: true }))
}

// =============================================================================
// Progress
// =============================================================================

/// GET /api/progress/{major_id}
pub async fn get_progress(
    State(state): State<AppState>,
    Path(major_id): Path<String>,
) -> HandlerResult<ProgressReport> {
    let major_id = MajorId::new(major_id);
    let report = db_services::get_progress(state.repository.as_ref(), &major_id).await?;
    Ok(Json(report))
}
