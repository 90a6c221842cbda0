//! High-level service functions over the repository traits.
//!
//! Use these from application code (HTTP handlers, tests) instead of calling
//! the repository directly: they add the boundary checks the repositories do
//! not enforce (unknown majors become `NotFound`, saved plans are validated
//! against the catalog before they replace the stored document) and
//! orchestrate the load-transform-save cycle for the reconciler operations.

use chrono::Utc;

use crate::api::{MajorId, MajorSummary, ProgressReport, SemesterId};
use crate::models::{Major, Plan, Semester};
use crate::services::planner::{self, PlanError};
use crate::services::progress::compute_progress;

use super::repository::{ErrorContext, FullRepository, RepositoryError, RepositoryResult};

/// Error type for service operations: a rejected domain operation or a
/// storage failure.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Plan(#[from] PlanError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Check that the repository is reachable.
pub async fn health_check(repo: &dyn FullRepository) -> RepositoryResult<bool> {
    repo.list_majors().await.map(|majors| !majors.is_empty())
}

/// List all majors (id, name, school).
pub async fn list_majors(repo: &dyn FullRepository) -> RepositoryResult<Vec<MajorSummary>> {
    repo.list_majors().await
}

/// Fetch all majors with their course lists.
pub async fn all_majors(repo: &dyn FullRepository) -> RepositoryResult<Vec<Major>> {
    repo.all_majors().await
}

/// Fetch one major, turning an unknown id into `NotFound`.
pub async fn get_major(repo: &dyn FullRepository, id: &MajorId) -> RepositoryResult<Major> {
    repo.get_major(id).await?.ok_or_else(|| {
        RepositoryError::not_found_with_context(
            format!("No major with id {}", id),
            ErrorContext::new("get_major")
                .with_entity("major")
                .with_entity_id(id),
        )
    })
}

/// Load the plan for a major (default skeleton when none is stored).
///
/// The major must exist; plans are never served for unknown catalog ids.
pub async fn load_plan(repo: &dyn FullRepository, major_id: &MajorId) -> RepositoryResult<Plan> {
    get_major(repo, major_id).await?;
    repo.load_plan(major_id).await
}

/// Validate and persist a whole plan document for a major.
///
/// Every scheduled course code must exist in the major's catalog and no code
/// may appear twice across the semesters; the coarse save endpoint must not
/// be able to bypass the invariant the reconciler maintains.
pub async fn save_plan(
    repo: &dyn FullRepository,
    major_id: &MajorId,
    semesters: Vec<Semester>,
) -> RepositoryResult<Plan> {
    let major = get_major(repo, major_id).await?;

    let mut seen = std::collections::BTreeSet::new();
    for semester in &semesters {
        for course in &semester.courses {
            if major.find_course(&course.course_code).is_none() {
                return Err(RepositoryError::validation_with_context(
                    format!("Course {} is not in the catalog for {}", course.course_code, major_id),
                    ErrorContext::new("save_plan")
                        .with_entity("plan")
                        .with_entity_id(major_id),
                ));
            }
            if !seen.insert(course.course_code.clone()) {
                return Err(RepositoryError::validation_with_context(
                    format!("Course {} appears more than once in the plan", course.course_code),
                    ErrorContext::new("save_plan")
                        .with_entity("plan")
                        .with_entity_id(major_id),
                ));
            }
        }
    }

    let plan = Plan {
        major_id: major_id.clone(),
        semesters,
        updated_at: Utc::now(),
    };
    repo.save_plan(major_id, &plan).await?;
    Ok(plan)
}

/// Compute the progress report for a major's current plan.
pub async fn get_progress(
    repo: &dyn FullRepository,
    major_id: &MajorId,
) -> RepositoryResult<ProgressReport> {
    let major = get_major(repo, major_id).await?;
    let plan = repo.load_plan(major_id).await?;
    Ok(compute_progress(&major, &plan))
}

// ============================================================================
// Reconciler orchestration
// ============================================================================
//
// Load-transform-save wrappers around the pure reconciler. The caller is
// responsible for serializing successive operations against one plan; the
// save is a whole-document replace, last writer wins.

/// Schedule a catalog course into a semester and persist the result.
pub async fn schedule_course(
    repo: &dyn FullRepository,
    major_id: &MajorId,
    semester_id: &SemesterId,
    course_code: &str,
) -> ServiceResult<Plan> {
    let major = get_major(repo, major_id).await?;
    let plan = repo.load_plan(major_id).await?;
    let next = planner::schedule_new(&plan, semester_id, course_code, &major)?;
    repo.save_plan(major_id, &next).await?;
    Ok(next)
}

/// Remove a scheduled instance and persist the result. Returns the new plan
/// and the freed course code.
pub async fn unschedule_course(
    repo: &dyn FullRepository,
    major_id: &MajorId,
    semester_id: &SemesterId,
    instance_id: &crate::api::InstanceId,
) -> ServiceResult<(Plan, String)> {
    let plan = load_plan(repo, major_id).await?;
    let (next, freed) = planner::unschedule(&plan, semester_id, instance_id)?;
    repo.save_plan(major_id, &next).await?;
    Ok((next, freed))
}

/// Reorder a course within a semester and persist the result.
pub async fn move_course_within(
    repo: &dyn FullRepository,
    major_id: &MajorId,
    semester_id: &SemesterId,
    from_index: usize,
    to_index: usize,
) -> ServiceResult<Plan> {
    let plan = load_plan(repo, major_id).await?;
    let next = planner::move_within_semester(&plan, semester_id, from_index, to_index)?;
    repo.save_plan(major_id, &next).await?;
    Ok(next)
}

/// Move a course across semesters and persist the result.
pub async fn move_course_across(
    repo: &dyn FullRepository,
    major_id: &MajorId,
    source_id: &SemesterId,
    target_id: &SemesterId,
    instance_id: &crate::api::InstanceId,
    target_index: Option<usize>,
) -> ServiceResult<Plan> {
    let plan = load_plan(repo, major_id).await?;
    let next =
        planner::move_across_semesters(&plan, source_id, target_id, instance_id, target_index)?;
    repo.save_plan(major_id, &next).await?;
    Ok(next)
}
