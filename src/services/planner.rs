//! Plan reconciler.
//!
//! Applies a single move/add/remove operation to a [`Plan`] and returns the
//! next valid plan. Every function here takes the current plan by reference
//! and returns a new value; on error the input is untouched and no partially
//! mutated state escapes. The caller is responsible for adopting each result
//! as the new current plan before issuing the next operation.
//!
//! Maintained invariant: a course code appears in at most one scheduled
//! instance across the entire plan.

use crate::api::{InstanceId, SemesterId};
use crate::models::{Major, Plan, ScheduledCourse, Semester};

/// Result type for reconciler operations.
pub type PlanResult<T> = Result<T, PlanError>;

/// Error kinds for reconciler operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// The named semester does not exist in the plan.
    #[error("semester not found: {0}")]
    UnknownSemester(SemesterId),

    /// The instance id is not present in the claimed source semester.
    #[error("instance {instance_id} not found in semester {semester_id}")]
    InvalidMove {
        semester_id: SemesterId,
        instance_id: InstanceId,
    },

    /// The course code is already scheduled somewhere in the plan.
    #[error("course {0} is already scheduled in this plan")]
    DuplicateCourse(String),

    /// The course code is not in the major's catalog.
    #[error("course {0} is not in the major's catalog")]
    UnknownCourse(String),

    /// Semester names must be non-empty.
    #[error("semester name must not be empty")]
    InvalidName,
}

/// Reorder a course within one semester.
///
/// Removes the instance at `from_index` and reinserts it at `to_index`.
/// `from_index == to_index` and out-of-bounds indices are caller errors from
/// stale drag state; they are reported via a warning and ignored (the input
/// plan is returned unchanged, not an error).
pub fn move_within_semester(
    plan: &Plan,
    semester_id: &SemesterId,
    from_index: usize,
    to_index: usize,
) -> PlanResult<Plan> {
    let index = plan
        .semester_index(semester_id)
        .ok_or_else(|| PlanError::UnknownSemester(semester_id.clone()))?;

    let len = plan.semesters[index].courses.len();
    if from_index == to_index {
        return Ok(plan.clone());
    }
    if from_index >= len || to_index >= len {
        tracing::warn!(
            semester = %semester_id,
            from_index,
            to_index,
            len,
            "ignoring out-of-bounds reorder"
        );
        return Ok(plan.clone());
    }

    let mut next = plan.clone();
    let courses = &mut next.semesters[index].courses;
    let moved = courses.remove(from_index);
    courses.insert(to_index, moved);
    next.touch();
    Ok(next)
}

/// Move a course from one semester to another.
///
/// The instance is removed from the source semester and inserted into the
/// target at `target_index`, clamped to `[0, len]`; `None` (or an index past
/// the end) appends. Fails with [`PlanError::InvalidMove`] if the instance is
/// not in the claimed source semester.
pub fn move_across_semesters(
    plan: &Plan,
    source_id: &SemesterId,
    target_id: &SemesterId,
    instance_id: &InstanceId,
    target_index: Option<usize>,
) -> PlanResult<Plan> {
    let source = plan
        .semester_index(source_id)
        .ok_or_else(|| PlanError::UnknownSemester(source_id.clone()))?;
    let target = plan
        .semester_index(target_id)
        .ok_or_else(|| PlanError::UnknownSemester(target_id.clone()))?;

    let position = plan.semesters[source]
        .courses
        .iter()
        .position(|c| &c.instance_id == instance_id)
        .ok_or_else(|| PlanError::InvalidMove {
            semester_id: source_id.clone(),
            instance_id: instance_id.clone(),
        })?;

    let mut next = plan.clone();
    let moved = next.semesters[source].courses.remove(position);
    // Clamp after removal so a same-semester drop can never go out of bounds.
    let courses = &mut next.semesters[target].courses;
    let insert_at = target_index.unwrap_or(usize::MAX).min(courses.len());
    courses.insert(insert_at, moved);
    next.touch();
    Ok(next)
}

/// Remove an instance from the plan entirely (drag back to the available
/// pool). Returns the freed course code so callers can refresh the derived
/// scheduled set.
pub fn unschedule(
    plan: &Plan,
    semester_id: &SemesterId,
    instance_id: &InstanceId,
) -> PlanResult<(Plan, String)> {
    let index = plan
        .semester_index(semester_id)
        .ok_or_else(|| PlanError::UnknownSemester(semester_id.clone()))?;

    let position = plan.semesters[index]
        .courses
        .iter()
        .position(|c| &c.instance_id == instance_id)
        .ok_or_else(|| PlanError::InvalidMove {
            semester_id: semester_id.clone(),
            instance_id: instance_id.clone(),
        })?;

    let mut next = plan.clone();
    let removed = next.semesters[index].courses.remove(position);
    next.touch();
    Ok((next, removed.course_code))
}

/// Place a catalog course into a semester as a fresh scheduled instance.
///
/// The duplicate check spans every semester of the plan, not just the target.
pub fn schedule_new(
    plan: &Plan,
    target_semester_id: &SemesterId,
    course_code: &str,
    major: &Major,
) -> PlanResult<Plan> {
    let course = major
        .find_course(course_code)
        .ok_or_else(|| PlanError::UnknownCourse(course_code.to_string()))?;
    if plan.is_scheduled(course_code) {
        return Err(PlanError::DuplicateCourse(course_code.to_string()));
    }
    let index = plan
        .semester_index(target_semester_id)
        .ok_or_else(|| PlanError::UnknownSemester(target_semester_id.clone()))?;

    let mut next = plan.clone();
    next.semesters[index].courses.push(ScheduledCourse {
        instance_id: InstanceId::generate(),
        course_code: course.code.clone(),
        units: course.units,
    });
    next.touch();
    Ok(next)
}

/// Append an empty semester with a generated id and a positional name.
pub fn add_semester(plan: &Plan) -> Plan {
    let mut next = plan.clone();
    let name = format!("Semester {}", next.semesters.len() + 1);
    next.semesters.push(Semester::new(
        format!("semester-{}", uuid::Uuid::new_v4()),
        name,
    ));
    next.touch();
    next
}

/// Remove a semester, freeing any courses scheduled in it.
///
/// Removal is allowed regardless of contents (confirming a non-empty removal
/// is the frontend's concern); the freed course codes are returned, which
/// makes this a batch [`unschedule`] for every instance in the semester.
pub fn remove_semester(plan: &Plan, semester_id: &SemesterId) -> PlanResult<(Plan, Vec<String>)> {
    let index = plan
        .semester_index(semester_id)
        .ok_or_else(|| PlanError::UnknownSemester(semester_id.clone()))?;

    let mut next = plan.clone();
    let removed = next.semesters.remove(index);
    let freed = removed.courses.into_iter().map(|c| c.course_code).collect();
    next.touch();
    Ok((next, freed))
}

/// Rename a semester. Empty and whitespace-only names are rejected.
pub fn rename_semester(plan: &Plan, semester_id: &SemesterId, name: &str) -> PlanResult<Plan> {
    if name.trim().is_empty() {
        return Err(PlanError::InvalidName);
    }
    let index = plan
        .semester_index(semester_id)
        .ok_or_else(|| PlanError::UnknownSemester(semester_id.clone()))?;

    let mut next = plan.clone();
    next.semesters[index].name = name.to_string();
    next.touch();
    Ok(next)
}

#[cfg(test)]
#[path = "planner_tests.rs"]
mod tests;
