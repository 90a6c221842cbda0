//! Progress calculator.
//!
//! Pure function of a major and a plan; no storage access.

use crate::api::{ProgressReport, SemesterBreakdown};
use crate::models::{Major, Plan};

/// Derive the completion report for `plan` against `major`'s required list.
///
/// `scheduled_count` counts only distinct major-required course codes found
/// in the plan. Codes scheduled that the major does not require (possible in
/// hand-edited stored documents) are tolerated and ignored rather than
/// inflating the count.
pub fn compute_progress(major: &Major, plan: &Plan) -> ProgressReport {
    let scheduled = plan.scheduled_course_codes();

    let total_courses = major.courses.len();
    let scheduled_count = major
        .courses
        .iter()
        .filter(|c| scheduled.contains(&c.code))
        .count();

    let completion_percentage = if total_courses == 0 {
        0
    } else {
        (100.0 * scheduled_count as f64 / total_courses as f64).round() as u32
    };

    let remaining_courses = major
        .courses
        .iter()
        .filter(|c| !scheduled.contains(&c.code))
        .map(|c| c.code.clone())
        .collect();

    let semester_breakdown = plan
        .semesters
        .iter()
        .map(|s| SemesterBreakdown {
            name: s.name.clone(),
            course_count: s.courses.len(),
            total_units: s.total_units(),
        })
        .collect();

    ProgressReport {
        major_id: major.id.clone(),
        total_courses,
        scheduled_count,
        completion_percentage,
        remaining_courses,
        semester_breakdown,
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
