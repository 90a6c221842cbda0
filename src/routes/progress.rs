//! Progress report wire types.

use serde::{Deserialize, Serialize};

use crate::api::MajorId;

/// Per-semester slice of the progress report, mirroring plan order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterBreakdown {
    pub name: String,
    pub course_count: usize,
    pub total_units: u32,
}

/// Completion report for one major's plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    pub major_id: MajorId,
    /// Number of courses the major requires.
    pub total_courses: usize,
    /// Distinct major-required course codes scheduled anywhere in the plan.
    pub scheduled_count: usize,
    /// `round(100 * scheduled / total)`, 0 when the major has no courses.
    pub completion_percentage: u32,
    /// Required courses not yet scheduled, in catalog order.
    pub remaining_courses: Vec<String>,
    pub semester_breakdown: Vec<SemesterBreakdown>,
}

pub const GET_PROGRESS: &str = "get_progress";
