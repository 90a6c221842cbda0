//! Data Transfer Objects for the HTTP API.
//!
//! Most response DTOs are re-exported from the routes module since they
//! already derive Serialize/Deserialize; this module adds the request shapes
//! and the health response.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Catalog
    CourseDto, MajorDetail, MajorSummary, MajorsResponse,
    // Progress
    ProgressReport, SemesterBreakdown,
    // Plan
    ScheduledCourseDto, SemesterDto, SemesterPlanResponse,
};

/// Response for the health check endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub repository: String,
}

/// Response for a successful plan save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveSuccessResponse {
    pub success: bool,
}
