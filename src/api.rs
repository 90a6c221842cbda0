//! Public API surface for the backend.
//!
//! This file consolidates the identifier newtypes and re-exports the DTO
//! types for the HTTP API. All types derive Serialize/Deserialize for JSON
//! serialization.

pub use crate::routes::catalog::CourseDto;
pub use crate::routes::catalog::MajorDetail;
pub use crate::routes::catalog::MajorSummary;
pub use crate::routes::catalog::MajorsResponse;
pub use crate::routes::plan::ScheduledCourseDto;
pub use crate::routes::plan::SemesterDto;
pub use crate::routes::plan::SemesterPlanResponse;
pub use crate::routes::progress::ProgressReport;
pub use crate::routes::progress::SemesterBreakdown;

use serde::{Deserialize, Serialize};

/// Major identifier (catalog key, e.g. `cs-ucb`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MajorId(pub String);

/// Semester identifier, unique within a plan (e.g. `semester-1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SemesterId(pub String);

/// Scheduled-course instance identifier.
///
/// Distinct from the course code: the same course code must never appear
/// twice across all semesters of one plan, so each placement gets a fresh
/// instance id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(pub String);

impl MajorId {
    pub fn new(value: impl Into<String>) -> Self {
        MajorId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl SemesterId {
    pub fn new(value: impl Into<String>) -> Self {
        SemesterId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl InstanceId {
    pub fn new(value: impl Into<String>) -> Self {
        InstanceId(value.into())
    }

    /// Mint a fresh unique instance id.
    pub fn generate() -> Self {
        InstanceId(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MajorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for SemesterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_id_roundtrip() {
        let id = MajorId::new("cs-ucb");
        assert_eq!(id.as_str(), "cs-ucb");
        assert_eq!(id.to_string(), "cs-ucb");
    }

    #[test]
    fn test_instance_ids_are_unique() {
        let a = InstanceId::generate();
        let b = InstanceId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_semester_id_serde_transparent() {
        let id = SemesterId::new("semester-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"semester-1\"");
        let back: SemesterId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
