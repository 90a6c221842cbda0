//! Semester plan domain model.
//!
//! A [`Plan`] is one student's semester-by-semester arrangement of required
//! courses for one major. Plans are treated as values: the reconciler in
//! [`crate::services::planner`] takes a plan by reference and returns a new
//! one, and the store persists whole documents keyed by major id.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{InstanceId, MajorId, SemesterId};

/// A course placed into a semester.
///
/// Created when a course is scheduled, destroyed when it is removed or moved
/// back to the available pool. The instance id is unique per placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledCourse {
    pub instance_id: InstanceId,
    /// Course code referencing the major's catalog.
    pub course_code: String,
    pub units: u32,
}

/// One semester in a plan. Ordering of `courses` is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    pub id: SemesterId,
    /// User-editable, non-empty.
    pub name: String,
    pub courses: Vec<ScheduledCourse>,
}

impl Semester {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Semester {
            id: SemesterId::new(id),
            name: name.into(),
            courses: Vec::new(),
        }
    }

    /// Sum of units of the courses scheduled in this semester.
    pub fn total_units(&self) -> u32 {
        self.courses.iter().map(|c| c.units).sum()
    }
}

/// A semester plan for one major. One plan per major id.
///
/// Invariant: a course code appears in at most one [`ScheduledCourse`]
/// across all semesters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub major_id: MajorId,
    pub semesters: Vec<Semester>,
    pub updated_at: DateTime<Utc>,
}

impl Plan {
    /// The default four-semester skeleton created on first load of a plan.
    pub fn default_skeleton(major_id: MajorId) -> Self {
        Plan {
            major_id,
            semesters: vec![
                Semester::new("semester-1", "Fall 2024"),
                Semester::new("semester-2", "Spring 2025"),
                Semester::new("semester-3", "Fall 2025"),
                Semester::new("semester-4", "Spring 2026"),
            ],
            updated_at: Utc::now(),
        }
    }

    pub fn find_semester(&self, id: &SemesterId) -> Option<&Semester> {
        self.semesters.iter().find(|s| &s.id == id)
    }

    pub(crate) fn semester_index(&self, id: &SemesterId) -> Option<usize> {
        self.semesters.iter().position(|s| &s.id == id)
    }

    /// The set of course codes scheduled anywhere in this plan.
    ///
    /// Recomputed from scratch on each call; kept as a pure derivation rather
    /// than a separately maintained cache.
    pub fn scheduled_course_codes(&self) -> BTreeSet<String> {
        self.semesters
            .iter()
            .flat_map(|s| s.courses.iter())
            .map(|c| c.course_code.clone())
            .collect()
    }

    /// Whether `code` is scheduled in any semester of this plan.
    pub fn is_scheduled(&self, code: &str) -> bool {
        self.semesters
            .iter()
            .any(|s| s.courses.iter().any(|c| c.course_code == code))
    }

    /// Total units scheduled across all semesters.
    pub fn total_units(&self) -> u32 {
        self.semesters.iter().map(Semester::total_units).sum()
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
