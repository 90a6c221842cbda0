//! Catalog wire types.
//!
//! Wire field names follow the frontend contract (`ucbCourse`, `major` for
//! the program name).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::api::MajorId;
use crate::models::{Course, Major};

/// A course as served to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDto {
    #[serde(rename = "ucbCourse")]
    pub ucb_course: String,
    /// College name mapped to the equivalent course string.
    pub equivalents: BTreeMap<String, String>,
    pub units: u32,
}

/// Major listing entry without the course list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MajorSummary {
    pub id: MajorId,
    pub major: String,
    pub school: String,
}

/// A full major entry, courses included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MajorDetail {
    pub id: MajorId,
    pub major: String,
    pub school: String,
    pub courses: Vec<CourseDto>,
}

/// Response for `GET /api/majors`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MajorsResponse {
    pub majors: Vec<MajorDetail>,
}

impl From<&Course> for CourseDto {
    fn from(course: &Course) -> Self {
        CourseDto {
            ucb_course: course.code.clone(),
            equivalents: course.equivalents.clone(),
            units: course.units,
        }
    }
}

impl From<&Major> for MajorSummary {
    fn from(major: &Major) -> Self {
        MajorSummary {
            id: major.id.clone(),
            major: major.name.clone(),
            school: major.school.clone(),
        }
    }
}

impl From<&Major> for MajorDetail {
    fn from(major: &Major) -> Self {
        MajorDetail {
            id: major.id.clone(),
            major: major.name.clone(),
            school: major.school.clone(),
            courses: major.courses.iter().map(Into::into).collect(),
        }
    }
}

pub const LIST_MAJORS: &str = "list_majors";
pub const GET_MAJOR: &str = "get_major";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_catalog;

    #[test]
    fn test_course_dto_wire_names() {
        let majors = seed_catalog();
        let detail = MajorDetail::from(&majors[0]);
        let json = serde_json::to_value(&detail).unwrap();

        assert_eq!(json["id"], "cs-ucb");
        assert_eq!(json["major"], "Computer Science");
        assert_eq!(json["courses"][0]["ucbCourse"], "CS 61A");
        assert_eq!(json["courses"][0]["units"], 4);
        assert_eq!(json["courses"][0]["equivalents"]["De Anza"], "CIS 22A");
    }

    #[test]
    fn test_major_summary_from_major() {
        let majors = seed_catalog();
        let summary = MajorSummary::from(&majors[1]);
        assert_eq!(summary.id.as_str(), "ds-ucb");
        assert_eq!(summary.major, "Data Science");
        assert_eq!(summary.school, "UC Berkeley");
    }
}
