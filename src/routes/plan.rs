//! Semester plan wire types.
//!
//! The stored [`crate::models::Plan`] and the wire shape differ: the wire
//! carries `ucbCourse` (frontend contract) and omits `major_id`/`updated_at`,
//! which are implied by the request path.

use serde::{Deserialize, Serialize};

use crate::api::{InstanceId, SemesterId};
use crate::models::{Plan, ScheduledCourse, Semester};

/// A scheduled course instance as served to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledCourseDto {
    pub id: InstanceId,
    #[serde(rename = "ucbCourse")]
    pub ucb_course: String,
    pub units: u32,
}

/// One semester on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemesterDto {
    pub id: SemesterId,
    pub name: String,
    #[serde(default)]
    pub courses: Vec<ScheduledCourseDto>,
}

/// Response for `GET /api/semester-plan/{major_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemesterPlanResponse {
    pub semesters: Vec<SemesterDto>,
}

impl From<&ScheduledCourse> for ScheduledCourseDto {
    fn from(course: &ScheduledCourse) -> Self {
        ScheduledCourseDto {
            id: course.instance_id.clone(),
            ucb_course: course.course_code.clone(),
            units: course.units,
        }
    }
}

impl From<&Semester> for SemesterDto {
    fn from(semester: &Semester) -> Self {
        SemesterDto {
            id: semester.id.clone(),
            name: semester.name.clone(),
            courses: semester.courses.iter().map(Into::into).collect(),
        }
    }
}

impl From<&Plan> for SemesterPlanResponse {
    fn from(plan: &Plan) -> Self {
        SemesterPlanResponse {
            semesters: plan.semesters.iter().map(Into::into).collect(),
        }
    }
}

impl From<ScheduledCourseDto> for ScheduledCourse {
    fn from(dto: ScheduledCourseDto) -> Self {
        ScheduledCourse {
            instance_id: dto.id,
            course_code: dto.ucb_course,
            units: dto.units,
        }
    }
}

impl From<SemesterDto> for Semester {
    fn from(dto: SemesterDto) -> Self {
        Semester {
            id: dto.id,
            name: dto.name,
            courses: dto.courses.into_iter().map(Into::into).collect(),
        }
    }
}

pub const GET_SEMESTER_PLAN: &str = "get_semester_plan";
pub const POST_SEMESTER_PLAN: &str = "save_semester_plan";
