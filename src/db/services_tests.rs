use crate::api::{InstanceId, MajorId, SemesterId};
use crate::db::repositories::LocalRepository;
use crate::db::repository::{PlanRepository, RepositoryError};
use crate::db::services::{self, ServiceError};
use crate::models::{ScheduledCourse, Semester};
use crate::services::planner::PlanError;

fn cs() -> MajorId {
    MajorId::new("cs-ucb")
}

fn sem(id: &str) -> SemesterId {
    SemesterId::new(id)
}

#[tokio::test]
async fn test_get_major_unknown_is_not_found() {
    let repo = LocalRepository::new();
    let err = services::get_major(&repo, &MajorId::new("nope"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.context().entity.as_deref(), Some("major"));
}

#[tokio::test]
async fn test_load_plan_requires_known_major() {
    let repo = LocalRepository::new();
    let err = services::load_plan(&repo, &MajorId::new("nope"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let plan = services::load_plan(&repo, &cs()).await.unwrap();
    assert_eq!(plan.semesters.len(), 4);
}

#[tokio::test]
async fn test_schedule_course_persists() {
    let repo = LocalRepository::new();
    let plan = services::schedule_course(&repo, &cs(), &sem("semester-1"), "CS 61A")
        .await
        .unwrap();
    assert_eq!(plan.semesters[0].courses.len(), 1);

    // The stored document reflects the change.
    let loaded = services::load_plan(&repo, &cs()).await.unwrap();
    assert_eq!(loaded.semesters[0].courses[0].course_code, "CS 61A");
}

#[tokio::test]
async fn test_schedule_course_duplicate_is_rejected_and_not_persisted() {
    let repo = LocalRepository::new();
    services::schedule_course(&repo, &cs(), &sem("semester-1"), "CS 61A")
        .await
        .unwrap();

    let err = services::schedule_course(&repo, &cs(), &sem("semester-2"), "CS 61A")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Plan(PlanError::DuplicateCourse(_))
    ));

    let loaded = services::load_plan(&repo, &cs()).await.unwrap();
    assert_eq!(loaded.scheduled_course_codes().len(), 1);
}

#[tokio::test]
async fn test_move_and_unschedule_flow() {
    let repo = LocalRepository::new();
    let plan = services::schedule_course(&repo, &cs(), &sem("semester-1"), "CS 61A")
        .await
        .unwrap();
    let instance_id = plan.semesters[0].courses[0].instance_id.clone();

    let moved = services::move_course_across(
        &repo,
        &cs(),
        &sem("semester-1"),
        &sem("semester-2"),
        &instance_id,
        Some(0),
    )
    .await
    .unwrap();
    assert!(moved.semesters[0].courses.is_empty());
    assert_eq!(moved.semesters[1].courses[0].course_code, "CS 61A");

    let (after, freed) =
        services::unschedule_course(&repo, &cs(), &sem("semester-2"), &instance_id)
            .await
            .unwrap();
    assert_eq!(freed, "CS 61A");
    assert!(after.scheduled_course_codes().is_empty());
}

#[tokio::test]
async fn test_save_plan_rejects_out_of_catalog_codes() {
    let repo = LocalRepository::new();
    let mut semester = Semester::new("semester-1", "Fall 2024");
    semester.courses.push(ScheduledCourse {
        instance_id: InstanceId::new("x"),
        course_code: "ART 1".to_string(),
        units: 4,
    });

    let err = services::save_plan(&repo, &cs(), vec![semester])
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationError { .. }));
    assert!(!repo.has_plan(&cs()).await.unwrap());
}

#[tokio::test]
async fn test_save_plan_rejects_duplicate_codes_across_semesters() {
    let repo = LocalRepository::new();
    let mut first = Semester::new("semester-1", "Fall 2024");
    first.courses.push(ScheduledCourse {
        instance_id: InstanceId::new("a"),
        course_code: "CS 61A".to_string(),
        units: 4,
    });
    let mut second = Semester::new("semester-2", "Spring 2025");
    second.courses.push(ScheduledCourse {
        instance_id: InstanceId::new("b"),
        course_code: "CS 61A".to_string(),
        units: 4,
    });

    let err = services::save_plan(&repo, &cs(), vec![first, second])
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationError { .. }));
}

#[tokio::test]
async fn test_save_plan_accepts_valid_document() {
    let repo = LocalRepository::new();
    let mut semester = Semester::new("semester-1", "Fall 2024");
    semester.courses.push(ScheduledCourse {
        instance_id: InstanceId::new("a"),
        course_code: "CS 61A".to_string(),
        units: 4,
    });

    let plan = services::save_plan(&repo, &cs(), vec![semester]).await.unwrap();
    assert_eq!(plan.major_id, cs());
    assert!(repo.has_plan(&cs()).await.unwrap());
}

#[tokio::test]
async fn test_get_progress_full_flow() {
    let repo = LocalRepository::new();
    services::schedule_course(&repo, &cs(), &sem("semester-1"), "CS 61A")
        .await
        .unwrap();
    services::schedule_course(&repo, &cs(), &sem("semester-2"), "Math 1A")
        .await
        .unwrap();

    let report = services::get_progress(&repo, &cs()).await.unwrap();
    assert_eq!(report.total_courses, 5);
    assert_eq!(report.scheduled_count, 2);
    assert_eq!(report.completion_percentage, 40);
    assert_eq!(report.remaining_courses, vec!["CS 61B", "CS 70", "Math 1B"]);

    let err = services::get_progress(&repo, &MajorId::new("nope"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_health_check() {
    let repo = LocalRepository::new();
    assert!(services::health_check(&repo).await.unwrap());
}
