//! End-to-end service-layer flows against both repository backends.

use transferbuddy::api::{MajorId, SemesterId};
use transferbuddy::db::repositories::{FileRepository, LocalRepository};
use transferbuddy::db::repository::FullRepository;
use transferbuddy::db::services;

fn cs() -> MajorId {
    MajorId::new("cs-ucb")
}

fn sem(id: &str) -> SemesterId {
    SemesterId::new(id)
}

async fn plan_a_full_semester(repo: &dyn FullRepository) {
    services::schedule_course(repo, &cs(), &sem("semester-1"), "CS 61A")
        .await
        .unwrap();
    services::schedule_course(repo, &cs(), &sem("semester-1"), "Math 1A")
        .await
        .unwrap();
    services::schedule_course(repo, &cs(), &sem("semester-2"), "CS 61B")
        .await
        .unwrap();

    let report = services::get_progress(repo, &cs()).await.unwrap();
    assert_eq!(report.scheduled_count, 3);
    assert_eq!(report.completion_percentage, 60);
    assert_eq!(report.remaining_courses, vec!["CS 70", "Math 1B"]);
    assert_eq!(report.semester_breakdown[0].course_count, 2);
    assert_eq!(report.semester_breakdown[0].total_units, 8);
}

#[tokio::test]
async fn test_planning_flow_local_backend() {
    let repo = LocalRepository::new();
    plan_a_full_semester(&repo).await;
}

#[tokio::test]
async fn test_planning_flow_file_backend() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileRepository::open(dir.path(), None).unwrap();
    plan_a_full_semester(&repo).await;

    // Same plan is visible after reopening the data directory.
    let reopened = FileRepository::open(dir.path(), None).unwrap();
    let report = services::get_progress(&reopened, &cs()).await.unwrap();
    assert_eq!(report.scheduled_count, 3);
}

#[tokio::test]
async fn test_drag_and_drop_session() {
    // A realistic editing session: schedule, reorder, move across, drop one
    // back into the pool, and check the derived state at the end.
    let repo = LocalRepository::new();

    let plan = services::schedule_course(&repo, &cs(), &sem("semester-1"), "CS 61A")
        .await
        .unwrap();
    assert_eq!(plan.semesters[0].courses[0].course_code, "CS 61A");

    services::schedule_course(&repo, &cs(), &sem("semester-1"), "CS 61B")
        .await
        .unwrap();
    let plan = services::move_course_within(&repo, &cs(), &sem("semester-1"), 1, 0)
        .await
        .unwrap();
    assert_eq!(plan.semesters[0].courses[0].course_code, "CS 61B");

    let instance = plan.semesters[0].courses[1].instance_id.clone();
    let plan = services::move_course_across(
        &repo,
        &cs(),
        &sem("semester-1"),
        &sem("semester-3"),
        &instance,
        None,
    )
    .await
    .unwrap();
    assert_eq!(plan.semesters[2].courses[0].course_code, "CS 61A");

    let (plan, freed) =
        services::unschedule_course(&repo, &cs(), &sem("semester-3"), &instance)
            .await
            .unwrap();
    assert_eq!(freed, "CS 61A");
    assert_eq!(plan.scheduled_course_codes().len(), 1);

    let report = services::get_progress(&repo, &cs()).await.unwrap();
    assert_eq!(report.scheduled_count, 1);
    assert!(report.remaining_courses.contains(&"CS 61A".to_string()));
}

#[tokio::test]
async fn test_plans_are_independent_per_major() {
    let repo = LocalRepository::new();

    services::schedule_course(&repo, &cs(), &sem("semester-1"), "CS 61A")
        .await
        .unwrap();
    services::schedule_course(
        &repo,
        &MajorId::new("ds-ucb"),
        &sem("semester-1"),
        "Data C8",
    )
    .await
    .unwrap();

    let cs_plan = services::load_plan(&repo, &cs()).await.unwrap();
    let ds_plan = services::load_plan(&repo, &MajorId::new("ds-ucb")).await.unwrap();

    assert_eq!(cs_plan.scheduled_course_codes().len(), 1);
    assert!(cs_plan.is_scheduled("CS 61A"));
    assert_eq!(ds_plan.scheduled_course_codes().len(), 1);
    assert!(ds_plan.is_scheduled("Data C8"));
}
