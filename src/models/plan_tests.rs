use super::*;

fn instance(code: &str, units: u32) -> ScheduledCourse {
    ScheduledCourse {
        instance_id: InstanceId::generate(),
        course_code: code.to_string(),
        units,
    }
}

#[test]
fn test_default_skeleton_shape() {
    let plan = Plan::default_skeleton(MajorId::new("cs-ucb"));
    assert_eq!(plan.semesters.len(), 4);

    let ids: Vec<&str> = plan.semesters.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["semester-1", "semester-2", "semester-3", "semester-4"]);

    let names: Vec<&str> = plan.semesters.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Fall 2024", "Spring 2025", "Fall 2025", "Spring 2026"]);

    assert!(plan.semesters.iter().all(|s| s.courses.is_empty()));
}

#[test]
fn test_scheduled_course_codes_spans_semesters() {
    let mut plan = Plan::default_skeleton(MajorId::new("cs-ucb"));
    plan.semesters[0].courses.push(instance("CS 61A", 4));
    plan.semesters[2].courses.push(instance("Math 1A", 4));

    let codes = plan.scheduled_course_codes();
    assert_eq!(codes.len(), 2);
    assert!(codes.contains("CS 61A"));
    assert!(codes.contains("Math 1A"));
    assert!(plan.is_scheduled("CS 61A"));
    assert!(!plan.is_scheduled("CS 61B"));
}

#[test]
fn test_unit_totals() {
    let mut plan = Plan::default_skeleton(MajorId::new("cs-ucb"));
    plan.semesters[0].courses.push(instance("CS 61A", 4));
    plan.semesters[0].courses.push(instance("Math 1A", 5));
    plan.semesters[1].courses.push(instance("CS 61B", 4));

    assert_eq!(plan.semesters[0].total_units(), 9);
    assert_eq!(plan.semesters[1].total_units(), 4);
    assert_eq!(plan.total_units(), 13);
}

#[test]
fn test_plan_serde_roundtrip() {
    let mut plan = Plan::default_skeleton(MajorId::new("ds-ucb"));
    plan.semesters[0].courses.push(instance("Data C8", 4));

    let json = serde_json::to_string(&plan).unwrap();
    let back: Plan = serde_json::from_str(&json).unwrap();
    assert_eq!(back, plan);
}
