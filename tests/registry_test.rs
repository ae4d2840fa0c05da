use schoolbank::core::registry::INSTRUCTOR_NOT_FOUND;
use schoolbank::core::{Course, Instructor, Student};
use schoolbank::utils::error::{AppError, EntityKind};
use schoolbank::Registry;

fn school() -> Registry {
    let mut registry = Registry::new();
    registry
        .add_instructor(Instructor::new(1, "Dr. Noor", "Mathematics"))
        .unwrap();
    registry
        .add_instructor(Instructor::new(2, "Ms. Lee", "Chemistry"))
        .unwrap();
    registry
        .add_course(Course::new(10, "Calculus", Some(1)))
        .unwrap();
    registry
        .add_course(Course::new(11, "Organic Chemistry", Some(2)))
        .unwrap();
    registry.add_course(Course::new(12, "Study Hall", None)).unwrap();
    registry.add_student(Student::new(1, "Omar", 19)).unwrap();
    registry.add_student(Student::new(2, "Sara", 21)).unwrap();
    registry
}

#[test]
fn test_add_student_rejects_duplicate_id() {
    let mut registry = school();

    let result = registry.add_student(Student::new(1, "Someone Else", 40));

    assert!(matches!(
        result,
        Err(AppError::DuplicateId {
            entity: EntityKind::Student,
            id: 1
        })
    ));
    let omar = registry.find_student(1).unwrap();
    assert_eq!(omar.name, "Omar");
    assert_eq!(omar.age, 19);
    assert_eq!(registry.student_count(), 2);
}

#[test]
fn test_enroll_twice_grows_by_one() {
    let mut registry = school();

    assert!(registry.enroll_student_in_course(1, 10).is_ok());
    assert!(matches!(
        registry.enroll_student_in_course(1, 10),
        Err(AppError::AlreadyEnrolled {
            student_id: 1,
            course_id: 10
        })
    ));

    assert_eq!(registry.find_student(1).unwrap().courses, vec![10]);
}

#[test]
fn test_is_enrolled_matches_title_case_insensitively() {
    let mut registry = school();
    registry.enroll_student_in_course(2, 11).unwrap();

    assert!(registry.is_student_enrolled_in_course(2, "organic chemistry"));
    assert!(registry.is_student_enrolled_in_course(2, "ORGANIC CHEMISTRY"));
    assert!(!registry.is_student_enrolled_in_course(2, "Calculus"));
    assert!(!registry.is_student_enrolled_in_course(99, "Organic Chemistry"));
}

#[test]
fn test_instructor_lookup_sentinel_for_both_failures() {
    let registry = school();

    assert_eq!(registry.get_instructor_by_course("calculus"), "Dr. Noor");

    let missing_course = registry.get_instructor_by_course("Astronomy");
    let unassigned = registry.get_instructor_by_course("Study Hall");
    assert_eq!(missing_course, INSTRUCTOR_NOT_FOUND);
    assert_eq!(unassigned, INSTRUCTOR_NOT_FOUND);
    assert_eq!(missing_course, unassigned);
    assert_eq!(INSTRUCTOR_NOT_FOUND, "Course or instructor not found.");
}

#[test]
fn test_update_student_in_place() {
    let mut registry = school();
    registry.enroll_student_in_course(1, 10).unwrap();

    registry.update_student(1, "Omar K.", 20).unwrap();

    let omar = registry.find_student(1).unwrap();
    assert_eq!(omar.name, "Omar K.");
    assert_eq!(omar.age, 20);
    assert_eq!(omar.courses, vec![10]);
    assert!(matches!(
        registry.update_student(42, "Ghost", 1),
        Err(AppError::NotFound {
            entity: EntityKind::Student,
            ..
        })
    ));
}

#[test]
fn test_delete_missing_student_leaves_registry_unchanged() {
    let mut registry = school();

    assert!(registry.delete_student(404).is_err());
    assert_eq!(registry.student_count(), 2);
}

#[test]
fn test_delete_student_does_not_cascade() {
    let mut registry = school();
    registry.enroll_student_in_course(1, 10).unwrap();

    registry.delete_student(1).unwrap();

    assert!(registry.find_student(1).is_none());
    assert_eq!(registry.student_count(), 1);
    assert_eq!(registry.course_count(), 3);
    assert_eq!(registry.instructor_count(), 2);
    assert_eq!(registry.get_instructor_by_course("Calculus"), "Dr. Noor");
    // the id is free again
    assert!(registry.add_student(Student::new(1, "New Omar", 18)).is_ok());
    assert!(registry.find_student(1).unwrap().courses.is_empty());
}

#[test]
fn test_find_by_name_and_title() {
    let registry = school();

    assert_eq!(registry.find_student_by_name("sara").unwrap().id, 2);
    assert!(registry.find_student_by_name("Sar").is_none());
    assert_eq!(registry.find_course_by_title("STUDY HALL").unwrap().id, 12);
    assert_eq!(registry.find_instructor(2).unwrap().specialization, "Chemistry");
    assert!(registry.find_instructor(3).is_none());
}

#[test]
fn test_show_all_keeps_insertion_order() {
    let registry = school();

    let titles: Vec<&str> = registry.courses().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Calculus", "Organic Chemistry", "Study Hall"]);

    let lines: Vec<String> = registry
        .courses()
        .iter()
        .map(|c| registry.describe_course(c))
        .collect();
    assert_eq!(lines[0], "ID: 10, Title: Calculus, Instructor: Dr. Noor");
    assert_eq!(lines[2], "ID: 12, Title: Study Hall, Instructor: Unassigned");
}
