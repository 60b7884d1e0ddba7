use std::cmp::Ordering;

use gradebook::{RecordError, TrackedStudent};

fn sample_jessica() -> TrackedStudent {
    let student = TrackedStudent::new("Jessica", 123456).expect("build record");
    student.add_grade("ipc144", 4.0).expect("add ipc144");
    student.add_grade("cpp244", 3.5).expect("add cpp244");
    student.add_grade("cpp344", 0.0).expect("add cpp344");
    student
}

#[test]
fn gpa_is_formatted_to_two_decimals() {
    let student = TrackedStudent::new("Jessica", 123456).expect("build record");
    student.add_grade("ipc144", 4.0).expect("add ipc144");
    student.add_grade("cpp244", 3.5).expect("add cpp244");

    assert_eq!(student.display_gpa(), "GPA of student Jessica is 3.75");
}

#[test]
fn empty_record_reports_zero_gpa() {
    let student = TrackedStudent::new("Dana", "000000001").expect("build record");
    assert_eq!(student.display_gpa(), "GPA of student Dana is 0.0");
    assert!(student.display_courses().is_empty());
}

#[test]
fn passed_courses_sort_by_descending_grade() {
    let student = TrackedStudent::new("John", "013454900").expect("build record");
    student.add_grade("uli101", 1.0).expect("add uli101");
    student.add_grade("ops445", 3.0).expect("add ops445");
    student.add_grade("ops245", 2.0).expect("add ops245");

    assert_eq!(student.display_courses(), vec!["ops445", "ops245", "uli101"]);
}

#[test]
fn failed_courses_are_excluded() {
    assert_eq!(sample_jessica().display_courses(), vec!["ipc144", "cpp244"]);
}

#[test]
fn short_course_codes_are_rejected_without_mutation() {
    let student = sample_jessica();
    let before = student.display_gpa();

    let err = student.add_grade("ab", 3.0).expect_err("short code must fail");
    assert!(matches!(err, RecordError::InvalidCourse(_)));

    assert!(!student.has_course("ab"));
    assert_eq!(student.display_gpa(), before);
}

#[test]
fn out_of_range_grades_are_rejected_without_mutation() {
    let student = sample_jessica();
    let before = student.display_gpa();

    for grade in [4.5, -0.1] {
        let err = student.add_grade("eng101", grade).expect_err("bad grade must fail");
        assert!(matches!(err, RecordError::InvalidGrade(_)));
    }

    assert!(!student.has_course("eng101"));
    assert_eq!(student.display_gpa(), before);
}

#[test]
fn blank_names_are_rejected_at_construction() {
    let err = TrackedStudent::new("  ", 1).expect_err("blank name must fail");
    assert!(matches!(err, RecordError::InvalidArgument(_)));
}

#[test]
fn repeated_gpa_calls_return_the_identical_string() {
    let student = sample_jessica();
    assert_eq!(student.display_gpa(), student.display_gpa());
}

#[test]
fn memoized_gpa_is_invalidated_by_mutation() {
    let student = TrackedStudent::new("John", "013454900").expect("build record");
    student.add_grade("ops445", 3.0).expect("add ops445");
    assert_eq!(student.display_gpa(), "GPA of student John is 3.00");

    // A second add after a read must not serve the stale memo.
    student.add_grade("ops245", 1.0).expect("add ops245");
    assert_eq!(student.display_gpa(), "GPA of student John is 2.00");
}

#[test]
fn overwriting_a_grade_keeps_the_course_position() {
    let student = sample_jessica();
    student.add_grade("ipc144", 2.0).expect("overwrite ipc144");

    assert_eq!(student.course_codes(), vec!["ipc144", "cpp244", "cpp344"]);
    assert_eq!(student.display_courses(), vec!["cpp244", "ipc144"]);
}

#[test]
fn equality_matches_text_and_integer_numbers() {
    let a = TrackedStudent::new("Jessica", 123456).expect("build record");
    let b = TrackedStudent::new("Jessica", "123456").expect("build record");
    assert_eq!(a, b);
    assert_ne!(a, TrackedStudent::new("Jessica", "123457").expect("build record"));
}

#[test]
fn compare_gpa_orders_by_parsed_value() {
    let lower = TrackedStudent::new("John", "013454900").expect("build record");
    lower.add_grade("ops445", 2.0).expect("add ops445");

    let higher = TrackedStudent::new("Jessica", 123456).expect("build record");
    higher.add_grade("ipc144", 4.0).expect("add ipc144");

    assert_eq!(lower.compare_gpa(&higher), Ordering::Less);
    assert_eq!(higher.compare_gpa(&lower), Ordering::Greater);
    assert_eq!(lower.compare_gpa(&lower), Ordering::Equal);
}

#[test]
fn course_membership_is_queryable() {
    let student = sample_jessica();
    assert!(student.has_course("cpp344"));
    assert!(!student.has_course("ops445"));
}

#[tokio::test]
async fn deferred_gpa_matches_the_synchronous_summary() {
    let student = sample_jessica();
    assert_eq!(student.deferred_gpa().await, student.display_gpa());
}
