#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// An enum to represent possible errors when building or mutating a record.
///
/// All variants are raised synchronously at the offending call and leave the
/// record unchanged; nothing is retried or swallowed internally.
#[derive(thiserror::Error, Debug)]
pub enum RecordError {
    /// The course code is too short to be a real course.
    #[error("Course code `{0}` must be at least 3 characters long.")]
    InvalidCourse(String),
    /// The grade falls outside the recordable range.
    #[error("Grade {0} must be between 0.0 and 4.0.")]
    InvalidGrade(f64),
    /// A constructor was handed an unusable argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
