#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::time::Duration;

/// Inclusive lower bound for a recorded grade.
pub const GRADE_MIN: f64 = 0.0;

/// Inclusive upper bound for a recorded grade.
pub const GRADE_MAX: f64 = 4.0;

/// Minimum number of characters in a valid course code.
pub const MIN_COURSE_LEN: usize = 3;

/// GPA a scholarship student must exceed to be eligible.
pub const ELIGIBILITY_THRESHOLD: f64 = 3.5;

/// Fixed delay applied by the deferred GPA demonstration.
pub const DEFERRED_GPA_DELAY: Duration = Duration::from_secs(1);
