#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::{self, Display};

use bon::bon;

use crate::{constants::ELIGIBILITY_THRESHOLD, error::RecordError, tracked::TrackedStudent};

/// A tracked record paired with a scholarship amount, with an eligibility
/// check on top.
///
/// Plain composition: grade mutation and GPA reads delegate to the wrapped
/// [`TrackedStudent`].
#[derive(Debug)]
pub struct ScholarshipStudent {
    /// The wrapped record.
    record:             TrackedStudent,
    /// Scholarship amount in dollars, never negative.
    scholarship_amount: f64,
}

#[bon]
impl ScholarshipStudent {
    /// Wraps `record` with a scholarship amount -
    /// * `record` - the tracked record to wrap
    /// * `scholarship_amount` - amount in dollars; must not be negative
    #[builder]
    pub fn new(record: TrackedStudent, scholarship_amount: f64) -> Result<Self, RecordError> {
        if scholarship_amount < 0.0 {
            return Err(RecordError::InvalidArgument(
                "scholarship amount cannot be negative".to_string(),
            ));
        }

        Ok(Self {
            record,
            scholarship_amount,
        })
    }

    /// Returns the wrapped record.
    pub fn record(&self) -> &TrackedStudent {
        &self.record
    }

    /// Returns the scholarship amount in dollars.
    pub fn scholarship_amount(&self) -> f64 {
        self.scholarship_amount
    }

    /// Adds or overwrites a grade on the wrapped record.
    pub fn add_grade(&self, course: impl Into<String>, grade: f64) -> Result<(), RecordError> {
        self.record.add_grade(course, grade)
    }

    /// Returns the wrapped record's GPA summary.
    pub fn display_gpa(&self) -> String {
        self.record.display_gpa()
    }

    /// Returns true when the parsed GPA exceeds the eligibility threshold.
    pub fn is_eligible(&self) -> bool {
        self.record.parsed_gpa() > ELIGIBILITY_THRESHOLD
    }
}

impl Display for ScholarshipStudent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (${:.2} scholarship)", self.record, self.scholarship_amount)
    }
}
