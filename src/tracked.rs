#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    cmp::Ordering,
    fmt::{self, Display},
    sync::{
        Mutex,
        atomic::{AtomicU64, Ordering as AtomicOrdering},
    },
};

use indexmap::IndexMap;
use itertools::Itertools;
use lazy_static::lazy_static;

use crate::{
    constants::{DEFERRED_GPA_DELAY, GRADE_MAX, GRADE_MIN, MIN_COURSE_LEN},
    error::RecordError,
};

lazy_static! {
    /// Ids of all live tracked records, in creation order.
    static ref REGISTRY: Mutex<Vec<u64>> = Mutex::new(Vec::new());
}

/// Source of unique ids for tracked records.
static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// A validating student record with per-instance locking, a memoized GPA
/// summary, and process-wide live-instance tracking.
///
/// Mutation goes through [`TrackedStudent::add_grade`], which holds an
/// exclusive lock so at most one caller mutates at a time and readers see
/// either the state fully before or fully after a given add. The memoized GPA
/// summary is invalidated on every accepted mutation.
pub struct TrackedStudent {
    /// Registry id, unique for the lifetime of the process.
    id:       u64,
    /// Display name, immutable after construction.
    name:     String,
    /// Student number, always stored as text.
    number:   String,
    /// Course code -> grade, in insertion order, behind the mutation lock.
    courses:  Mutex<IndexMap<String, f64>>,
    /// Memoized GPA summary, cleared whenever `courses` changes.
    gpa_memo: Mutex<Option<String>>,
}

impl TrackedStudent {
    /// Creates a new tracked record and registers it with the process-wide
    /// instance registry -
    /// * `name` - the student's display name; must not be blank
    /// * `number` - the student number; integers and text alike are stored in
    ///   their canonical text form
    pub fn new(name: impl Into<String>, number: impl Display) -> Result<Self, RecordError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RecordError::InvalidArgument(
                "student name must not be blank".to_string(),
            ));
        }

        let id = NEXT_ID.fetch_add(1, AtomicOrdering::SeqCst);
        REGISTRY.lock().unwrap().push(id);
        tracing::info!("Student {name} created.");

        Ok(Self {
            id,
            name,
            number: number.to_string(),
            courses: Mutex::new(IndexMap::new()),
            gpa_memo: Mutex::new(None),
        })
    }

    /// Returns the student's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the student number as text.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Adds or overwrites the grade for `course`, keeping the course's
    /// original position on overwrite.
    ///
    /// Rejects course codes shorter than 3 characters and grades outside
    /// `[0.0, 4.0]`, leaving the record unchanged. An accepted add clears the
    /// memoized GPA summary.
    pub fn add_grade(&self, course: impl Into<String>, grade: f64) -> Result<(), RecordError> {
        let course = course.into();
        if course.chars().count() < MIN_COURSE_LEN {
            return Err(RecordError::InvalidCourse(course));
        }
        if !(GRADE_MIN..=GRADE_MAX).contains(&grade) {
            return Err(RecordError::InvalidGrade(grade));
        }

        {
            let mut courses = self.courses.lock().unwrap();
            courses.insert(course.clone(), grade);
        }
        // Lock order is courses then memo; the courses guard is dropped above.
        *self.gpa_memo.lock().unwrap() = None;

        tracing::info!("Added grade {grade} for {course} to {}", self.name);
        Ok(())
    }

    /// Returns a GPA summary formatted to 2 decimal places, memoized until the
    /// next accepted mutation.
    ///
    /// The GPA is the arithmetic mean of every stored grade, passed and failed
    /// alike; with no courses recorded it is exactly `0.0`.
    pub fn display_gpa(&self) -> String {
        let mut memo = self.gpa_memo.lock().unwrap();
        if let Some(summary) = memo.as_ref() {
            return summary.clone();
        }

        let courses = self.courses.lock().unwrap();
        let summary = if courses.is_empty() {
            format!("GPA of student {} is 0.0", self.name)
        } else {
            let gpa = courses.values().sum::<f64>() / courses.len() as f64;
            format!("GPA of student {} is {gpa:.2}", self.name)
        };

        *memo = Some(summary.clone());
        summary
    }

    /// Returns the course codes with a grade above 0.0, sorted by descending
    /// grade. Ties keep their insertion order.
    pub fn display_courses(&self) -> Vec<String> {
        let courses = self.courses.lock().unwrap();
        courses
            .iter()
            .filter(|(_, grade)| **grade > 0.0)
            .sorted_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(Ordering::Equal))
            .map(|(course, _)| course.clone())
            .collect()
    }

    /// Returns true when a grade has been recorded for `course`.
    pub fn has_course(&self, course: &str) -> bool {
        self.courses.lock().unwrap().contains_key(course)
    }

    /// Returns every recorded course code, in insertion order.
    pub fn course_codes(&self) -> Vec<String> {
        self.courses.lock().unwrap().keys().cloned().collect()
    }

    /// Returns the GPA as parsed back out of the rendered summary, so
    /// comparisons and eligibility checks see the same 2-decimal value a
    /// caller reads.
    pub fn parsed_gpa(&self) -> f64 {
        self.display_gpa()
            .rsplit(' ')
            .next()
            .and_then(|token| token.parse().ok())
            .unwrap_or(0.0)
    }

    /// Orders two records by parsed GPA value, lower first.
    pub fn compare_gpa(&self, other: &TrackedStudent) -> Ordering {
        self.parsed_gpa()
            .partial_cmp(&other.parsed_gpa())
            .unwrap_or(Ordering::Equal)
    }

    /// Returns the GPA summary after a fixed delay.
    ///
    /// Purely illustrative deferral; there is no cancellation or timeout to
    /// coordinate.
    pub async fn deferred_gpa(&self) -> String {
        tokio::time::sleep(DEFERRED_GPA_DELAY).await;
        self.display_gpa()
    }

    /// Returns the number of tracked records currently alive in this process.
    pub fn live_count() -> usize {
        REGISTRY.lock().unwrap().len()
    }
}

impl PartialEq for TrackedStudent {
    /// Records are equal when name and number match exactly.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.number == other.number
    }
}

impl Eq for TrackedStudent {}

impl Display for TrackedStudent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.number)
    }
}

impl fmt::Debug for TrackedStudent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackedStudent")
            .field("name", &self.name)
            .field("number", &self.number)
            .finish()
    }
}

impl Drop for TrackedStudent {
    /// Deregisters the record so the live-instance count falls with it.
    fn drop(&mut self) {
        let mut registry = REGISTRY.lock().unwrap();
        if let Some(pos) = registry.iter().position(|id| *id == self.id) {
            registry.remove(pos);
        }
    }
}
