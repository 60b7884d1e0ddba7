#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single student's identity and course grades, with no validation.
///
/// Courses enumerate in insertion order; re-adding a course overwrites its
/// grade in place without moving it. Equality considers only `name` and
/// `number`, never the courses.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Student {
    /// Display name, immutable after construction.
    name:    String,
    /// Student number, always stored as text.
    number:  String,
    /// Course code -> grade, in insertion order.
    courses: IndexMap<String, f64>,
}

impl Student {
    /// Creates a new record -
    /// * `name` - the student's display name
    /// * `number` - the student number; integers and text alike are stored in
    ///   their canonical text form
    pub fn new(name: impl Into<String>, number: impl Display) -> Self {
        Self {
            name:    name.into(),
            number:  number.to_string(),
            courses: IndexMap::new(),
        }
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
    pub fn add_grade(&mut self, course: impl Into<String>, grade: f64) {
        self.courses.insert(course.into(), grade);
    }

    /// Returns the student's name and number on separate labelled lines.
    pub fn display_student(&self) -> String {
        format!("Student Name: {}\nStudent Number: {}", self.name, self.number)
    }

    /// Returns a GPA summary formatted to 1 decimal place.
    ///
    /// The GPA is the arithmetic mean of every stored grade, passed and failed
    /// alike; with no courses recorded it is exactly `0.0`.
    pub fn display_gpa(&self) -> String {
        if self.courses.is_empty() {
            return format!("GPA of student {} is 0.0", self.name);
        }

        let gpa = self.courses.values().sum::<f64>() / self.courses.len() as f64;
        format!("GPA of student {} is {gpa:.1}", self.name)
    }

    /// Returns the course codes with a grade above 0.0, in insertion order.
    pub fn display_courses(&self) -> Vec<String> {
        self.courses
            .iter()
            .filter(|(_, grade)| **grade > 0.0)
            .map(|(course, _)| course.clone())
            .collect()
    }

    /// Iterates over every recorded course and its grade, in insertion order.
    pub fn courses(&self) -> impl Iterator<Item = (&str, f64)> {
        self.courses.iter().map(|(course, grade)| (course.as_str(), *grade))
    }
}

impl PartialEq for Student {
    /// Records are equal when name and number match exactly.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.number == other.number
    }
}

impl Eq for Student {}
