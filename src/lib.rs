//! # gradebook
//!
//! An in-memory record keeper for a single student's course grades, with
//! derived GPA summaries and passed-course listings.
//!
//! Two record flavors are provided:
//! * [`record::Student`] stores whatever it is given and enumerates courses in
//!   insertion order.
//! * [`tracked::TrackedStudent`] validates its inputs, serializes mutation
//!   behind a per-instance lock, memoizes the GPA summary, and participates in
//!   process-wide live-instance tracking.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// Error taxonomy for record validation
pub mod error;
/// The base, unvalidated student record
pub mod record;
/// Scholarship eligibility layered over a tracked record
pub mod scholarship;
/// The validating, instance-tracked student record
pub mod tracked;

pub use error::RecordError;
pub use record::Student;
pub use scholarship::ScholarshipStudent;
pub use tracked::TrackedStudent;
