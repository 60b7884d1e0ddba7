#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # gradebook
//!
//! A demonstration binary for the `gradebook` record types. `basic` replays a
//! session against the unvalidated [`Student`] record; `tracked` replays one
//! against the validating, instance-tracked [`TrackedStudent`] and its
//! scholarship specialization.

use std::cmp::Ordering;

use anyhow::Result;
use bpaf::*;
use gradebook::{ScholarshipStudent, Student, TrackedStudent};
use tabled::{
    Table, Tabled,
    settings::{Panel, Style},
};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Record grades without validation and print the summaries
    Basic {
        /// Print the records as JSON instead of tables
        json: bool,
    },
    /// Record grades with validation, memoization, and instance tracking
    Tracked,
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    let json = long("json")
        .help("Print the records as JSON instead of tables")
        .switch();

    let basic = construct!(Cmd::Basic { json })
        .to_options()
        .command("basic")
        .help("Record grades without validation and print the summaries");

    let tracked = pure(Cmd::Tracked)
        .to_options()
        .command("tracked")
        .help("Record grades with validation, memoization, and instance tracking");

    let cmd = construct!([basic, tracked]);

    cmd.to_options().descr("In-memory student gradebook").run()
}

/// A row of the printed course table.
#[derive(Tabled)]
struct CourseRow {
    /// Course code.
    #[tabled(rename = "Course")]
    course: String,
    /// Recorded grade.
    #[tabled(rename = "Grade")]
    grade:  String,
}

/// Prints one record's summary, courses, and GPA.
fn show_student(student: &Student) {
    let rows = student
        .courses()
        .map(|(course, grade)| CourseRow {
            course: course.to_string(),
            grade:  format!("{grade:.1}"),
        })
        .collect::<Vec<_>>();

    println!(
        "{}",
        Table::new(&rows)
            .with(Panel::header(student.display_student()))
            .with(Panel::footer(student.display_gpa()))
            .with(Style::modern())
    );
    println!("Passed courses: {}", student.display_courses().join(", "));
}

/// Replays a session against the unvalidated record type.
fn basic_walkthrough(json: bool) -> Result<()> {
    let mut student1 = Student::new("John", "013454900");
    student1.add_grade("ops445", 3.0);
    student1.add_grade("ops245", 2.0);
    student1.add_grade("uli101", 1.0);

    // Integer student number, stored as text.
    let mut student2 = Student::new("Jessica", 123456);
    student2.add_grade("ipc144", 4.0);
    student2.add_grade("cpp244", 3.5);
    student2.add_grade("cpp344", 0.0);

    if json {
        println!("{}", serde_json::to_string_pretty(&vec![&student1, &student2])?);
        return Ok(());
    }

    show_student(&student1);
    show_student(&student2);
    Ok(())
}

/// Replays a session against the validating, instance-tracked record type.
async fn tracked_walkthrough() -> Result<()> {
    let student1 = TrackedStudent::new("John", "013454900")?;
    student1.add_grade("ops445", 3.0)?;
    student1.add_grade("ops245", 2.0)?;
    student1.add_grade("uli101", 1.0)?;

    let student2 = ScholarshipStudent::builder()
        .record(TrackedStudent::new("Jessica", 123456)?)
        .scholarship_amount(5000.0)
        .build()?;
    student2.add_grade("ipc144", 4.0)?;
    student2.add_grade("cpp244", 3.5)?;

    println!("{}", student1.display_gpa());
    println!("{}", student2.display_gpa());

    println!("[deferred] {}", student1.deferred_gpa().await);

    println!(
        "Is {} eligible for a scholarship? {}",
        student2.record().name(),
        if student2.is_eligible() { "Yes" } else { "No" }
    );
    println!(
        "Is {student1} better than {student2}? {}",
        match student1.compare_gpa(student2.record()) {
            Ordering::Less => "Yes",
            _ => "No",
        }
    );
    println!("Live student records: {}", TrackedStudent::live_count());

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    match options() {
        Cmd::Basic { json } => basic_walkthrough(json)?,
        Cmd::Tracked => tracked_walkthrough().await?,
    };

    Ok(())
}
