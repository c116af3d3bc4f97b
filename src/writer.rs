//! Writes a gradebook back out in the three source formats.
//!
//! Only records that survived loading are written, so exporting and then
//! loading the export yields the same collections with no parse diagnostics.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::config::DataPaths;
use crate::gradebook::Gradebook;
use crate::records::{Assignment, Student, Submission};

/// Writes `book` to the standard layout under `dir`.
///
/// # Errors
///
/// Fails if the submissions directory already contains files, or on any
/// I/O error.
#[tracing::instrument(skip_all, fields(dir = %dir.display()))]
pub fn write_dataset(dir: &Path, book: &Gradebook) -> Result<DataPaths> {
    let paths = DataPaths::from_data_dir(dir);

    fs::create_dir_all(&paths.submissions)
        .with_context(|| format!("creating {}", paths.submissions.display()))?;
    if fs::read_dir(&paths.submissions)?.next().is_some() {
        bail!(
            "{} is not empty; refusing to mix submissions",
            paths.submissions.display()
        );
    }

    fs::write(&paths.students, render_students(book.students()))
        .with_context(|| format!("writing {}", paths.students.display()))?;
    fs::write(&paths.assignments, render_assignments(book.assignments()))
        .with_context(|| format!("writing {}", paths.assignments.display()))?;

    for (i, submission) in book.submissions().iter().enumerate() {
        let path = paths.submissions.join(format!("{:05}.txt", i + 1));
        fs::write(&path, render_submission(submission))
            .with_context(|| format!("writing {}", path.display()))?;
    }

    info!(
        students = book.students().len(),
        assignments = book.assignments().len(),
        submissions = book.submissions().len(),
        "Data set written"
    );
    Ok(paths)
}

pub fn render_students(students: &[Student]) -> String {
    students.iter().fold(String::new(), |mut out, s| {
        let _ = writeln!(out, "{}{}", s.id, s.name);
        out
    })
}

pub fn render_assignments(assignments: &[Assignment]) -> String {
    assignments.iter().fold(String::new(), |mut out, a| {
        let _ = writeln!(out, "{}\n{}\n{}", a.name, a.id, a.max_points);
        out
    })
}

pub fn render_submission(submission: &Submission) -> String {
    format!(
        "{}|{}|{}\n",
        submission.student_id, submission.assignment_id, submission.score_percentage
    )
}
