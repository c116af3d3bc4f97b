//! Reads the gradebook sources from disk.
//!
//! A missing source is fatal. A bad record, or a submission file that cannot
//! be read, is logged, recorded as a diagnostic and skipped.

use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::config::DataPaths;
use crate::diagnostics::{Diagnostic, Issue, Parsed};
use crate::gradebook::Gradebook;
use crate::parser::{parse_assignments, parse_students, parse_submission};
use crate::records::{Assignment, Student, Submission};

/// Loads all three sources and builds the [`Gradebook`].
///
/// # Errors
///
/// Returns an error if the students file, the assignments file or the
/// submissions directory cannot be read.
#[tracing::instrument(skip_all, fields(students = %paths.students.display()))]
pub fn load_gradebook(paths: &DataPaths) -> Result<Gradebook> {
    let students = load_students(&paths.students)?;
    let submissions = load_submissions(&paths.submissions)?;
    let assignments = load_assignments(&paths.assignments)?;

    let mut diagnostics = students.diagnostics;
    diagnostics.extend(submissions.diagnostics);
    diagnostics.extend(assignments.diagnostics);

    let book = Gradebook::new(students.records, assignments.records, submissions.records)
        .with_load_diagnostics(diagnostics);

    for d in book
        .diagnostics()
        .iter()
        .filter(|d| is_index_issue(&d.issue))
    {
        log_diagnostic(d);
    }

    info!(
        students = book.students().len(),
        assignments = book.assignments().len(),
        submissions = book.submissions().len(),
        diagnostics = book.diagnostics().len(),
        "Gradebook loaded"
    );

    Ok(book)
}

#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_students(path: &Path) -> Result<Parsed<Student>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading students from {}", path.display()))?;
    let parsed = parse_students(&text, &origin(path));

    parsed.diagnostics.iter().for_each(log_diagnostic);
    debug!(count = parsed.records.len(), "Students parsed");
    Ok(parsed)
}

#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_assignments(path: &Path) -> Result<Parsed<Assignment>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading assignments from {}", path.display()))?;
    let parsed = parse_assignments(&text, &origin(path));

    parsed.diagnostics.iter().for_each(log_diagnostic);
    debug!(count = parsed.records.len(), "Assignments parsed");
    Ok(parsed)
}

/// Reads every `*.txt` file in `dir` as one submission, in file-name order.
///
/// A directory entry that cannot be listed is recorded and skipped.
#[tracing::instrument(skip_all, fields(dir = %dir.display()))]
pub fn load_submissions(dir: &Path) -> Result<Parsed<Submission>> {
    let mut parsed = Parsed::default();
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)
        .with_context(|| format!("listing submissions in {}", dir.display()))?
    {
        match submission_file(entry) {
            Ok(Some(path)) => files.push(path),
            Ok(None) => {}
            Err(issue) => {
                let d = Diagnostic::new(origin(dir), issue);
                log_diagnostic(&d);
                parsed.diagnostics.push(d);
            }
        }
    }
    files.sort();

    for path in files {
        let result = fs::read_to_string(&path)
            .map_err(|e| Issue::Unreadable {
                message: e.to_string(),
            })
            .and_then(|text| parse_submission(&text));

        match result {
            Ok(submission) => parsed.records.push(submission),
            Err(issue) => {
                let d = Diagnostic::new(origin(&path), issue);
                log_diagnostic(&d);
                parsed.diagnostics.push(d);
            }
        }
    }

    debug!(count = parsed.records.len(), "Submissions parsed");
    Ok(parsed)
}

/// Path of a directory entry named `*.txt`, whether or not the name is UTF-8.
fn submission_file(entry: io::Result<DirEntry>) -> Result<Option<PathBuf>, Issue> {
    let entry = entry.map_err(|e| Issue::Unreadable {
        message: e.to_string(),
    })?;
    let is_txt = entry.file_name().as_encoded_bytes().ends_with(b".txt");
    Ok(is_txt.then(|| entry.path()))
}

fn origin(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Issues found while building the lookup tables rather than while parsing.
fn is_index_issue(issue: &Issue) -> bool {
    matches!(
        issue,
        Issue::DuplicateStudentId { .. }
            | Issue::DuplicateStudentName { .. }
            | Issue::DuplicateAssignmentId { .. }
            | Issue::DuplicateAssignmentName { .. }
    )
}

fn log_diagnostic(d: &Diagnostic) {
    warn!(origin = %d.origin, line = d.line, issue = %d.issue, "Load diagnostic");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_dataset(dir: &Path) {
        fs::write(dir.join("students.txt"), "001Alice\n002Bob\nxx1Bad\n").unwrap();
        fs::write(dir.join("assignments.txt"), "Quiz\na1\n10\nEssay\na2\n20\n").unwrap();
        let subs = dir.join("submissions");
        fs::create_dir(&subs).unwrap();
        fs::write(subs.join("s1.txt"), "001|a1|100\n").unwrap();
        fs::write(subs.join("s2.txt"), "001|a2|50").unwrap();
        fs::write(subs.join("s3.txt"), "002|a1").unwrap();
        fs::write(subs.join("notes.md"), "ignored").unwrap();
        fs::create_dir(subs.join("dir.txt")).unwrap();
    }

    #[test]
    fn test_load_gradebook() {
        let tmp = TempDir::new().unwrap();
        write_dataset(tmp.path());

        let book = load_gradebook(&DataPaths::from_data_dir(tmp.path())).unwrap();

        assert_eq!(book.students().len(), 2);
        assert_eq!(book.assignments().len(), 2);
        assert_eq!(book.submissions().len(), 2);

        let origins: Vec<&str> = book.diagnostics().iter().map(|d| d.origin.as_str()).collect();
        assert_eq!(origins, vec!["students.txt", "dir.txt", "s3.txt"]);
        assert!(matches!(
            book.diagnostics()[1].issue,
            Issue::Unreadable { .. }
        ));
    }

    #[test]
    fn test_submissions_sorted_by_file_name() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.txt"), "002|a1|20").unwrap();
        fs::write(tmp.path().join("a.txt"), "001|a1|10").unwrap();

        let parsed = load_submissions(tmp.path()).unwrap();
        assert_eq!(
            parsed.records,
            vec![
                Submission::new("001", "a1", 10.0),
                Submission::new("002", "a1", 20.0),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_file_name_is_still_loaded() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = TempDir::new().unwrap();
        let name = OsStr::from_bytes(b"bad\xff.txt");
        fs::write(tmp.path().join(name), "001|a1|75").unwrap();
        fs::write(tmp.path().join(OsStr::from_bytes(b"bad\xff.md")), "x").unwrap();

        let parsed = load_submissions(tmp.path()).unwrap();
        assert_eq!(parsed.records, vec![Submission::new("001", "a1", 75.0)]);
        assert!(parsed.diagnostics.is_empty());
    }

    #[test]
    fn test_unlistable_entry_is_not_fatal() {
        let result = submission_file(Err(io::Error::other("entry vanished")));
        assert_eq!(
            result,
            Err(Issue::Unreadable {
                message: "entry vanished".into()
            })
        );
    }

    #[test]
    fn test_missing_sources_are_fatal() {
        let tmp = TempDir::new().unwrap();

        let err = load_gradebook(&DataPaths::from_data_dir(tmp.path())).unwrap_err();
        assert!(err.to_string().contains("students.txt"));
        assert!(load_submissions(&tmp.path().join("nope")).is_err());
    }
}
