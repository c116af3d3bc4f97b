//! Load-time diagnostics.
//!
//! Malformed records and shadowed duplicates never abort a load. Each one is
//! turned into a [`Diagnostic`] that travels alongside the loaded data.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// What was wrong with a record.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    #[error("invalid student id: {line}")]
    InvalidStudentId { line: String },

    #[error("invalid max points value for {name}: {value}")]
    InvalidMaxPoints { name: String, value: String },

    #[error("malformed line: {line}")]
    MalformedSubmission { line: String },

    #[error("invalid percentage: {value}")]
    InvalidPercentage { value: String },

    #[error("invalid student id in submission: {student_id}")]
    InvalidSubmissionStudentId { student_id: String },

    #[error("could not read file: {message}")]
    Unreadable { message: String },

    #[error("student id {id} is used by more than one student")]
    DuplicateStudentId { id: String },

    #[error("student name {name:?} is shared by {kept_id} and {shadowed_id}; lookups resolve to {kept_id}")]
    DuplicateStudentName {
        name: String,
        kept_id: String,
        shadowed_id: String,
    },

    #[error("assignment id {id} appears more than once; the later block replaces the earlier one")]
    DuplicateAssignmentId { id: String },

    #[error("assignment name {name:?} is shared by {kept_id} and {shadowed_id}; lookups resolve to {kept_id}")]
    DuplicateAssignmentName {
        name: String,
        kept_id: String,
        shadowed_id: String,
    },
}

/// An [`Issue`] together with where it was found.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    /// Source file name, or the collection name for lookup-table issues.
    pub origin: String,
    /// 1-based line number, when the issue maps to a single line.
    pub line: Option<usize>,
    pub issue: Issue,
}

impl Diagnostic {
    pub fn new(origin: impl Into<String>, issue: Issue) -> Self {
        Self {
            origin: origin.into(),
            line: None,
            issue,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}: {}", self.origin, line, self.issue),
            None => write!(f, "{}: {}", self.origin, self.issue),
        }
    }
}

/// Records parsed from one source plus whatever was skipped on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    pub records: Vec<T>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Default for Parsed<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            diagnostics: Vec::new(),
        }
    }
}
