//! Record types produced by the parsers and consumed by the analyzers.

use serde::{Deserialize, Serialize};

/// A student as listed in the students source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Exactly three ASCII digits.
    pub id: String,
    pub name: String,
}

/// A gradable assignment, read from a three-line block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: String,
    pub name: String,
    /// Weight of the assignment in a student's overall grade.
    pub max_points: f64,
}

/// One submission file: a student's percentage score on an assignment.
///
/// Both ids are weak references. A submission pointing at an unknown
/// assignment is ignored by every analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub student_id: String,
    pub assignment_id: String,
    /// Nominally 0-100, not range checked.
    pub score_percentage: f64,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Assignment {
    pub fn new(id: impl Into<String>, name: impl Into<String>, max_points: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            max_points,
        }
    }
}

impl Submission {
    pub fn new(
        student_id: impl Into<String>,
        assignment_id: impl Into<String>,
        score_percentage: f64,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            assignment_id: assignment_id.into(),
            score_percentage,
        }
    }
}

/// Returns true when `id` is exactly three ASCII digits.
pub fn is_student_id(id: &str) -> bool {
    id.len() == 3 && id.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_student_id() {
        assert!(is_student_id("001"));
        assert!(is_student_id("999"));
        assert!(!is_student_id("01"));
        assert!(!is_student_id("0001"));
        assert!(!is_student_id("12a"));
        assert!(!is_student_id(""));
        // non-ASCII digits are rejected
        assert!(!is_student_id("١٢٣"));
    }
}
