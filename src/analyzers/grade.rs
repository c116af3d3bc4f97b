//! Weighted grade calculation.
//!
//! A student's grade is the sum of `score_percentage / 100 * max_points` over
//! their submissions, divided by the sum of `max_points`. Points are the only
//! weighting. Repeated submissions to one assignment all count.

use std::fmt;

use serde::Serialize;

use crate::analyzers::utility::round_half_even;
use crate::gradebook::Gradebook;

/// Result of a grade query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GradeOutcome {
    /// Integer percentage, rounded half to even.
    Grade { percent: i64 },
    StudentNotFound,
    /// The student exists but no submission maps to a known assignment
    /// with non-zero points.
    NoAssignments,
}

impl fmt::Display for GradeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeOutcome::Grade { percent } => write!(f, "{percent}%"),
            GradeOutcome::StudentNotFound => f.write_str("Student not found"),
            GradeOutcome::NoAssignments => f.write_str("No assignments found"),
        }
    }
}

impl GradeOutcome {
    pub fn percent(&self) -> Option<i64> {
        match self {
            GradeOutcome::Grade { percent } => Some(*percent),
            _ => None,
        }
    }
}

/// Grade for the first student whose name matches `student_name` exactly.
pub fn student_grade(book: &Gradebook, student_name: &str) -> GradeOutcome {
    match book.student_by_name(student_name) {
        Some(student) => grade_for_student_id(book, &student.id),
        None => GradeOutcome::StudentNotFound,
    }
}

/// Grade for the student with `student_id`.
///
/// Submissions to assignments missing from the gradebook contribute nothing.
pub fn grade_for_student_id(book: &Gradebook, student_id: &str) -> GradeOutcome {
    if book.student_by_id(student_id).is_none() {
        return GradeOutcome::StudentNotFound;
    }

    let mut total_score = 0.0;
    let mut total_max_points = 0.0;

    for submission in book
        .submissions()
        .iter()
        .filter(|s| s.student_id == student_id)
    {
        if let Some(assignment) = book.assignment_by_id(&submission.assignment_id) {
            total_score += (submission.score_percentage / 100.0) * assignment.max_points;
            total_max_points += assignment.max_points;
        }
    }

    if total_max_points == 0.0 {
        return GradeOutcome::NoAssignments;
    }

    GradeOutcome::Grade {
        percent: round_half_even((total_score / total_max_points) * 100.0),
    }
}

/// Converts an integer percentage into a letter grade.
///
/// | Range  | Grade |
/// |--------|-------|
/// | >= 95  | A+    |
/// | >= 90  | A     |
/// | >= 80  | B     |
/// | >= 70  | C     |
/// | >= 60  | D     |
/// | < 60   | F     |
pub fn letter_grade(percent: i64) -> String {
    match percent {
        p if p >= 95 => "A+".into(),
        p if p >= 90 => "A".into(),
        p if p >= 80 => "B".into(),
        p if p >= 70 => "C".into(),
        p if p >= 60 => "D".into(),
        _ => "F".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Assignment, Student, Submission};

    fn book(submissions: Vec<Submission>) -> Gradebook {
        Gradebook::new(
            vec![
                Student::new("001", "Alice"),
                Student::new("002", "Bob"),
                Student::new("003", "Carol"),
            ],
            vec![
                Assignment::new("a1", "Quiz", 10.0),
                Assignment::new("a2", "Essay", 20.0),
                Assignment::new("a3", "Half", 8.0),
                Assignment::new("a0", "Ungraded", 0.0),
            ],
            submissions,
        )
    }

    #[test]
    fn test_weighted_by_max_points() {
        let book = book(vec![
            Submission::new("001", "a1", 100.0),
            Submission::new("001", "a2", 50.0),
        ]);
        // (10 * 1.0 + 20 * 0.5) / 30 = 66.67%
        assert_eq!(
            student_grade(&book, "Alice"),
            GradeOutcome::Grade { percent: 67 }
        );
    }

    #[test]
    fn test_student_not_found() {
        let book = book(vec![]);
        assert_eq!(student_grade(&book, "Zed"), GradeOutcome::StudentNotFound);
        assert_eq!(student_grade(&book, "alice"), GradeOutcome::StudentNotFound);
        assert_eq!(
            grade_for_student_id(&book, "999"),
            GradeOutcome::StudentNotFound
        );
    }

    #[test]
    fn test_no_assignments_is_distinct_from_not_found() {
        let book = book(vec![
            Submission::new("002", "missing", 100.0),
            Submission::new("002", "a0", 100.0),
        ]);
        assert_eq!(student_grade(&book, "Bob"), GradeOutcome::NoAssignments);
        assert_eq!(student_grade(&book, "Carol"), GradeOutcome::NoAssignments);
        assert_ne!(
            student_grade(&book, "Bob").to_string(),
            student_grade(&book, "Nobody").to_string()
        );
    }

    #[test]
    fn test_unknown_assignment_contributes_nothing() {
        let book = book(vec![
            Submission::new("001", "a1", 80.0),
            Submission::new("001", "nope", 0.0),
        ]);
        assert_eq!(
            student_grade(&book, "Alice"),
            GradeOutcome::Grade { percent: 80 }
        );
    }

    #[test]
    fn test_repeated_submissions_accumulate() {
        let book = book(vec![
            Submission::new("001", "a1", 100.0),
            Submission::new("001", "a1", 100.0),
            Submission::new("001", "a2", 40.0),
        ]);
        // (10 + 10 + 8) / 40 = 70%, a single a1 would give (10 + 8) / 30 = 60%
        assert_eq!(
            student_grade(&book, "Alice"),
            GradeOutcome::Grade { percent: 70 }
        );
    }

    #[test]
    fn test_rounds_half_to_even() {
        let book = book(vec![
            Submission::new("001", "a3", 62.5),
            Submission::new("002", "a3", 87.5),
        ]);
        assert_eq!(
            student_grade(&book, "Alice"),
            GradeOutcome::Grade { percent: 62 }
        );
        assert_eq!(
            student_grade(&book, "Bob"),
            GradeOutcome::Grade { percent: 88 }
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(GradeOutcome::Grade { percent: 67 }.to_string(), "67%");
        assert_eq!(
            GradeOutcome::StudentNotFound.to_string(),
            "Student not found"
        );
        assert_eq!(
            GradeOutcome::NoAssignments.to_string(),
            "No assignments found"
        );
    }

    #[test]
    fn test_json_tag() {
        let json = serde_json::to_value(GradeOutcome::Grade { percent: 91 }).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "grade", "percent": 91 }));
        let json = serde_json::to_value(GradeOutcome::StudentNotFound).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "student_not_found" }));
    }

    #[test]
    fn test_letter_grade_boundaries() {
        assert_eq!(letter_grade(100), "A+");
        assert_eq!(letter_grade(95), "A+");
        assert_eq!(letter_grade(94), "A");
        assert_eq!(letter_grade(90), "A");
        assert_eq!(letter_grade(89), "B");
        assert_eq!(letter_grade(80), "B");
        assert_eq!(letter_grade(79), "C");
        assert_eq!(letter_grade(70), "C");
        assert_eq!(letter_grade(69), "D");
        assert_eq!(letter_grade(60), "D");
        assert_eq!(letter_grade(59), "F");
        assert_eq!(letter_grade(0), "F");
    }
}
