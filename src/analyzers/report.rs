//! Class-wide grade report.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analyzers::grade::{GradeOutcome, grade_for_student_id, letter_grade};
use crate::gradebook::Gradebook;

/// One student's line in the report. `percent` and `letter` are empty for a
/// student without any graded submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub student_id: String,
    pub name: String,
    pub percent: Option<i64>,
    pub letter: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassReport {
    pub generated_at: DateTime<Utc>,
    pub rows: Vec<ReportRow>,
}

impl ClassReport {
    /// Grades every student in stored order, resolving by id.
    pub fn from_gradebook(book: &Gradebook) -> Self {
        let rows = book
            .students()
            .iter()
            .map(|student| {
                let percent = grade_for_student_id(book, &student.id).percent();
                ReportRow {
                    student_id: student.id.clone(),
                    name: student.name.clone(),
                    percent,
                    letter: percent.map(letter_grade),
                }
            })
            .collect();

        ClassReport {
            generated_at: Utc::now(),
            rows,
        }
    }

    /// Number of students with a grade.
    pub fn graded(&self) -> usize {
        self.rows.iter().filter(|r| r.percent.is_some()).count()
    }

    pub fn outcome_for(&self, row: &ReportRow) -> GradeOutcome {
        match row.percent {
            Some(percent) => GradeOutcome::Grade { percent },
            None => GradeOutcome::NoAssignments,
        }
    }
}
