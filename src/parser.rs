//! Text parsers for the three gradebook sources.
//!
//! The parsers are pure: they never touch the file system and never log.
//! Anything they skip comes back as a [`Diagnostic`].

use crate::diagnostics::{Diagnostic, Issue, Parsed};
use crate::records::{Assignment, Student, Submission, is_student_id};

/// Parses the students source: one record per line, the first three
/// characters are the id and the trimmed remainder is the name.
///
/// Blank lines are ignored without a diagnostic.
pub fn parse_students(text: &str, origin: &str) -> Parsed<Student> {
    let mut parsed = Parsed::default();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let split = line.char_indices().nth(3).map_or(line.len(), |(i, _)| i);
        let (id, rest) = line.split_at(split);

        if is_student_id(id) {
            parsed.records.push(Student::new(id, rest.trim()));
        } else {
            parsed.diagnostics.push(
                Diagnostic::new(
                    origin,
                    Issue::InvalidStudentId {
                        line: line.to_string(),
                    },
                )
                .at_line(idx + 1),
            );
        }
    }

    parsed
}

/// Parses the assignments source: fixed blocks of three lines holding the
/// name, the id and the maximum points. A trailing partial block is ignored.
///
/// Duplicate ids are kept here in file order; the
/// [`Gradebook`](crate::gradebook::Gradebook) resolves them.
pub fn parse_assignments(text: &str, origin: &str) -> Parsed<Assignment> {
    let mut parsed = Parsed::default();
    let lines: Vec<&str> = text.lines().collect();

    for (n, block) in lines.chunks(3).enumerate() {
        let [name, id, points] = block else {
            break;
        };
        let (name, id, points) = (name.trim(), id.trim(), points.trim());

        match parse_max_points(points) {
            Some(max_points) => parsed.records.push(Assignment::new(id, name, max_points)),
            None => parsed.diagnostics.push(
                Diagnostic::new(
                    origin,
                    Issue::InvalidMaxPoints {
                        name: name.to_string(),
                        value: points.to_string(),
                    },
                )
                .at_line(n * 3 + 3),
            ),
        }
    }

    parsed
}

fn parse_max_points(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
}

/// Parses the content of one submission file:
/// `student_id|assignment_id|score_percentage`.
///
/// # Errors
///
/// Returns the [`Issue`] describing the first problem found, checked in
/// this order: field count, score, student id. A score must be a finite
/// number.
pub fn parse_submission(text: &str) -> Result<Submission, Issue> {
    let line = text.trim();
    let parts: Vec<&str> = line.split('|').collect();

    let [student_id, assignment_id, score] = parts.as_slice() else {
        return Err(Issue::MalformedSubmission {
            line: line.to_string(),
        });
    };
    let (student_id, assignment_id, score) =
        (student_id.trim(), assignment_id.trim(), score.trim());

    let score_percentage = score
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| Issue::InvalidPercentage {
            value: score.to_string(),
        })?;

    if !is_student_id(student_id) {
        return Err(Issue::InvalidSubmissionStudentId {
            student_id: student_id.to_string(),
        });
    }

    Ok(Submission::new(student_id, assignment_id, score_percentage))
}
