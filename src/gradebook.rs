//! The in-memory gradebook every query runs against.
//!
//! Built once after loading and read-only afterwards. Name lookups go
//! through tables built here, so a duplicate name is reported once at
//! construction instead of being silently shadowed at query time.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::diagnostics::{Diagnostic, Issue};
use crate::records::{Assignment, Student, Submission};

pub const STUDENTS: &str = "students";
pub const ASSIGNMENTS: &str = "assignments";

#[derive(Debug, Clone, Default)]
pub struct Gradebook {
    students: Vec<Student>,
    /// Unique by id, in order of first appearance.
    assignments: Vec<Assignment>,
    submissions: Vec<Submission>,

    student_ids: HashMap<String, usize>,
    student_names: HashMap<String, usize>,
    assignment_ids: HashMap<String, usize>,
    assignment_names: HashMap<String, usize>,

    diagnostics: Vec<Diagnostic>,
}

impl Gradebook {
    /// Builds the lookup tables over the three collections.
    ///
    /// An assignment whose id was already seen replaces the earlier record
    /// but keeps its position. For every other duplicate the first record
    /// wins. Each case is recorded as a diagnostic.
    pub fn new(
        students: Vec<Student>,
        assignments: Vec<Assignment>,
        submissions: Vec<Submission>,
    ) -> Self {
        let mut book = Gradebook {
            submissions,
            ..Default::default()
        };

        for assignment in assignments {
            match book.assignment_ids.entry(assignment.id.clone()) {
                Entry::Occupied(slot) => {
                    book.diagnostics.push(Diagnostic::new(
                        ASSIGNMENTS,
                        Issue::DuplicateAssignmentId {
                            id: assignment.id.clone(),
                        },
                    ));
                    book.assignments[*slot.get()] = assignment;
                }
                Entry::Vacant(slot) => {
                    slot.insert(book.assignments.len());
                    book.assignments.push(assignment);
                }
            }
        }

        for (idx, assignment) in book.assignments.iter().enumerate() {
            match book.assignment_names.entry(assignment.name.clone()) {
                Entry::Occupied(slot) => book.diagnostics.push(Diagnostic::new(
                    ASSIGNMENTS,
                    Issue::DuplicateAssignmentName {
                        name: assignment.name.clone(),
                        kept_id: book.assignments[*slot.get()].id.clone(),
                        shadowed_id: assignment.id.clone(),
                    },
                )),
                Entry::Vacant(slot) => {
                    slot.insert(idx);
                }
            }
        }

        for (idx, student) in students.iter().enumerate() {
            match book.student_ids.entry(student.id.clone()) {
                Entry::Occupied(_) => book.diagnostics.push(Diagnostic::new(
                    STUDENTS,
                    Issue::DuplicateStudentId {
                        id: student.id.clone(),
                    },
                )),
                Entry::Vacant(slot) => {
                    slot.insert(idx);
                }
            }

            match book.student_names.entry(student.name.clone()) {
                Entry::Occupied(slot) => book.diagnostics.push(Diagnostic::new(
                    STUDENTS,
                    Issue::DuplicateStudentName {
                        name: student.name.clone(),
                        kept_id: students[*slot.get()].id.clone(),
                        shadowed_id: student.id.clone(),
                    },
                )),
                Entry::Vacant(slot) => {
                    slot.insert(idx);
                }
            }
        }

        book.students = students;
        book
    }

    /// Appends diagnostics gathered while parsing, ahead of the ones found
    /// while indexing.
    pub fn with_load_diagnostics(mut self, mut diagnostics: Vec<Diagnostic>) -> Self {
        diagnostics.append(&mut self.diagnostics);
        self.diagnostics = diagnostics;
        self
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// First student with this id.
    pub fn student_by_id(&self, id: &str) -> Option<&Student> {
        self.student_ids.get(id).map(|&i| &self.students[i])
    }

    /// First student whose name matches exactly (case-sensitive).
    pub fn student_by_name(&self, name: &str) -> Option<&Student> {
        self.student_names.get(name).map(|&i| &self.students[i])
    }

    pub fn assignment_by_id(&self, id: &str) -> Option<&Assignment> {
        self.assignment_ids.get(id).map(|&i| &self.assignments[i])
    }

    /// First assignment, in source order, whose name matches exactly.
    pub fn assignment_by_name(&self, name: &str) -> Option<&Assignment> {
        self.assignment_names.get(name).map(|&i| &self.assignments[i])
    }

    /// Score percentages of every submission to `assignment_id`, repeats included.
    pub fn scores_for(&self, assignment_id: &str) -> Vec<f64> {
        self.submissions
            .iter()
            .filter(|s| s.assignment_id == assignment_id)
            .map(|s| s.score_percentage)
            .collect()
    }
}
