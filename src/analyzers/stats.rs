//! Score statistics for a single assignment.

use std::fmt;

use serde::Serialize;

use crate::analyzers::utility::{mean, round_half_even};
use crate::gradebook::Gradebook;

/// Min, mean and max of an assignment's raw percentage scores, each rounded
/// half to even.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreStats {
    pub min: i64,
    pub avg: i64,
    pub max: i64,
    pub count: usize,
}

impl ScoreStats {
    /// Returns `None` for an empty slice.
    pub fn from_scores(scores: &[f64]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }

        let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(ScoreStats {
            min: round_half_even(min),
            avg: round_half_even(mean(scores)),
            max: round_half_even(max),
            count: scores.len(),
        })
    }
}

impl fmt::Display for ScoreStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Min: {}%\nAvg: {}%\nMax: {}%",
            self.min, self.avg, self.max
        )
    }
}

/// Result of a statistics query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StatsOutcome {
    Stats(ScoreStats),
    AssignmentNotFound,
    NoScores,
}

impl fmt::Display for StatsOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsOutcome::Stats(stats) => write!(f, "{stats}"),
            StatsOutcome::AssignmentNotFound => f.write_str("Assignment not found"),
            StatsOutcome::NoScores => f.write_str("No scores found for this assignment"),
        }
    }
}

/// Statistics for the first assignment, in source order, named `assignment_name`.
///
/// Every submission to the assignment is one sample, so a student who
/// submitted twice is counted twice.
pub fn assignment_statistics(book: &Gradebook, assignment_name: &str) -> StatsOutcome {
    let Some(assignment) = book.assignment_by_name(assignment_name) else {
        return StatsOutcome::AssignmentNotFound;
    };

    match ScoreStats::from_scores(&book.scores_for(&assignment.id)) {
        Some(stats) => StatsOutcome::Stats(stats),
        None => StatsOutcome::NoScores,
    }
}
