//! Fixed four-bucket histogram of an assignment's scores.

use serde::Serialize;

use crate::gradebook::Gradebook;

/// Bucket edges. Buckets are `[lo, hi)` except the last, which includes 100.
pub const BUCKET_EDGES: [f64; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bucket {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub assignment_name: String,
    pub buckets: Vec<Bucket>,
    /// Scores below 0 or above 100 fall outside every bucket.
    pub out_of_range: usize,
}

impl Histogram {
    pub fn from_scores(assignment_name: &str, scores: &[f64]) -> Self {
        let mut buckets: Vec<Bucket> = BUCKET_EDGES
            .windows(2)
            .map(|w| Bucket {
                lo: w[0],
                hi: w[1],
                count: 0,
            })
            .collect();
        let last = buckets.len() - 1;
        let mut out_of_range = 0;

        for &score in scores {
            let slot = buckets
                .iter()
                .position(|b| score >= b.lo && score < b.hi)
                .or_else(|| (score == buckets[last].hi).then_some(last));
            match slot {
                Some(i) => buckets[i].count += 1,
                None => out_of_range += 1,
            }
        }

        Histogram {
            assignment_name: assignment_name.to_string(),
            buckets,
            out_of_range,
        }
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }
}

/// Result of a histogram query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HistogramOutcome {
    Histogram(Histogram),
    AssignmentNotFound,
    NoScores,
}

/// Buckets the scores of the first assignment named `assignment_name`.
pub fn assignment_histogram(book: &Gradebook, assignment_name: &str) -> HistogramOutcome {
    let Some(assignment) = book.assignment_by_name(assignment_name) else {
        return HistogramOutcome::AssignmentNotFound;
    };

    let scores = book.scores_for(&assignment.id);
    if scores.is_empty() {
        return HistogramOutcome::NoScores;
    }

    HistogramOutcome::Histogram(Histogram::from_scores(assignment_name, &scores))
}
