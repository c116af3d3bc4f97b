//! Output formatting and persistence for query results.
//!
//! Supports plain text, JSON serialization, and CSV export of the class report.

use std::fmt::Write as _;
use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;
use tracing::debug;

use crate::analyzers::histogram::{Histogram, HistogramOutcome};
use crate::analyzers::report::ClassReport;

/// Serializes any query result as pretty-printed JSON.
pub fn to_json(value: &impl Serialize) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Renders a histogram as one bar of `#` per bucket.
pub fn render_histogram(histogram: &Histogram) -> String {
    let mut out = format!("Scores for {}\n", histogram.assignment_name);
    for b in &histogram.buckets {
        let _ = writeln!(
            out,
            "{:>3}-{:<3} | {} {}",
            b.lo,
            b.hi,
            "#".repeat(b.count),
            b.count
        );
    }
    if histogram.out_of_range > 0 {
        let _ = writeln!(out, "out of range: {}", histogram.out_of_range);
    }
    out
}

pub fn render_histogram_outcome(outcome: &HistogramOutcome) -> String {
    match outcome {
        HistogramOutcome::Histogram(h) => render_histogram(h),
        HistogramOutcome::AssignmentNotFound => "Assignment not found\n".into(),
        HistogramOutcome::NoScores => "No scores found for this assignment\n".into(),
    }
}

/// Renders the class report as an aligned text table.
pub fn render_report(report: &ClassReport) -> String {
    let width = report
        .rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut out = format!("{:<3}  {:<width$}  {:>5}  {}\n", "ID", "Name", "Grade", "Letter");
    for row in &report.rows {
        let grade = report.outcome_for(row).to_string();
        let _ = writeln!(
            out,
            "{:<3}  {:<width$}  {:>5}  {}",
            row.student_id,
            row.name,
            if row.percent.is_some() { grade.as_str() } else { "-" },
            row.letter.as_deref().unwrap_or("-")
        );
    }
    out
}

/// Writes the class report rows as CSV with a header line.
pub fn write_report_csv<W: io::Write>(writer: W, report: &ClassReport) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(writer);

    for row in &report.rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Creates (or truncates) `path` and writes the class report to it as CSV.
pub fn save_report_csv(path: &Path, report: &ClassReport) -> Result<()> {
    debug!(path = %path.display(), rows = report.rows.len(), "Writing CSV report");
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_report_csv(file, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::grade::GradeOutcome;
    use crate::analyzers::report::ReportRow;
    use chrono::Utc;
    use std::fs;
    use tempfile::TempDir;

    fn report() -> ClassReport {
        ClassReport {
            generated_at: Utc::now(),
            rows: vec![
                ReportRow {
                    student_id: "001".into(),
                    name: "Alice".into(),
                    percent: Some(92),
                    letter: Some("A".into()),
                },
                ReportRow {
                    student_id: "002".into(),
                    name: "Bob".into(),
                    percent: None,
                    letter: None,
                },
            ],
        }
    }

    #[test]
    fn test_render_histogram() {
        let h = Histogram::from_scores("Lab 1", &[10.0, 20.0, 80.0]);
        assert_eq!(
            render_histogram(&h),
            "Scores for Lab 1\n  0-25  | ## 2\n 25-50  |  0\n 50-75  |  0\n 75-100 | # 1\n"
        );
    }

    #[test]
    fn test_render_histogram_outcome_sentinels() {
        assert_eq!(
            render_histogram_outcome(&HistogramOutcome::NoScores),
            "No scores found for this assignment\n"
        );
        assert_eq!(
            render_histogram_outcome(&HistogramOutcome::AssignmentNotFound),
            "Assignment not found\n"
        );
    }

    #[test]
    fn test_render_report() {
        let text = render_report(&report());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "001  Alice    92%  A");
        assert_eq!(lines[2], "002  Bob        -  -");
    }

    #[test]
    fn test_write_report_csv() {
        let mut buf = Vec::new();
        write_report_csv(&mut buf, &report()).unwrap();

        let content = String::from_utf8(buf).unwrap();
        assert_eq!(
            content,
            "student_id,name,percent,letter\n001,Alice,92,A\n002,Bob,,\n"
        );
    }

    #[test]
    fn test_save_report_csv_truncates() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.csv");

        save_report_csv(&path, &report()).unwrap();
        save_report_csv(&path, &report()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let header_count = content.lines().filter(|l| l.contains("student_id")).count();
        assert_eq!(header_count, 1);
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&GradeOutcome::NoAssignments).unwrap();
        assert!(json.contains("\"status\": \"no_assignments\""));
    }
}
