//! CLI entry point for the gradebook tool.
//!
//! Loads students, assignments and submissions once, then answers a single
//! query: a student's grade, an assignment's statistics or histogram, or a
//! report over the whole class.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gradebook::analyzers::{
    grade::student_grade, histogram::assignment_histogram, report::ClassReport,
    stats::assignment_statistics,
};
use gradebook::{
    config::DataPaths,
    loader::load_gradebook,
    logging,
    output::{render_histogram_outcome, render_report, save_report_csv, to_json},
    writer::write_dataset,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(about = "Answer grade queries over flat-text student records", long_about = None)]
struct Cli {
    /// Directory holding students.txt, assignments.txt and submissions/
    #[arg(short, long, global = true, env = "GRADEBOOK_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Override the students file
    #[arg(long, global = true)]
    students: Option<PathBuf>,

    /// Override the assignments file
    #[arg(long, global = true)]
    assignments: Option<PathBuf>,

    /// Override the submissions directory
    #[arg(long, global = true)]
    submissions: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Overall weighted grade for a student
    Grade {
        /// Exact, case-sensitive student name
        #[arg(value_name = "STUDENT_NAME")]
        name: String,
    },
    /// Min, average and max score for an assignment
    Stats {
        /// Exact, case-sensitive assignment name
        #[arg(value_name = "ASSIGNMENT_NAME")]
        name: String,
    },
    /// Score histogram for an assignment
    Histogram {
        /// Exact, case-sensitive assignment name
        #[arg(value_name = "ASSIGNMENT_NAME")]
        name: String,
    },
    /// Grades for every student
    Report {
        /// Write the report to this CSV file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write the loaded records back out, without the skipped ones
    Export {
        /// Target data directory
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },
    /// List every problem found while loading
    Check,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let _log_guard = logging::init()?;

    let cli = Cli::parse();
    let paths = DataPaths::from_data_dir(&cli.data_dir).with_overrides(
        cli.students,
        cli.assignments,
        cli.submissions,
    );
    let book = load_gradebook(&paths)?;

    match cli.command {
        Commands::Grade { name } => {
            let outcome = student_grade(&book, &name);
            info!(student = %name, result = %outcome, "Grade query");
            if cli.json {
                println!("{}", to_json(&outcome)?);
            } else {
                println!("{outcome}");
            }
        }
        Commands::Stats { name } => {
            let outcome = assignment_statistics(&book, &name);
            info!(assignment = %name, "Statistics query");
            if cli.json {
                println!("{}", to_json(&outcome)?);
            } else {
                println!("{outcome}");
            }
        }
        Commands::Histogram { name } => {
            let outcome = assignment_histogram(&book, &name);
            info!(assignment = %name, "Histogram query");
            if cli.json {
                println!("{}", to_json(&outcome)?);
            } else {
                print!("{}", render_histogram_outcome(&outcome));
            }
        }
        Commands::Report { output } => {
            let report = ClassReport::from_gradebook(&book);
            info!(
                students = report.rows.len(),
                graded = report.graded(),
                "Class report built"
            );
            match output {
                Some(path) => {
                    save_report_csv(&path, &report)?;
                    info!(path = %path.display(), "Report written");
                }
                None if cli.json => println!("{}", to_json(&report)?),
                None => print!("{}", render_report(&report)),
            }
        }
        Commands::Export { dir } => {
            let written = write_dataset(&dir, &book)?;
            info!(students = %written.students.display(), "Export complete");
        }
        Commands::Check => {
            if cli.json {
                println!("{}", to_json(&book.diagnostics())?);
            } else {
                for d in book.diagnostics() {
                    println!("{d}");
                }
                println!(
                    "{} students, {} assignments, {} submissions, {} problems",
                    book.students().len(),
                    book.assignments().len(),
                    book.submissions().len(),
                    book.diagnostics().len()
                );
            }
        }
    }

    Ok(())
}
