//! Where the three gradebook sources live.

use std::path::{Path, PathBuf};

pub const STUDENTS_FILE: &str = "students.txt";
pub const ASSIGNMENTS_FILE: &str = "assignments.txt";
pub const SUBMISSIONS_DIR: &str = "submissions";

/// Locations of the students file, the assignments file and the
/// submissions directory.
///
/// The default layout under a data directory is:
/// ```text
/// data/
///   students.txt
///   assignments.txt
///   submissions/
///     <one file per submission>.txt
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub students: PathBuf,
    pub assignments: PathBuf,
    pub submissions: PathBuf,
}

impl DataPaths {
    /// Standard layout rooted at `dir`.
    pub fn from_data_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            students: dir.join(STUDENTS_FILE),
            assignments: dir.join(ASSIGNMENTS_FILE),
            submissions: dir.join(SUBMISSIONS_DIR),
        }
    }

    /// Replaces any location given explicitly.
    pub fn with_overrides(
        mut self,
        students: Option<PathBuf>,
        assignments: Option<PathBuf>,
        submissions: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = students {
            self.students = path;
        }
        if let Some(path) = assignments {
            self.assignments = path;
        }
        if let Some(path) = submissions {
            self.submissions = path;
        }
        self
    }
}
