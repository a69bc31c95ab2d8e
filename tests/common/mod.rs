#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{TempDir, tempdir};

/// Four-stay log shared across the integration tests.
///
/// Derived values: Paris 9 + 15 days, Luzern 14 days, Valencia 45 days;
/// grand total 83 over 4 records, 3 distinct cities, 2 distinct years.
pub const SAMPLE_CSV: &str = "\
city,country,start_date,end_date
Paris,France,01/01/2022,10/01/2022
Luzern,Switzerland,15/02/2022,01/03/2022
Paris,France,05/06/2023,20/06/2023
Valencia,Spain,01/07/2023,15/08/2023
";

/// Scratch directory helper that cleans up files automatically on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    /// Creates a fresh scratch directory for the current test case.
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    /// Returns the root path for all files owned by this workspace.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace and returns the
    /// path. Intermediate directories in `name` are created as needed.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes())
            .expect("write temp file contents");
        path
    }

    /// Writes the shared sample log under `name`.
    pub fn write_sample(&self, name: &str) -> PathBuf {
        self.write(name, SAMPLE_CSV)
    }
}
