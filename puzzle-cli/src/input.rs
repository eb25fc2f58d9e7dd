//! Input file lookup for puzzle inputs

use crate::error::InputError;
use std::fs;
use std::path::PathBuf;

/// File-based store for puzzle inputs
///
/// Directory structure: `{dir}/day{day:02}.txt`, with an optional
/// per-day override pointing anywhere on disk.
pub struct InputStore {
    dir: PathBuf,
    override_input: Option<(u8, PathBuf)>,
}

impl InputStore {
    /// Create a new input store over a directory
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            override_input: None,
        }
    }

    /// Use a specific file for one day instead of the directory layout
    pub fn with_override(dir: PathBuf, day: u8, path: PathBuf) -> Self {
        Self {
            dir,
            override_input: Some((day, path)),
        }
    }

    /// Path the input for a day is expected at
    pub fn path(&self, day: u8) -> PathBuf {
        if let Some((override_day, path)) = &self.override_input
            && *override_day == day
        {
            return path.clone();
        }
        self.dir.join(format!("day{:02}.txt", day))
    }

    /// Check if the input file exists
    pub fn contains(&self, day: u8) -> bool {
        self.path(day).exists()
    }

    /// Read the input for a day
    pub fn read(&self, day: u8) -> Result<String, InputError> {
        let path = self.path(day);
        if !path.exists() {
            return Err(InputError::Missing { day, path });
        }
        fs::read_to_string(&path).map_err(|source| InputError::Io { path, source })
    }
}
