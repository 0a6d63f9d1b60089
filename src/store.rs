use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;

use crate::entry::DayEntry;

/// Errors that can occur while reading or writing journal data.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize entry: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write entry: {0}")]
    Write(#[from] std::io::Error),

    #[error("failed to read entry file: {0}")]
    Read(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// File-backed journal store: one JSON file per calendar day.
///
/// Callers treat saves as fire-and-forget; the editing surface logs failures
/// and moves on rather than surfacing them.
#[derive(Debug, Clone)]
pub struct JournalStore {
    root: PathBuf,
}

impl JournalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, date: NaiveDate) -> PathBuf {
        // NaiveDate displays as YYYY-MM-DD, which sorts lexicographically.
        self.root.join(format!("{date}.json"))
    }

    /// Persist a day entry, creating the store directory on first use.
    pub fn save(&self, entry: &DayEntry) -> StoreResult<()> {
        fs::create_dir_all(&self.root)?;
        let json = serde_json::to_string_pretty(entry)?;
        fs::write(self.entry_path(entry.date), json)?;
        Ok(())
    }

    /// Load the entry for a date, if one was ever saved.
    pub fn load(&self, date: NaiveDate) -> StoreResult<Option<DayEntry>> {
        let path = self.entry_path(date);
        if !path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&path)
            .map_err(|e| StoreError::Read(format!("{}: {e}", path.display())))?;
        let entry = serde_json::from_str(&json)?;
        Ok(Some(entry))
    }

    /// Remove a day's record. Only invoked on explicit user action.
    pub fn delete(&self, date: NaiveDate) -> StoreResult<()> {
        let path = self.entry_path(date);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    pub fn exists(&self, date: NaiveDate) -> bool {
        self.entry_path(date).exists()
    }

    /// All dates with a recorded entry, in ascending order.
    pub fn dates(&self) -> StoreResult<Vec<NaiveDate>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut dates = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if let Some(stem) = name.strip_suffix(".json") {
                if let Ok(date) = stem.parse::<NaiveDate>() {
                    dates.push(date);
                }
            }
        }
        dates.sort_unstable();
        Ok(dates)
    }
}
