//! Batch result aggregation.
//!
//! One bad folder never aborts a batch; every per-folder outcome is
//! collected into a report and shown to the user at the end.

use chrono::NaiveDate;
use std::path::Path;

/// A folder that could not be processed, with the error text verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderFailure {
    /// Path relative to the batch root.
    pub folder: String,
    pub error: String,
}

/// Outcome of one edit batch (any of the three modes).
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Relative paths of successfully modified folders. For renaming
    /// modes this is the post-rename path.
    pub succeeded: Vec<String>,
    pub failed: Vec<FolderFailure>,
}

/// One backup file copied back over its live `building.ini`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoredBackup {
    /// Date parsed from the backup file name.
    pub date: NaiveDate,
    /// Folder path relative to the batch root.
    pub folder: String,
}

/// Outcome of a restore batch.
#[derive(Debug, Clone, Default)]
pub struct RestoreReport {
    pub restored: Vec<RestoredBackup>,
    /// Folders with no backup, or with a backup that failed to copy.
    pub failed: Vec<FolderFailure>,
}

/// Display form of `path` relative to `root`; the root itself is `"."`.
pub fn relative_to(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.display().to_string(),
        _ => ".".to_string(),
    }
}
