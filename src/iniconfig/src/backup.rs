//! Dated sidecar backups for `building.ini` files.
//!
//! Before any mutation the live file is copied to
//! `building.<YYYYMMDD>.bak` in the same folder. One backup per day:
//! a second edit on the same day overwrites the day's backup. Restore
//! copies every dated sidecar found in a folder back over the live
//! file, in directory-listing order.

use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::report::{relative_to, FolderFailure, RestoreReport, RestoredBackup};
use crate::{walk, BUILDING_INI};

/// Failure text reported for folders without a dated sidecar.
pub const NO_BACKUP_FOUND: &str = "No backup file found";

#[derive(Error, Debug)]
pub enum BackupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Backup file name for a given date, e.g. `building.20240115.bak`.
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("building.{}.bak", date.format("%Y%m%d"))
}

/// Parse a date out of a `building.<8 digits>.bak` file name.
pub fn parse_backup_name(name: &str) -> Option<NaiveDate> {
    let digits = name.strip_prefix("building.")?.strip_suffix(".bak")?;
    if digits.len() != 8 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(digits, "%Y%m%d").ok()
}

/// Copy the folder's `building.ini` to its dated sidecar, overwriting
/// any backup already made today.
pub fn create_backup(dir: &Path, date: NaiveDate) -> Result<PathBuf, BackupError> {
    let backup_path = dir.join(backup_file_name(date));
    fs::copy(dir.join(BUILDING_INI), &backup_path)?;
    Ok(backup_path)
}

/// All dated sidecars in a folder, in directory-listing order.
///
/// The order is whatever the platform yields; with several backups in
/// one folder the last one restored wins, and that is not guaranteed
/// to be the most recent.
pub fn find_backups(dir: &Path) -> Result<Vec<(NaiveDate, PathBuf)>, BackupError> {
    let mut backups = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        if let Some(date) = name.to_str().and_then(parse_backup_name) {
            backups.push((date, entry.path()));
        }
    }

    Ok(backups)
}

/// Overwrite the folder's live `building.ini` with one backup file.
pub fn restore_one(dir: &Path, backup_path: &Path) -> Result<(), BackupError> {
    let live = dir.join(BUILDING_INI);
    if live.exists() {
        fs::remove_file(&live)?;
    }
    fs::copy(backup_path, &live)?;
    Ok(())
}

/// Restore every dated backup under `root`.
///
/// Folders without any matching sidecar are soft failures recorded
/// with [`NO_BACKUP_FOUND`]; the batch always runs to completion.
pub fn restore_tree(root: &Path) -> RestoreReport {
    let mut report = RestoreReport::default();

    for dir in walk::all_dirs(root) {
        let folder = relative_to(root, &dir);

        let backups = match find_backups(&dir) {
            Ok(backups) => backups,
            Err(e) => {
                report.failed.push(FolderFailure {
                    folder,
                    error: e.to_string(),
                });
                continue;
            }
        };

        if backups.is_empty() {
            report.failed.push(FolderFailure {
                folder,
                error: NO_BACKUP_FOUND.to_string(),
            });
            continue;
        }

        for (date, backup_path) in backups {
            match restore_one(&dir, &backup_path) {
                Ok(()) => report.restored.push(RestoredBackup {
                    date,
                    folder: folder.clone(),
                }),
                Err(e) => report.failed.push(FolderFailure {
                    folder: folder.clone(),
                    error: e.to_string(),
                }),
            }
        }
    }

    report
}
