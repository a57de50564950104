//! `workshopconfig.ini` maintenance.
//!
//! The manifest enumerates asset folders as `$OBJECT_BUILDING <name>`
//! lines anchored after a `$VISIBILITY` marker. Entries are either
//! rebuilt wholesale from the on-disk folder set, or inserted one by
//! one while a batch rename runs.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::directive::first_token;

/// File name of the workshop manifest next to the asset folders.
pub const MANIFEST_FILE: &str = "workshopconfig.ini";

const ENTRY_TOKEN: &str = "$OBJECT_BUILDING";
const VISIBILITY_TOKEN: &str = "$VISIBILITY";

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// In-memory copy of the manifest's lines.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    lines: Vec<String>,
}

impl Manifest {
    /// Load from disk; a missing file yields an empty manifest.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        if !path.exists() {
            return Ok(Manifest::default());
        }
        let lines = fs::read_to_string(path)?
            .lines()
            .map(str::to_string)
            .collect();
        Ok(Manifest { lines })
    }

    /// Write back to disk.
    pub fn save(&self, path: &Path) -> Result<(), ManifestError> {
        let mut out = self.lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        fs::write(path, out)?;
        Ok(())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Drop every `$OBJECT_BUILDING` line.
    pub fn strip_entries(&mut self) {
        self.lines.retain(|l| first_token(l) != ENTRY_TOKEN);
    }

    /// Index just after the first `$VISIBILITY` line, appending the
    /// marker first if the manifest has none.
    pub fn visibility_anchor(&mut self) -> usize {
        if let Some(i) = self
            .lines
            .iter()
            .position(|l| first_token(l).starts_with(VISIBILITY_TOKEN))
        {
            return i + 1;
        }
        self.lines.push(VISIBILITY_TOKEN.to_string());
        self.lines.len()
    }

    /// Insert an entry at `cursor`, returning the advanced cursor so
    /// the caller can thread it through a batch.
    pub fn insert_entry(&mut self, cursor: usize, folder_name: &str) -> usize {
        self.lines
            .insert(cursor, format!("{ENTRY_TOKEN} {folder_name}"));
        cursor + 1
    }

    /// Regenerate all entries from the immediate subfolders of `root`,
    /// in directory-listing order (unsorted; the platform's order is
    /// not guaranteed stable).
    pub fn rebuild_entries(&mut self, root: &Path) -> Result<(), ManifestError> {
        self.strip_entries();
        let mut cursor = self.visibility_anchor();

        for entry in fs::read_dir(root)? {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                cursor = self.insert_entry(cursor, name);
            }
        }

        Ok(())
    }
}
