//! Directory tree traversal for asset discovery.

use std::path::{Path, PathBuf};

use crate::BUILDING_INI;

/// Every directory under `root` (root included), in walk order.
pub fn all_dirs(root: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .map(|e| e.path().to_path_buf())
        .collect()
}

/// Every directory under `root` that contains a `building.ini`.
///
/// Collected up front so folder renames during processing cannot
/// disturb the traversal.
pub fn building_dirs(root: &Path) -> Vec<PathBuf> {
    all_dirs(root)
        .into_iter()
        .filter(|dir| dir.join(BUILDING_INI).is_file())
        .collect()
}
