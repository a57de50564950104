//! # iniconfig
//!
//! Batch transformation and backup engine for Workers & Resources:
//! Soviet Republic building assets.
//!
//! This library provides functionality to:
//! - Strip cost/lifespan/utility directives from `building.ini` files
//!   and splice in the fixed "free building" directive block
//! - Resolve a building's `$TYPE`/`$SUBTYPE` tokens to a display label
//! - Rename asset folders and regenerate the `workshopconfig.ini`
//!   manifest
//! - Create dated sidecar backups and restore from them
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let root = Path::new("my-workshop-item");
//! let today = chrono::Local::now().date_naive();
//!
//! // Make every building under the tree free to build and run
//! let report = iniconfig::edit_fields_only(root, today);
//! for failure in &report.failed {
//!     eprintln!("{}: {}", failure.folder, failure.error);
//! }
//!
//! // Later: put everything back from the dated backups
//! let restore = iniconfig::restore_tree(root);
//! println!("restored {} file(s)", restore.restored.len());
//! # Ok(())
//! # }
//! ```

pub mod backup;
pub mod directive;
pub mod editor;
pub mod manifest;
pub mod reference;
pub mod report;
pub mod walk;

/// File name of the per-asset configuration file the tool edits.
pub const BUILDING_INI: &str = "building.ini";

// Re-export commonly used items
#[doc(inline)]
pub use backup::{create_backup, restore_tree, BackupError};
#[doc(inline)]
pub use directive::{compose, filter_directives, FilteredIni, BLOCKLIST, FREE_BUILDING_BLOCK};
#[doc(inline)]
pub use editor::{
    edit_auto_rename, edit_fields_only, edit_manual_rename, sanitize_folder_name, AssetPreview,
    EditError,
};
#[doc(inline)]
pub use manifest::{Manifest, ManifestError, MANIFEST_FILE};
#[doc(inline)]
pub use reference::{find_type_tokens, resolve_label, TYPE_LABELS, TYPE_SUBTYPE_LABELS};
#[doc(inline)]
pub use report::{BatchReport, FolderFailure, RestoreReport, RestoredBackup};
