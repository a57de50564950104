//! Per-asset editing pipeline and the three batch modes.
//!
//! Every mode runs the same per-folder pipeline: dated backup, filter
//! out the blocklisted directives, splice the fixed free-building
//! block back in, write. The renaming modes additionally generate a
//! display name, rename the asset folder, and maintain the workshop
//! manifest.

use chrono::NaiveDate;
use rand::Rng;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::backup::{create_backup, BackupError};
use crate::directive::{compose, filter_directives, first_token};
use crate::manifest::{Manifest, ManifestError, MANIFEST_FILE};
use crate::reference::{find_type_tokens, resolve_label};
use crate::report::{relative_to, BatchReport, FolderFailure};
use crate::{walk, BUILDING_INI};

#[derive(Error, Debug)]
pub enum EditError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Backup(#[from] BackupError),
}

/// What a manual-rename caller gets to see before naming an asset.
#[derive(Debug, Clone)]
pub struct AssetPreview<'a> {
    /// The asset folder being processed.
    pub folder: &'a Path,
    /// Display name currently in the file, quotes stripped.
    pub current_name: Option<String>,
    /// Label resolved from the type/subtype tokens.
    pub label: &'static str,
}

/// Strip every non-alphanumeric character from a generated folder name.
pub fn sanitize_folder_name(name: &str) -> String {
    name.chars().filter(|c| c.is_alphanumeric()).collect()
}

fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    Ok(fs::read_to_string(path)?
        .lines()
        .map(str::to_string)
        .collect())
}

fn write_lines(path: &Path, lines: &[String]) -> io::Result<()> {
    let mut out = lines.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    fs::write(path, out)
}

/// Display name from the first `$NAME_STR`/`$NAME` line, if any.
fn current_display_name(lines: &[String]) -> Option<String> {
    lines
        .iter()
        .find(|l| first_token(l).starts_with("$NAME"))
        .and_then(|l| l.split_once(' '))
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
}

/// Rename an asset folder to `<sanitized name><5-digit suffix>`.
///
/// Returns the folder's new path. A folder with no parent (filesystem
/// root) is left in place.
fn rename_asset_folder(dir: &Path, asset_name: &str) -> io::Result<PathBuf> {
    let Some(parent) = dir.parent() else {
        return Ok(dir.to_path_buf());
    };

    let suffix: u32 = rand::thread_rng().gen_range(10000..=99999);
    let folder_name = sanitize_folder_name(&format!("{asset_name}{suffix}"));
    let new_path = parent.join(folder_name);

    fs::rename(dir, &new_path)?;
    Ok(new_path)
}

/// Mode A per-folder step: keep the original name directive.
fn edit_one_fields(dir: &Path, today: NaiveDate) -> Result<(), EditError> {
    create_backup(dir, today)?;

    let path = dir.join(BUILDING_INI);
    let filtered = filter_directives(&read_lines(&path)?);
    let out = compose(filtered.name_line.as_deref(), &filtered.lines);
    write_lines(&path, &out)?;

    Ok(())
}

/// Mode B per-folder step: generated name, then folder rename.
fn edit_one_auto(
    dir: &Path,
    today: NaiveDate,
    prefix: Option<&str>,
) -> Result<PathBuf, EditError> {
    create_backup(dir, today)?;

    let path = dir.join(BUILDING_INI);
    let filtered = filter_directives(&read_lines(&path)?);

    let (type_token, subtype_token) = find_type_tokens(&filtered.lines);
    let label = resolve_label(type_token.as_deref(), subtype_token.as_deref());
    let asset_name = match prefix {
        Some(p) => format!("{p} - {label}"),
        None => label.to_string(),
    };

    let name_line = format!("$NAME_STR \"{asset_name}\"");
    let out = compose(Some(&name_line), &filtered.lines);
    write_lines(&path, &out)?;

    Ok(rename_asset_folder(dir, &asset_name)?)
}

/// Mode C per-folder step: name supplied by the caller's callback.
fn edit_one_manual<F>(dir: &Path, today: NaiveDate, namer: &mut F) -> Result<PathBuf, EditError>
where
    F: FnMut(&AssetPreview<'_>) -> io::Result<String>,
{
    create_backup(dir, today)?;

    let path = dir.join(BUILDING_INI);
    let lines = read_lines(&path)?;

    let (type_token, subtype_token) = find_type_tokens(&lines);
    let preview = AssetPreview {
        folder: dir,
        current_name: current_display_name(&lines),
        label: resolve_label(type_token.as_deref(), subtype_token.as_deref()),
    };
    let asset_name = namer(&preview)?;

    let filtered = filter_directives(&lines);
    let name_line = format!("$NAME_STR \"{asset_name}\"");
    let out = compose(Some(&name_line), &filtered.lines);
    write_lines(&path, &out)?;

    Ok(rename_asset_folder(dir, &asset_name)?)
}

/// Mode A: modify every `building.ini` under `root`, no renames.
pub fn edit_fields_only(root: &Path, today: NaiveDate) -> BatchReport {
    let mut report = BatchReport::default();

    for dir in walk::building_dirs(root) {
        match edit_one_fields(&dir, today) {
            Ok(()) => report.succeeded.push(relative_to(root, &dir)),
            Err(e) => report.failed.push(FolderFailure {
                folder: relative_to(root, &dir),
                error: e.to_string(),
            }),
        }
    }

    report
}

/// Mode B: rename each asset after its resolved building type, then
/// rebuild the manifest from the post-rename folder set.
pub fn edit_auto_rename(
    root: &Path,
    today: NaiveDate,
    prefix: Option<&str>,
) -> Result<BatchReport, ManifestError> {
    let mut report = BatchReport::default();

    for dir in walk::building_dirs(root) {
        match edit_one_auto(&dir, today, prefix) {
            Ok(new_path) => report.succeeded.push(relative_to(root, &new_path)),
            Err(e) => report.failed.push(FolderFailure {
                folder: relative_to(root, &dir),
                error: e.to_string(),
            }),
        }
    }

    let manifest_path = root.join(MANIFEST_FILE);
    let mut manifest = Manifest::load(&manifest_path)?;
    manifest.rebuild_entries(root)?;
    manifest.save(&manifest_path)?;

    Ok(report)
}

/// Mode C: ask the caller for each asset's name, updating the manifest
/// incrementally after the `$VISIBILITY` anchor.
///
/// The insertion cursor is threaded through the loop explicitly: each
/// successfully renamed folder advances it by one, so entries land in
/// processing order.
pub fn edit_manual_rename<F>(
    root: &Path,
    today: NaiveDate,
    mut namer: F,
) -> Result<BatchReport, ManifestError>
where
    F: FnMut(&AssetPreview<'_>) -> io::Result<String>,
{
    let mut report = BatchReport::default();

    let manifest_path = root.join(MANIFEST_FILE);
    let mut manifest = Manifest::load(&manifest_path)?;
    manifest.strip_entries();
    let mut cursor = manifest.visibility_anchor();

    for dir in walk::building_dirs(root) {
        match edit_one_manual(&dir, today, &mut namer) {
            Ok(new_path) => {
                if let Some(name) = new_path.file_name().and_then(|n| n.to_str()) {
                    cursor = manifest.insert_entry(cursor, name);
                }
                report.succeeded.push(relative_to(root, &new_path));
            }
            Err(e) => report.failed.push(FolderFailure {
                folder: relative_to(root, &dir),
                error: e.to_string(),
            }),
        }
    }

    manifest.save(&manifest_path)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::FREE_BUILDING_BLOCK;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_asset(root: &Path, folder: &str, content: &str) -> PathBuf {
        let dir = root.join(folder);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(BUILDING_INI), content).unwrap();
        dir
    }

    #[test]
    fn test_sanitize_strips_non_alphanumerics() {
        assert_eq!(
            sanitize_folder_name("Medical University12345"),
            "MedicalUniversity12345"
        );
        assert_eq!(
            sanitize_folder_name("Seaport (experimental)77777"),
            "Seaportexperimental77777"
        );
        assert_eq!(
            sanitize_folder_name("Locomotive/car production line10000"),
            "Locomotivecarproductionline10000"
        );
    }

    #[test]
    fn test_fields_only_end_to_end() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        make_asset(root, "Shop", "$TYPE_SHOP\n$NAME_STR \"Foo\"\n$COST_WORK 10\n");

        let report = edit_fields_only(root, date(2024, 1, 15));

        assert_eq!(report.succeeded, vec!["Shop".to_string()]);
        assert!(report.failed.is_empty());

        let lines = read_lines(&root.join("Shop").join(BUILDING_INI)).unwrap();
        assert_eq!(lines[0], "$NAME_STR \"Foo\"");
        for (i, directive) in FREE_BUILDING_BLOCK.iter().enumerate() {
            assert_eq!(&lines[i + 1], directive);
        }
        assert!(lines.contains(&"$TYPE_SHOP".to_string()));
        assert!(!lines.iter().any(|l| l.starts_with("$COST_WORK")));

        // The dated backup holds the untouched original
        let backup = root.join("Shop").join("building.20240115.bak");
        assert_eq!(
            fs::read_to_string(backup).unwrap(),
            "$TYPE_SHOP\n$NAME_STR \"Foo\"\n$COST_WORK 10\n"
        );
    }

    #[test]
    fn test_fields_only_is_idempotent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        let dir = make_asset(root, "Shop", "$TYPE_SHOP\n$NAME_STR \"Foo\"\n$COST_WORK 10\n");

        edit_fields_only(root, date(2024, 1, 15));
        let once = fs::read_to_string(dir.join(BUILDING_INI)).unwrap();

        edit_fields_only(root, date(2024, 1, 15));
        let twice = fs::read_to_string(dir.join(BUILDING_INI)).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_fields_only_without_name_directive() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        let dir = make_asset(root, "Plain", "$TYPE_FARM\n$COST_RESOURCE wood 10\n");

        edit_fields_only(root, date(2024, 1, 15));

        let lines = read_lines(&dir.join(BUILDING_INI)).unwrap();
        // Block goes at the top; no name directive is invented
        assert_eq!(lines[0], "$NO_LIFESPAN");
        assert_eq!(lines.len(), FREE_BUILDING_BLOCK.len() + 1);
        assert_eq!(lines[FREE_BUILDING_BLOCK.len()], "$TYPE_FARM");
    }

    #[test]
    fn test_folders_without_building_ini_are_skipped() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("textures")).unwrap();
        make_asset(root, "Shop", "$TYPE_SHOP\n");

        let report = edit_fields_only(root, date(2024, 1, 15));

        assert_eq!(report.succeeded, vec!["Shop".to_string()]);
        assert!(report.failed.is_empty());
    }

    #[test]
    fn test_auto_rename_renames_folder_and_rebuilds_manifest() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        make_asset(root, "old_folder", "$TYPE_ROADDEPO\n$SUBTYPE_TRAM\n$COST_WORK 5\n");

        let report = edit_auto_rename(root, date(2024, 1, 15), None).unwrap();

        assert_eq!(report.succeeded.len(), 1);
        assert!(report.failed.is_empty());

        let new_folder = &report.succeeded[0];
        assert!(new_folder.starts_with("TramDepot"), "got {new_folder}");
        assert_eq!(new_folder.len(), "TramDepot".len() + 5);
        assert!(new_folder["TramDepot".len()..].bytes().all(|b| b.is_ascii_digit()));
        assert!(!root.join("old_folder").exists());

        let lines = read_lines(&root.join(new_folder).join(BUILDING_INI)).unwrap();
        assert_eq!(lines[0], "$NAME_STR \"Tram depot\"");

        let manifest = Manifest::load(&root.join(MANIFEST_FILE)).unwrap();
        let expected = format!("$OBJECT_BUILDING {new_folder}");
        assert!(manifest.lines().contains(&expected));
    }

    #[test]
    fn test_auto_rename_applies_prefix() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        make_asset(root, "old", "$TYPE_SHOP\n");

        let report = edit_auto_rename(root, date(2024, 1, 15), Some("MyMod")).unwrap();

        let new_folder = &report.succeeded[0];
        assert!(new_folder.starts_with("MyModShop"), "got {new_folder}");

        let lines = read_lines(&root.join(new_folder).join(BUILDING_INI)).unwrap();
        assert_eq!(lines[0], "$NAME_STR \"MyMod - Shop\"");
    }

    #[test]
    fn test_auto_rename_unknown_type() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        make_asset(root, "mystery", "$WORKERS_NEEDED 10\n");

        let report = edit_auto_rename(root, date(2024, 1, 15), None).unwrap();

        assert!(report.succeeded[0].starts_with("Unknown"));
    }

    #[test]
    fn test_manual_rename_uses_callback_and_inserts_entries_in_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        make_asset(root, "one", "$TYPE_SHOP\n$NAME_STR \"Old Shop\"\n");
        fs::write(
            root.join(MANIFEST_FILE),
            "$ITEM_ID 9\n$VISIBILITY 2\n$OBJECT_BUILDING stale\n",
        )
        .unwrap();

        let mut seen = Vec::new();
        let report = edit_manual_rename(root, date(2024, 1, 15), |preview| {
            seen.push((preview.current_name.clone(), preview.label));
            Ok("Corner Store".to_string())
        })
        .unwrap();

        assert_eq!(seen, vec![(Some("Old Shop".to_string()), "Shop")]);
        assert_eq!(report.succeeded.len(), 1);
        assert!(report.succeeded[0].starts_with("CornerStore"));

        let manifest = Manifest::load(&root.join(MANIFEST_FILE)).unwrap();
        let lines = manifest.lines();
        assert_eq!(lines[0], "$ITEM_ID 9");
        assert_eq!(lines[1], "$VISIBILITY 2");
        assert!(lines[2].starts_with("$OBJECT_BUILDING CornerStore"));
        assert!(!lines.iter().any(|l| l.contains("stale")));

        let ini = read_lines(&root.join(&report.succeeded[0]).join(BUILDING_INI)).unwrap();
        assert_eq!(ini[0], "$NAME_STR \"Corner Store\"");
    }

    #[test]
    fn test_manual_rename_appends_visibility_when_missing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        make_asset(root, "one", "$TYPE_FARM\n");

        edit_manual_rename(root, date(2024, 1, 15), |preview| {
            Ok(preview.label.to_string())
        })
        .unwrap();

        let manifest = Manifest::load(&root.join(MANIFEST_FILE)).unwrap();
        assert_eq!(manifest.lines()[0], "$VISIBILITY");
        assert!(manifest.lines()[1].starts_with("$OBJECT_BUILDING Farm"));
    }

    #[test]
    fn test_failed_folder_does_not_abort_batch() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();

        // Invalid UTF-8 makes the read fail; the good asset is still
        // processed and the error text is captured.
        let broken = root.join("broken");
        fs::create_dir_all(&broken).unwrap();
        fs::write(broken.join(BUILDING_INI), [0xff, 0xfe, 0x00]).unwrap();
        make_asset(root, "good", "$TYPE_SHOP\n");

        let report = edit_fields_only(root, date(2024, 1, 15));

        assert_eq!(report.succeeded, vec!["good".to_string()]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].folder, "broken");
        assert!(!report.failed[0].error.is_empty());
    }
}
