//! Restore command handler

use anyhow::{bail, Result};
use std::path::Path;

use crate::history;

/// Handle the `restore` command
pub fn handle(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        bail!("directory not found: {}", dir.display());
    }

    let log = Path::new(history::LOG_FILE);
    history::append(log, "iniconfig check: Restored backups")?;

    let report = iniconfig::restore_tree(dir);

    for restored in &report.restored {
        history::append(
            log,
            &format!(
                "Restored backup {} as {}",
                iniconfig::backup::backup_file_name(restored.date),
                iniconfig::BUILDING_INI
            ),
        )?;
    }

    println!();
    println!("Restored building.ini files under {}", dir.display());

    if !report.restored.is_empty() {
        println!();
        println!("The following backup files were restored:");
        for restored in &report.restored {
            println!(
                "  Backup date: {}    Folder: {}",
                restored.date.format("%Y-%m-%d"),
                restored.folder
            );
        }
    }

    if !report.failed.is_empty() {
        println!();
        println!("No backup files were found in the following folders:");
        for failure in &report.failed {
            println!("  {} ({})", failure.folder, failure.error);
        }
    }

    Ok(())
}
