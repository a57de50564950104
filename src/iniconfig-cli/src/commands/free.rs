//! Free-buildings command handlers

use anyhow::{bail, Result};
use std::io::{self, Write};
use std::path::Path;

use iniconfig::{AssetPreview, BatchReport};

use crate::cli::{FreeArgs, RenamePolicy};
use crate::config::Config;
use crate::history;

/// Handle the `free` command
pub fn handle(args: &FreeArgs) -> Result<()> {
    if !args.dir.is_dir() {
        bail!("directory not found: {}", args.dir.display());
    }

    let today = chrono::Local::now().date_naive();
    let log = Path::new(history::LOG_FILE);

    let report = match args.rename {
        RenamePolicy::None => {
            history::append(log, "iniconfig check: Modify building.ini only")?;
            iniconfig::edit_fields_only(&args.dir, today)
        }

        RenamePolicy::Auto => {
            history::append(log, "iniconfig check: Renamed asset according to building type")?;
            let prefix = resolve_prefix(args)?;
            iniconfig::edit_auto_rename(&args.dir, today, prefix.as_deref())?
        }

        RenamePolicy::Manual => {
            history::append(log, "iniconfig check: Renamed asset individually")?;
            iniconfig::edit_manual_rename(&args.dir, today, prompt_asset_name)?
        }
    };

    print_report(&args.dir, &report);
    Ok(())
}

/// Prefix from the command line, falling back to the configured default
fn resolve_prefix(args: &FreeArgs) -> Result<Option<String>> {
    if args.prefix.is_some() {
        return Ok(args.prefix.clone());
    }
    Ok(Config::load()?.default_prefix)
}

/// Ask the user for one asset's new display name
fn prompt_asset_name(preview: &AssetPreview<'_>) -> io::Result<String> {
    println!();
    println!(
        "Asset found:   {}",
        preview.current_name.as_deref().unwrap_or("Unknown")
    );
    println!("Type of asset: {}", preview.label);
    println!("Folder:        {}", preview.folder.display());
    print!("Enter new asset name (suggested: {}): ", preview.label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let input = input.trim();

    Ok(if input.is_empty() {
        preview.label.to_string()
    } else {
        input.to_string()
    })
}

/// Print the batch outcome, failures first
fn print_report(root: &Path, report: &BatchReport) {
    println!();
    println!("Modified building.ini files under {}", root.display());

    if !report.failed.is_empty() {
        println!();
        println!("The following folders could not be modified:");
        for failure in &report.failed {
            println!("  {} (error: {})", failure.folder, failure.error);
        }
    }

    if !report.succeeded.is_empty() {
        println!();
        println!("The following folders were modified:");
        for folder in &report.succeeded {
            println!("  {folder}");
        }
    }
}
