//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up iniconfig CLI defaults.

use crate::config::Config;
use anyhow::Result;

/// Handle the configure command
pub fn handle(prefix: Option<String>, clear_prefix: bool, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config)?;
        return Ok(());
    }

    if clear_prefix {
        config.clear_default_prefix();
        config.save()?;
        println!("Default prefix cleared");
        return Ok(());
    }

    if let Some(p) = prefix {
        set_prefix(&mut config, p)?;
    } else {
        show_usage();
    }

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) -> Result<()> {
    if let Some(p) = config.get_default_prefix() {
        println!("Default prefix: {}", p);
    } else {
        println!("No default prefix configured");
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }

    Ok(())
}

/// Set the default prefix in configuration
fn set_prefix(config: &mut Config, prefix: String) -> Result<()> {
    config.set_default_prefix(prefix.clone());
    config.save()?;

    println!("Default prefix configured: {}", prefix);
    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: iniconfig configure --prefix YOUR_PREFIX");
    println!("   or: iniconfig configure --clear-prefix");
    println!("   or: iniconfig configure --show");
    println!();
    println!("Note: the prefix is prepended to generated asset names so");
    println!("      your assets are easy to find in the in-game search.");
}
