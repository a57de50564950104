//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::free::FreeArgs;

#[derive(Parser)]
#[command(name = "iniconfig")]
#[command(about = "Batch editor for Workers & Resources building assets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Make buildings free to build and run (strips cost directives)
    #[command(visible_alias = "f")]
    Free(FreeArgs),

    /// Restore building.ini files from their dated backups
    #[command(visible_alias = "r")]
    Restore {
        /// Directory tree to restore
        dir: PathBuf,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set the default search prefix for generated asset names
        #[arg(long)]
        prefix: Option<String>,

        /// Remove the configured default prefix
        #[arg(long)]
        clear_prefix: bool,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
