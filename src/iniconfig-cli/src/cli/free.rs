//! Free-buildings command CLI definitions

use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct FreeArgs {
    /// Directory tree containing the building asset folders
    pub dir: PathBuf,

    /// Asset renaming policy
    #[arg(long, value_enum, default_value = "none")]
    pub rename: RenamePolicy,

    /// Prefix for generated asset names, to make them easy to search
    /// in game (uses the configured default if not provided)
    #[arg(short, long)]
    pub prefix: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RenamePolicy {
    /// Modify building.ini only
    None,
    /// Rename each asset after its resolved building type
    Auto,
    /// Prompt for each asset's name individually
    Manual,
}
