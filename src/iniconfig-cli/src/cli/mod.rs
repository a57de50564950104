//! CLI argument definitions for iniconfig
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod core;
mod free;

pub use core::{Cli, Commands};
pub use free::{FreeArgs, RenamePolicy};
