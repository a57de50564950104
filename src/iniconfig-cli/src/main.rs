mod cli;
mod commands;
mod config;
mod history;

use anyhow::Result;
use clap::Parser;

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Free(args) => {
            commands::free::handle(&args)?;
        }

        Commands::Restore { dir } => {
            commands::restore::handle(&dir)?;
        }

        Commands::Configure {
            prefix,
            clear_prefix,
            show,
        } => {
            commands::configure::handle(prefix, clear_prefix, show)?;
        }
    }

    Ok(())
}
