//! Otto CLI - personal automation dispatcher
//!
//! Usage: otto <COMMAND>
//!
//! Commands:
//!   deploy  Resolve deploy tokens and hand off the directive
//!   test    Resolve a blocking test run
//!   time    Convert timestamps between representations
//!   note    Build Obsidian Advanced URI deep links

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Deploy { tokens } => commands::cmd_deploy(&tokens, cli.json, cli.verbose),
        Commands::Test { tokens } => commands::cmd_test(&tokens, cli.json, cli.verbose),
        Commands::Time { input } => commands::cmd_time(&input, cli.json),
        Commands::Note {
            file,
            vault,
            daily,
            heading,
            append,
            prepend,
        } => commands::cmd_note(file, vault, daily, heading, append, prepend, cli.json),
    }
}
