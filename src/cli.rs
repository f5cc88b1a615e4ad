//! CLI argument parsing
//!
//! Defines the clap surface. `deploy` and `test` accept their tokens as
//! raw trailing arguments (hyphen values included) so legacy flags reach
//! the resolver instead of clap.

use clap::{Parser, Subcommand};

/// Otto - personal automation dispatcher
#[derive(Parser, Debug)]
#[command(name = "otto")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve deploy tokens and hand the directive to the dispatcher
    Deploy {
        /// Environment or target plus flags, passed through unparsed
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        tokens: Vec<String>,
    },

    /// Resolve a test run (blocking by default)
    Test {
        /// Environment or target plus flags, passed through unparsed
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        tokens: Vec<String>,
    },

    /// Convert a timestamp or date between representations
    Time {
        /// Epoch seconds/millis, RFC 3339, 'YYYY-MM-DD HH:MM:SS', or 'YYYY-MM-DD'
        input: String,
    },

    /// Build an Obsidian Advanced URI deep link
    Note {
        /// Note path inside the vault (e.g. projects/otto.md)
        #[arg(conflicts_with = "daily")]
        file: Option<String>,

        /// Vault name (defaults to [vault] name from otto.toml)
        #[arg(long)]
        vault: Option<String>,

        /// Link to today's daily note
        #[arg(long)]
        daily: bool,

        /// Heading to scroll to or write under
        #[arg(long)]
        heading: Option<String>,

        /// Append text to the note
        #[arg(long, value_name = "TEXT", conflicts_with = "prepend")]
        append: Option<String>,

        /// Prepend text to the note
        #[arg(long, value_name = "TEXT")]
        prepend: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_deploy_no_tokens() {
        let cli = Cli::try_parse_from(["otto", "deploy"]).unwrap();
        if let Commands::Deploy { tokens } = cli.command {
            assert!(tokens.is_empty());
        } else {
            panic!("Expected Deploy command");
        }
    }

    #[test]
    fn test_cli_parse_deploy_keeps_hyphen_tokens() {
        let cli = Cli::try_parse_from(["otto", "deploy", "-l", "prod", "-b"]).unwrap();
        if let Commands::Deploy { tokens } = cli.command {
            assert_eq!(tokens, vec!["-l", "prod", "-b"]);
        } else {
            panic!("Expected Deploy command");
        }
    }

    #[test]
    fn test_cli_parse_test_tokens() {
        let cli = Cli::try_parse_from(["otto", "test", "staging", "--skip-build"]).unwrap();
        if let Commands::Test { tokens } = cli.command {
            assert_eq!(tokens, vec!["staging", "--skip-build"]);
        } else {
            panic!("Expected Test command");
        }
    }

    #[test]
    fn test_cli_json_flag_before_subcommand() {
        let cli = Cli::try_parse_from(["otto", "--json", "deploy", "prod"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Deploy { .. }));
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["otto", "-vv", "deploy"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_parse_time() {
        let cli = Cli::try_parse_from(["otto", "time", "1700000000"]).unwrap();
        if let Commands::Time { input } = cli.command {
            assert_eq!(input, "1700000000");
        } else {
            panic!("Expected Time command");
        }
    }

    #[test]
    fn test_cli_time_requires_input() {
        assert!(Cli::try_parse_from(["otto", "time"]).is_err());
    }

    #[test]
    fn test_cli_parse_note() {
        let cli = Cli::try_parse_from([
            "otto", "note", "projects/otto.md", "--vault", "work", "--append", "done",
        ])
        .unwrap();
        if let Commands::Note {
            file,
            vault,
            daily,
            append,
            prepend,
            ..
        } = cli.command
        {
            assert_eq!(file.as_deref(), Some("projects/otto.md"));
            assert_eq!(vault.as_deref(), Some("work"));
            assert!(!daily);
            assert_eq!(append.as_deref(), Some("done"));
            assert_eq!(prepend, None);
        } else {
            panic!("Expected Note command");
        }
    }

    #[test]
    fn test_cli_note_file_daily_conflict() {
        let result = Cli::try_parse_from(["otto", "note", "a.md", "--daily"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_note_append_prepend_conflict() {
        let result =
            Cli::try_parse_from(["otto", "note", "--daily", "--append", "x", "--prepend", "y"]);
        assert!(result.is_err());
    }
}
