//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tarot Practice - intention-seeded draws recorded into markdown notes
#[derive(Parser)]
#[command(
    name = "tarot",
    about = "Draw an intention-seeded tarot card and record it into a note",
    version
)]
pub struct Cli {
    /// Path to settings file
    #[arg(short, long, global = true, help = "Path to settings file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Notes directory
    #[arg(long, global = true, help = "Notes directory (defaults to the current directory)")]
    pub vault: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Draw a card weighted by your intention and record it
    Draw {
        /// The question or focus you bring to this draw
        #[arg(short, long)]
        intention: String,

        /// Target note, vault-relative; the daily-note fallback applies when omitted
        #[arg(short, long)]
        note: Option<PathBuf>,

        /// Number of cards to draw
        #[arg(long, default_value_t = 1)]
        count: usize,

        /// Allow the same card to come up more than once in a multi-card draw
        #[arg(long)]
        allow_duplicates: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Show the draw without writing to any note
        #[arg(long)]
        dry_run: bool,
    },

    /// List the deck in index order
    Cards,

    /// Inspect or change settings
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Settings management subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective settings
    Show,

    /// Print where settings are saved
    Path,

    /// Set one settings key and save the full file
    Set {
        /// Key (use-daily-note, daily-note-path-pattern, insert-location,
        /// heading-name, insert-at-cursor, output-template)
        key: String,

        /// New value
        value: String,
    },
}

/// Output format for the draw command
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_draw() {
        let cli = Cli::parse_from(["tarot", "draw", "--intention", "focus"]);
        if let Command::Draw {
            intention,
            note,
            count,
            allow_duplicates,
            format,
            dry_run,
        } = cli.command
        {
            assert_eq!(intention, "focus");
            assert!(note.is_none());
            assert_eq!(count, 1);
            assert!(!allow_duplicates);
            assert_eq!(format, OutputFormat::Text);
            assert!(!dry_run);
        } else {
            panic!("Expected Draw command");
        }
    }

    #[test]
    fn test_cli_parse_draw_with_note_and_count() {
        let cli = Cli::parse_from([
            "tarot",
            "draw",
            "-i",
            "clarity",
            "--note",
            "journal.md",
            "--count",
            "3",
            "--allow-duplicates",
            "--format",
            "json",
        ]);
        if let Command::Draw {
            intention,
            note,
            count,
            allow_duplicates,
            format,
            ..
        } = cli.command
        {
            assert_eq!(intention, "clarity");
            assert_eq!(note, Some(PathBuf::from("journal.md")));
            assert_eq!(count, 3);
            assert!(allow_duplicates);
            assert_eq!(format, OutputFormat::Json);
        } else {
            panic!("Expected Draw command");
        }
    }

    #[test]
    fn test_cli_parse_cards() {
        let cli = Cli::parse_from(["tarot", "cards"]);
        assert!(matches!(cli.command, Command::Cards));
    }

    #[test]
    fn test_cli_parse_config_set() {
        let cli = Cli::parse_from(["tarot", "config", "set", "insert-location", "heading"]);
        assert!(matches!(
            cli.command,
            Command::Config {
                command: ConfigCommand::Set { .. }
            }
        ));
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::parse_from(["tarot", "--vault", "/notes", "-c", "/tmp/settings.yml", "cards"]);
        assert_eq!(cli.vault, Some(PathBuf::from("/notes")));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/settings.yml")));
    }

    #[test]
    fn test_output_format_from_str() {
        assert!(matches!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text)));
        assert!(matches!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json)));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
