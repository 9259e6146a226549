//! Tarot Practice CLI entry point

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use tarot_practice::cli::{Cli, Command, ConfigCommand, OutputFormat};
use tarot_practice::config::Settings;
use tarot_practice::deck::{DECK_SIZE, RWS_CARDS};
use tarot_practice::draw::{Draw, DrawEngine, DrawResult, IntentionRng};
use tarot_practice::session::{DrawSession, InsertOutcome};
use tarot_practice::vault::NoteVault;

fn setup_logging(cli_log_level: Option<&str>) -> Result<()> {
    // Default WARN so normal command output stays clean; raise with -l
    let level = match cli_log_level {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
                tracing::Level::WARN
            }
        },
        None => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level.as_deref()).context("Failed to setup logging")?;

    let settings = Settings::load(cli.config.as_ref()).context("Failed to load settings")?;
    let vault = NoteVault::new(cli.vault.clone().unwrap_or_else(|| PathBuf::from(".")));

    debug!(command = ?cli.command, vault = %vault.root().display(), "dispatching command");
    match cli.command {
        Command::Draw {
            intention,
            note,
            count,
            allow_duplicates,
            format,
            dry_run,
        } => cmd_draw(
            &settings,
            &vault,
            &intention,
            note.as_deref(),
            count,
            allow_duplicates,
            format,
            dry_run,
        ),
        Command::Cards => cmd_cards(),
        Command::Config { command } => cmd_config(settings, cli.config.as_ref(), command),
    }
}

/// Draw one or more cards and record them into a note
#[allow(clippy::too_many_arguments)]
fn cmd_draw(
    settings: &Settings,
    vault: &NoteVault,
    intention: &str,
    note: Option<&Path>,
    count: usize,
    allow_duplicates: bool,
    format: OutputFormat,
    dry_run: bool,
) -> Result<()> {
    let intention = intention.trim();
    if intention.is_empty() {
        eyre::bail!("Please enter an intention before drawing");
    }
    if count == 0 {
        eyre::bail!("Count must be at least 1");
    }

    let engine = IntentionRng::new();
    let results: Vec<DrawResult> = if count == 1 {
        let draw = engine.draw(intention, DECK_SIZE)?;
        vec![DrawResult::from_draw(intention, &draw)?]
    } else {
        let multi = engine.draw_multiple(intention, DECK_SIZE, count, allow_duplicates)?;
        multi
            .indices
            .iter()
            .map(|&index| {
                DrawResult::from_draw(
                    intention,
                    &Draw {
                        index,
                        timestamp: multi.timestamp,
                    },
                )
            })
            .collect::<Result<_, _>>()?
    };

    let mut outcome = None;
    if !dry_run {
        let session = DrawSession::new(settings, vault);
        for result in &results {
            outcome = Some(session.record(result, note, None)?);
        }
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Text => {
            for result in &results {
                println!(
                    "{} {} {}",
                    result.card_name.magenta().bold(),
                    format!("(Index: {})", result.card_index).dimmed(),
                    format!("drawn at {}", result.timestamp_iso()).dimmed(),
                );
            }
            match outcome {
                Some(InsertOutcome::Note { path }) => {
                    println!("Recorded in {}", path.display().to_string().green())
                }
                Some(InsertOutcome::Cursor) => println!("Inserted at cursor"),
                None => println!("{}", "Dry run, nothing recorded".yellow()),
            }
        }
    }

    Ok(())
}

/// Print the deck in index order
fn cmd_cards() -> Result<()> {
    for (index, name) in RWS_CARDS.iter().enumerate() {
        let name = if index < 22 { name.bold() } else { name.normal() };
        println!("{:>2}  {}", index.to_string().dimmed(), name);
    }
    Ok(())
}

/// Inspect or change settings
fn cmd_config(mut settings: Settings, config_path: Option<&PathBuf>, command: ConfigCommand) -> Result<()> {
    let save_path = config_path.cloned().unwrap_or_else(Settings::user_config_path);

    match command {
        ConfigCommand::Show => {
            print!("{}", serde_yaml::to_string(&settings)?);
        }
        ConfigCommand::Path => {
            println!("{}", save_path.display());
        }
        ConfigCommand::Set { key, value } => {
            settings.set(&key, &value)?;
            settings.save(&save_path)?;
            println!("Set {} = {}", key.bold(), value);
        }
    }

    Ok(())
}
