mod cli;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use linejoin_core::{Command, CommandExecutor, CommandResult, TextDocument};
use linejoin_lang::{LanguageConfig, LanguageTable};
use log::LevelFilter;

use crate::cli::{Cli, format_selection};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);
    run(cli)
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let languages = match &cli.config {
        Some(path) => LanguageConfig::from_path(path)
            .with_context(|| format!("failed to load language config {}", path.display()))?
            .into_table(),
        None => LanguageTable::builtin().clone(),
    };

    let text = read_input(cli.file.as_deref())?;
    let language = cli.language_id(&languages);
    log::info!("joining as '{language}'");

    let selections = cli.initial_selections();

    let mut executor =
        CommandExecutor::with_languages(TextDocument::new(&text, language), languages);
    executor
        .execute(Command::SetSelections { selections })
        .context("invalid selection")?;

    match executor.execute(Command::JoinLines).context("join failed")? {
        CommandResult::Joined { lines_removed, .. } => {
            log::info!("removed {lines_removed} line(s)");
        }
        CommandResult::Success => {}
    }

    let output = executor.document().to_saved_text();
    cli.write_output(&output, &mut io::stdout().lock())?;

    if cli.print_selections {
        for selection in executor.selections() {
            eprintln!("{}", format_selection(selection));
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}
