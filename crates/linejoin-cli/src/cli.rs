use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use linejoin_core::{Position, Selection};
use linejoin_lang::LanguageTable;

/// Language id used when neither `--language` nor the file extension names one.
pub const PLAIN_LANGUAGE: &str = "plaintext";

#[derive(Parser, Debug)]
#[command(
    name = "linejoin",
    about = "Join lines the way an editor would: comment- and string-aware",
    version
)]
pub struct Cli {
    /// File to edit (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Language identifier (default: inferred from the file extension)
    #[arg(short = 'l', long = "language", value_name = "ID")]
    pub language: Option<String>,

    /// Selection to join at: LINE[:COL] for a caret or LINE:COL-LINE:COL for a range (1-based,
    /// repeatable, order matters)
    #[arg(short = 's', long = "select", value_name = "SEL", value_parser = parse_selection)]
    pub selections: Vec<Selection>,

    /// Load additional language rows from a YAML file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the result back to FILE instead of stdout
    #[arg(short = 'i', long = "in-place", requires = "file")]
    pub in_place: bool,

    /// Print the resulting selections (1-based) to stderr
    #[arg(long = "print-selections")]
    pub print_selections: bool,

    /// Increase logging verbosity (repeat for more detail)
    #[arg(short = 'v', action = ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    /// `--language`, else the language registered for the file extension, else plain text.
    pub fn language_id(&self, languages: &LanguageTable) -> String {
        self.language
            .clone()
            .or_else(|| {
                self.file
                    .as_deref()
                    .and_then(|path| languages.language_for_path(path))
                    .map(str::to_string)
            })
            .unwrap_or_else(|| PLAIN_LANGUAGE.to_string())
    }

    /// Selections in command-line order, or a single caret at the start of line 1.
    pub fn initial_selections(&self) -> Vec<Selection> {
        if self.selections.is_empty() {
            vec![Selection::caret(0, 0)]
        } else {
            self.selections.clone()
        }
    }

    /// Write `output` back to FILE with `--in-place`, otherwise to `stdout`.
    pub fn write_output(&self, output: &str, stdout: &mut impl Write) -> Result<()> {
        match (&self.file, self.in_place) {
            (Some(path), true) => fs::write(path, output)
                .with_context(|| format!("failed to write {}", path.display())),
            _ => stdout
                .write_all(output.as_bytes())
                .context("failed to write stdout"),
        }
    }
}

/// Parse `LINE[:COL]` (1-based) into a zero-based position.
pub fn parse_position(s: &str) -> Result<Position> {
    let (line, column) = match s.split_once(':') {
        Some((line, column)) => (line, Some(column)),
        None => (s, None),
    };

    let line: usize = line
        .trim()
        .parse()
        .with_context(|| format!("invalid line number in '{s}'"))?;
    let column: usize = match column {
        Some(column) => column
            .trim()
            .parse()
            .with_context(|| format!("invalid column number in '{s}'"))?,
        None => 1,
    };

    if line == 0 || column == 0 {
        bail!("line and column numbers start at 1: '{s}'");
    }
    Ok(Position::new(line - 1, column - 1))
}

/// Parse `LINE[:COL]` or `LINE[:COL]-LINE[:COL]` into a selection.
pub fn parse_selection(s: &str) -> Result<Selection> {
    match s.split_once('-') {
        Some((start, end)) => Ok(Selection::new(parse_position(start)?, parse_position(end)?)),
        None => {
            let pos = parse_position(s)?;
            Ok(Selection::caret(pos.line, pos.column))
        }
    }
}

/// Format a selection the way [`parse_selection`] reads it.
pub fn format_selection(selection: &Selection) -> String {
    let start = selection.start;
    let end = selection.end;
    if selection.is_caret() {
        format!("{}:{}", start.line + 1, start.column + 1)
    } else {
        format!(
            "{}:{}-{}:{}",
            start.line + 1,
            start.column + 1,
            end.line + 1,
            end.column + 1
        )
    }
}
