//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use log::info;
use std::io::{self, Write};
use std::path::Path;

use crate::automaton::SuffixAutomaton;

use super::args::{Cli, Commands};

/// Execute a CLI invocation, writing results to stdout
pub fn execute(cli: Cli) -> Result<()> {
    let text = load_text(cli.text.as_deref(), cli.file.as_deref(), cli.keep_newline)?;
    let sam = build_automaton(&text, cli.max_length)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&sam, &cli.command, &mut out)
}

/// Resolve the input text from `--text` or `--file`
///
/// One trailing line ending is dropped from file contents unless
/// `keep_newline` is set.
pub fn load_text(text: Option<&str>, file: Option<&Path>, keep_newline: bool) -> Result<String> {
    match (text, file) {
        (Some(_), Some(_)) => bail!("Pass either --text or --file, not both"),
        (Some(text), None) => Ok(text.to_string()),
        (None, Some(path)) => {
            let mut contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?;
            if !keep_newline && contents.ends_with('\n') {
                contents.pop();
                if contents.ends_with('\r') {
                    contents.pop();
                }
            }
            Ok(contents)
        }
        (None, None) => bail!("No input text. Use --text or --file."),
    }
}

/// Build an automaton over `text`, declaring `max_length` characters
/// (the text's own length when not given)
pub fn build_automaton(text: &str, max_length: Option<usize>) -> Result<SuffixAutomaton> {
    let length = text.chars().count();
    let max_length = max_length.unwrap_or(length);

    let mut sam = SuffixAutomaton::new(max_length)
        .with_context(|| format!("Failed to create automaton for {} characters", max_length))?;
    sam.push_str(text)
        .with_context(|| format!("Failed to index input of {} characters", length))?;

    info!(
        "indexed {} characters into {} states",
        sam.len(),
        sam.state_count()
    );
    Ok(sam)
}

/// Run one query command against `sam`
pub fn run<W: Write>(sam: &SuffixAutomaton, command: &Commands, out: &mut W) -> Result<()> {
    match command {
        Commands::Stats => cmd_stats(sam, out),
        Commands::Contains { patterns } => {
            for pattern in patterns {
                writeln!(out, "{}\t{}", pattern, sam.contains(pattern))?;
            }
            Ok(())
        }
        Commands::Count { patterns } => {
            let index = sam.occurrences();
            for pattern in patterns {
                writeln!(out, "{}\t{}", pattern, index.count(pattern))?;
            }
            Ok(())
        }
        Commands::Find { patterns } => {
            for pattern in patterns {
                match sam.first_occurrence(pattern) {
                    Some(start) => writeln!(out, "{}\t{}", pattern, start)?,
                    None => writeln!(out, "{}\t-", pattern)?,
                }
            }
            Ok(())
        }
        Commands::Lcs { other } => {
            writeln!(out, "{}", sam.longest_common_substring(other))?;
            Ok(())
        }
        Commands::Dump => {
            write!(out, "{}", sam)?;
            Ok(())
        }
    }
}

fn cmd_stats<W: Write>(sam: &SuffixAutomaton, out: &mut W) -> Result<()> {
    writeln!(out, "{} {}", "Length:".bold(), sam.longest_substring_length())?;
    writeln!(out, "{} {}", "Max length:".bold(), sam.max_length())?;
    writeln!(
        out,
        "{} {} (capacity {})",
        "States:".bold(),
        sam.state_count(),
        sam.state_capacity()
    )?;
    writeln!(
        out,
        "{} {}",
        "Distinct substrings:".bold(),
        sam.count_distinct_substrings()
    )?;
    Ok(())
}
