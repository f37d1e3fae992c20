//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "libsam")]
#[command(about = "Substring queries over a text with an online suffix automaton")]
#[command(version)]
pub struct Cli {
    /// Text to index
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// File whose contents to index
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Declared maximum text length (defaults to the input length)
    #[arg(short = 'm', long)]
    pub max_length: Option<usize>,

    /// Keep a trailing newline read from --file
    #[arg(long)]
    pub keep_newline: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show text length, state count and distinct substring count
    Stats,

    /// Check whether each pattern is a substring
    Contains {
        /// Patterns to look up
        #[arg(required = true)]
        patterns: Vec<String>,
    },

    /// Count the occurrences of each pattern
    Count {
        /// Patterns to count
        #[arg(required = true)]
        patterns: Vec<String>,
    },

    /// Print the start index of the first occurrence of each pattern
    Find {
        /// Patterns to locate
        #[arg(required = true)]
        patterns: Vec<String>,
    },

    /// Print the longest common substring with another string
    Lcs {
        /// String to compare against
        other: String,
    },

    /// Print the state table
    Dump,
}
