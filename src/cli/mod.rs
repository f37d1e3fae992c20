//! CLI interface for libsam
//!
//! Builds a suffix automaton over a text given on the command line or read
//! from a file, then runs one query command against it.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
