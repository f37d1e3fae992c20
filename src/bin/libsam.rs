//! libsam - substring queries with an online suffix automaton
//!
//! Set `RUST_LOG=debug` to see construction logs.

use clap::Parser;
use colored::Colorize;
use std::process;

use libsam::cli::{commands, Cli};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
