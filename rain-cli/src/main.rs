//! Binary crate for the `rain` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive form input
//! - Human-friendly output formatting

use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run()
}
