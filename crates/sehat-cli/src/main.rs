//! Sehat Checker - bilingual vehicle health reports
//!
//! A CLI tool that turns form-style vehicle inputs or fleet spreadsheets into
//! formatted diagnostic reports.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
