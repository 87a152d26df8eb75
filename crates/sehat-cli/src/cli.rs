//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use sehat_types::{AccidentHistory, EngineSound, ExhaustSmoke, Language, OutputFormat};

#[derive(Parser)]
#[command(name = "sehat-checker")]
#[command(version)]
#[command(about = "Bilingual vehicle health reports from form inputs or fleet spreadsheets")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Report language (english, hindi). Uses config value if not specified.
    #[arg(long, short = 'l', global = true)]
    pub lang: Option<Language>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a diagnostic report for a single vehicle
    Diagnose {
        /// Vehicle model name
        model: String,

        /// Months since last service (0-48)
        #[arg(long, short = 'm', default_value = "6",
              value_parser = clap::value_parser!(u32).range(0..=48))]
        months: u32,

        /// Engine sound
        #[arg(long, default_value = "smooth")]
        sound: EngineSound,

        /// Exhaust smoke
        #[arg(long, default_value = "none")]
        smoke: ExhaustSmoke,

        /// Accident history
        #[arg(long, default_value = "no-accidents")]
        accident: AccidentHistory,

        /// Body/paint condition percent (0-100)
        #[arg(long, default_value = "80",
              value_parser = clap::value_parser!(u8).range(0..=100))]
        body: u8,

        /// Free-text issue description (Hindi/English/Hinglish)
        #[arg(long, short = 'n')]
        notes: Option<String>,
    },

    /// Summarize a fleet table (CSV/TXT, delimiter auto-detected)
    Fleet {
        /// Path to delimited table file with a header row
        file: PathBuf,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default report language
        #[arg(long)]
        set_lang: Option<Language>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
