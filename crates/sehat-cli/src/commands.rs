//! Command handlers

use std::path::Path;

use sehat_app::app::{run_diagnosis, run_fleet_analysis};
use sehat_app::config::Config;
use sehat_domain::model::VehicleInput;
use sehat_types::{AccidentHistory, EngineSound, ExhaustSmoke, Language, OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output::{output_diagnosis, output_fleet};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(lang) = cli.lang {
        config.language = lang;
    }
    if let Some(format) = cli.format {
        config.output_format = format;
    }

    match cli.command {
        Commands::Diagnose {
            model,
            months,
            sound,
            smoke,
            accident,
            body,
            notes,
        } => cmd_diagnose(
            &config, model, months, sound, smoke, accident, body, notes,
        ),
        Commands::Fleet { file } => cmd_fleet(&config, &file),
        Commands::Config {
            show,
            set_lang,
            set_output,
            reset,
        } => cmd_config(config, show, set_lang, set_output, reset),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_diagnose(
    config: &Config,
    model: String,
    months: u32,
    sound: EngineSound,
    smoke: ExhaustSmoke,
    accident: AccidentHistory,
    body: u8,
    notes: Option<String>,
) -> Result<()> {
    let input = VehicleInput {
        model,
        months_since_service: months,
        engine_sound: sound,
        exhaust_smoke: smoke,
        accident_history: accident,
        body_condition_percent: body,
        description: notes,
    };

    let outcome = run_diagnosis(&input, config.language);
    output_diagnosis(config.output_format, &outcome)
}

fn cmd_fleet(config: &Config, file: &Path) -> Result<()> {
    let outcome = run_fleet_analysis(file, config.language)?;
    output_fleet(config.output_format, &outcome)
}

fn cmd_config(
    mut config: Config,
    show: bool,
    set_lang: Option<Language>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        Config::default().save()?;
        println!("Configuration reset to defaults.");
        return Ok(());
    }

    let mut modified = false;
    if let Some(lang) = set_lang {
        config.language = lang;
        modified = true;
    }
    if let Some(format) = set_output {
        config.output_format = format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration saved.");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
