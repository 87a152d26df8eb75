//! Output formatting module

use sehat_app::app::{DiagnosisOutcome, FleetOutcome};
use sehat_types::{OutputFormat, Result};

const HEALTH_BAR_CELLS: usize = 20;

pub fn output_diagnosis(output_format: OutputFormat, outcome: &DiagnosisOutcome) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&outcome.record)?;
        println!("{}", content);
    } else {
        println!("{}", outcome.report);
        println!(
            "{} Overall Mechanical Health: {}%",
            render_health_bar(outcome.record.health_score),
            outcome.record.health_score
        );
        println!("Generated: {}", chrono::Local::now().format("%Y-%m-%d"));
    }

    Ok(())
}

pub fn output_fleet(output_format: OutputFormat, outcome: &FleetOutcome) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&outcome.summary)?;
        println!("{}", content);
    } else {
        println!("Data loaded: {} records.", outcome.table.record_count());
        println!();
        println!("{}", outcome.report);
        println!("Generated: {}", chrono::Local::now().format("%Y-%m-%d"));
    }

    Ok(())
}

/// Linear health indicator, e.g. `[##############......]`
fn render_health_bar(score: u8) -> String {
    let filled = (score as usize * HEALTH_BAR_CELLS) / 100;
    let mut bar = String::with_capacity(HEALTH_BAR_CELLS + 2);
    bar.push('[');
    for i in 0..HEALTH_BAR_CELLS {
        bar.push(if i < filled { '#' } else { '.' });
    }
    bar.push(']');
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_bar_fill() {
        assert_eq!(render_health_bar(0), format!("[{}]", ".".repeat(20)));
        assert_eq!(render_health_bar(100), format!("[{}]", "#".repeat(20)));
        assert_eq!(render_health_bar(50), format!("[{}{}]", "#".repeat(10), ".".repeat(10)));
    }
}
