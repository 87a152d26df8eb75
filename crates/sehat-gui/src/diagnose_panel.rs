//! Single-vehicle diagnosis panel
//!
//! Form fields for the vehicle attributes, a free-text issue box, and the
//! rendered report with a health progress bar. Each button press is a fresh
//! computation; nothing persists between submissions.

use eframe::egui::{self, RichText, Ui};
use sehat_app::app::{run_diagnosis, DiagnosisOutcome};
use sehat_app::config::Config;
use sehat_domain::model::VehicleInput;
use sehat_types::{AccidentHistory, EngineSound, ExhaustSmoke};

/// Panel for diagnosing a single vehicle
pub struct DiagnosePanel {
    /// Form fields
    model: String,
    months_since_service: u32,
    engine_sound: EngineSound,
    exhaust_smoke: ExhaustSmoke,
    accident_history: AccidentHistory,
    body_condition_percent: u8,
    description: String,
    /// Last generated outcome
    outcome: Option<DiagnosisOutcome>,
}

impl Default for DiagnosePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosePanel {
    pub fn new() -> Self {
        Self {
            model: "Honda City 2022".to_string(),
            months_since_service: 6,
            engine_sound: EngineSound::Smooth,
            exhaust_smoke: ExhaustSmoke::None,
            accident_history: AccidentHistory::NoAccidents,
            body_condition_percent: 80,
            description: String::new(),
            outcome: None,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, config: &Config) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Personal AI Mechanic & Body Expert");
            ui.add_space(10.0);

            self.render_form(ui);

            ui.add_space(10.0);
            ui.label(RichText::new("Describe dents, accidents or any issues (optional)").strong());
            ui.add_space(5.0);
            ui.add(
                egui::TextEdit::multiline(&mut self.description)
                    .hint_text("e.g. Brakes are noisy or had a small accident...")
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(10.0);
            if ui
                .button(RichText::new("Generate Mechanic Report").size(16.0))
                .clicked()
            {
                let input = VehicleInput {
                    model: self.model.clone(),
                    months_since_service: self.months_since_service,
                    engine_sound: self.engine_sound,
                    exhaust_smoke: self.exhaust_smoke,
                    accident_history: self.accident_history,
                    body_condition_percent: self.body_condition_percent,
                    description: if self.description.trim().is_empty() {
                        None
                    } else {
                        Some(self.description.clone())
                    },
                };
                self.outcome = Some(run_diagnosis(&input, config.language));
            }

            if let Some(ref outcome) = self.outcome {
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);

                ui.label(RichText::new(&outcome.report).monospace());

                ui.add_space(10.0);
                let fraction = outcome.record.health_score as f32 / 100.0;
                ui.add(egui::ProgressBar::new(fraction).text(format!(
                    "{}%",
                    outcome.record.health_score
                )));
                ui.label(
                    RichText::new(format!(
                        "Overall Mechanical Health: {}%",
                        outcome.record.health_score
                    ))
                    .small(),
                );
            }
        });
    }

    fn render_form(&mut self, ui: &mut Ui) {
        egui::Grid::new("diagnose_form")
            .num_columns(2)
            .spacing([20.0, 8.0])
            .show(ui, |ui| {
                ui.label("Car Model Name:");
                ui.text_edit_singleline(&mut self.model);
                ui.end_row();

                ui.label("Months Since Last Service:");
                ui.add(egui::Slider::new(&mut self.months_since_service, 0..=48));
                ui.end_row();

                ui.label("Engine Sound:");
                egui::ComboBox::from_id_salt("engine_sound")
                    .selected_text(self.engine_sound.label())
                    .show_ui(ui, |ui| {
                        for sound in EngineSound::ALL {
                            ui.selectable_value(&mut self.engine_sound, sound, sound.label());
                        }
                    });
                ui.end_row();

                ui.label("Exhaust Smoke:");
                egui::ComboBox::from_id_salt("exhaust_smoke")
                    .selected_text(self.exhaust_smoke.label())
                    .show_ui(ui, |ui| {
                        for smoke in ExhaustSmoke::ALL {
                            ui.selectable_value(&mut self.exhaust_smoke, smoke, smoke.label());
                        }
                    });
                ui.end_row();

                ui.label("Accident History:");
                egui::ComboBox::from_id_salt("accident_history")
                    .selected_text(self.accident_history.label())
                    .show_ui(ui, |ui| {
                        for accident in AccidentHistory::ALL {
                            ui.selectable_value(&mut self.accident_history, accident, accident.label());
                        }
                    });
                ui.end_row();

                ui.label("Body/Paint Condition %:");
                ui.add(egui::Slider::new(&mut self.body_condition_percent, 0..=100));
                ui.end_row();
            });
    }
}
