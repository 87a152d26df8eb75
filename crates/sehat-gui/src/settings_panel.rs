//! Settings panel for sehat-checker GUI

use eframe::egui::{self, Color32, RichText, Ui};
use sehat_app::config::Config;
use sehat_types::{Language, OutputFormat};

/// Settings panel
pub struct SettingsPanel {
    /// Language selection
    selected_language: Language,
    /// Output format selection (used by the CLI)
    selected_format: OutputFormat,
    /// Whether config was modified
    modified: bool,
    /// Status message
    status_message: Option<(String, bool)>, // (message, is_error)
}

impl SettingsPanel {
    pub fn new(config: &Config) -> Self {
        Self {
            selected_language: config.language,
            selected_format: config.output_format,
            modified: false,
            status_message: None,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, config: &mut Config) {
        ui.heading("Settings");
        ui.add_space(10.0);

        // Language selection
        ui.label(RichText::new("Report language").strong());
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            for lang in Language::ALL {
                let selected = self.selected_language == lang;
                if ui.selectable_label(selected, lang.label()).clicked() {
                    self.selected_language = lang;
                    self.modified = true;
                }
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(15.0);

        // Output format (CLI default)
        ui.label(RichText::new("Default output format").strong());
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            for format in [OutputFormat::Table, OutputFormat::Json] {
                let selected = self.selected_format == format;
                if ui
                    .selectable_label(selected, format.to_string())
                    .clicked()
                {
                    self.selected_format = format;
                    self.modified = true;
                }
            }
        });

        ui.add_space(20.0);
        ui.separator();
        ui.add_space(15.0);

        // Current config display
        ui.label(RichText::new("Current configuration").strong());
        ui.add_space(5.0);

        egui::Frame::new()
            .fill(Color32::from_gray(30))
            .inner_margin(10.0)
            .corner_radius(4.0)
            .show(ui, |ui| {
                egui::Grid::new("current_config")
                    .num_columns(2)
                    .spacing([20.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("Language:");
                        ui.label(config.language.label());
                        ui.end_row();

                        ui.label("Output format:");
                        ui.label(config.output_format.to_string());
                        ui.end_row();
                    });
            });

        ui.add_space(20.0);

        // Save button
        ui.horizontal(|ui| {
            if ui
                .add_enabled(self.modified, egui::Button::new(RichText::new("Save").size(16.0)))
                .clicked()
            {
                self.save_config(config);
            }

            if ui.button("Reset").clicked() {
                self.selected_language = config.language;
                self.selected_format = config.output_format;
                self.modified = false;
                self.status_message = None;
            }

            if self.modified {
                ui.label(RichText::new("* unsaved changes").color(Color32::YELLOW));
            }
        });

        // Status message
        if let Some((ref msg, is_error)) = self.status_message {
            ui.add_space(10.0);
            let color = if is_error {
                Color32::LIGHT_RED
            } else {
                Color32::LIGHT_GREEN
            };
            ui.label(RichText::new(msg).color(color));
        }
    }

    fn save_config(&mut self, config: &mut Config) {
        config.language = self.selected_language;
        config.output_format = self.selected_format;

        match config.save() {
            Ok(()) => {
                self.modified = false;
                self.status_message = Some(("Settings saved.".to_string(), false));
            }
            Err(e) => {
                self.status_message = Some((format!("Save failed: {}", e), true));
            }
        }
    }
}
