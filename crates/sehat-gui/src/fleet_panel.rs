//! Fleet analytics panel
//!
//! Loads a delimited table through a file dialog, shows the summary report,
//! a two-slice risk/healthy proportion chart, and a preview of the table.

use std::f32::consts::TAU;

use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use sehat_app::app::{run_fleet_analysis, FleetOutcome};
use sehat_app::config::Config;
use sehat_domain::service::identifier_column;

const RISK_COLOR: Color32 = Color32::from_rgb(0xff, 0x4b, 0x4b);
const HEALTHY_COLOR: Color32 = Color32::from_rgb(0x00, 0xcc, 0x96);

/// Rows shown in the table preview
const PREVIEW_ROWS: usize = 20;

/// Panel for fleet uploads
pub struct FleetPanel {
    /// Last successful analysis
    outcome: Option<FleetOutcome>,
    /// Error message from the last attempt
    error: Option<String>,
}

impl Default for FleetPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl FleetPanel {
    pub fn new() -> Self {
        Self {
            outcome: None,
            error: None,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, config: &Config) {
        ui.heading("Universal Fleet Analytics");
        ui.add_space(10.0);

        if ui
            .button(RichText::new("Open CSV/TXT...").size(14.0))
            .clicked()
        {
            self.open_file_dialog(config);
        }

        if let Some(ref error) = self.error {
            ui.add_space(10.0);
            ui.label(RichText::new(error).color(Color32::LIGHT_RED));
        }

        if let Some(ref outcome) = self.outcome {
            ui.add_space(10.0);
            ui.label(
                RichText::new(format!(
                    "Data loaded: {} records.",
                    outcome.table.record_count()
                ))
                .color(Color32::LIGHT_GREEN),
            );

            ui.add_space(10.0);
            ui.label(RichText::new(&outcome.report).monospace());

            ui.add_space(10.0);
            draw_risk_chart(ui, outcome.summary.risk_percent);

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(10.0);
            render_table_preview(ui, outcome);
        }
    }

    /// Open file dialog and run the analysis
    fn open_file_dialog(&mut self, config: &Config) {
        let file = rfd::FileDialog::new()
            .add_filter("Delimited table", &["csv", "txt"])
            .set_title("Select fleet table")
            .pick_file();

        if let Some(path) = file {
            match run_fleet_analysis(&path, config.language) {
                Ok(outcome) => {
                    self.outcome = Some(outcome);
                    self.error = None;
                }
                Err(e) => {
                    self.outcome = None;
                    self.error = Some(format!("Could not analyze file: {}", e));
                }
            }
        }
    }
}

/// Preview of the loaded table; the resolved identifier column is marked
fn render_table_preview(ui: &mut Ui, outcome: &FleetOutcome) {
    let table = &outcome.table;
    let id_column = identifier_column(&table.headers);

    ui.label(RichText::new("Table preview").strong());
    ui.add_space(5.0);

    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().at_least(80.0), table.headers.len())
        .header(20.0, |mut header| {
            for (i, name) in table.headers.iter().enumerate() {
                header.col(|ui| {
                    if i == id_column {
                        ui.strong(format!("{} (id)", name));
                    } else {
                        ui.strong(name);
                    }
                });
            }
        })
        .body(|mut body| {
            for row in table.rows.iter().take(PREVIEW_ROWS) {
                body.row(18.0, |mut table_row| {
                    for cell in row {
                        table_row.col(|ui| {
                            ui.label(cell);
                        });
                    }
                });
            }
        });

    if table.record_count() > PREVIEW_ROWS {
        ui.add_space(5.0);
        ui.label(
            RichText::new(format!(
                "... {} more rows",
                table.record_count() - PREVIEW_ROWS
            ))
            .color(Color32::GRAY)
            .small(),
        );
    }
}

/// Two-slice proportion chart (risk vs healthy) with percentage labels
fn draw_risk_chart(ui: &mut Ui, risk_percent: f64) {
    let (response, painter) =
        ui.allocate_painter(egui::Vec2::new(240.0, 200.0), egui::Sense::hover());
    let rect = response.rect;
    let center = rect.center();
    let radius = rect.height() * 0.42;

    let slices = [
        ("Risk", risk_percent as f32, RISK_COLOR),
        ("Healthy", 100.0 - risk_percent as f32, HEALTHY_COLOR),
    ];

    // Wedges are built from small triangles so slices over 180 degrees
    // render correctly
    let mut start_angle = -TAU / 4.0;
    for (label, percent, color) in slices {
        let sweep = TAU * percent / 100.0;
        let steps = (sweep / 0.05).ceil().max(1.0) as usize;
        for step in 0..steps {
            let a0 = start_angle + sweep * step as f32 / steps as f32;
            let a1 = start_angle + sweep * (step + 1) as f32 / steps as f32;
            painter.add(egui::Shape::convex_polygon(
                vec![
                    center,
                    center + radius * egui::Vec2::new(a0.cos(), a0.sin()),
                    center + radius * egui::Vec2::new(a1.cos(), a1.sin()),
                ],
                color,
                egui::Stroke::NONE,
            ));
        }

        if percent > 0.0 {
            let mid = start_angle + sweep / 2.0;
            let label_pos = center + radius * 0.6 * egui::Vec2::new(mid.cos(), mid.sin());
            painter.text(
                label_pos,
                egui::Align2::CENTER_CENTER,
                format!("{} {:.1}%", label, percent),
                egui::FontId::proportional(13.0),
                Color32::WHITE,
            );
        }

        start_angle += sweep;
    }
}
