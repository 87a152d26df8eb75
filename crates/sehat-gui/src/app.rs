//! Main application structure with tab navigation

use eframe::egui;
use sehat_app::config::Config;

use crate::diagnose_panel::DiagnosePanel;
use crate::fleet_panel::FleetPanel;
use crate::settings_panel::SettingsPanel;

/// Application tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Diagnose,
    Fleet,
    Settings,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Diagnose => "Diagnose",
            Tab::Fleet => "Fleet",
            Tab::Settings => "Settings",
        }
    }
}

/// Main application state
pub struct SehatApp {
    /// Currently selected tab
    current_tab: Tab,
    /// Diagnose panel state
    diagnose_panel: DiagnosePanel,
    /// Fleet panel state
    fleet_panel: FleetPanel,
    /// Settings panel state
    settings_panel: SettingsPanel,
    /// Application configuration
    config: Config,
}

impl SehatApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Setup Devanagari fonts for the Hindi templates
        let mut fonts = egui::FontDefinitions::default();

        if let Some(font_data) = Self::load_system_font() {
            fonts.font_data.insert(
                "devanagari".to_owned(),
                egui::FontData::from_owned(font_data).into(),
            );

            fonts
                .families
                .entry(egui::FontFamily::Proportional)
                .or_default()
                .push("devanagari".to_owned());

            // Also for monospace (reports render monospaced)
            fonts
                .families
                .entry(egui::FontFamily::Monospace)
                .or_default()
                .push("devanagari".to_owned());
        }

        cc.egui_ctx.set_fonts(fonts);

        // Load configuration
        let config = Config::load().unwrap_or_default();

        let settings_panel = SettingsPanel::new(&config);

        Self {
            current_tab: Tab::default(),
            diagnose_panel: DiagnosePanel::new(),
            fleet_panel: FleetPanel::new(),
            settings_panel,
            config,
        }
    }

    /// Load a system font covering Devanagari
    fn load_system_font() -> Option<Vec<u8>> {
        let font_paths = [
            "C:/Windows/Fonts/Nirmala.ttc", // Nirmala UI
            "/usr/share/fonts/truetype/noto/NotoSansDevanagari-Regular.ttf",
            "/usr/share/fonts/noto/NotoSansDevanagari-Regular.ttf",
            "/System/Library/Fonts/Supplemental/DevanagariMT.ttc",
        ];

        for path in &font_paths {
            if let Ok(data) = std::fs::read(path) {
                return Some(data);
            }
        }
        None
    }

    /// Render the tab bar
    fn render_tab_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;

            for tab in [Tab::Diagnose, Tab::Fleet, Tab::Settings] {
                let selected = self.current_tab == tab;
                if ui.selectable_label(selected, tab.label()).clicked() {
                    self.current_tab = tab;
                }
                ui.add_space(8.0);
            }
        });
    }
}

impl eframe::App for SehatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top panel with tab bar
        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_tab_bar(ui);
            ui.add_space(4.0);
        });

        // Central panel with selected tab content
        egui::CentralPanel::default().show(ctx, |ui| match self.current_tab {
            Tab::Diagnose => {
                self.diagnose_panel.ui(ui, &self.config);
            }
            Tab::Fleet => {
                self.fleet_panel.ui(ui, &self.config);
            }
            Tab::Settings => {
                self.settings_panel.ui(ui, &mut self.config);
            }
        });
    }
}
