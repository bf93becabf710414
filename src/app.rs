use std::path::Path;
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::data::loader::{self, FlightSeries, LoadError};
use crate::processing;
use crate::state::app_state::{AppState, VERSION};
use crate::state::flight::FlightDocument;
use crate::ui::plot_panel;
use crate::ui::stats_panel::{self, StatsAction};

/// Pending async file load result.
struct PendingLoad {
    file_name: String,
    result: Arc<Mutex<Option<Result<FlightSeries, LoadError>>>>,
}

/// The main Red Box viewer application.
pub struct FlightApp {
    pub state: AppState,
    /// An error message to display until dismissed.
    pub error_message: Option<String>,
    /// Whether to show the About window (hidden menu).
    pub show_about: bool,
    /// Async file load in progress.
    pending_load: Option<PendingLoad>,
}

impl FlightApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let state = AppState::new();

        // --- Global UI style improvements ---
        let ctx = &cc.egui_ctx;
        let mut style = (*ctx.style()).clone();

        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::proportional(15.0),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::proportional(14.5),
        );
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::proportional(20.0),
        );
        style.text_styles.insert(
            egui::TextStyle::Monospace,
            egui::FontId::monospace(13.5),
        );

        style.spacing.button_padding = egui::vec2(10.0, 5.0);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.window_margin = egui::Margin::same(12);

        ctx.set_style(style);
        ctx.set_visuals(state.theme.visuals());

        Self {
            state,
            error_message: None,
            show_about: false,
            pending_load: None,
        }
    }

    /// Open a native file dialog and load the chosen flight CSV.
    fn open_file_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .add_filter("All Files", &["*"])
            .pick_file()
        {
            self.load_file(&path);
        }
    }

    /// Parse a flight CSV on a worker thread so the UI stays responsive.
    fn load_file(&mut self, path: &Path) {
        let file_name = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("flight.csv")
            .to_string();
        let path_buf = path.to_path_buf();
        let result: Arc<Mutex<Option<Result<FlightSeries, LoadError>>>> =
            Arc::new(Mutex::new(None));
        let result_clone = Arc::clone(&result);

        std::thread::spawn(move || {
            let loaded = loader::load_flight_csv(&path_buf);
            *result_clone.lock().unwrap() = Some(loaded);
        });

        self.pending_load = Some(PendingLoad { file_name, result });
    }

    /// Run the detection pipeline on a freshly loaded series and install it
    /// as the current flight.
    fn install_flight(&mut self, file_name: String, series: FlightSeries) {
        match processing::analyze(&series, &self.state.deploy_config) {
            Ok(analysis) => {
                tracing::info!(
                    "Loaded {file_name}: {} samples, apogee {:.1} m at {:.2} s, deploy {}",
                    series.len(),
                    analysis.apogee.altitude_m,
                    analysis.apogee.time_s,
                    analysis
                        .deploy
                        .map(|d| format!("at {:.2} s", d.time_s))
                        .unwrap_or_else(|| "not detected".to_string()),
                );
                self.state.flight = Some(FlightDocument {
                    file_name,
                    series,
                    analysis,
                });
            }
            Err(e) => {
                tracing::error!("Analysis of {file_name} failed: {e}");
                self.error_message = Some(format!("Cannot analyze {file_name}: {e}"));
            }
        }
    }

    /// Rerun the pipeline on the current flight with the current parameters.
    fn reanalyze(&mut self) {
        let Some(flight) = self.state.flight.as_mut() else {
            return;
        };
        match processing::analyze(&flight.series, &self.state.deploy_config) {
            Ok(analysis) => flight.analysis = analysis,
            // The series analyzed fine before; a parameter change cannot
            // introduce an input error, but surface it if it happens.
            Err(e) => self.error_message = Some(format!("Re-analysis failed: {e}")),
        }
    }
}

impl eframe::App for FlightApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(self.state.theme.visuals());

        // ------------------------------------------------------------------
        // 1. Handle dropped files
        // ------------------------------------------------------------------
        let mut dropped_path: Option<std::path::PathBuf> = None;
        ctx.input(|i| {
            for file in &i.raw.dropped_files {
                if let Some(path) = &file.path {
                    let ext = path
                        .extension()
                        .and_then(|e| e.to_str())
                        .map(|e| e.to_lowercase())
                        .unwrap_or_default();
                    if ext == "csv" {
                        dropped_path = Some(path.clone());
                    }
                }
            }
        });
        if let Some(path) = dropped_path {
            self.load_file(&path);
        }

        // ------------------------------------------------------------------
        // 2. Header panel
        // ------------------------------------------------------------------
        let mut open_file = false;
        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .inner_margin(egui::Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.visuals_mut().override_text_color =
                        Some(ui.visuals().strong_text_color());
                    let heading_response = ui.heading("Red Box");
                    ui.visuals_mut().override_text_color = None;
                    heading_response.context_menu(|ui| {
                        if ui.button("About Red Box").clicked() {
                            self.show_about = true;
                            ui.close_menu();
                        }
                    });

                    ui.separator();

                    if ui.button("Load Flight CSV").clicked() {
                        open_file = true;
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let next_theme = self.state.theme.toggle();
                        if ui.button(format!("{} Mode", next_theme.label())).clicked() {
                            self.state.theme = next_theme;
                        }

                        ui.separator();
                        ui.small(format!("v{VERSION}"));
                    });
                });
            });
        if open_file {
            self.open_file_dialog();
        }

        // ------------------------------------------------------------------
        // 3. Footer panel: info label and error banner
        // ------------------------------------------------------------------
        egui::TopBottomPanel::bottom("footer")
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .inner_margin(egui::Margin::symmetric(16, 6)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let info = match &self.state.flight {
                        Some(flight) => format!(
                            "Loaded: {} ({} samples)",
                            flight.file_name,
                            flight.series.len()
                        ),
                        None => "No file loaded".to_string(),
                    };
                    ui.label(egui::RichText::new(info).weak());

                    if let Some(msg) = &self.error_message {
                        ui.separator();
                        ui.colored_label(egui::Color32::from_rgb(255, 80, 80), msg);
                        if ui.small_button("dismiss").clicked() {
                            self.error_message = None;
                        }
                    }
                });
            });

        // ------------------------------------------------------------------
        // 4. Stats sidebar and plot
        // ------------------------------------------------------------------
        let mut action = StatsAction::None;
        egui::SidePanel::right("stats_sidebar")
            .default_width(260.0)
            .show(ctx, |ui| {
                action = stats_panel::show_stats_panel(ui, &mut self.state);
            });
        if action == StatsAction::Reanalyze {
            self.reanalyze();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            plot_panel::show_plot_panel(ui, &self.state);
        });

        // ------------------------------------------------------------------
        // 5. Poll async file load
        // ------------------------------------------------------------------
        if let Some(ref pending) = self.pending_load {
            let mut lock = pending.result.lock().unwrap();
            if let Some(result) = lock.take() {
                let file_name = pending.file_name.clone();
                drop(lock);
                self.pending_load = None;
                match result {
                    Ok(series) => self.install_flight(file_name, series),
                    Err(e) => {
                        tracing::error!("Failed to load {file_name}: {e}");
                        self.error_message = Some(format!("Failed to load {file_name}: {e}"));
                    }
                }
            }
        }

        // Show loading indicator
        if self.pending_load.is_some() {
            egui::Window::new("Loading")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Loading file...");
                    });
                });
            ctx.request_repaint();
        }

        // ------------------------------------------------------------------
        // 6. About window (hidden menu)
        // ------------------------------------------------------------------
        if self.show_about {
            egui::Window::new("About Red Box")
                .open(&mut self.show_about)
                .collapsible(false)
                .resizable(false)
                .default_width(320.0)
                .show(ctx, |ui| {
                    ui.heading("Red Box Flight Analyzer");
                    ui.label(format!("Version: {VERSION}"));
                    ui.add_space(4.0);
                    ui.label("Plots flight-telemetry CSVs and marks apogee and the inferred drogue-deployment point.");
                    ui.add_space(10.0);
                    ui.label("Expected columns: time_s, altitude_m");
                    ui.add_space(10.0);
                    ui.label("Right-click the title for this menu.");
                });
        }
    }
}
