use crate::state::app_state::AppState;

/// What the stats sidebar asks the parent to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsAction {
    None,
    /// Detection parameters changed; rerun the pipeline on the loaded flight.
    Reanalyze,
}

fn stat_row(ui: &mut egui::Ui, label: &str, value: String) {
    ui.label(egui::RichText::new(label).weak());
    ui.monospace(value);
    ui.end_row();
}

/// Render the flight-summary sidebar. Returns `Reanalyze` when the user
/// edited a detection parameter.
pub fn show_stats_panel(ui: &mut egui::Ui, state: &mut AppState) -> StatsAction {
    let mut action = StatsAction::None;

    ui.add_space(4.0);
    ui.heading("Flight Summary");
    ui.add_space(4.0);

    match &state.flight {
        Some(flight) => {
            let stats = &flight.analysis.stats;
            egui::Grid::new("flight_stats")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    stat_row(ui, "Samples", format!("{}", stats.sample_count));
                    stat_row(ui, "Duration", format!("{:.2} s", stats.duration_s));
                    stat_row(ui, "Data rate", format!("{:.1} Hz", stats.data_rate_hz));
                    stat_row(
                        ui,
                        "Apogee",
                        format!(
                            "{:.1} m @ {:.2} s",
                            stats.apogee_altitude_m, stats.apogee_time_s
                        ),
                    );
                    stat_row(
                        ui,
                        "Max climb rate",
                        format!("{:.1} m/s", stats.max_climb_rate_ms),
                    );
                    stat_row(
                        ui,
                        "Peak deceleration",
                        format!("{:.1} m/s\u{00b2}", stats.peak_deceleration_ms2),
                    );
                });

            ui.add_space(8.0);
            if ui
                .button("Copy Summary")
                .on_hover_text("Copy the summary figures to the clipboard")
                .clicked()
            {
                ui.ctx().copy_text(stats.report());
            }

            ui.add_space(8.0);
            match flight.analysis.deploy {
                Some(deploy) => {
                    ui.label(format!(
                        "Drogue deploy inferred at {:.2} s (sample {})",
                        deploy.time_s, deploy.index
                    ));
                }
                None => {
                    ui.label(egui::RichText::new("No drogue deploy detected.").weak());
                }
            }
        }
        None => {
            ui.label(egui::RichText::new("No file loaded.").weak());
        }
    }

    ui.add_space(12.0);
    ui.separator();
    ui.add_space(4.0);
    ui.heading("Detection");
    ui.add_space(4.0);

    egui::Grid::new("deploy_config")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            ui.label("Lookahead (samples)");
            let lookahead = ui.add(
                egui::DragValue::new(&mut state.deploy_config.lookahead).range(1..=100_000),
            );
            ui.end_row();

            ui.label("Threshold (m/s\u{00b2})");
            let threshold = ui.add(
                egui::DragValue::new(&mut state.deploy_config.threshold)
                    .speed(0.5)
                    .range(-1000.0..=0.0),
            );
            ui.end_row();

            if lookahead.changed() || threshold.changed() {
                action = StatsAction::Reanalyze;
            }
        });

    ui.add_space(12.0);
    ui.separator();
    ui.add_space(4.0);
    ui.heading("Overlays");
    ui.add_space(4.0);
    ui.checkbox(&mut state.show_velocity, "Velocity");
    ui.checkbox(&mut state.show_acceleration, "Acceleration");

    action
}
