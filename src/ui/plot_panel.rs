use egui_plot::{Legend, Line, LineStyle, MarkerShape, Plot, PlotPoints, Points, VLine};

use crate::state::app_state::AppState;

/// Render the altitude-vs-time chart with event annotations.
pub fn show_plot_panel(ui: &mut egui::Ui, state: &AppState) {
    let Some(flight) = &state.flight else {
        ui.add_space(80.0);
        ui.vertical_centered(|ui| {
            ui.heading("Red Box Flight Analyzer");
            ui.add_space(12.0);
            ui.label(
                egui::RichText::new(
                    "Click \"Load Flight CSV\" above, or drag-and-drop a flight CSV to get started.",
                )
                .weak(),
            );
        });
        return;
    };

    let theme = &state.theme;
    let series = &flight.series;
    let analysis = &flight.analysis;

    let altitude: Vec<[f64; 2]> = series
        .time_s
        .iter()
        .zip(&series.altitude_m)
        .map(|(&t, &a)| [t, a])
        .collect();

    let plot = Plot::new("flight_plot")
        .legend(Legend::default())
        .x_axis_label("Time (s)")
        .y_axis_label("Altitude (m AGL)");

    plot.show(ui, |plot_ui| {
        plot_ui.line(
            Line::new(PlotPoints::from(altitude))
                .color(theme.altitude_color())
                .width(2.0)
                .name("Altitude"),
        );

        if state.show_velocity {
            let velocity: Vec<[f64; 2]> = series
                .time_s
                .iter()
                .zip(&analysis.velocity)
                .map(|(&t, &v)| [t, v])
                .collect();
            plot_ui.line(
                Line::new(PlotPoints::from(velocity))
                    .color(theme.velocity_color())
                    .name("Velocity (m/s)"),
            );
        }

        if state.show_acceleration {
            let acceleration: Vec<[f64; 2]> = series
                .time_s
                .iter()
                .zip(&analysis.acceleration)
                .map(|(&t, &a)| [t, a])
                .collect();
            plot_ui.line(
                Line::new(PlotPoints::from(acceleration))
                    .color(theme.acceleration_color())
                    .name("Acceleration (m/s\u{00b2})"),
            );
        }

        let apogee = analysis.apogee;
        plot_ui.points(
            Points::new(vec![[apogee.time_s, apogee.altitude_m]])
                .shape(MarkerShape::Circle)
                .radius(5.0)
                .color(theme.apogee_color())
                .name(format!("Apogee {:.1} m", apogee.altitude_m)),
        );

        if let Some(deploy) = analysis.deploy {
            plot_ui.vline(
                VLine::new(deploy.time_s)
                    .color(theme.deploy_color())
                    .style(LineStyle::dashed_loose())
                    .width(1.5)
                    .name("Drogue Deploy?"),
            );
        }
    });
}
