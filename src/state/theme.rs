use egui::{Color32, Visuals};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => Visuals::dark(),
            Theme::Light => Visuals::light(),
        }
    }

    /// Trace color for the altitude line.
    pub fn altitude_color(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_rgb(100, 160, 230),
            Theme::Light => Color32::from_rgb(31, 119, 180),
        }
    }

    /// Trace color for the velocity overlay.
    pub fn velocity_color(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_rgb(120, 200, 120),
            Theme::Light => Color32::from_rgb(44, 160, 44),
        }
    }

    /// Trace color for the acceleration overlay.
    pub fn acceleration_color(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_rgb(190, 140, 220),
            Theme::Light => Color32::from_rgb(148, 103, 189),
        }
    }

    /// Marker color for the apogee point.
    pub fn apogee_color(&self) -> Color32 {
        Color32::from_rgb(220, 60, 60)
    }

    /// Marker color for the drogue-deploy line.
    pub fn deploy_color(&self) -> Color32 {
        Color32::from_rgb(255, 165, 0)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}
