use crate::processing::events::DeployConfig;
use crate::state::flight::FlightDocument;
use crate::state::theme::Theme;

pub const VERSION: &str = "0.1.0";

pub struct AppState {
    pub theme: Theme,
    /// The currently loaded flight, if any. Single-flight tool: loading a
    /// new file replaces this.
    pub flight: Option<FlightDocument>,
    pub deploy_config: DeployConfig,
    pub show_velocity: bool,
    pub show_acceleration: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            flight: None,
            deploy_config: DeployConfig::default(),
            show_velocity: false,
            show_acceleration: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
