pub mod plot_panel;
pub mod stats_panel;
