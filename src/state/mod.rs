pub mod app_state;
pub mod flight;
pub mod theme;
