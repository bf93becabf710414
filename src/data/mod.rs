pub mod loader;

pub use loader::{FlightSeries, LoadError};
