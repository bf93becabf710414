use crate::data::FlightSeries;
use crate::processing::FlightAnalysis;

/// A loaded flight and everything derived from it. The analysis is replaced
/// wholesale whenever the detection parameters change.
#[derive(Debug, Clone)]
pub struct FlightDocument {
    pub file_name: String,
    pub series: FlightSeries,
    pub analysis: FlightAnalysis,
}
