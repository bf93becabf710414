use serde::Serialize;

use crate::data::FlightSeries;
use crate::processing::events::ApogeeEvent;

/// Summary figures for a loaded flight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightStats {
    pub sample_count: usize,
    pub duration_s: f64,
    pub data_rate_hz: f64,
    pub apogee_altitude_m: f64,
    pub apogee_time_s: f64,
    pub max_climb_rate_ms: f64,
    pub peak_deceleration_ms2: f64,
}

impl FlightStats {
    /// Compute summary figures from the series, its derivatives and the
    /// already-detected apogee.
    pub fn compute(
        series: &FlightSeries,
        velocity: &[f64],
        acceleration: &[f64],
        apogee: &ApogeeEvent,
    ) -> Self {
        let n = series.len();
        let duration_s = match (series.time_s.first(), series.time_s.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        };
        let data_rate_hz = if duration_s > 0.0 {
            (n.saturating_sub(1)) as f64 / duration_s
        } else {
            0.0
        };

        let max_climb_rate_ms = velocity.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let peak_deceleration_ms2 = acceleration.iter().copied().fold(f64::INFINITY, f64::min);

        Self {
            sample_count: n,
            duration_s,
            data_rate_hz,
            apogee_altitude_m: apogee.altitude_m,
            apogee_time_s: apogee.time_s,
            max_climb_rate_ms,
            peak_deceleration_ms2,
        }
    }

    /// Format as a multi-line report string.
    pub fn report(&self) -> String {
        format!(
            "Samples: {}\nDuration: {:.2} s\nData rate: {:.1} Hz\nApogee: {:.1} m @ {:.2} s\nMax climb rate: {:.1} m/s\nPeak deceleration: {:.1} m/s\u{00b2}",
            self.sample_count,
            self.duration_s,
            self.data_rate_hz,
            self.apogee_altitude_m,
            self.apogee_time_s,
            self.max_climb_rate_ms,
            self.peak_deceleration_ms2,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::events::detect_apogee;
    use crate::processing::kinematics::compute_kinematics;

    #[test]
    fn stats_of_a_simple_hop() {
        let series = FlightSeries {
            time_s: vec![0.0, 1.0, 2.0, 3.0, 4.0],
            altitude_m: vec![0.0, 10.0, 20.0, 10.0, 0.0],
        };
        let kin = compute_kinematics(&series.time_s, &series.altitude_m).unwrap();
        let apogee = detect_apogee(&series.time_s, &series.altitude_m).unwrap();
        let stats = FlightStats::compute(&series, &kin.velocity, &kin.acceleration, &apogee);

        assert_eq!(stats.sample_count, 5);
        assert!((stats.duration_s - 4.0).abs() < 1e-12);
        assert!((stats.data_rate_hz - 1.0).abs() < 1e-12);
        assert!((stats.apogee_altitude_m - 20.0).abs() < 1e-12);
        assert!(stats.max_climb_rate_ms >= 5.0);
        assert!(stats.peak_deceleration_ms2 < 0.0);
    }

    #[test]
    fn report_carries_the_key_figures() {
        let stats = FlightStats {
            sample_count: 1200,
            duration_s: 12.0,
            data_rate_hz: 100.0,
            apogee_altitude_m: 183.4,
            apogee_time_s: 6.05,
            max_climb_rate_ms: 59.8,
            peak_deceleration_ms2: -61.2,
        };
        let report = stats.report();
        assert!(report.contains("Samples: 1200"));
        assert!(report.contains("Apogee: 183.4 m @ 6.05 s"));
        assert!(report.contains("Max climb rate: 59.8 m/s"));
        assert!(report.contains("Peak deceleration: -61.2 m/s"));
    }
}
