pub mod events;
pub mod kinematics;
pub mod statistics;

use thiserror::Error;

use crate::data::FlightSeries;
use events::{ApogeeEvent, DeployConfig, DeployEvent};
use kinematics::Kinematics;
use statistics::FlightStats;

/// Raised when a series is empty, too short for the requested derivative, or
/// when paired sequences have different lengths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input: {0}")]
pub struct InvalidInputError(pub String);

/// Everything derived from one flight series.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightAnalysis {
    pub velocity: Vec<f64>,
    pub acceleration: Vec<f64>,
    pub apogee: ApogeeEvent,
    pub deploy: Option<DeployEvent>,
    pub stats: FlightStats,
}

/// Run the full detection pipeline: kinematics, apogee, drogue deploy,
/// summary stats. Stateless; identical inputs yield identical results.
pub fn analyze(
    series: &FlightSeries,
    config: &DeployConfig,
) -> Result<FlightAnalysis, InvalidInputError> {
    let Kinematics {
        velocity,
        acceleration,
    } = kinematics::compute_kinematics(&series.time_s, &series.altitude_m)?;
    let apogee = events::detect_apogee(&series.time_s, &series.altitude_m)?;
    let deploy = events::detect_deploy_event(&series.time_s, &acceleration, apogee.index, config);
    let stats = FlightStats::compute(series, &velocity, &acceleration, &apogee);

    Ok(FlightAnalysis {
        velocity,
        acceleration,
        apogee,
        deploy,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A 100 Hz profile: coast to apogee at t=6 s, gentle descent, then a
    /// sharp velocity kink at t=8 s (dv/dt = -60, well past the -25 default
    /// threshold and inside the 500-sample lookahead).
    fn drogue_flight() -> FlightSeries {
        let dt = 0.01;
        let mut time_s = Vec::with_capacity(2000);
        let mut altitude_m = Vec::with_capacity(2000);
        let mut alt = 0.0;
        for i in 0..2000 {
            let t = i as f64 * dt;
            let vel = if t < 6.0 {
                60.0 - 10.0 * t
            } else if t < 8.0 {
                -10.0 * (t - 6.0)
            } else if t < 8.1 {
                -20.0 - 60.0 * (t - 8.0)
            } else {
                -26.0
            };
            time_s.push(t);
            altitude_m.push(alt);
            alt += vel * dt;
        }
        FlightSeries { time_s, altitude_m }
    }

    #[test]
    fn pipeline_is_idempotent() {
        let series = drogue_flight();
        let config = DeployConfig::default();
        let first = analyze(&series, &config).unwrap();
        let second = analyze(&series, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn pipeline_finds_apogee_and_a_post_apogee_deploy() {
        let series = drogue_flight();
        let analysis = analyze(&series, &DeployConfig::default()).unwrap();

        let apogee = analysis.apogee;
        assert!(series
            .altitude_m
            .iter()
            .all(|&a| a <= apogee.altitude_m));

        let deploy = analysis.deploy.expect("drag spike should be detected");
        assert!(deploy.index > apogee.index);
        assert!(deploy.index <= apogee.index + 1 + 500);
        assert!(analysis.acceleration[deploy.index] < -25.0);
    }

    #[test]
    fn pipeline_rejects_single_sample() {
        let series = FlightSeries {
            time_s: vec![0.0],
            altitude_m: vec![0.0],
        };
        assert!(analyze(&series, &DeployConfig::default()).is_err());
    }
}
