use serde::{Deserialize, Serialize};

use crate::processing::InvalidInputError;

/// The sample with maximum altitude. Ties resolve to the lowest index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApogeeEvent {
    pub index: usize,
    pub time_s: f64,
    pub altitude_m: f64,
}

/// Inferred drogue-deployment point: the strongest deceleration spike
/// shortly after apogee.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeployEvent {
    pub index: usize,
    pub time_s: f64,
}

/// Tuning knobs for drogue detection.
///
/// The defaults come from the Red Box flight profile and are unitless with
/// respect to sample rate: `lookahead` counts samples, `threshold` is in the
/// acceleration series' own units (m/s^2 for the standard CSV columns).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Maximum number of post-apogee samples to search.
    pub lookahead: usize,
    /// Deceleration threshold; the candidate must be below this to count.
    pub threshold: f64,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            lookahead: 500,
            threshold: -25.0,
        }
    }
}

/// Minimum number of samples after apogee before detection is attempted.
/// Shorter tails produce no event regardless of values.
pub const MIN_TAIL_LEN: usize = 11;

/// Find the apogee: the first sample holding the maximum altitude.
pub fn detect_apogee(
    time_s: &[f64],
    altitude_m: &[f64],
) -> Result<ApogeeEvent, InvalidInputError> {
    if time_s.len() != altitude_m.len() {
        return Err(InvalidInputError(format!(
            "apogee: time/altitude lengths differ ({} vs {})",
            time_s.len(),
            altitude_m.len()
        )));
    }
    if altitude_m.is_empty() {
        return Err(InvalidInputError("apogee: empty series".into()));
    }

    let mut index = 0;
    for (i, &alt) in altitude_m.iter().enumerate() {
        if alt > altitude_m[index] {
            index = i;
        }
    }

    Ok(ApogeeEvent {
        index,
        time_s: time_s[index],
        altitude_m: altitude_m[index],
    })
}

/// Look for a drogue-deployment signature after apogee.
///
/// Searches the first `config.lookahead` samples strictly after
/// `apogee_index` for the minimum acceleration. The event is reported only
/// when that minimum is below `config.threshold`; tails of fewer than
/// [`MIN_TAIL_LEN`] samples never produce an event.
pub fn detect_deploy_event(
    time_s: &[f64],
    acceleration: &[f64],
    apogee_index: usize,
    config: &DeployConfig,
) -> Option<DeployEvent> {
    let tail_start = apogee_index + 1;
    let tail = acceleration.get(tail_start..)?;
    if tail.len() < MIN_TAIL_LEN {
        return None;
    }

    let window = &tail[..config.lookahead.min(tail.len())];
    let mut rel_min = 0;
    for (i, &a) in window.iter().enumerate() {
        if a < window[rel_min] {
            rel_min = i;
        }
    }

    let index = tail_start + rel_min;
    if acceleration[index] < config.threshold {
        // A time series shorter than the acceleration series yields no
        // event rather than a panic.
        let time_s = *time_s.get(index)?;
        Some(DeployEvent { index, time_s })
    } else {
        None
    }
}
