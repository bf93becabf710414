use crate::processing::InvalidInputError;

/// Velocity and acceleration derived from an altitude-vs-time series.
/// Both sequences have the same length as the input series.
#[derive(Debug, Clone, PartialEq)]
pub struct Kinematics {
    pub velocity: Vec<f64>,
    pub acceleration: Vec<f64>,
}

/// Numerical derivative of `values` with respect to `coords`.
///
/// Interior points use the three-point difference that supports non-uniform
/// spacing (exact for quadratics, reduces to a central difference on a
/// uniform grid); the two endpoints use one-sided first-order differences.
/// Output length equals input length.
///
/// Duplicate or non-monotonic coords are not validated; they produce
/// divisions by ~zero and garbage output rather than an error.
pub fn gradient(values: &[f64], coords: &[f64]) -> Result<Vec<f64>, InvalidInputError> {
    let n = values.len();
    if n != coords.len() {
        return Err(InvalidInputError(format!(
            "gradient: value/coord lengths differ ({n} vs {})",
            coords.len()
        )));
    }
    if n < 2 {
        return Err(InvalidInputError(format!(
            "gradient: need at least 2 samples, got {n}"
        )));
    }

    let mut out = vec![0.0; n];
    out[0] = (values[1] - values[0]) / (coords[1] - coords[0]);
    out[n - 1] = (values[n - 1] - values[n - 2]) / (coords[n - 1] - coords[n - 2]);

    for i in 1..n - 1 {
        let hd = coords[i] - coords[i - 1];
        let hs = coords[i + 1] - coords[i];
        out[i] = (hs * hs * values[i + 1] + (hd * hd - hs * hs) * values[i]
            - hd * hd * values[i - 1])
            / (hs * hd * (hd + hs));
    }

    Ok(out)
}

/// First and second derivatives of altitude with respect to time.
pub fn compute_kinematics(
    time_s: &[f64],
    altitude_m: &[f64],
) -> Result<Kinematics, InvalidInputError> {
    let velocity = gradient(altitude_m, time_s)?;
    let acceleration = gradient(&velocity, time_s)?;
    Ok(Kinematics {
        velocity,
        acceleration,
    })
}
