//! Degree-based trigonometry.
//!
//! The orbital model is written in degrees; these helpers are the only place
//! angles cross over to the radians `f64::sin` and `f64::cos` expect.

/// Sine of an angle in degrees.
pub fn dsin(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

/// Cosine of an angle in degrees.
pub fn dcos(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

/// Normalizes an angle in degrees to `[0, 360)`.
pub fn fix_angle(degrees: f64) -> f64 {
    let fixed = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if fixed >= 360.0 { 0.0 } else { fixed }
}
