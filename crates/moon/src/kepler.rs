//! Kepler's equation solver.

use tracing::{trace, warn};

/// Convergence threshold on the Newton correction, in radians.
pub const TOLERANCE: f64 = 1e-6;

/// Hard cap on Newton iterations.
pub const MAX_ITERATIONS: usize = 100;

/// Solves `E - e·sin(E) = M` for the eccentric anomaly `E`.
///
/// Both anomalies are in radians. Newton's method starts from `E = M` and
/// stops once a correction is no larger than [`TOLERANCE`]. For the
/// eccentricities of the Earth and Moon that takes a handful of steps; if
/// [`MAX_ITERATIONS`] is reached anyway the last estimate is returned.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let mut e = mean_anomaly;
    for iteration in 1..=MAX_ITERATIONS {
        let delta = e - eccentricity * e.sin() - mean_anomaly;
        e -= delta / (1.0 - eccentricity * e.cos());
        if delta.abs() <= TOLERANCE {
            trace!(iteration, eccentric_anomaly = e, "kepler converged");
            return e;
        }
    }
    warn!(
        mean_anomaly,
        eccentricity,
        max_iterations = MAX_ITERATIONS,
        "kepler solver hit iteration cap"
    );
    e
}
