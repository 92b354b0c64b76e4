//! Apparent position of the Sun.

use crate::angle::{dcos, fix_angle};
use crate::constants::{
    EARTH_ECCENTRICITY, SUN_ANGULAR_SIZE, SUN_ECLIPTIC_LONGITUDE_EPOCH,
    SUN_ECLIPTIC_LONGITUDE_PERIGEE, SUN_SEMI_MAJOR_AXIS, TROPICAL_YEAR,
};
use crate::kepler::solve_kepler;

/// Position of the Sun as seen from the Earth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Mean anomaly, in degrees.
    pub mean_anomaly: f64,
    /// True anomaly, in degrees.
    pub true_anomaly: f64,
    /// Geocentric ecliptic longitude, in degrees.
    pub ecliptic_longitude: f64,
    /// Distance from the Earth, in kilometers.
    pub distance_km: f64,
    /// Angular diameter, in degrees.
    pub angular_diameter_deg: f64,
}

impl SunPosition {
    /// Computes the Sun's position `day` days after the orbital epoch.
    pub fn at(day: f64) -> Self {
        let mean_longitude = fix_angle(360.0 / TROPICAL_YEAR * day);
        let mean_anomaly = fix_angle(
            mean_longitude + SUN_ECLIPTIC_LONGITUDE_EPOCH - SUN_ECLIPTIC_LONGITUDE_PERIGEE,
        );

        let eccentric_anomaly = solve_kepler(mean_anomaly.to_radians(), EARTH_ECCENTRICITY);
        let half_true_anomaly = (((1.0 + EARTH_ECCENTRICITY) / (1.0 - EARTH_ECCENTRICITY))
            .sqrt()
            * (eccentric_anomaly / 2.0).tan())
        .atan();
        let true_anomaly = 2.0 * half_true_anomaly.to_degrees();
        let ecliptic_longitude = fix_angle(true_anomaly + SUN_ECLIPTIC_LONGITUDE_PERIGEE);

        // Ratio of the semi-major axis to the current distance.
        let distance_factor = (1.0 + EARTH_ECCENTRICITY * dcos(true_anomaly))
            / (1.0 - EARTH_ECCENTRICITY * EARTH_ECCENTRICITY);

        Self {
            mean_anomaly,
            true_anomaly,
            ecliptic_longitude,
            distance_km: SUN_SEMI_MAJOR_AXIS / distance_factor,
            angular_diameter_deg: distance_factor * SUN_ANGULAR_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn epoch_regression() {
        let sun = SunPosition::at(0.0);
        assert_relative_eq!(sun.mean_anomaly, 356.237137, max_relative = 1e-12);
        assert_relative_eq!(sun.distance_km, 147_089_813.745_921_25, max_relative = 1e-9);
        assert_relative_eq!(sun.angular_diameter_deg, 0.542_171_819_034_011_1, max_relative = 1e-9);
    }

    #[test]
    fn distance_stays_between_apsides() {
        let perihelion = SUN_SEMI_MAJOR_AXIS * (1.0 - EARTH_ECCENTRICITY);
        let aphelion = SUN_SEMI_MAJOR_AXIS * (1.0 + EARTH_ECCENTRICITY);
        for day in 0..366 {
            let sun = SunPosition::at(day as f64);
            assert!(sun.distance_km >= perihelion - 1.0, "day {day}");
            assert!(sun.distance_km <= aphelion + 1.0, "day {day}");
            assert!((0.0..360.0).contains(&sun.ecliptic_longitude));
        }
    }

    #[test]
    fn longitude_advances_about_one_degree_per_day() {
        let a = SunPosition::at(100.0).ecliptic_longitude;
        let b = SunPosition::at(101.0).ecliptic_longitude;
        let step = fix_angle(b - a);
        assert!((0.9..1.1).contains(&step), "step {step}");
    }
}
