//! Instantaneous state of the Moon.

use std::fmt;

use cylenian_calendar::Jdn;

use crate::angle::{dcos, dsin, fix_angle};
use crate::constants::{
    ANNUAL_EQUATION, EPOCH, EQUATION_OF_CENTER, EVECTION, FOURTH_CORRECTION, MOON_ANGULAR_SIZE,
    MOON_DAILY_MOTION, MOON_ECCENTRICITY, MOON_MEAN_LONGITUDE_EPOCH, MOON_MEAN_PERIGEE_EPOCH,
    MOON_PERIGEE_DAILY_MOTION, MOON_SEMI_MAJOR_AXIS, SYNODIC_MONTH, THIRD_CORRECTION, VARIATION,
};
use crate::phase::Phase;
use crate::sun::SunPosition;

/// Phase, illumination and distances of the Moon and Sun at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonState {
    /// Named phase.
    pub phase: Phase,
    /// Fraction of the lunation elapsed since new Moon, in `[0, 1)`.
    pub phase_fraction: f64,
    /// Illuminated fraction of the disk, in `[0, 1]`.
    pub illumination: f64,
    /// Days since new Moon, in `[0, SYNODIC_MONTH)`.
    pub age_days: f64,
    /// Distance from the center of the Earth, in kilometers.
    pub distance_km: f64,
    /// Angular diameter, in degrees.
    pub angular_diameter_deg: f64,
    /// Distance of the Sun, in kilometers.
    pub sun_distance_km: f64,
    /// Angular diameter of the Sun, in degrees.
    pub sun_angular_diameter_deg: f64,
}

impl MoonState {
    /// Computes the state at a Julian date.
    pub fn at(julian_date: f64) -> Self {
        let day = julian_date - EPOCH;
        let sun = SunPosition::at(day);

        let mean_longitude = fix_angle(MOON_DAILY_MOTION * day + MOON_MEAN_LONGITUDE_EPOCH);
        let mean_anomaly =
            fix_angle(mean_longitude - MOON_PERIGEE_DAILY_MOTION * day - MOON_MEAN_PERIGEE_EPOCH);

        let evection = EVECTION * dsin(2.0 * (mean_longitude - sun.ecliptic_longitude) - mean_anomaly);
        let annual_equation = ANNUAL_EQUATION * dsin(sun.mean_anomaly);
        let third_correction = THIRD_CORRECTION * dsin(sun.mean_anomaly);
        let corrected_anomaly = mean_anomaly + evection - annual_equation - third_correction;

        let equation_of_center = EQUATION_OF_CENTER * dsin(corrected_anomaly);
        let fourth_correction = FOURTH_CORRECTION * dsin(2.0 * corrected_anomaly);
        let corrected_longitude =
            mean_longitude + evection + equation_of_center - annual_equation + fourth_correction;
        let variation = VARIATION * dsin(2.0 * (corrected_longitude - sun.ecliptic_longitude));
        let true_longitude = corrected_longitude + variation;

        let elongation = fix_angle(true_longitude - sun.ecliptic_longitude);
        let phase_fraction = elongation / 360.0;

        let distance_km = MOON_SEMI_MAJOR_AXIS * (1.0 - MOON_ECCENTRICITY * MOON_ECCENTRICITY)
            / (1.0 + MOON_ECCENTRICITY * dcos(corrected_anomaly + equation_of_center));

        Self {
            phase: Phase::from_fraction(phase_fraction),
            phase_fraction,
            illumination: (1.0 - dcos(elongation)) / 2.0,
            age_days: SYNODIC_MONTH * phase_fraction,
            distance_km,
            angular_diameter_deg: MOON_ANGULAR_SIZE * MOON_SEMI_MAJOR_AXIS / distance_km,
            sun_distance_km: sun.distance_km,
            sun_angular_diameter_deg: sun.angular_diameter_deg,
        }
    }

    /// Formats the state as `Full Moon, 99.9% illuminated, 14.77 days old`.
    pub fn format(&self) -> String {
        format!(
            "{}, {:.1}% illuminated, {:.2} days old",
            self.phase,
            self.illumination * 100.0,
            self.age_days
        )
    }
}

impl fmt::Display for MoonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// Computes the state of the Moon at noon of `jdn`.
pub fn moon_state(jdn: Jdn) -> MoonState {
    MoonState::at(jdn.as_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn epoch_regression() {
        let state = MoonState::at(EPOCH);
        assert_eq!(state.phase, Phase::WaxingGibbous);
        assert_relative_eq!(state.phase_fraction, 0.419_848_450_277_324_4, max_relative = 1e-9);
        assert_relative_eq!(state.illumination, 0.937_923_774_881_676_9, max_relative = 1e-9);
        assert_relative_eq!(state.age_days, 12.398_371_893_075_1, max_relative = 1e-9);
        assert_relative_eq!(state.distance_km, 379_955.370_296_055_74, max_relative = 1e-9);
        assert_relative_eq!(state.angular_diameter_deg, 0.524_161_977_089_095_6, max_relative = 1e-9);
        assert_relative_eq!(state.sun_distance_km, 147_089_813.745_921_25, max_relative = 1e-9);
        assert_relative_eq!(state.sun_angular_diameter_deg, 0.542_171_819_034_011_1, max_relative = 1e-9);
    }

    #[test]
    fn january_2000_lunation() {
        // New Moon 2000-01-06 18:14 UTC, full Moon 2000-01-21 04:40 UTC.
        let new = MoonState::at(2_451_550.26);
        assert_eq!(new.phase, Phase::New);
        assert!(new.illumination < 1e-4);
        let full = MoonState::at(2_451_564.69);
        assert_eq!(full.phase, Phase::Full);
        assert!(full.illumination > 0.9999);
    }

    #[test]
    fn noon_of_jdn() {
        let state = moon_state(Jdn::new(2_451_545));
        assert_eq!(state.phase, Phase::WaningCrescent);
        assert_relative_eq!(state.age_days, 24.831_454_575_725_566, max_relative = 1e-9);
        assert_relative_eq!(state.illumination, 0.229_776_782_890_490_53, max_relative = 1e-9);
    }

    #[test]
    fn format() {
        let state = moon_state(Jdn::new(2_458_110));
        assert_eq!(state.to_string(), "Waxing Crescent, 15.2% illuminated, 3.76 days old");
    }
}
