//! Orbital elements for epoch 1980 January 0.0.

/// Julian date of the epoch, 1980 January 0.0.
pub const EPOCH: f64 = 2_444_238.5;

/// Length of the tropical year in days.
pub const TROPICAL_YEAR: f64 = 365.2422;

/// Ecliptic longitude of the Sun at the epoch, in degrees.
pub const SUN_ECLIPTIC_LONGITUDE_EPOCH: f64 = 278.833540;

/// Ecliptic longitude of the Sun at perigee, in degrees.
pub const SUN_ECLIPTIC_LONGITUDE_PERIGEE: f64 = 282.596403;

/// Eccentricity of Earth's orbit.
pub const EARTH_ECCENTRICITY: f64 = 0.016718;

/// Semi-major axis of Earth's orbit, in kilometers.
pub const SUN_SEMI_MAJOR_AXIS: f64 = 1.49585e8;

/// Angular diameter of the Sun at the semi-major axis distance, in degrees.
pub const SUN_ANGULAR_SIZE: f64 = 0.533128;

/// Mean longitude of the Moon at the epoch, in degrees.
pub const MOON_MEAN_LONGITUDE_EPOCH: f64 = 64.975464;

/// Mean longitude of the Moon's perigee at the epoch, in degrees.
pub const MOON_MEAN_PERIGEE_EPOCH: f64 = 349.383063;

/// Daily motion of the Moon's mean longitude, in degrees.
pub const MOON_DAILY_MOTION: f64 = 13.1763966;

/// Daily motion of the Moon's perigee, in degrees.
pub const MOON_PERIGEE_DAILY_MOTION: f64 = 0.1114041;

/// Eccentricity of the Moon's orbit.
pub const MOON_ECCENTRICITY: f64 = 0.054900;

/// Angular diameter of the Moon at the semi-major axis distance, in degrees.
pub const MOON_ANGULAR_SIZE: f64 = 0.5181;

/// Semi-major axis of the Moon's orbit, in kilometers.
pub const MOON_SEMI_MAJOR_AXIS: f64 = 384_401.0;

/// Mean time from new Moon to new Moon, in days.
pub const SYNODIC_MONTH: f64 = 29.53058868;

// Empirical amplitudes of the lunar perturbation terms, in degrees.
pub(crate) const EVECTION: f64 = 1.2739;
pub(crate) const ANNUAL_EQUATION: f64 = 0.1858;
pub(crate) const THIRD_CORRECTION: f64 = 0.37;
pub(crate) const EQUATION_OF_CENTER: f64 = 6.2886;
pub(crate) const FOURTH_CORRECTION: f64 = 0.214;
pub(crate) const VARIATION: f64 = 0.6583;
