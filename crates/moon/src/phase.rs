//! Named lunar phases.

use std::fmt;

/// Half-width of the band around each quarter point, as a fraction of a lunation.
pub const PHASE_TOLERANCE: f64 = 0.05;

/// One of the eight named phases of the Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

/// Exclusive upper bound of each band, in ascending order. The last band
/// wraps back to a new Moon.
const PHASE_BANDS: [(f64, Phase); 9] = [
    (0.00 + PHASE_TOLERANCE, Phase::New),
    (0.25 - PHASE_TOLERANCE, Phase::WaxingCrescent),
    (0.25 + PHASE_TOLERANCE, Phase::FirstQuarter),
    (0.50 - PHASE_TOLERANCE, Phase::WaxingGibbous),
    (0.50 + PHASE_TOLERANCE, Phase::Full),
    (0.75 - PHASE_TOLERANCE, Phase::WaningGibbous),
    (0.75 + PHASE_TOLERANCE, Phase::LastQuarter),
    (1.00 - PHASE_TOLERANCE, Phase::WaningCrescent),
    (1.00 + PHASE_TOLERANCE, Phase::New),
];

impl Phase {
    /// Returns the phase for a fraction of the lunation in `[0, 1)`.
    ///
    /// Fractions outside that range are wrapped into it first.
    pub fn from_fraction(fraction: f64) -> Self {
        let fraction = fraction.rem_euclid(1.0);
        let index = PHASE_BANDS.partition_point(|&(upper, _)| upper <= fraction);
        PHASE_BANDS.get(index).map_or(Phase::New, |&(_, phase)| phase)
    }

    /// Returns the display name of the phase.
    pub fn name(self) -> &'static str {
        match self {
            Phase::New => "New Moon",
            Phase::WaxingCrescent => "Waxing Crescent",
            Phase::FirstQuarter => "First Quarter",
            Phase::WaxingGibbous => "Waxing Gibbous",
            Phase::Full => "Full Moon",
            Phase::WaningGibbous => "Waning Gibbous",
            Phase::LastQuarter => "Last Quarter",
            Phase::WaningCrescent => "Waning Crescent",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_are_sorted() {
        assert!(PHASE_BANDS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn band_interiors() {
        let cases = [
            (0.0, Phase::New),
            (0.1, Phase::WaxingCrescent),
            (0.25, Phase::FirstQuarter),
            (0.35, Phase::WaxingGibbous),
            (0.5, Phase::Full),
            (0.6, Phase::WaningGibbous),
            (0.75, Phase::LastQuarter),
            (0.9, Phase::WaningCrescent),
            (0.99, Phase::New),
        ];
        for (fraction, phase) in cases {
            assert_eq!(Phase::from_fraction(fraction), phase, "fraction {fraction}");
        }
    }

    #[test]
    fn lower_bounds_are_inclusive() {
        assert_eq!(Phase::from_fraction(0.05), Phase::WaxingCrescent);
        assert_eq!(Phase::from_fraction(0.049_999), Phase::New);
        assert_eq!(Phase::from_fraction(0.300_001), Phase::WaxingGibbous);
        assert_eq!(Phase::from_fraction(0.950_001), Phase::New);
        assert_eq!(Phase::from_fraction(0.949_999), Phase::WaningCrescent);
    }

    #[test]
    fn out_of_range_fractions_wrap() {
        assert_eq!(Phase::from_fraction(1.5), Phase::Full);
        assert_eq!(Phase::from_fraction(-0.25), Phase::LastQuarter);
    }

    #[test]
    fn names() {
        assert_eq!(Phase::Full.to_string(), "Full Moon");
        assert_eq!(Phase::WaningCrescent.name(), "Waning Crescent");
    }
}
