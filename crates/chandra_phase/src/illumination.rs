//! Illuminated fraction of the Moon's disc, low-precision method.
//!
//! Phase angle from the mean elongation D, the Sun's mean anomaly M and
//! the Moon's mean anomaly M', then k = (1 + cos i) / 2.
//!
//! Source: Meeus, *Astronomical Algorithms* (1st ed.), Chapter 46, p. 315.
//! Mean-argument polynomials from Chapter 45 (p. 131).

use chandra_math::{DEG_TO_RAD, cos_deg, fmod_360, sin_deg};
use chandra_time::jd_to_centuries;

/// Mean synodic month in days (new moon to new moon).
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;

/// Mean lunar and solar arguments in degrees, reduced modulo 360.
///
/// Reduction follows `fmod` semantics: a negative polynomial value stays
/// negative (e.g. -246.2 rather than 113.8).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanArguments {
    /// Mean elongation of the Moon from the Sun.
    pub d_deg: f64,
    /// Mean anomaly of the Sun.
    pub m_deg: f64,
    /// Mean anomaly of the Moon.
    pub m_prime_deg: f64,
}

/// One evaluated instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Illumination {
    /// Julian Date the sample was taken at.
    pub jd: f64,
    /// Phase angle in degrees (not normalized).
    pub phase_angle_deg: f64,
    /// Illuminated fraction, nominally in [0, 1].
    pub fraction: f64,
}

/// Mean arguments D, M, M' at `t` Julian centuries since J2000.0.
pub fn mean_arguments(t: f64) -> MeanArguments {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let d = 297.8502042 + 445267.1115168 * t - 0.0016300 * t2 + t3 / 545868.0
        - t4 / 113065000.0;
    let m = 357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24490000.0;
    let m_prime = 134.9634114 + 477198.8676313 * t + 0.0089970 * t2 + t3 / 69699.0
        - t4 / 14712000.0;

    MeanArguments {
        d_deg: fmod_360(d),
        m_deg: fmod_360(m),
        m_prime_deg: fmod_360(m_prime),
    }
}

/// Phase angle from already-reduced mean arguments, in degrees.
///
/// The leading `180 - D` term takes D in degrees while the periodic terms
/// take it as an angle in radians (`sin_deg` converts). This pairing is the
/// published form; changing it changes the result.
fn phase_angle_from_args(args: &MeanArguments) -> f64 {
    let d = args.d_deg;
    let m = DEG_TO_RAD * args.m_deg;
    let mp = DEG_TO_RAD * args.m_prime_deg;

    180.0 - d - 6.289 * mp.sin() + 2.100 * m.sin()
        - 1.274 * (2.0 * DEG_TO_RAD * d - mp).sin()
        - 0.658 * sin_deg(2.0 * d)
        - 0.214 * (2.0 * mp).sin()
        - 0.110 * sin_deg(d)
}

/// Phase angle i of the Moon in degrees at a fractional Julian Date.
pub fn phase_angle_deg(julian_day: f64) -> f64 {
    phase_angle_from_args(&mean_arguments(jd_to_centuries(julian_day)))
}

/// Illuminated fraction k of the Moon's disc at a fractional Julian Date.
///
/// 0 is new moon, 1 is full moon. The truncated series can land slightly
/// outside [0, 1] near the extremes; no clamping is applied here (see
/// [`clamp_fraction`]). NaN and infinite inputs propagate.
pub fn illuminated_fraction(julian_day: f64) -> f64 {
    (1.0 + cos_deg(phase_angle_deg(julian_day))) / 2.0
}

/// Phase angle and illuminated fraction together.
pub fn illumination(julian_day: f64) -> Illumination {
    let phase_angle_deg = phase_angle_deg(julian_day);
    Illumination {
        jd: julian_day,
        phase_angle_deg,
        fraction: (1.0 + cos_deg(phase_angle_deg)) / 2.0,
    }
}

/// Clamp a fraction into [0, 1] for display. NaN is returned unchanged.
pub fn clamp_fraction(k: f64) -> f64 {
    k.clamp(0.0, 1.0)
}
