//! Degree-based trigonometry and angle reduction.
//!
//! The low-precision lunar formulas are published with arguments in
//! degrees. These helpers keep call sites close to the printed form.

use std::f64::consts::PI;

/// Degrees to radians conversion factor (π/180).
pub const DEG_TO_RAD: f64 = PI / 180.0;

/// Sine of an angle given in degrees.
#[inline]
pub fn sin_deg(deg: f64) -> f64 {
    (deg * DEG_TO_RAD).sin()
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cos_deg(deg: f64) -> f64 {
    (deg * DEG_TO_RAD).cos()
}

/// Floating-point remainder of `deg / 360`, C `fmod` semantics.
///
/// The result carries the sign of `deg` and has magnitude below 360.
/// No wrap into [0, 360) is applied.
#[inline]
pub fn fmod_360(deg: f64) -> f64 {
    deg % 360.0
}

/// Wrap an angle into [0, 360) degrees, for display.
///
/// Built on [`fmod_360`]; a tiny negative remainder that would round up to
/// exactly 360 after the shift is reported as 0.
pub fn wrap_360(deg: f64) -> f64 {
    let r = fmod_360(deg);
    if r >= 0.0 {
        return r;
    }
    let shifted = r + 360.0;
    if shifted >= 360.0 { 0.0 } else { shifted }
}
