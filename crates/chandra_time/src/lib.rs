//! Julian Day representation for the lunar illumination crates.
//!
//! This crate provides:
//! - J2000.0 epoch constants
//! - Julian Date → Julian centuries conversion
//! - A `JulianDay` type wrapping a fractional Julian Date
//!
//! No time-scale conversion is performed: a `JulianDay` is taken as given.

pub mod julian;

use std::fmt::{Display, Formatter};

pub use julian::{DAYS_PER_JULIAN_CENTURY, J2000_JD, jd_to_centuries};

/// A fractional Julian Date.
///
/// Thin wrapper over `f64`; any finite value is accepted.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDay {
    jd: f64,
}

impl JulianDay {
    /// Wrap a fractional Julian Date.
    pub const fn new(jd: f64) -> Self {
        Self { jd }
    }

    /// The raw Julian Date.
    pub const fn value(self) -> f64 {
        self.jd
    }

    /// Julian centuries since J2000.0.
    pub fn centuries_since_j2000(self) -> f64 {
        jd_to_centuries(self.jd)
    }
}

impl From<f64> for JulianDay {
    fn from(jd: f64) -> Self {
        Self::new(jd)
    }
}

impl From<JulianDay> for f64 {
    fn from(jd: JulianDay) -> Self {
        jd.value()
    }
}

impl Display for JulianDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD {:.6}", self.jd)
    }
}
