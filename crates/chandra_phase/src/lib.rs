//! Illuminated fraction of the Moon as seen from Earth.
//!
//! This crate provides:
//! - Mean lunar/solar arguments (D, M, M') for a Julian century offset
//! - Phase angle and illuminated fraction for a fractional Julian Date
//! - Range sampling with a typed configuration
//!
//! Low-precision method from Meeus, *Astronomical Algorithms*. Every
//! function is pure; nothing is cached.

pub mod error;
pub mod illumination;
pub mod series;

pub use error::PhaseError;
pub use illumination::{
    Illumination, MeanArguments, SYNODIC_MONTH_DAYS, clamp_fraction, illuminated_fraction,
    illumination, mean_arguments, phase_angle_deg,
};
pub use series::{SeriesConfig, illumination_series};
