//! Error types for illumination sampling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from sampling the illuminated fraction over a range.
///
/// The single-instant functions never fail; only range sampling
/// validates its arguments.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PhaseError {
    /// A range bound was NaN or infinite.
    NonFiniteInput(&'static str),
    /// End of range precedes its start.
    InvalidRange { start_jd: f64, end_jd: f64 },
    /// Step was zero, negative or not finite.
    InvalidStep(f64),
    /// Range and step would produce more samples than allowed.
    TooManySamples { requested: usize, max: usize },
}

impl Display for PhaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFiniteInput(what) => write!(f, "non-finite input: {what}"),
            Self::InvalidRange { start_jd, end_jd } => {
                write!(f, "invalid range: end JD {end_jd} precedes start JD {start_jd}")
            }
            Self::InvalidStep(step) => write!(f, "invalid step: {step} days"),
            Self::TooManySamples { requested, max } => {
                write!(f, "too many samples: {requested} requested, limit {max}")
            }
        }
    }
}

impl Error for PhaseError {}
