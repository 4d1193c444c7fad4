//! Sampling the illuminated fraction over a Julian Date range.

use crate::error::PhaseError;
use crate::illumination::{Illumination, clamp_fraction, illumination};

/// Fraction of a step an end sample may overshoot `end_jd` by.
const END_TOLERANCE: f64 = 1e-9;

/// Configuration for [`illumination_series`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesConfig {
    /// Spacing between samples in days. Must be finite and positive.
    pub step_days: f64,
    /// Clamp reported fractions into [0, 1].
    pub clamp: bool,
    /// Upper bound on the number of samples produced.
    pub max_samples: usize,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            step_days: 1.0,
            clamp: false,
            max_samples: 100_000,
        }
    }
}

impl SeriesConfig {
    /// Default configuration with a custom step.
    pub fn with_step(step_days: f64) -> Self {
        Self {
            step_days,
            ..Self::default()
        }
    }
}

/// Number of samples at `start + n * step` that do not pass `end`.
///
/// A sample landing within `step * 1e-9` past `end` counts as the end
/// sample, so decimal steps that divide the range keep their last point.
fn sample_count(start_jd: f64, end_jd: f64, step: f64) -> f64 {
    let mut n = ((end_jd - start_jd) / step).round();
    if start_jd + n * step > end_jd + step * END_TOLERANCE {
        n -= 1.0;
    }
    n + 1.0
}

/// Evaluate the Moon's illumination at `start_jd + n * step_days` for every
/// `n` such that the sample does not pass `end_jd` (inclusive, allowing
/// rounding of up to `1e-9` steps on the last sample).
///
/// Each sample time is computed from `start_jd` directly, so no error
/// accumulates over long ranges.
pub fn illumination_series(
    start_jd: f64,
    end_jd: f64,
    config: &SeriesConfig,
) -> Result<Vec<Illumination>, PhaseError> {
    if !start_jd.is_finite() {
        return Err(PhaseError::NonFiniteInput("start_jd"));
    }
    if !end_jd.is_finite() {
        return Err(PhaseError::NonFiniteInput("end_jd"));
    }
    if end_jd < start_jd {
        return Err(PhaseError::InvalidRange { start_jd, end_jd });
    }
    let step = config.step_days;
    if !step.is_finite() || step <= 0.0 {
        return Err(PhaseError::InvalidStep(step));
    }

    let count = sample_count(start_jd, end_jd, step);
    if count > config.max_samples as f64 {
        return Err(PhaseError::TooManySamples {
            requested: if count >= usize::MAX as f64 {
                usize::MAX
            } else {
                count as usize
            },
            max: config.max_samples,
        });
    }
    let count = count as usize;

    log::debug!(
        "illumination series: {count} samples from JD {start_jd} to JD {end_jd}, step {step} d"
    );

    let samples = (0..count)
        .map(|n| {
            let mut s = illumination(start_jd + n as f64 * step);
            if config.clamp {
                s.fraction = clamp_fraction(s.fraction);
            }
            s
        })
        .collect();
    Ok(samples)
}
