//! C-facing adapter for `chandra_phase`.

use chandra_phase::{Illumination, PhaseError, SeriesConfig, illumination, illumination_series};

/// ABI version for downstream bindings.
pub const CHANDRA_API_VERSION: u32 = 1;

/// C-facing status codes.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChandraStatus {
    Ok = 0,
    InvalidRange = 1,
    InvalidStep = 2,
    NonFiniteInput = 3,
    BufferTooSmall = 4,
    NullPointer = 7,
    Internal = 255,
}

impl From<&PhaseError> for ChandraStatus {
    fn from(value: &PhaseError) -> Self {
        match value {
            PhaseError::InvalidRange { .. } => Self::InvalidRange,
            PhaseError::InvalidStep(_) => Self::InvalidStep,
            PhaseError::NonFiniteInput(_) => Self::NonFiniteInput,
            PhaseError::TooManySamples { .. } => Self::BufferTooSmall,
            _ => Self::Internal,
        }
    }
}

/// C-compatible illumination sample.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChandraIllumination {
    pub jd: f64,
    pub phase_angle_deg: f64,
    pub fraction: f64,
}

impl From<Illumination> for ChandraIllumination {
    fn from(value: Illumination) -> Self {
        Self {
            jd: value.jd,
            phase_angle_deg: value.phase_angle_deg,
            fraction: value.fraction,
        }
    }
}

/// Sample a range into a caller-sized buffer (safe Rust core of the C entry point).
pub fn chandra_illumination_series_internal(
    start_jd: f64,
    end_jd: f64,
    step_days: f64,
    out: &mut [ChandraIllumination],
) -> Result<usize, ChandraStatus> {
    let config = SeriesConfig {
        step_days,
        clamp: false,
        max_samples: out.len(),
    };
    let samples = illumination_series(start_jd, end_jd, &config)
        .map_err(|e| ChandraStatus::from(&e))?;
    for (slot, s) in out.iter_mut().zip(&samples) {
        *slot = (*s).into();
    }
    Ok(samples.len())
}

/// Return ABI version of the exported C API.
#[unsafe(no_mangle)]
pub extern "C" fn chandra_api_version() -> u32 {
    CHANDRA_API_VERSION
}

/// Illuminated fraction of the Moon's disc at a fractional Julian Date.
///
/// Never fails; NaN in gives NaN out.
#[unsafe(no_mangle)]
pub extern "C" fn chandra_illuminated_fraction(jd: f64) -> f64 {
    chandra_phase::illuminated_fraction(jd)
}

/// Phase angle and illuminated fraction at one instant.
///
/// # Safety
/// `out` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn chandra_illumination(
    jd: f64,
    out: *mut ChandraIllumination,
) -> ChandraStatus {
    ffi_boundary(|| {
        if out.is_null() {
            return ChandraStatus::NullPointer;
        }

        let value = ChandraIllumination::from(illumination(jd));
        // SAFETY: Pointer is checked for null and written once.
        unsafe { *out = value };
        ChandraStatus::Ok
    })
}

/// Sample the illuminated fraction over `[start_jd, end_jd]` every `step_days`.
///
/// Writes at most `capacity` samples to `out` and the number written to
/// `out_count`. Returns `BufferTooSmall` (writing nothing) when the range
/// needs more than `capacity` samples.
///
/// # Safety
/// `out` must point to at least `capacity` writable elements and
/// `out_count` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn chandra_illumination_series(
    start_jd: f64,
    end_jd: f64,
    step_days: f64,
    out: *mut ChandraIllumination,
    capacity: u32,
    out_count: *mut u32,
) -> ChandraStatus {
    ffi_boundary(|| {
        if out.is_null() || out_count.is_null() {
            return ChandraStatus::NullPointer;
        }

        // SAFETY: Pointer is checked for null; caller guarantees `capacity` elements.
        let buf = unsafe { std::slice::from_raw_parts_mut(out, capacity as usize) };
        match chandra_illumination_series_internal(start_jd, end_jd, step_days, buf) {
            Ok(count) => {
                // SAFETY: Pointer is checked for null and written once.
                unsafe { *out_count = count as u32 };
                ChandraStatus::Ok
            }
            Err(status) => {
                // SAFETY: Pointer is checked for null and written once.
                unsafe { *out_count = 0 };
                status
            }
        }
    })
}

fn ffi_boundary(f: impl FnOnce() -> ChandraStatus) -> ChandraStatus {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(status) => status,
        Err(_) => ChandraStatus::Internal,
    }
}
