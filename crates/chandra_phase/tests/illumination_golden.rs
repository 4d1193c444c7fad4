//! Golden-value integration tests for the lunar illuminated fraction.
//!
//! Reference instants are NASA/USNO new, full and quarter moons; the
//! low-precision method is good to about 0.01 in k.

use chandra_phase::{
    SYNODIC_MONTH_DAYS, illuminated_fraction, illumination, mean_arguments, phase_angle_deg,
};
use chandra_time::{J2000_JD, jd_to_centuries};

/// J2000.0: T = 0, pinned value.
#[test]
fn j2000_golden() {
    let args = mean_arguments(jd_to_centuries(J2000_JD));
    assert!((args.d_deg - 297.85).abs() < 0.01);
    assert!((args.m_deg - 357.53).abs() < 0.01);
    assert!((args.m_prime_deg - 134.96).abs() < 0.01);

    let k = illuminated_fraction(J2000_JD);
    assert!((k - 0.229_238_076_343_031_34).abs() < 1e-12, "k = {k}");
}

/// NASA: New Moon 2024-Jan-11 ~11:57 UTC
#[test]
fn new_moon_jan_2024() {
    let k = illuminated_fraction(2_460_320.998);
    assert!(k < 0.01, "k = {k}");
}

/// NASA: Full Moon 2024-Jan-25 ~17:54 UTC
#[test]
fn full_moon_jan_2024() {
    let k = illuminated_fraction(2_460_335.246);
    assert!(k > 0.99, "k = {k}");
}

/// NASA: New Moon 2000-Jan-06 ~18:14 UTC
#[test]
fn new_moon_jan_2000() {
    let k = illuminated_fraction(2_451_550.260);
    assert!(k < 0.01, "k = {k}");
}

/// NASA: Full Moon 2000-Jan-21 ~04:40 UTC
#[test]
fn full_moon_jan_2000() {
    let k = illuminated_fraction(2_451_564.694);
    assert!(k > 0.99, "k = {k}");
}

/// NASA: First Quarter 2024-Jan-18 ~03:53 UTC, Last Quarter 2024-Jan-04 ~03:30 UTC
#[test]
fn quarters_jan_2024() {
    let first = illuminated_fraction(2_460_327.662);
    let last = illuminated_fraction(2_460_313.646);
    assert!((first - 0.5).abs() < 0.02, "first quarter k = {first}");
    assert!((last - 0.5).abs() < 0.02, "last quarter k = {last}");
}

/// Meeus example 48.a: 1992-Apr-12 0h TD, k = 0.6786.
#[test]
fn meeus_example_1992() {
    let jd = 2_448_724.5;
    let k = illuminated_fraction(jd);
    assert!((k - 0.6786).abs() < 0.01, "k = {k}");

    // D is negative before reduction and stays negative after it.
    let args = mean_arguments(jd_to_centuries(jd));
    assert!(args.d_deg < 0.0);
    let i = phase_angle_deg(jd);
    assert!((i - 428.883_349_572_525_2).abs() < 1e-8, "i = {i}");
}

/// Small time steps give small changes in k.
#[test]
fn continuous_in_time() {
    let mut jd = 2_460_000.5;
    while jd < 2_460_000.5 + 2.0 * SYNODIC_MONTH_DAYS {
        let k = illuminated_fraction(jd);
        let dk_plus = (illuminated_fraction(jd + 0.01) - k).abs();
        let dk_minus = (illuminated_fraction(jd - 0.01) - k).abs();
        assert!(dk_plus < 0.005 && dk_minus < 0.005, "jump at JD {jd}");
        jd += 0.37;
    }
}

/// k(jd) and k(jd + 29.53) are comparable across a decade.
#[test]
fn synodic_periodicity() {
    let mut jd = 2_451_545.0;
    while jd < 2_451_545.0 + 3652.5 {
        let a = illuminated_fraction(jd);
        let b = illuminated_fraction(jd + 29.53);
        assert!((a - b).abs() < 0.06, "JD {jd}: {a} vs {b}");
        jd += 7.3;
    }
}

/// Half a lunation apart, the Moon goes from nearly new to nearly full.
#[test]
fn half_lunation_swings_fraction() {
    let new_moon = 2_460_320.998;
    let k_new = illuminated_fraction(new_moon);
    let k_full = illuminated_fraction(new_moon + SYNODIC_MONTH_DAYS / 2.0);
    assert!(k_full - k_new > 0.95, "new {k_new}, half-lunation {k_full}");
}

/// Repeated calls are bit-identical.
#[test]
fn deterministic_over_range() {
    for n in 0..1000 {
        let jd = 2_400_000.0 + f64::from(n) * 123.456;
        let a = illumination(jd);
        let b = illumination(jd);
        assert_eq!(a.fraction.to_bits(), b.fraction.to_bits());
        assert_eq!(a.phase_angle_deg.to_bits(), b.phase_angle_deg.to_bits());
    }
}

/// Far from J2000 the value is still finite and within float noise of [0, 1].
#[test]
fn finite_far_from_epoch() {
    for jd in [0.0, 625_295.0, 3_000_000.0, -1.0e6] {
        let k = illuminated_fraction(jd);
        assert!(k.is_finite(), "JD {jd}");
        assert!((-1e-12..=1.0 + 1e-12).contains(&k), "JD {jd}: k = {k}");
    }
}

/// NaN and infinities propagate instead of failing.
#[test]
fn non_finite_propagates() {
    assert!(illuminated_fraction(f64::NAN).is_nan());
    assert!(illuminated_fraction(f64::INFINITY).is_nan());
    assert!(illuminated_fraction(f64::NEG_INFINITY).is_nan());
}
