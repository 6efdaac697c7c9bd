//! Per-tick exponential smoothing helpers.
//!
//! A smoothing coefficient is the fraction of the remaining distance to a
//! target that is closed on every tick, so repeated ticks converge
//! exponentially rather than over a fixed duration.

use std::f64::consts::{PI, TAU};

/// Lower clamp applied to a smoothness input.
pub const SMOOTHNESS_MIN: f64 = 0.001;
/// Upper clamp applied to a smoothness input.
pub const SMOOTHNESS_MAX: f64 = 0.999;

/// Convert a user-facing smoothness in `[0, 1]` to a per-tick coefficient.
///
/// Smoothness 0 gives ≈ 0.999 (near-instant snap), smoothness 1 gives
/// ≈ 0.001 (slow creep). NaN is treated as 0.
#[must_use]
pub fn decay_coefficient(smoothness: f64) -> f64 {
    let s = if smoothness.is_nan() { 0.0 } else { smoothness };
    1.0 - s.clamp(SMOOTHNESS_MIN, SMOOTHNESS_MAX)
}

/// Scalar linear interpolation; `t` is not clamped.
#[inline]
#[must_use]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// The angle congruent to `angle` (mod 2π) that lies closest to `reference`.
///
/// Used to keep accumulated headings continuous when a new absolute
/// heading is measured in `(-π, π]`.
#[must_use]
pub fn nearest_equivalent_angle(angle: f64, reference: f64) -> f64 {
    let mut delta = (angle - reference).rem_euclid(TAU);
    if delta > PI {
        delta -= TAU;
    }
    reference + delta
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficient_bounds() {
        assert!((decay_coefficient(0.0) - 0.999).abs() < 1e-12);
        assert!((decay_coefficient(1.0) - 0.001).abs() < 1e-12);
        assert!((decay_coefficient(-3.0) - 0.999).abs() < 1e-12);
        assert!((decay_coefficient(42.0) - 0.001).abs() < 1e-12);
        assert!((decay_coefficient(f64::NAN) - 0.999).abs() < 1e-12);
        assert!((decay_coefficient(0.25) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn lerp_extrapolates() {
        assert_eq!(lerp(1.0, 3.0, 0.5), 2.0);
        assert_eq!(lerp(1.0, 3.0, 2.0), 5.0);
    }

    #[test]
    fn nearest_angle_keeps_winding() {
        let a = nearest_equivalent_angle(-PI + 0.1, 3.0 * TAU + PI - 0.1);
        assert!((a - (4.0 * TAU - PI + 0.1)).abs() < 1e-9);

        let b = nearest_equivalent_angle(0.5, 0.4);
        assert!((b - 0.5).abs() < 1e-12);

        let c = nearest_equivalent_angle(0.5, -TAU + 0.4);
        assert!((c - (-TAU + 0.5)).abs() < 1e-12);
    }
}
