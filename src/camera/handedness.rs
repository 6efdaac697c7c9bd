//! Conversion between the internal right-handed frame and the host's
//! left-handed frame.
//!
//! The two frames differ by a reflection of the y axis. The reflection is
//! its own inverse, so `to_host` and `from_host` are the same map; both
//! names exist so call sites read in the direction the value travels.

use crate::math::Vector3;

/// Internal vector or point to host convention.
#[inline]
#[must_use]
pub fn to_host(v: Vector3) -> Vector3 {
    Vector3::new(v.x(), -v.y(), v.z())
}

/// Host vector or point to internal convention.
#[inline]
#[must_use]
pub fn from_host(v: Vector3) -> Vector3 {
    to_host(v)
}

/// Internal heading to host convention (the reflection reverses turning
/// direction about the pedestal).
#[inline]
#[must_use]
pub fn angle_to_host(radians: f64) -> f64 {
    -radians
}

/// Host heading to internal convention.
#[inline]
#[must_use]
pub fn angle_from_host(radians: f64) -> f64 {
    -radians
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflection_is_an_involution() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(to_host(v), Vector3::new(1.0, -2.0, 3.0));
        assert_eq!(from_host(to_host(v)), v);
        assert_eq!(angle_from_host(angle_to_host(0.75)), 0.75);
    }

    #[test]
    fn reflection_flips_cross_product_handedness() {
        let a = Vector3::new(0.3, 0.5, -0.2);
        let b = Vector3::new(-1.0, 0.1, 0.7);
        let host_cross = to_host(a).cross(to_host(b));
        assert!(host_cross.approx_eq(-to_host(a.cross(b)), 1e-12));
    }
}
