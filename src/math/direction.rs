//! Nested-axle encoding of a direction as a horizontal and a vertical angle.

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use super::vector::Vector3;

/// A unit direction expressed as two angles relative to a caller-supplied
/// frame: `h` turns about the vertical axis starting from the horizontal
/// reference, `v` then lifts toward the vertical axis (`v = 0` is level).
///
/// Angles are plain bookkeeping. Nothing here wraps `h` or clamps `v`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Direction2 {
    /// Horizontal angle in radians.
    pub h: f64,
    /// Vertical (elevation) angle in radians.
    pub v: f64,
}

impl Direction2 {
    /// Direction from its two angles.
    #[must_use]
    pub const fn new(h: f64, v: f64) -> Self {
        Self { h, v }
    }

    /// Decompose unit vector `u` against `vertical` and the zero-heading
    /// reference `horizontal` (both unit, mutually orthogonal).
    ///
    /// When `u` is collinear with `vertical` the heading is undefined; the
    /// result is still finite, with `v = ±π/2`.
    #[must_use]
    pub fn from_vector3(
        u: Vector3,
        vertical: Vector3,
        horizontal: Vector3,
    ) -> Self {
        let v = FRAC_PI_2 - Vector3::angle_between(u, vertical);
        let leveled = u.rotated_about(u.cross(vertical), -v).normalized();
        let h = Vector3::signed_angle_between(horizontal, leveled, vertical);
        Self { h, v }
    }

    /// [`Direction2::from_vector3`] against the world up and right axes.
    #[must_use]
    pub fn from_vector3_world(u: Vector3) -> Self {
        Self::from_vector3(u, Vector3::UP, Vector3::RIGHT)
    }

    /// Rebuild the unit vector in the given frame: turn `horizontal` about
    /// `vertical` by `h`, then lift it about the resulting right axis by `v`.
    #[must_use]
    pub fn to_vector3(self, vertical: Vector3, horizontal: Vector3) -> Vector3 {
        let mut dir = horizontal.rotated_about(vertical, self.h);
        let right = dir.cross(vertical);
        dir.rotate_about(right, self.v);
        dir
    }

    /// [`Direction2::to_vector3`] against the world up and right axes.
    #[must_use]
    pub fn to_vector3_world(self) -> Vector3 {
        self.to_vector3(Vector3::UP, Vector3::RIGHT)
    }

    /// Add to the horizontal angle.
    pub fn rotate_left(&mut self, radians: f64) {
        self.h += radians;
    }

    /// Add to the vertical angle.
    pub fn rotate_up(&mut self, radians: f64) {
        self.v += radians;
    }

    /// Add to both angles.
    pub fn rotate_by(&mut self, dh: f64, dv: f64) {
        self.h += dh;
        self.v += dv;
    }

    /// Add another direction's angles to this one.
    pub fn rotate(&mut self, delta: Self) {
        self.rotate_by(delta.h, delta.v);
    }

    /// Copy turned by `dh` and lifted by `dv`.
    #[must_use]
    pub fn rotated_by(mut self, dh: f64, dv: f64) -> Self {
        self.rotate_by(dh, dv);
        self
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_4, PI};

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::math::Plane;

    fn random_unit(rng: &mut StdRng) -> Vector3 {
        loop {
            let v = Vector3::new(
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
            );
            if v.length() > 0.1 {
                return v.normalized();
            }
        }
    }

    #[test]
    fn world_axes_decompose_as_expected() {
        let right = Direction2::from_vector3_world(Vector3::RIGHT);
        assert!(right.h.abs() < 1e-12 && right.v.abs() < 1e-12);

        let front = Direction2::from_vector3_world(Vector3::FRONT);
        assert!((front.h - FRAC_PI_2).abs() < 1e-12);
        assert!(front.v.abs() < 1e-12);

        let tilted = Direction2::from_vector3_world(
            Vector3::new(1.0, 0.0, 1.0).normalized(),
        );
        // acos is ill-conditioned next to 1, so h is only good to ~1e-8.
        assert!(tilted.h.abs() < 1e-6);
        assert!((tilted.v - FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn to_vector3_inverts_from_vector3() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let vertical = random_unit(&mut rng);
            let horizontal = random_unit(&mut rng)
                .projected_onto_plane(&Plane::new(vertical, 0.0))
                .normalized();
            if horizontal.length() < 0.5 {
                continue;
            }
            let u = random_unit(&mut rng);
            if u.cross(vertical).length() < 1e-3 {
                continue;
            }
            let dir = Direction2::from_vector3(u, vertical, horizontal);
            let back = dir.to_vector3(vertical, horizontal);
            assert!(back.approx_eq(u, 1e-6), "{u:?} -> {dir:?} -> {back:?}");
        }
    }

    #[test]
    fn pole_stays_finite() {
        for u in [Vector3::UP, -Vector3::UP] {
            let dir = Direction2::from_vector3_world(u);
            assert!(dir.h.is_finite() && dir.v.is_finite());
            assert!((dir.v.abs() - FRAC_PI_2).abs() < 1e-12);
            let back = dir.to_vector3_world();
            assert!(back.x().is_finite());
            assert!(back.y().is_finite());
            assert!(back.z().is_finite());
        }
    }

    #[test]
    fn mutators_only_add_angles() {
        let mut d = Direction2::new(0.5, 0.25);
        d.rotate_left(PI);
        d.rotate_up(2.0);
        assert_eq!(d, Direction2::new(0.5 + PI, 2.25));

        d.rotate_by(-PI, -2.0);
        d.rotate(Direction2::new(1.0, 1.0));
        assert!((d.h - 1.5).abs() < 1e-12);
        assert!((d.v - 1.25).abs() < 1e-12);

        let e = d.rotated_by(10.0, 0.0);
        assert!((e.h - 11.5).abs() < 1e-12);
        assert!((d.h - 1.5).abs() < 1e-12);
    }
}
