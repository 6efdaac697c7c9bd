//! Three-component vector value type with in-place and pure rotation
//! operators.
//!
//! Every operation comes in two flavours: a mutating method taking
//! `&mut self` (`normalize`, `rotate_about`, ...) and a pure counterpart
//! returning a fresh value (`normalized`, `rotated_about`, ...). Degenerate
//! inputs (zero vectors, rotating a vector about itself) are no-ops rather
//! than errors.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};
use glam::{DVec3, Vec3};
use serde::{Deserialize, Serialize};

use super::plane::Plane;
use super::EPSILON;

/// A 3D vector (or point) in the internal right-handed frame.
#[repr(transparent)]
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Pod,
    Zeroable,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Vector3(DVec3);

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Self = Self(DVec3::ZERO);
    /// World right axis, `(1, 0, 0)`.
    pub const RIGHT: Self = Self(DVec3::X);
    /// World front axis, `(0, 1, 0)`.
    pub const FRONT: Self = Self(DVec3::Y);
    /// World up axis, `(0, 0, 1)`.
    pub const UP: Self = Self(DVec3::Z);

    /// Vector from components.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// X component.
    #[inline]
    #[must_use]
    pub fn x(self) -> f64 {
        self.0.x
    }

    /// Y component.
    #[inline]
    #[must_use]
    pub fn y(self) -> f64 {
        self.0.y
    }

    /// Z component.
    #[inline]
    #[must_use]
    pub fn z(self) -> f64 {
        self.0.z
    }

    /// Components as an array.
    #[inline]
    #[must_use]
    pub fn to_array(self) -> [f64; 3] {
        self.0.to_array()
    }

    /// Lossy single-precision copy for GPU-facing hosts.
    #[inline]
    #[must_use]
    pub fn as_vec3(self) -> Vec3 {
        self.0.as_vec3()
    }

    /// Cross product `self × other`.
    #[inline]
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self(self.0.cross(other.0))
    }

    /// Dot product.
    #[inline]
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.0.dot(other.0)
    }

    /// Euclidean norm.
    #[inline]
    #[must_use]
    pub fn length(self) -> f64 {
        self.0.length()
    }

    /// Squared norm.
    #[inline]
    #[must_use]
    pub fn length_squared(self) -> f64 {
        self.0.length_squared()
    }

    /// Distance between two points.
    #[inline]
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        self.0.distance(other.0)
    }

    /// True when every component is within [`EPSILON`] of zero.
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.abs().max_element() < EPSILON
    }

    /// Component-wise comparison with an explicit tolerance.
    #[inline]
    #[must_use]
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        (self.0 - other.0).abs().max_element() <= tolerance
    }

    /// Unsigned angle between two **unit** vectors, in `[0, π]`.
    ///
    /// Inputs are not normalized here; passing non-unit vectors gives a
    /// finite but meaningless angle.
    #[inline]
    #[must_use]
    pub fn angle_between(a: Self, b: Self) -> f64 {
        a.dot(b).clamp(-1.0, 1.0).acos()
    }

    /// Angle by which `from` rotates about `axis` to reach `to`, in
    /// `(-π, π]`. The sign follows the right-hand rule around `axis`.
    #[must_use]
    pub fn signed_angle_between(from: Self, to: Self, axis: Self) -> f64 {
        let angle = Self::angle_between(from, to);
        if from.cross(to).dot(axis) < 0.0 {
            -angle
        } else {
            angle
        }
    }

    /// Per-component linear interpolation. `t` is not clamped.
    #[inline]
    #[must_use]
    pub fn lerp(from: Self, to: Self, t: f64) -> Self {
        Self(from.0.lerp(to.0, t))
    }

    /// Vector pointing from point `from` to point `to`.
    #[inline]
    #[must_use]
    pub fn between(from: Self, to: Self) -> Self {
        to - from
    }

    /// Overwrite `self` with the vector pointing from `from` to `to`.
    #[inline]
    pub fn assign_between(&mut self, from: Self, to: Self) {
        self.0 = to.0 - from.0;
    }

    /// Negate in place.
    #[inline]
    pub fn negate(&mut self) {
        self.0 = -self.0;
    }

    /// Scale in place.
    #[inline]
    pub fn scale(&mut self, factor: f64) {
        self.0 *= factor;
    }

    /// Scaled copy.
    #[inline]
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self(self.0 * factor)
    }

    /// Normalize in place. The zero vector is left unchanged.
    #[inline]
    pub fn normalize(&mut self) {
        let len = self.0.length();
        if len > EPSILON {
            self.0 /= len;
        }
    }

    /// Unit-length copy, or the zero vector unchanged.
    #[inline]
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Rotate in place about `axis`, which must be a unit vector orthogonal
    /// to `self`.
    ///
    /// Uses the planar formula `cos θ · v + sin θ · (axis × v)`. The
    /// orthogonality precondition is not checked; violating it yields a
    /// finite but wrong vector. The zero vector is left unchanged.
    pub fn rotate_about_orthogonal(&mut self, axis: Self, radians: f64) {
        if self.is_zero() {
            return;
        }
        let (sin, cos) = radians.sin_cos();
        self.0 = self.0 * cos + axis.0.cross(self.0) * sin;
    }

    /// Copy rotated about an orthogonal unit axis. See
    /// [`Vector3::rotate_about_orthogonal`].
    #[inline]
    #[must_use]
    pub fn rotated_about_orthogonal(
        mut self,
        axis: Self,
        radians: f64,
    ) -> Self {
        self.rotate_about_orthogonal(axis, radians);
        self
    }

    /// Rotate in place about an arbitrary axis (any length, any direction).
    ///
    /// The receiver is split into a part parallel to `axis`, which is kept,
    /// and an orthogonal part, which is rotated within its own plane with
    /// its norm preserved. A receiver parallel to the axis, or a zero axis,
    /// leaves `self` unchanged.
    pub fn rotate_about(&mut self, axis: Self, radians: f64) {
        let axis_len_sq = axis.length_squared();
        if axis_len_sq < EPSILON * EPSILON {
            return;
        }
        let parallel = axis.0 * (self.0.dot(axis.0) / axis_len_sq);
        let orth = self.0 - parallel;
        let orth_len = orth.length();
        if orth_len < EPSILON {
            return;
        }
        // |axis × orth| = |axis|·|orth|, so dividing by |axis| rescales w
        // to the norm of the orthogonal part.
        let w = axis.0.cross(orth) / axis_len_sq.sqrt();
        let (sin, cos) = radians.sin_cos();
        self.0 = orth * cos + w * sin + parallel;
    }

    /// Copy rotated about an arbitrary axis. See [`Vector3::rotate_about`].
    #[inline]
    #[must_use]
    pub fn rotated_about(mut self, axis: Self, radians: f64) -> Self {
        self.rotate_about(axis, radians);
        self
    }

    /// Projection onto the line spanned by `onto`. Zero when `onto` is zero.
    #[must_use]
    pub fn projected_onto_vector(self, onto: Self) -> Self {
        let len_sq = onto.length_squared();
        if len_sq < EPSILON * EPSILON {
            return Self::ZERO;
        }
        onto * (self.dot(onto) / len_sq)
    }

    /// Projection onto `plane`, treated as passing through the origin (the
    /// plane offset is ignored, a direction has no position).
    #[must_use]
    pub fn projected_onto_plane(self, plane: &Plane) -> Self {
        if plane.normal.is_zero() {
            return self;
        }
        self - self.projected_onto_vector(plane.normal)
    }
}

impl From<DVec3> for Vector3 {
    #[inline]
    fn from(v: DVec3) -> Self {
        Self(v)
    }
}

impl From<Vector3> for DVec3 {
    #[inline]
    fn from(v: Vector3) -> Self {
        v.0
    }
}

impl From<[f64; 3]> for Vector3 {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self(DVec3::from_array(a))
    }
}

impl Neg for Vector3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Add for Vector3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Vector3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl MulAssign<f64> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.0 *= rhs;
    }
}
