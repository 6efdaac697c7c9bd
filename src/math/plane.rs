//! Planes, rays and ray picking against planes and flat rectangles.
//!
//! These helpers are independent of the camera; hosts use them for
//! picking queries with a ray built from the camera's position and look.

use serde::{Deserialize, Serialize};

use super::vector::Vector3;
use super::EPSILON;

/// Slack, in world units, added around a rectangle's bounding box when
/// testing whether a plane hit lies inside it.
pub const RECTANGLE_TOLERANCE: f64 = 0.1;

/// The point set `{p : n · p + d = 0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Plane normal. Not required to be unit length.
    pub normal: Vector3,
    /// Offset term `d` of the plane equation.
    pub offset: f64,
}

impl Plane {
    /// Plane from its normal and offset.
    #[must_use]
    pub const fn new(normal: Vector3, offset: f64) -> Self {
        Self { normal, offset }
    }

    /// Plane through three non-collinear points, with normal
    /// `(b - a) × (c - a)`.
    ///
    /// Collinear points give a zero normal; every ray is then parallel to
    /// the plane and [`intersect_plane`] reports no hit.
    #[must_use]
    pub fn from_points(a: Vector3, b: Vector3, c: Vector3) -> Self {
        let normal = (b - a).cross(c - a);
        Self {
            normal,
            offset: -normal.dot(a),
        }
    }

    /// Signed distance from `point` to the plane, scaled by the normal's
    /// length (exact distance for a unit normal).
    #[inline]
    #[must_use]
    pub fn signed_distance(&self, point: Vector3) -> f64 {
        self.normal.dot(point) + self.offset
    }
}

/// Half-line starting at `origin` and extending along `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    /// Start point.
    pub origin: Vector3,
    /// Direction of travel (any non-zero length).
    pub direction: Vector3,
}

impl Ray {
    /// Ray from an origin and a direction.
    #[must_use]
    pub const fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray.
    #[inline]
    #[must_use]
    pub fn at(&self, t: f64) -> Vector3 {
        self.origin + self.direction * t
    }
}

/// Flat rectangle given by three of its corners; the fourth is implied and
/// co-planar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Three corners, in order around the rectangle.
    pub corners: [Vector3; 3],
}

impl Rectangle {
    /// Rectangle from three corners.
    #[must_use]
    pub const fn new(a: Vector3, b: Vector3, c: Vector3) -> Self {
        Self {
            corners: [a, b, c],
        }
    }

    /// Plane containing the rectangle.
    #[must_use]
    pub fn plane(&self) -> Plane {
        let [a, b, c] = self.corners;
        Plane::from_points(a, b, c)
    }

    /// Whether `point` lies inside the corners' bounding box grown by
    /// [`RECTANGLE_TOLERANCE`] on every axis.
    fn loosely_contains(&self, point: Vector3) -> bool {
        let [a, b, c] = self.corners;
        let p = point.to_array();
        let (a, b, c) = (a.to_array(), b.to_array(), c.to_array());
        (0..3).all(|i| {
            let lo = a[i].min(b[i]).min(c[i]) - RECTANGLE_TOLERANCE;
            let hi = a[i].max(b[i]).max(c[i]) + RECTANGLE_TOLERANCE;
            (lo..=hi).contains(&p[i])
        })
    }
}

/// Where `ray` meets `plane`.
///
/// Returns `None` when the ray runs parallel to the plane or the plane lies
/// behind the ray origin.
#[must_use]
pub fn intersect_plane(ray: &Ray, plane: &Plane) -> Option<Vector3> {
    let denom = plane.normal.dot(ray.direction);
    if denom.abs() < EPSILON {
        return None;
    }
    let t = -plane.signed_distance(ray.origin) / denom;
    if t < 0.0 {
        return None;
    }
    Some(ray.at(t))
}

/// Where `ray` meets `rect`.
///
/// Containment is approximate: the plane hit is accepted when it falls in
/// the axis-aligned bounding box of the three corners, padded by
/// [`RECTANGLE_TOLERANCE`]. Rectangles that are not axis-aligned therefore
/// also accept hits slightly outside their true outline.
#[must_use]
pub fn intersect_rectangle(ray: &Ray, rect: &Rectangle) -> Option<Vector3> {
    let hit = intersect_plane(ray, &rect.plane())?;
    rect.loosely_contains(hit).then_some(hit)
}
