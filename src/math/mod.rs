//! Vector algebra kernel, plane/ray picking helpers and the two-angle
//! directional representation.

/// Nested-axle direction encoding.
pub mod direction;
/// Planes, rays and ray picking.
pub mod plane;
/// 3D vector value type and rotation operators.
pub mod vector;

pub use direction::Direction2;
pub use plane::{
    intersect_plane, intersect_rectangle, Plane, Ray, Rectangle,
    RECTANGLE_TOLERANCE,
};
pub use vector::Vector3;

/// Tolerance shared by every "is zero" test in the crate.
pub const EPSILON: f64 = 1e-9;
