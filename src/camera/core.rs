use std::f64::consts::FRAC_PI_2;

use super::handedness::{angle_from_host, angle_to_host, from_host, to_host};
use crate::math::{Direction2, Plane, Vector3, EPSILON};
use crate::options::CameraOptions;
use crate::util::smoothing::{decay_coefficient, lerp};

/// Elevation clamp magnitude used when none is given at construction.
pub const DEFAULT_MAX_ELEVATION: f64 = FRAC_PI_2 - 0.01;

/// An angle that is animated toward an independent target.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(super) struct Tracked {
    pub(super) current: f64,
    pub(super) target: f64,
}

impl Tracked {
    pub(super) const fn settled(value: f64) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    /// Delta from `current` to the point `coefficient` of the way to
    /// `target`.
    pub(super) fn step(&self, coefficient: f64) -> f64 {
        lerp(self.current, self.target, coefficient) - self.current
    }

    pub(super) fn remaining(&self) -> f64 {
        (self.target - self.current).abs()
    }
}

/// Free-flying camera built on a tiltable pedestal axis and two decoupled
/// look angles.
///
/// State is kept in an internal right-handed frame; everything passed in
/// or out through the public API is in the host's left-handed convention
/// (see [`super::handedness`]). Every mutator leaves `right`, `up` and
/// `look` an orthonormal triple.
#[derive(Debug, Clone)]
pub struct Camera {
    pub(super) position: Vector3,
    pub(super) target_position: Vector3,
    /// Roll reference axis, unit length.
    pub(super) pedestal: Vector3,
    /// Viewing direction, unit length.
    pub(super) look: Vector3,
    /// `normalize(look × pedestal)`.
    pub(super) right: Vector3,
    /// `right × look`.
    pub(super) up: Vector3,
    /// Zero-heading reference, unit length and orthogonal to `pedestal`.
    pub(super) horizontal: Vector3,
    /// Invariant: `look == Direction2::new(-heading, elevation)
    /// .to_vector3(pedestal, horizontal)`.
    pub(super) heading: Tracked,
    pub(super) elevation: Tracked,
    pub(super) right_incline: Tracked,
    pub(super) forward_incline: Tracked,
    /// Per-tick coefficient for the four angles.
    pub(super) look_coefficient: f64,
    /// Per-tick coefficient for the position.
    pub(super) position_coefficient: f64,
    pub(super) min_elevation: f64,
    pub(super) max_elevation: f64,
}

/// Some unit vector orthogonal to `axis`.
fn any_orthogonal(axis: Vector3) -> Vector3 {
    let candidate = axis.cross(Vector3::RIGHT);
    if candidate.is_zero() {
        axis.cross(Vector3::FRONT).normalized()
    } else {
        candidate.normalized()
    }
}

impl Camera {
    /// Camera at `position` with the given pedestal and look directions
    /// (host convention), heading 0 and the default elevation clamp.
    #[must_use]
    pub fn new(position: Vector3, pedestal: Vector3, look: Vector3) -> Self {
        Self::with_heading_and_clamp(position, pedestal, look, None, None)
    }

    /// Camera configured from [`CameraOptions`]. Options that fail
    /// [`CameraOptions::validate`] are logged and replaced by the defaults.
    #[must_use]
    pub fn from_options(
        position: Vector3,
        pedestal: Vector3,
        look: Vector3,
        options: &CameraOptions,
    ) -> Self {
        let fallback;
        let options = match options.validate() {
            Ok(()) => options,
            Err(e) => {
                log::warn!("{e}, using default camera options");
                fallback = CameraOptions::default();
                &fallback
            }
        };
        let mut camera = Self::with_heading_and_clamp(
            position,
            pedestal,
            look,
            Some(options.initial_heading_degrees.to_radians()),
            Some(options.max_elevation_degrees.to_radians()),
        );
        camera.set_smoothness(
            options.look_smoothness,
            options.position_smoothness,
        );
        camera
    }

    /// Full constructor.
    ///
    /// - `heading`: host-convention heading the initial look should read
    ///   as. The look itself is not turned; the horizontal reference is
    ///   placed accordingly.
    /// - `max_elevation`: magnitude of the symmetric elevation clamp, capped
    ///   at π/2. An initial look outside the clamp is pulled back onto it.
    ///
    /// A zero pedestal falls back to world up; a zero look falls back to a
    /// level direction.
    #[must_use]
    pub fn with_heading_and_clamp(
        position: Vector3,
        pedestal: Vector3,
        look: Vector3,
        heading: Option<f64>,
        max_elevation: Option<f64>,
    ) -> Self {
        let max_elevation = max_elevation
            .map_or(DEFAULT_MAX_ELEVATION, f64::abs)
            .min(FRAC_PI_2);
        let heading = angle_from_host(heading.unwrap_or(0.0));
        let position = from_host(position);

        let mut pedestal = from_host(pedestal).normalized();
        if pedestal.is_zero() {
            log::warn!("camera pedestal is a zero vector, using world up");
            pedestal = Vector3::UP;
        }

        let mut look = from_host(look).normalized();
        if look.is_zero() {
            log::warn!("camera look is a zero vector, using a level direction");
            look = any_orthogonal(pedestal);
        }

        let mut leveled = look
            .projected_onto_plane(&Plane::new(pedestal, 0.0))
            .normalized();
        if leveled.is_zero() {
            leveled = any_orthogonal(pedestal);
        }
        let horizontal = leveled.rotated_about_orthogonal(pedestal, heading);

        let measured = Direction2::from_vector3(look, pedestal, horizontal);
        let elevation = measured.v.clamp(-max_elevation, max_elevation);
        if (elevation - measured.v).abs() > EPSILON
            || look.cross(pedestal).is_zero()
        {
            log::debug!(
                "initial look elevation {:.4} clamped to {elevation:.4}",
                measured.v
            );
            look = Direction2::new(-heading, elevation)
                .to_vector3(pedestal, horizontal)
                .normalized();
        }

        let mut camera = Self {
            position,
            target_position: position,
            pedestal,
            look,
            right: leveled.cross(pedestal).normalized(),
            up: Vector3::ZERO,
            horizontal,
            heading: Tracked::settled(heading),
            elevation: Tracked::settled(elevation),
            right_incline: Tracked::default(),
            forward_incline: Tracked::default(),
            look_coefficient: decay_coefficient(0.0),
            position_coefficient: decay_coefficient(0.0),
            min_elevation: -max_elevation,
            max_elevation,
        };
        camera.refresh_basis();
        camera
    }

    // -- Accessors (host convention, always copies) ----------------------

    /// Current position.
    #[must_use]
    pub fn position(&self) -> Vector3 {
        to_host(self.position)
    }

    /// Position the camera is being smoothed toward.
    #[must_use]
    pub fn target_position(&self) -> Vector3 {
        to_host(self.target_position)
    }

    /// Viewing direction.
    #[must_use]
    pub fn look(&self) -> Vector3 {
        to_host(self.look)
    }

    /// Right basis vector.
    #[must_use]
    pub fn right(&self) -> Vector3 {
        to_host(self.right)
    }

    /// Up basis vector. Returned as stored, without the host reflection.
    #[must_use]
    pub fn up(&self) -> Vector3 {
        self.up
    }

    /// Pedestal (roll reference) axis.
    #[must_use]
    pub fn pedestal(&self) -> Vector3 {
        to_host(self.pedestal)
    }

    /// Heading in radians, host convention. Accumulates past ±π.
    #[must_use]
    pub fn horizontal_angle(&self) -> f64 {
        angle_to_host(self.heading.current)
    }

    /// Heading in degrees, host convention.
    #[must_use]
    pub fn horizontal_angle_degrees(&self) -> f64 {
        self.horizontal_angle().to_degrees()
    }

    /// Elevation above the pedestal's orthogonal plane, in radians, host
    /// convention.
    #[must_use]
    pub fn vertical_angle(&self) -> f64 {
        angle_to_host(self.elevation.current)
    }

    /// Accumulated sideways tilt of the pedestal, in radians, host
    /// convention.
    #[must_use]
    pub fn right_inclination(&self) -> f64 {
        angle_to_host(self.right_incline.current)
    }

    /// Accumulated fore/aft tilt of the pedestal, in radians, host
    /// convention.
    #[must_use]
    pub fn forward_inclination(&self) -> f64 {
        angle_to_host(self.forward_incline.current)
    }

    /// `(min, max)` elevation clamp in radians. Symmetric, so the same in
    /// either convention.
    #[must_use]
    pub fn elevation_limits(&self) -> (f64, f64) {
        (self.min_elevation, self.max_elevation)
    }

    /// `(look, position)` per-tick smoothing coefficients.
    #[must_use]
    pub fn smoothing_coefficients(&self) -> (f64, f64) {
        (self.look_coefficient, self.position_coefficient)
    }

    // -- Internal rotation applicators -----------------------------------

    /// Recompute `right` and `up` from `look` and `pedestal`.
    ///
    /// When looking straight along the pedestal the cross product vanishes;
    /// the previous `right` is kept, re-orthogonalized against `look`.
    pub(super) fn refresh_basis(&mut self) {
        self.pedestal.normalize();
        self.look.normalize();
        let right = self.look.cross(self.pedestal);
        self.right = if right.is_zero() {
            (self.right - self.right.projected_onto_vector(self.look))
                .normalized()
        } else {
            right.normalized()
        };
        self.up = self.right.cross(self.look);
    }

    /// Turn `look` about the pedestal. Positive deltas turn toward
    /// `right`, i.e. a negative right-hand rotation about the pedestal.
    pub(super) fn apply_heading(&mut self, delta: f64) {
        if delta.abs() < EPSILON {
            return;
        }
        self.look.rotate_about(self.pedestal, -delta);
        self.heading.current += delta;
        self.refresh_basis();
    }

    /// Lift `look` about `right`, stopping exactly at the elevation clamp.
    pub(super) fn apply_elevation(&mut self, delta: f64) {
        let pinned = (self.elevation.current + delta)
            .clamp(self.min_elevation, self.max_elevation);
        let applied = pinned - self.elevation.current;
        if applied.abs() < EPSILON {
            return;
        }
        self.look.rotate_about_orthogonal(self.right, applied);
        self.elevation.current = pinned;
        self.refresh_basis();
    }

    /// Tilt the pedestal sideways, about `pedestal × right`, carrying the
    /// look and the heading reference with it.
    pub(super) fn apply_right_incline(&mut self, delta: f64) {
        if delta.abs() < EPSILON {
            return;
        }
        let axis = self.pedestal.cross(self.right);
        self.pedestal.rotate_about_orthogonal(axis, delta);
        self.look.rotate_about(axis, delta);
        self.horizontal.rotate_about(axis, delta);
        self.right_incline.current += delta;
        self.refresh_basis();
    }

    /// Tilt the pedestal fore/aft, about `right`, carrying the look and the
    /// heading reference with it.
    pub(super) fn apply_forward_incline(&mut self, delta: f64) {
        if delta.abs() < EPSILON {
            return;
        }
        let axis = self.right;
        self.pedestal.rotate_about(axis, delta);
        self.look.rotate_about_orthogonal(axis, delta);
        self.horizontal.rotate_about(axis, delta);
        self.forward_incline.current += delta;
        self.refresh_basis();
    }

    pub(super) fn clamp_elevation(&self, elevation: f64) -> f64 {
        elevation.clamp(self.min_elevation, self.max_elevation)
    }
}
