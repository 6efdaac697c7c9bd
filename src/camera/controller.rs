//! Immediate and smoothed mutation of a [`Camera`], plus the per-tick
//! `update`.
//!
//! Immediate setters change the vectors right away. Smoothed setters only
//! move a target; [`Camera::update`] then closes a fixed fraction of the
//! remaining distance on every call.

use super::core::{Camera, Tracked};
use super::handedness::from_host;
use crate::math::{Direction2, Plane, Vector3};
use crate::util::smoothing::{decay_coefficient, nearest_equivalent_angle};

impl Camera {
    /// Heading and clamped elevation of a host-convention direction in the
    /// current frame. `None` for a zero direction.
    fn measure(&self, host_direction: Vector3) -> Option<(f64, f64)> {
        let dir = from_host(host_direction).normalized();
        if dir.is_zero() {
            return None;
        }
        let measured =
            Direction2::from_vector3(dir, self.pedestal, self.horizontal);
        // Straight along the pedestal the heading is undefined; keep ours.
        let heading = if dir.cross(self.pedestal).is_zero() {
            self.heading.current
        } else {
            nearest_equivalent_angle(-measured.h, self.heading.current)
        };
        let elevation = self.clamp_elevation(measured.v);
        if elevation != measured.v {
            log::debug!(
                "requested elevation {:.4} clamped to {elevation:.4}",
                measured.v
            );
        }
        Some((heading, elevation))
    }

    /// Point the camera along `look` (host convention) immediately.
    ///
    /// The elevation is clamped, and both look angles and their targets are
    /// snapped to the new direction. A zero vector is ignored.
    pub fn set_look(&mut self, look: Vector3) {
        let reprojected = self
            .horizontal
            .projected_onto_plane(&Plane::new(self.pedestal, 0.0))
            .normalized();
        if !reprojected.is_zero() {
            self.horizontal = reprojected;
        }
        let Some((heading, elevation)) = self.measure(look) else {
            log::debug!("set_look ignored a zero direction");
            return;
        };
        self.look = Direction2::new(-heading, elevation)
            .to_vector3(self.pedestal, self.horizontal)
            .normalized();
        self.heading = Tracked::settled(heading);
        self.elevation = Tracked::settled(elevation);
        self.refresh_basis();
    }

    /// Retarget the look angles toward `look` (host convention); the turn
    /// takes the shortest way round and happens over later updates.
    pub fn set_look_smooth(&mut self, look: Vector3) {
        let Some((heading, elevation)) = self.measure(look) else {
            log::debug!("set_look_smooth ignored a zero direction");
            return;
        };
        self.heading.target = heading;
        self.elevation.target = elevation;
    }

    /// Look at a host-convention point immediately. Ignored when the point
    /// is the camera position.
    pub fn look_at(&mut self, point: Vector3) {
        self.set_look(point - self.position());
    }

    /// Smoothed [`Camera::look_at`].
    pub fn look_at_smooth(&mut self, point: Vector3) {
        self.set_look_smooth(point - self.position());
    }

    /// Queue a heading change; positive turns toward `right`.
    pub fn rotate_left(&mut self, radians: f64) {
        self.heading.target += radians;
    }

    /// Queue an elevation change. The target is clamped now, not at tick
    /// time.
    pub fn rotate_up(&mut self, radians: f64) {
        let requested = self.elevation.target + radians;
        let clamped = self.clamp_elevation(requested);
        if clamped != requested {
            log::debug!(
                "elevation target {requested:.4} clamped to {clamped:.4}"
            );
        }
        self.elevation.target = clamped;
    }

    /// Queue a sideways pedestal tilt.
    pub fn incline_right(&mut self, radians: f64) {
        self.right_incline.target += radians;
    }

    /// Queue a fore/aft pedestal tilt.
    pub fn incline_forward(&mut self, radians: f64) {
        self.forward_incline.target += radians;
    }

    /// Move to a host-convention position immediately, dropping any pending
    /// position smoothing.
    pub fn set_position(&mut self, position: Vector3) {
        self.position = from_host(position);
        self.target_position = self.position;
    }

    /// Retarget the position; the camera glides there over later updates.
    pub fn set_position_smooth(&mut self, position: Vector3) {
        self.target_position = from_host(position);
    }

    fn translate(&mut self, offset: Vector3) {
        self.position += offset;
        self.target_position += offset;
    }

    /// Step along `right` immediately.
    pub fn move_right(&mut self, distance: f64) {
        self.translate(self.right * distance);
    }

    /// Step along `look` immediately.
    pub fn move_forward(&mut self, distance: f64) {
        self.translate(self.look * distance);
    }

    /// Step along `up` immediately.
    pub fn move_up(&mut self, distance: f64) {
        self.translate(self.up * distance);
    }

    /// Set look and position smoothness, each in `[0, 1]` (0 snaps, 1 is
    /// maximal smoothing).
    pub fn set_smoothness(&mut self, look: f64, position: f64) {
        self.look_coefficient = decay_coefficient(look);
        self.position_coefficient = decay_coefficient(position);
    }

    /// Advance every smoothed quantity by one tick.
    ///
    /// Angle changes are applied as rotations of the look and pedestal
    /// vectors, never by writing the angle fields, so the derived basis
    /// stays consistent.
    pub fn update(&mut self) {
        self.advance(self.look_coefficient, self.position_coefficient);
    }

    /// Jump straight to every target.
    pub fn snap_to_targets(&mut self) {
        self.advance(1.0, 1.0);
    }

    fn advance(&mut self, look_coefficient: f64, position_coefficient: f64) {
        let heading = self.heading.step(look_coefficient);
        self.apply_heading(heading);
        let elevation = self.elevation.step(look_coefficient);
        self.apply_elevation(elevation);
        let right = self.right_incline.step(look_coefficient);
        self.apply_right_incline(right);
        let forward = self.forward_incline.step(look_coefficient);
        self.apply_forward_incline(forward);

        self.position = Vector3::lerp(
            self.position,
            self.target_position,
            position_coefficient,
        );
        log::trace!(
            "camera tick: heading {heading:+.5} elevation {elevation:+.5} \
             incline ({right:+.5}, {forward:+.5})"
        );
    }

    /// Whether every angle and the position are within `tolerance` of their
    /// targets.
    #[must_use]
    pub fn is_settled(&self, tolerance: f64) -> bool {
        [
            self.heading,
            self.elevation,
            self.right_incline,
            self.forward_incline,
        ]
        .iter()
        .all(|angle| angle.remaining() <= tolerance)
            && self.position.distance(self.target_position) <= tolerance
    }
}
