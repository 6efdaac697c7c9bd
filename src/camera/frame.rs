use bytemuck::{Pod, Zeroable};

use super::core::Camera;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
/// Host-convention snapshot of a camera, laid out as four 16-byte rows so
/// it can be copied straight into a uniform buffer.
pub struct CameraFrame {
    /// Camera position.
    pub position: [f32; 3],
    /// Heading in radians.
    pub horizontal_angle: f32,
    /// Viewing direction.
    pub look: [f32; 3],
    /// Elevation in radians, host convention.
    pub vertical_angle: f32,
    /// Right basis vector.
    pub right: [f32; 3],
    /// Sideways pedestal tilt in radians, host convention.
    pub right_inclination: f32,
    /// Up basis vector (unreflected, as returned by [`Camera::up`]).
    pub up: [f32; 3],
    /// Fore/aft pedestal tilt in radians, host convention.
    pub forward_inclination: f32,
}

impl Camera {
    /// Snapshot of the current state for the host.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn frame(&self) -> CameraFrame {
        CameraFrame {
            position: self.position().as_vec3().to_array(),
            horizontal_angle: self.horizontal_angle() as f32,
            look: self.look().as_vec3().to_array(),
            vertical_angle: self.vertical_angle() as f32,
            right: self.right().as_vec3().to_array(),
            right_inclination: self.right_inclination() as f32,
            up: self.up().as_vec3().to_array(),
            forward_inclination: self.forward_inclination() as f32,
        }
    }
}
