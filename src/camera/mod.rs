//! Free-flying camera state machine.
//!
//! Provides the pedestal/look camera with immediate and smoothed control,
//! the host handedness boundary, and a GPU-ready state snapshot.

/// Immediate and smoothed mutators and the per-tick update.
pub mod controller;
/// Camera state, construction, accessors and rotation applicators.
pub mod core;
/// Host-facing `Pod` snapshot of the camera.
pub mod frame;
/// Internal/host coordinate convention conversion.
pub mod handedness;

pub use self::core::{Camera, DEFAULT_MAX_ELEVATION};
pub use frame::CameraFrame;
