// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Gimbal-lock-resistant free-flying camera.
//!
//! The camera keeps its orientation as a tiltable pedestal axis plus two
//! decoupled look angles (the "nested-axle" model) instead of a single
//! rotation, so yaw/pitch control never collapses at the poles.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - the camera state machine: immediate setters,
//!   smoothed setters and the per-tick [`camera::Camera::update`]
//! - [`math::Vector3`] - vector kernel with in-place and pure rotation
//!   operators
//! - [`math::Direction2`] - two-angle direction encoding
//! - [`math::intersect_plane`] / [`math::intersect_rectangle`] - ray picking
//! - [`options::Options`] - TOML-backed configuration
//!
//! # Conventions
//!
//! Internally everything is right-handed. Values crossing the public camera
//! API are in the host's left-handed convention (y reflected), except the
//! up vector, which is passed through as stored. See
//! [`camera::handedness`].

pub mod camera;
pub mod error;
pub mod math;
pub mod options;
pub mod util;

pub use camera::{Camera, CameraFrame};
pub use error::AxleError;
pub use math::{Direction2, Plane, Ray, Rectangle, Vector3};
