//! Shared numeric helpers.

pub mod smoothing;
