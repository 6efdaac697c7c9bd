//! Crate-level error types.
//!
//! Geometry never fails: degenerate inputs have defined no-op or `None`
//! results. Errors only come from the configuration surface.

use std::fmt;

/// Errors produced by the axlecam crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxleError {
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// An option value is outside its allowed range.
    InvalidOption(String),
}

impl fmt::Display for AxleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOption(msg) => write!(f, "invalid option: {msg}"),
        }
    }
}

impl std::error::Error for AxleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure() {
        let err = AxleError::InvalidOption("look_smoothness".to_owned());
        assert_eq!(err.to_string(), "invalid option: look_smoothness");
        let err = AxleError::OptionsParse("bad".to_owned());
        assert_eq!(err.to_string(), "options parse error: bad");
    }
}
