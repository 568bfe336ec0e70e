//! Error types for tactics-core.
//!
//! The build engine has a single failure mode: an axis value that is not a
//! member of its closed enumeration. That can only happen at the boundary
//! where external string data is converted into the axis enums, so the error
//! carries the offending axis and the raw value.
//!
//! Everything else in the engine (table lookup, fold, clamp) is total.

use crate::build::Axis;

/// Common trait for all tactics-core errors.
///
/// Use `#[derive(thiserror::Error)]` for the `Display`/`Error` impl and return a
/// stable identifier from [`GameError::error_code`] for logging and tests.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;

    /// Whether repeating the same call could succeed.
    ///
    /// Invalid input is a caller error, so the default is `false`.
    fn is_retryable(&self) -> bool {
        false
    }
}

/// Failure while turning caller input into a [`UnitBuild`](crate::UnitBuild).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// The value is not a member of the axis enumeration.
    #[error("invalid {axis} value '{value}'")]
    InvalidAxisValue { axis: Axis, value: String },
}

impl GameError for BuildError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAxisValue { .. } => "INVALID_AXIS_VALUE",
        }
    }
}

/// Failure while building or drawing from a fate deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    #[error("fate deck has no cards")]
    Empty,

    #[error("rarity weights sum to zero")]
    ZeroWeights,
}

impl GameError for DeckError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "DECK_EMPTY",
            Self::ZeroWeights => "DECK_ZERO_WEIGHTS",
        }
    }
}
