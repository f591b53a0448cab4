//! Error types for configuration and knot assignment.

use core::fmt;

use crate::knot::KnotId;
use crate::puller::PullerId;

/// Invalid construction parameters. Reported eagerly so that no NaN or
/// division by zero can reach the mapping code later.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Slider range must satisfy `min < max`.
    EmptyRange { min: f32, max: f32 },
    /// Range bounds must be finite.
    NonFiniteBound,
    /// Track length must be positive and finite.
    InvalidTrackLength,
    /// The release reset target must lie inside the slider range.
    ResetOutOfRange { target: f32 },
    /// Capture threshold must be positive and finite.
    InvalidCaptureThreshold,
    /// The ruler needs at least one division.
    InvalidDivisions,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyRange { min, max } => {
                write!(f, "range must satisfy min < max (min: {}, max: {})", min, max)
            }
            ConfigError::NonFiniteBound => write!(f, "range bounds must be finite"),
            ConfigError::InvalidTrackLength => write!(f, "track length must be positive and finite"),
            ConfigError::ResetOutOfRange { target } => {
                write!(f, "release reset value {} lies outside the range", target)
            }
            ConfigError::InvalidCaptureThreshold => {
                write!(f, "capture threshold must be positive and finite")
            }
            ConfigError::InvalidDivisions => write!(f, "ruler needs at least one division"),
        }
    }
}

/// A bind request that could not be committed. Recoverable: the puller is
/// simply left unattached.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignmentError {
    /// The knot is owned by another puller (stale highlight).
    AlreadyOccupied { knot: KnotId, occupant: PullerId },
    /// The knot only accepts pullers of a different colour.
    KindMismatch { knot: KnotId, puller: PullerId },
    /// Knot id is not part of this rope.
    UnknownKnot { knot: KnotId, count: usize },
    /// Puller id is not part of this rope.
    UnknownPuller { puller: PullerId, count: usize },
    /// Magnitudes must be finite.
    InvalidMagnitude { puller: PullerId },
}

impl fmt::Display for AssignmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentError::AlreadyOccupied { knot, occupant } => {
                write!(f, "knot {} is already held by puller {}", knot, occupant)
            }
            AssignmentError::KindMismatch { knot, puller } => {
                write!(f, "puller {} does not fit knot {}", puller, knot)
            }
            AssignmentError::UnknownKnot { knot, count } => {
                write!(f, "knot {} out of bounds (count: {})", knot, count)
            }
            AssignmentError::UnknownPuller { puller, count } => {
                write!(f, "puller {} out of bounds (count: {})", puller, count)
            }
            AssignmentError::InvalidMagnitude { puller } => {
                write!(f, "puller {} needs a finite magnitude", puller)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for AssignmentError {}
