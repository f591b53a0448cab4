//! Configuration for the rope and the applied-force slider.

use crate::error::ConfigError;
use crate::float::Float;

/// Default distance below which a dropped puller snaps onto a knot.
pub const DEFAULT_CAPTURE_THRESHOLD: f32 = 200.0;

/// Configuration for knot matching.
///
/// # Builder Pattern
/// ```
/// use tugrope::config::RopeConfig;
///
/// let config: RopeConfig<f32> = RopeConfig::new().with_capture_threshold(150.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RopeConfig<F: Float> {
    /// A puller only snaps to knots strictly closer than this. Default: 200.
    pub capture_threshold: F,
}

impl<F: Float> RopeConfig<F> {
    pub fn new() -> Self {
        RopeConfig {
            capture_threshold: F::from_f32(DEFAULT_CAPTURE_THRESHOLD),
        }
    }

    pub fn with_capture_threshold(mut self, threshold: F) -> Self {
        self.capture_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.capture_threshold.is_finite() || self.capture_threshold <= F::zero() {
            return Err(ConfigError::InvalidCaptureThreshold);
        }
        Ok(())
    }
}

impl<F: Float> Default for RopeConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// What the slider does with its value when the drag ends.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ReleasePolicy<F: Float> {
    /// Keep whatever value the drag left behind.
    Hold,
    /// Snap back to a neutral value, e.g. zero applied force.
    ResetTo(F),
}

/// Configuration for a horizontal slider.
///
/// ```
/// use tugrope::config::{ReleasePolicy, SliderConfig};
///
/// let config = SliderConfig::new(-500.0f32, 500.0, 300.0)
///     .with_release(ReleasePolicy::ResetTo(0.0))
///     .with_divisions(8);
/// assert_eq!(config.divisions, 8);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SliderConfig<F: Float> {
    pub min: F,
    pub max: F,
    /// Track width in pixels.
    pub track_length: F,
    /// Default: [`ReleasePolicy::Hold`].
    pub release: ReleasePolicy<F>,
    /// Number of equal ruler divisions. Default: 8.
    pub divisions: usize,
}

impl<F: Float> SliderConfig<F> {
    pub fn new(min: F, max: F, track_length: F) -> Self {
        SliderConfig {
            min,
            max,
            track_length,
            release: ReleasePolicy::Hold,
            divisions: 8,
        }
    }

    pub fn with_release(mut self, release: ReleasePolicy<F>) -> Self {
        self.release = release;
        self
    }

    /// Shorthand for `with_release(ReleasePolicy::ResetTo(0))`.
    pub fn zero_on_release(self) -> Self {
        self.with_release(ReleasePolicy::ResetTo(F::zero()))
    }

    pub fn with_divisions(mut self, divisions: usize) -> Self {
        self.divisions = divisions;
        self
    }
}
