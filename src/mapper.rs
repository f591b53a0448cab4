//! Bounded affine mapping between a pixel offset along a track and a model value.
//!
//! The pixel axis runs from `0` to `track_length`; the value axis from `min`
//! to `max`. Dragging past either end of the track pins the value to the
//! matching end of the range.

use crate::error::ConfigError;
use crate::float::Float;

/// Map a pixel offset to a value in `[min, max]`.
///
/// The offset is clamped to `[0, track_length]` first, so out-of-range drag
/// positions never produce out-of-range values. Callers must guarantee
/// `max > min` and `track_length > 0`; [`LinearMapper::new`] checks both.
pub fn to_value<F: Float>(pixel: F, track_length: F, min: F, max: F) -> F {
    let t = pixel.clamp(F::zero(), track_length) / track_length;
    min + (max - min) * t
}

/// Map a value back to its pixel offset. Not clamped: the value is expected
/// to come from already-bounded model state.
pub fn to_pixel<F: Float>(value: F, track_length: F, min: F, max: F) -> F {
    (value - min) * track_length / (max - min)
}

/// A validated `(track_length, min, max)` triple.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinearMapper<F: Float> {
    track_length: F,
    min: F,
    max: F,
}

impl<F: Float> LinearMapper<F> {
    pub fn new(track_length: F, min: F, max: F) -> Result<Self, ConfigError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ConfigError::NonFiniteBound);
        }
        if min >= max {
            return Err(ConfigError::EmptyRange { min: min.to_f32(), max: max.to_f32() });
        }
        if !track_length.is_finite() || track_length <= F::zero() {
            return Err(ConfigError::InvalidTrackLength);
        }
        Ok(LinearMapper { track_length, min, max })
    }

    pub fn to_value(&self, pixel: F) -> F {
        to_value(pixel, self.track_length, self.min, self.max)
    }

    pub fn to_pixel(&self, value: F) -> F {
        to_pixel(value, self.track_length, self.min, self.max)
    }

    /// Clamp a value into `[min, max]`.
    pub fn clamp_value(&self, value: F) -> F {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: F) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn min(&self) -> F { self.min }
    pub fn max(&self) -> F { self.max }
    pub fn track_length(&self) -> F { self.track_length }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_maps_to_zero() {
        assert_eq!(to_value(150.0f32, 300.0, -500.0, 500.0), 0.0);
    }

    #[test]
    fn rejects_inverted_range() {
        let err = LinearMapper::new(300.0f32, 5.0, 5.0).unwrap_err();
        assert_eq!(err, ConfigError::EmptyRange { min: 5.0, max: 5.0 });
        assert_eq!(LinearMapper::new(0.0f32, 0.0, 1.0), Err(ConfigError::InvalidTrackLength));
        assert_eq!(LinearMapper::new(10.0f32, f32::NAN, 1.0), Err(ConfigError::NonFiniteBound));
    }
}
