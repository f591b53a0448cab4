//! Horizontal slider that turns a thumb drag into a bounded model value.

use crate::config::{ReleasePolicy, SliderConfig};
use crate::error::ConfigError;
use crate::float::Float;
use crate::knot::Side;
use crate::mapper::LinearMapper;
use alloc::vec::Vec;

/// One ruler tick under the track.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tick<F: Float> {
    pub index: usize,
    /// Pixel offset along the track.
    pub offset: F,
    /// Model value at this tick.
    pub value: F,
    /// Major ticks are drawn longer (every second tick).
    pub major: bool,
    /// Labelled ticks show their value (every fourth tick, ends included).
    pub labelled: bool,
}

/// Slider state: `min <= value <= max` holds after every operation.
#[derive(Clone, Debug)]
pub struct Slider<F: Float> {
    mapper: LinearMapper<F>,
    value: F,
    release: ReleasePolicy<F>,
    divisions: usize,
    enabled: bool,
    locked: Option<Side>,
}

impl<F: Float> Slider<F> {
    /// Build a slider. The initial value is the release target if there is
    /// one, otherwise zero clamped into range.
    pub fn new(config: SliderConfig<F>) -> Result<Self, ConfigError> {
        let mapper = LinearMapper::new(config.track_length, config.min, config.max)?;
        if config.divisions == 0 {
            return Err(ConfigError::InvalidDivisions);
        }
        let value = match config.release {
            ReleasePolicy::ResetTo(target) => {
                if !target.is_finite() || !mapper.contains(target) {
                    return Err(ConfigError::ResetOutOfRange { target: target.to_f32() });
                }
                target
            }
            ReleasePolicy::Hold => mapper.clamp_value(F::zero()),
        };
        Ok(Slider {
            mapper,
            value,
            release: config.release,
            divisions: config.divisions,
            enabled: true,
            locked: None,
        })
    }

    /// Drag-move: map the thumb position to a value. Ignored while disabled.
    pub fn drag_to(&mut self, pixel: F) -> F {
        if self.enabled {
            let raw = self.mapper.to_value(pixel);
            self.value = self.apply_lock(raw);
        }
        self.value
    }

    /// Drag-end: apply the release policy.
    pub fn release(&mut self) -> F {
        if let ReleasePolicy::ResetTo(target) = self.release {
            self.value = self.apply_lock(target);
        }
        self.value
    }

    /// External reset from the model; clamped into range.
    pub fn set_value(&mut self, value: F) {
        let clamped = self.mapper.clamp_value(value);
        self.value = self.apply_lock(clamped);
    }

    pub fn value(&self) -> F {
        self.value
    }

    /// Pixel offset of the thumb centre.
    pub fn thumb_offset(&self) -> F {
        self.mapper.to_pixel(self.value)
    }

    /// Left edge of a thumb image `knob_width` wide, centred on the value.
    pub fn thumb_left(&self, knob_width: F) -> F {
        self.thumb_offset() - knob_width * F::half()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Forbid values pushing toward `side`: a left lock keeps the value at or
    /// above zero, a right lock at or below zero.
    pub fn lock_direction(&mut self, side: Option<Side>) {
        self.locked = side;
        self.value = self.apply_lock(self.value);
    }

    pub fn locked_direction(&self) -> Option<Side> {
        self.locked
    }

    pub fn mapper(&self) -> &LinearMapper<F> {
        &self.mapper
    }

    /// Ruler ticks, `divisions + 1` of them from the left end to the right end.
    pub fn ticks(&self) -> Vec<Tick<F>> {
        let last = F::from_usize(self.divisions);
        (0..=self.divisions)
            .map(|index| {
                let t = F::from_usize(index) / last;
                Tick {
                    index,
                    offset: F::zero().lerp(self.mapper.track_length(), t),
                    value: self.mapper.min().lerp(self.mapper.max(), t),
                    major: index % 2 == 0,
                    labelled: index % 4 == 0,
                }
            })
            .collect()
    }

    fn apply_lock(&self, value: F) -> F {
        let neutral = self.mapper.clamp_value(F::zero());
        match self.locked {
            Some(Side::Left) => value.max(neutral),
            Some(Side::Right) => value.min(neutral),
            None => value,
        }
    }
}
