//! Horizontal force arrows derived from the totals.
//!
//! Only the endpoints are computed here; drawing the arrow shape is left to
//! the renderer.

use crate::float::Float;
use crate::force::ForceTotals;
use crate::knot::Side;

/// A horizontal arrow from `tail_x` to `tip_x`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ArrowSpan<F: Float> {
    pub tail_x: F,
    pub tip_x: F,
}

impl<F: Float> ArrowSpan<F> {
    pub fn length(&self) -> F {
        (self.tip_x - self.tail_x).abs()
    }

    /// Direction the arrow points, `None` for a zero-length arrow.
    pub fn direction(&self) -> Option<Side> {
        if self.tip_x > self.tail_x {
            Some(Side::Right)
        } else if self.tip_x < self.tail_x {
            Some(Side::Left)
        } else {
            None
        }
    }
}

/// Left, right and sum arrows sharing one tail, usually the cart centre.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ForceArrows<F: Float> {
    pub left: ArrowSpan<F>,
    pub right: ArrowSpan<F>,
    pub sum: ArrowSpan<F>,
}

impl<F: Float> ForceArrows<F> {
    /// `scale` converts force units to pixels.
    pub fn from_totals(tail_x: F, totals: &ForceTotals<F>, scale: F) -> Self {
        let span = |dx: F| ArrowSpan { tail_x, tip_x: tail_x + dx * scale };
        ForceArrows {
            left: span(-totals.left),
            right: span(totals.right),
            sum: span(totals.net),
        }
    }
}

/// Whether the "sum of forces = 0" readout is shown in place of a sum arrow.
pub fn show_zero_sum_label<F: Float>(show_forces: bool, show_sum: bool, net: F) -> bool {
    show_forces && show_sum && net == F::zero()
}

/// The friction label moves below its arrow when the applied force and the
/// friction point the same way, so it does not sit on the applied arrow.
pub fn friction_label_below<F: Float>(applied: F, friction: F) -> bool {
    let zero = F::zero();
    (applied < zero && friction < zero) || (applied > zero && friction > zero)
}
