//! Directional force totals from the pullers on the rope.

use crate::float::Float;
use crate::knot::{Knot, Side};
use crate::puller::Puller;
use crate::rope::Rope;

/// Force pulling each way plus the signed sum. Positive `net` points right.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ForceTotals<F: Float> {
    pub left: F,
    pub right: F,
    pub net: F,
}

impl<F: Float> ForceTotals<F> {
    /// Side the rope is pulled toward, `None` when balanced.
    pub fn winning_side(&self) -> Option<Side> {
        if self.net > F::zero() {
            Some(Side::Right)
        } else if self.net < F::zero() {
            Some(Side::Left)
        } else {
            None
        }
    }
}

/// Sum the magnitudes of attached pullers by the side of the knot they hold.
///
/// Pullers without a knot, or whose knot is not in `knots`, add nothing.
/// The result does not depend on the order of either slice.
pub fn compute_totals<F: Float>(knots: &[Knot<F>], pullers: &[Puller<F>]) -> ForceTotals<F> {
    let mut left = F::zero();
    let mut right = F::zero();
    for knot in knots {
        let Some(occupant) = knot.occupant else { continue };
        let Some(puller) = pullers.iter().find(|p| p.id == occupant) else { continue };
        if puller.attached != Some(knot.id) {
            continue;
        }
        match knot.side {
            Side::Left => left = left + puller.magnitude,
            Side::Right => right = right + puller.magnitude,
        }
    }
    ForceTotals { left, right, net: right - left }
}

/// Caches the totals of a [`Rope`] until its version changes. Keep one
/// aggregator per rope: the cache key is the version number alone.
#[derive(Clone, Debug, Default)]
pub struct ForceAggregator<F: Float> {
    cached: Option<(u64, ForceTotals<F>)>,
}

impl<F: Float> ForceAggregator<F> {
    pub fn new() -> Self {
        ForceAggregator { cached: None }
    }

    pub fn totals(&mut self, rope: &Rope<F>) -> ForceTotals<F> {
        match self.cached {
            Some((version, totals)) if version == rope.version() => totals,
            _ => {
                let totals = compute_totals(rope.knots(), rope.pullers());
                self.cached = Some((rope.version(), totals));
                totals
            }
        }
    }

    /// Forget the cached totals.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}
