//! Draggable puller figures.

use core::fmt;

use crate::float::Float;
use crate::knot::{KnotId, Size, Team};
use crate::vec::Vec2;

/// Stable puller identifier: the index the puller was added at.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PullerId(pub usize);

impl fmt::Display for PullerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A puller figure. `attached` mirrors the owning knot's `occupant`; only
/// [`Rope`](crate::rope::Rope) changes either side.
#[derive(Clone, Debug, PartialEq)]
pub struct Puller<F: Float> {
    pub id: PullerId,
    pub team: Team,
    pub size: Size,
    /// Force contributed while attached.
    pub magnitude: F,
    /// Centre of the figure, updated on every drag-move.
    pub pos: Vec2<F>,
    pub attached: Option<KnotId>,
}

impl<F: Float> Puller<F> {
    /// A puller resting in the toolbox at `pos`, pulling with its size's default force.
    pub fn new(id: PullerId, team: Team, size: Size, pos: Vec2<F>) -> Self {
        Puller {
            id,
            team,
            size,
            magnitude: size.default_magnitude(),
            pos,
            attached: None,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }
}
