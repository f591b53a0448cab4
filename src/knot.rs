//! Knots on the rope and the puller kinds they accept.

use core::fmt;

use crate::float::Float;
use crate::puller::PullerId;
use crate::vec::Vec2;

/// Stable knot identifier: the index the knot was added at.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KnotId(pub usize);

impl fmt::Display for KnotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which end of the rope a knot pulls toward.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Team colour. A puller can only hold knots of its own colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Team {
    Red,
    Blue,
}

/// Figure size in the toolbox; decides the default pull.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    /// Default force for a figure of this size.
    pub fn default_magnitude<F: Float>(self) -> F {
        match self {
            Size::Small => F::from_f32(10.0),
            Size::Medium => F::from_f32(20.0),
            Size::Large => F::from_f32(30.0),
        }
    }
}

/// A fixed slot on the rope.
#[derive(Clone, Debug, PartialEq)]
pub struct Knot<F: Float> {
    pub id: KnotId,
    pub pos: Vec2<F>,
    pub side: Side,
    pub team: Team,
    /// Puller currently holding this knot.
    pub occupant: Option<PullerId>,
    /// Drag preview: this is where the puller being dragged would land.
    pub highlighted: bool,
}

impl<F: Float> Knot<F> {
    pub fn new(id: KnotId, pos: Vec2<F>, side: Side, team: Team) -> Self {
        Knot {
            id,
            pos,
            side,
            team,
            occupant: None,
            highlighted: false,
        }
    }

    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }
}
