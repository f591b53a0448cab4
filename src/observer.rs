//! Observer trait for watching knot highlights and bindings.

use crate::knot::KnotId;
use crate::puller::PullerId;

/// Trait for observing changes to the rope.
///
/// Implement this to redraw knots, play a snap sound or refresh the force
/// arrows. All methods have default no-op implementations.
pub trait RopeObserver {
    /// Called after a drag-move recomputed the highlighted knot (`None` when
    /// nothing is in reach).
    fn on_highlight(&mut self, _puller: PullerId, _knot: Option<KnotId>) {}

    /// Called after a puller was bound to a knot.
    fn on_bind(&mut self, _puller: PullerId, _knot: KnotId) {}

    /// Called after a puller let go of a knot.
    fn on_release(&mut self, _puller: PullerId, _knot: KnotId) {}
}

/// A no-op observer. Use as default when no observation needed.
pub struct NoOpRopeObserver;

impl RopeObserver for NoOpRopeObserver {}
