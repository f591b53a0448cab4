//! The rope: knots, pullers, and the one-puller-per-knot assignment between them.
//!
//! All mutation of the assignment goes through [`Rope`], which updates the
//! knot's `occupant` and the puller's `attached` inside a single `&mut self`
//! call, so the two sides never disagree between calls.
//!
//! A drag gesture drives the rope like this:
//!
//! 1. every move calls [`Rope::move_puller`], which only refreshes the
//!    highlighted knot;
//! 2. the drag end calls [`Rope::drop_puller`], which binds the puller to the
//!    highlighted knot or lets it fall off the rope.
//!
//! ```
//! use tugrope::{Rope, RopeConfig, Side, Size, Team, Vec2};
//!
//! let mut rope = Rope::new(RopeConfig::<f32>::new()).unwrap();
//! let knot = rope.add_knot(Vec2::new(100.0, 100.0), Side::Left, Team::Blue);
//! let puller = rope.add_puller(Team::Blue, Size::Small, Vec2::new(100.0, 400.0));
//!
//! rope.move_puller(puller, Vec2::new(130.0, 140.0));
//! assert_eq!(rope.drop_puller(puller), Ok(Some(knot)));
//! ```

use crate::config::RopeConfig;
use crate::error::{AssignmentError, ConfigError};
use crate::float::Float;
use crate::knot::{Knot, KnotId, Side, Size, Team};
use crate::observer::{NoOpRopeObserver, RopeObserver};
use crate::puller::{Puller, PullerId};
use crate::vec::Vec2;
use alloc::vec::Vec;
use log::{debug, trace, warn};

/// Input from the drag layer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DragEvent<F: Float> {
    /// The puller's centre moved to `pos`.
    Move { puller: PullerId, pos: Vec2<F> },
    /// The drag ended.
    Release { puller: PullerId },
}

/// Knots and pullers plus the assignment between them.
#[derive(Clone, Debug)]
pub struct Rope<F: Float> {
    knots: Vec<Knot<F>>,
    pullers: Vec<Puller<F>>,
    config: RopeConfig<F>,
    version: u64,
}

impl<F: Float> Rope<F> {
    pub fn new(config: RopeConfig<F>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Rope {
            knots: Vec::new(),
            pullers: Vec::new(),
            config,
            version: 0,
        })
    }

    pub fn add_knot(&mut self, pos: Vec2<F>, side: Side, team: Team) -> KnotId {
        let id = KnotId(self.knots.len());
        self.knots.push(Knot::new(id, pos, side, team));
        id
    }

    pub fn add_puller(&mut self, team: Team, size: Size, pos: Vec2<F>) -> PullerId {
        let id = PullerId(self.pullers.len());
        self.pullers.push(Puller::new(id, team, size, pos));
        id
    }

    pub fn knot(&self, id: KnotId) -> Option<&Knot<F>> {
        self.knots.get(id.0)
    }

    pub fn puller(&self, id: PullerId) -> Option<&Puller<F>> {
        self.pullers.get(id.0)
    }

    pub fn knots(&self) -> &[Knot<F>] {
        &self.knots
    }

    pub fn pullers(&self) -> &[Puller<F>] {
        &self.pullers
    }

    pub fn config(&self) -> &RopeConfig<F> {
        &self.config
    }

    /// Incremented by every change to the assignment or to a puller's magnitude.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of pullers currently on the rope.
    pub fn attached_count(&self) -> usize {
        self.pullers.iter().filter(|p| p.is_attached()).count()
    }

    /// Closest free knot of the puller's colour that lies strictly within the
    /// capture threshold. Equal distances go to the lowest knot id.
    pub fn find_nearest_eligible(&self, puller: PullerId) -> Option<KnotId> {
        match self.puller(puller) {
            Some(p) => self.nearest_free(p.team, p.pos, None),
            None => {
                warn!("nearest knot requested for unknown puller {}", puller);
                None
            }
        }
    }

    /// Same as [`find_nearest_eligible`](Self::find_nearest_eligible) for an
    /// arbitrary team and position.
    pub fn nearest_eligible_to(&self, team: Team, pos: Vec2<F>) -> Option<KnotId> {
        self.nearest_free(team, pos, None)
    }

    // `holder`'s own knot counts as free: a puller dragged off its knot may
    // land back on it.
    fn nearest_free(&self, team: Team, pos: Vec2<F>, holder: Option<PullerId>) -> Option<KnotId> {
        let mut best: Option<(KnotId, F)> = None;
        for knot in self.knots.iter() {
            if knot.team != team {
                continue;
            }
            if knot.occupant.is_some() && knot.occupant != holder {
                continue;
            }
            let d = knot.pos.distance_sq(pos);
            if !d.is_finite() {
                continue;
            }
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((knot.id, d)),
            }
        }
        let threshold = self.config.capture_threshold;
        best.filter(|&(_, d)| d < threshold * threshold).map(|(id, _)| id)
    }

    /// Recompute the drag preview: every knot is un-highlighted, then the
    /// knot the puller would land on (if any) is highlighted. Occupancy is
    /// never touched.
    pub fn highlight(&mut self, puller: PullerId) -> Option<KnotId> {
        self.highlight_observed(puller, &mut NoOpRopeObserver)
    }

    pub fn highlight_observed<O: RopeObserver>(
        &mut self,
        puller: PullerId,
        observer: &mut O,
    ) -> Option<KnotId> {
        self.clear_highlights();
        let target = match self.puller(puller) {
            Some(p) => self.nearest_free(p.team, p.pos, Some(p.id)),
            None => {
                warn!("highlight requested for unknown puller {}", puller);
                return None;
            }
        };
        if let Some(knot) = target {
            self.knots[knot.0].highlighted = true;
        }
        trace!("puller {} previews knot {:?}", puller, target);
        observer.on_highlight(puller, target);
        target
    }

    pub fn clear_highlights(&mut self) {
        for knot in self.knots.iter_mut() {
            knot.highlighted = false;
        }
    }

    /// Drag-move: update the puller's position and refresh the highlight.
    pub fn move_puller(&mut self, puller: PullerId, pos: Vec2<F>) -> Option<KnotId> {
        self.move_puller_observed(puller, pos, &mut NoOpRopeObserver)
    }

    pub fn move_puller_observed<O: RopeObserver>(
        &mut self,
        puller: PullerId,
        pos: Vec2<F>,
        observer: &mut O,
    ) -> Option<KnotId> {
        match self.pullers.get_mut(puller.0) {
            Some(p) => p.pos = pos,
            None => {
                warn!("move for unknown puller {}", puller);
                return None;
            }
        }
        self.highlight_observed(puller, observer)
    }

    /// Attach `puller` to `knot`, updating both sides together.
    ///
    /// A puller already holding another knot lets go of it first. Binding a
    /// puller to the knot it already holds is a no-op.
    pub fn bind(&mut self, puller: PullerId, knot: KnotId) -> Result<(), AssignmentError> {
        self.bind_observed(puller, knot, &mut NoOpRopeObserver)
    }

    pub fn bind_observed<O: RopeObserver>(
        &mut self,
        puller: PullerId,
        knot: KnotId,
        observer: &mut O,
    ) -> Result<(), AssignmentError> {
        let team = self.check_puller(puller)?.team;
        let k = self.check_knot(knot)?;
        match k.occupant {
            Some(occupant) if occupant == puller => return Ok(()),
            Some(occupant) => {
                warn!("puller {} cannot take knot {}: held by {}", puller, knot, occupant);
                return Err(AssignmentError::AlreadyOccupied { knot, occupant });
            }
            None => {}
        }
        if k.team != team {
            warn!("puller {} cannot take knot {}: wrong team", puller, knot);
            return Err(AssignmentError::KindMismatch { knot, puller });
        }

        self.release_observed(puller, observer);
        self.knots[knot.0].occupant = Some(puller);
        self.pullers[puller.0].attached = Some(knot);
        self.version += 1;
        debug!("puller {} bound to knot {}", puller, knot);
        observer.on_bind(puller, knot);
        Ok(())
    }

    /// Detach `puller` from its knot. Returns the knot it let go of; a puller
    /// that was not attached is left alone.
    pub fn release(&mut self, puller: PullerId) -> Option<KnotId> {
        self.release_observed(puller, &mut NoOpRopeObserver)
    }

    pub fn release_observed<O: RopeObserver>(
        &mut self,
        puller: PullerId,
        observer: &mut O,
    ) -> Option<KnotId> {
        let Some(p) = self.pullers.get_mut(puller.0) else {
            warn!("release for unknown puller {}", puller);
            return None;
        };
        let knot = p.attached.take()?;
        if let Some(k) = self.knots.get_mut(knot.0) {
            k.occupant = None;
        }
        self.version += 1;
        debug!("puller {} released knot {}", puller, knot);
        observer.on_release(puller, knot);
        Some(knot)
    }

    /// Drag-end: bind to the closest eligible knot, or fall off the rope when
    /// none is in reach. Returns the knot the puller ends up on.
    pub fn drop_puller(&mut self, puller: PullerId) -> Result<Option<KnotId>, AssignmentError> {
        self.drop_puller_observed(puller, &mut NoOpRopeObserver)
    }

    pub fn drop_puller_observed<O: RopeObserver>(
        &mut self,
        puller: PullerId,
        observer: &mut O,
    ) -> Result<Option<KnotId>, AssignmentError> {
        let p = self.check_puller(puller)?;
        let target = self.nearest_free(p.team, p.pos, Some(p.id));
        self.clear_highlights();
        match target {
            Some(knot) => {
                self.bind_observed(puller, knot, observer)?;
                Ok(Some(knot))
            }
            None => {
                if self.release_observed(puller, observer).is_some() {
                    debug!("puller {} fell off the rope", puller);
                }
                Ok(None)
            }
        }
    }

    /// Feed one drag event through the rope. Moves return the highlighted
    /// knot, releases the knot the puller ended up on.
    pub fn handle(&mut self, event: DragEvent<F>) -> Result<Option<KnotId>, AssignmentError> {
        self.handle_observed(event, &mut NoOpRopeObserver)
    }

    pub fn handle_observed<O: RopeObserver>(
        &mut self,
        event: DragEvent<F>,
        observer: &mut O,
    ) -> Result<Option<KnotId>, AssignmentError> {
        match event {
            DragEvent::Move { puller, pos } => {
                self.check_puller(puller)?;
                Ok(self.move_puller_observed(puller, pos, observer))
            }
            DragEvent::Release { puller } => self.drop_puller_observed(puller, observer),
        }
    }

    /// Change the force a puller contributes. Negative values pull the
    /// other way; NaN and the infinities are rejected.
    pub fn set_magnitude(&mut self, puller: PullerId, magnitude: F) -> Result<(), AssignmentError> {
        let count = self.pullers.len();
        if !magnitude.is_finite() {
            warn!("puller {} given non-finite magnitude", puller);
            return Err(AssignmentError::InvalidMagnitude { puller });
        }
        let p = self
            .pullers
            .get_mut(puller.0)
            .ok_or(AssignmentError::UnknownPuller { puller, count })?;
        if p.magnitude != magnitude {
            p.magnitude = magnitude;
            self.version += 1;
        }
        Ok(())
    }

    /// Put every puller back in the toolbox: all knots are freed.
    pub fn return_all(&mut self) {
        for i in 0..self.pullers.len() {
            self.release(PullerId(i));
        }
        self.clear_highlights();
    }

    /// True when every knot's `occupant` and every puller's `attached` agree.
    pub fn is_consistent(&self) -> bool {
        let pullers_agree = self.pullers.iter().all(|p| match p.attached {
            Some(k) => self.knot(k).map_or(false, |k| k.occupant == Some(p.id)),
            None => true,
        });
        let knots_agree = self.knots.iter().all(|k| match k.occupant {
            Some(p) => self.puller(p).map_or(false, |p| p.attached == Some(k.id)),
            None => true,
        });
        pullers_agree && knots_agree
    }

    fn check_puller(&self, puller: PullerId) -> Result<&Puller<F>, AssignmentError> {
        self.pullers.get(puller.0).ok_or(AssignmentError::UnknownPuller {
            puller,
            count: self.pullers.len(),
        })
    }

    fn check_knot(&self, knot: KnotId) -> Result<&Knot<F>, AssignmentError> {
        self.knots.get(knot.0).ok_or(AssignmentError::UnknownKnot {
            knot,
            count: self.knots.len(),
        })
    }
}
