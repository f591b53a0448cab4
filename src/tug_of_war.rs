//! Tug-of-war scene state: the rope, its cached force totals and the go/pause control.

use crate::arrows::ForceArrows;
use crate::error::AssignmentError;
use crate::float::Float;
use crate::force::{ForceAggregator, ForceTotals};
use crate::go_pause::GoPause;
use crate::knot::KnotId;
use crate::observer::RopeObserver;
use crate::rope::{DragEvent, Rope};

/// Glue between the drag layer, the rope and the force display.
#[derive(Clone, Debug)]
pub struct TugOfWar<F: Float> {
    rope: Rope<F>,
    forces: ForceAggregator<F>,
    go_pause: GoPause,
    arrow_tail_x: F,
    arrow_scale: F,
}

impl<F: Float> TugOfWar<F> {
    /// `arrow_tail_x` is where the force arrows start (the cart centre);
    /// `arrow_scale` converts force units to pixels.
    pub fn new(rope: Rope<F>, arrow_tail_x: F, arrow_scale: F) -> Self {
        TugOfWar {
            rope,
            forces: ForceAggregator::new(),
            go_pause: GoPause::new(),
            arrow_tail_x,
            arrow_scale,
        }
    }

    pub fn rope(&self) -> &Rope<F> {
        &self.rope
    }

    /// Mutable access to the rope. The cached totals are dropped, since the
    /// caller may swap in a different rope at the same version.
    pub fn rope_mut(&mut self) -> &mut Rope<F> {
        self.forces.invalidate();
        &mut self.rope
    }

    pub fn go_pause(&self) -> &GoPause {
        &self.go_pause
    }

    pub fn go_pause_mut(&mut self) -> &mut GoPause {
        &mut self.go_pause
    }

    pub fn handle<O: RopeObserver>(
        &mut self,
        event: DragEvent<F>,
        observer: &mut O,
    ) -> Result<Option<KnotId>, AssignmentError> {
        self.rope.handle_observed(event, observer)
    }

    pub fn totals(&mut self) -> ForceTotals<F> {
        self.forces.totals(&self.rope)
    }

    pub fn arrows(&mut self) -> ForceArrows<F> {
        let totals = self.totals();
        ForceArrows::from_totals(self.arrow_tail_x, &totals, self.arrow_scale)
    }

    /// Follow the cart: arrows start from its new centre.
    pub fn set_arrow_tail(&mut self, x: F) {
        self.arrow_tail_x = x;
    }

    pub fn go_button_visible(&self) -> bool {
        self.go_pause.visible(self.rope.attached_count())
    }

    /// Return every puller to the toolbox and stop the match.
    pub fn reset(&mut self) {
        self.rope.return_all();
        self.go_pause.reset();
    }
}
