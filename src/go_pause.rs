//! Go/pause control shown once a puller is on the rope.

/// Text on the button face.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GoPauseLabel {
    Go,
    Pause,
}

/// Running state behind the go/pause button.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GoPause {
    running: bool,
    completed: bool,
}

impl GoPause {
    pub fn new() -> Self {
        Self::default()
    }

    /// Button press. Does nothing once the match is over.
    pub fn toggle(&mut self) -> bool {
        if !self.completed {
            self.running = !self.running;
        }
        self.running
    }

    /// The cart reached the end of the track: stop and hide the button.
    pub fn complete(&mut self) {
        self.running = false;
        self.completed = true;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Shown while at least one puller is attached and the match is not over.
    pub fn visible(&self, attached_count: usize) -> bool {
        attached_count > 0 && !self.completed
    }

    pub fn label(&self) -> GoPauseLabel {
        if self.running {
            GoPauseLabel::Pause
        } else {
            GoPauseLabel::Go
        }
    }
}
