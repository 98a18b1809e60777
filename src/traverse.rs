//! Parameter-advance state machine for following a spline over time.
//!
//! The host owns the clock; it feeds elapsed fractions of the traversal
//! duration and reads back the curve parameter to sample.

/// What happens when a traversal reaches the end of the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalMode {
    /// Stop at `t = 1`.
    #[default]
    Once,
    /// Wrap back to the start.
    Loop,
    /// Reverse and walk back, bouncing at both ends.
    PingPong,
}

/// Progress tracker walking a curve parameter from 0 to 1.
#[derive(Debug, Clone, Copy)]
pub struct Traversal {
    progress: f64,
    going_forward: bool,
    mode: TraversalMode,
}

impl Default for Traversal {
    fn default() -> Self {
        Self::new(TraversalMode::default())
    }
}

impl Traversal {
    #[must_use]
    pub fn new(mode: TraversalMode) -> Self {
        Self {
            progress: 0.0,
            going_forward: true,
            mode,
        }
    }

    /// Current curve parameter in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Advances by `delta` (elapsed time over duration) and returns the
    /// new parameter, clamped, wrapped, or reflected per the mode.
    pub fn advance(&mut self, delta: f64) -> f64 {
        if self.going_forward {
            self.progress += delta;
            if self.progress > 1.0 {
                match self.mode {
                    TraversalMode::Once => self.progress = 1.0,
                    TraversalMode::Loop => self.progress -= 1.0,
                    TraversalMode::PingPong => {
                        self.progress = 2.0 - self.progress;
                        self.going_forward = false;
                    }
                }
            }
        } else {
            self.progress -= delta;
            if self.progress < 0.0 {
                self.progress = -self.progress;
                self.going_forward = true;
            }
        }
        self.progress
    }
}
