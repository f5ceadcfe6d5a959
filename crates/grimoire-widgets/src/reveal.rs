#![forbid(unsafe_code)]

//! The reveal toggle: expand/collapse of the supplementary detail block.
//!
//! The flag is independent of phase cycling. If the phase advances while
//! the block is open it stays open and shows the new phase's detail text.

use std::time::Duration;

use grimoire_core::animation::ease_out;

/// Expand/collapse duration.
const REVEAL_DURATION: Duration = Duration::from_millis(300);

/// Tracks the reveal flag and its expand/collapse progress.
#[derive(Debug, Clone)]
pub struct RevealToggle {
    revealed: bool,
    /// Linear progress toward the current target, in [0, 1].
    progress: f32,
}

impl Default for RevealToggle {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealToggle {
    /// Create a toggle in the hidden state.
    pub fn new() -> Self {
        Self {
            revealed: false,
            progress: 0.0,
        }
    }

    /// Whether the detail block is (logically) shown.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Flip the flag. The animation runs from wherever it currently is,
    /// so a quick double toggle reverses smoothly instead of jumping.
    pub fn toggle(&mut self) {
        self.revealed = !self.revealed;
    }

    /// Advance the expand/collapse animation toward the current target.
    pub fn advance(&mut self, dt: Duration) {
        let step = dt.as_secs_f32() / REVEAL_DURATION.as_secs_f32();
        if self.revealed {
            self.progress = (self.progress + step).min(1.0);
        } else {
            self.progress = (self.progress - step).max(0.0);
        }
    }

    /// Eased openness in [0, 1]; 0 means fully collapsed.
    pub fn openness(&self) -> f32 {
        ease_out(self.progress)
    }

    /// How many of `full` rows the block currently occupies.
    pub fn visible_rows(&self, full: u16) -> u16 {
        (self.openness() * full as f32).round() as u16
    }
}
