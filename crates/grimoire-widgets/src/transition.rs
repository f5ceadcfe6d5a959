#![forbid(unsafe_code)]

//! Keyed content transition: animate the old phase out, the new phase in.
//!
//! Models wait-mode presence as an explicit state machine:
//!
//! ```text
//! Idle --begin--> Exiting(from) --exit done--> Entering(to) --enter done--> Idle
//! ```
//!
//! Beginning a transition while another is in flight cancels the in-flight
//! animation and starts exiting whatever is visible at that moment, so a
//! rapid phase jump never queues stale content. Overshoot from the exit
//! leg is forwarded into the enter leg to keep total swap time exact.

use std::time::Duration;

use grimoire_core::animation::{Animation, Slide, ease_in, ease_out};

/// Total swap duration: exit leg plus enter leg.
pub const SWAP_DURATION: Duration = Duration::from_millis(1000);

/// Which leg of the swap is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Idle,
    Exiting,
    Entering,
}

/// How the currently visible content should be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    /// Index of the content to draw.
    pub index: usize,
    /// Vertical offset in rows (negative is up).
    pub offset: i16,
    /// Content strength in [0, 1]; 1.0 is fully settled.
    pub alpha: f32,
}

/// Drives the enter/exit animation between two phase indices.
#[derive(Debug, Clone)]
pub struct PhaseTransition {
    stage: Stage,
    from: usize,
    to: usize,
    anim: Slide,
    /// Rows the content travels during each leg.
    travel: i16,
}

impl PhaseTransition {
    /// Create a settled transition showing `index`.
    pub fn new(index: usize) -> Self {
        Self {
            stage: Stage::Idle,
            from: index,
            to: index,
            anim: Slide::new(0, 0, SWAP_DURATION / 2),
            travel: 2,
        }
    }

    /// Set how many rows content slides during each leg.
    #[must_use]
    pub fn travel(mut self, rows: i16) -> Self {
        self.travel = rows;
        self
    }

    /// Whether a swap is currently animating.
    pub fn in_flight(&self) -> bool {
        self.stage != Stage::Idle
    }

    /// The index that will be visible once the swap settles.
    pub fn target(&self) -> usize {
        self.to
    }

    /// Begin animating toward `to`.
    ///
    /// If a swap is already in flight it is cancelled: the exit restarts
    /// from whatever content is visible right now.
    pub fn begin(&mut self, to: usize) {
        let visible = self.frame().index;
        if to == self.to && self.stage == Stage::Idle && to == visible {
            return;
        }
        self.from = visible;
        self.to = to;
        self.stage = Stage::Exiting;
        // Old content slides up and out.
        self.anim = Slide::new(0, -self.travel, SWAP_DURATION / 2).easing(ease_in);
    }

    /// Advance the animation by `dt`, moving between legs as they finish.
    pub fn advance(&mut self, dt: Duration) {
        if self.stage == Stage::Idle {
            return;
        }
        self.anim.tick(dt);
        while self.anim.is_complete() {
            let overshoot = self.anim.overshoot();
            match self.stage {
                Stage::Exiting => {
                    self.stage = Stage::Entering;
                    // New content rises from below into place.
                    self.anim = Slide::new(self.travel, 0, SWAP_DURATION / 2).easing(ease_out);
                    self.anim.tick(overshoot);
                }
                Stage::Entering => {
                    self.stage = Stage::Idle;
                    self.from = self.to;
                    return;
                }
                Stage::Idle => return,
            }
        }
    }

    /// The current visible content and how to draw it.
    pub fn frame(&self) -> TransitionFrame {
        match self.stage {
            Stage::Idle => TransitionFrame {
                index: self.to,
                offset: 0,
                alpha: 1.0,
            },
            Stage::Exiting => TransitionFrame {
                index: self.from,
                offset: self.anim.position(),
                alpha: 1.0 - self.anim.value(),
            },
            Stage::Entering => TransitionFrame {
                index: self.to,
                offset: self.anim.position(),
                alpha: self.anim.value(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF: Duration = Duration::from_millis(500);

    #[test]
    fn settled_frame_is_identity() {
        let tr = PhaseTransition::new(2);
        let f = tr.frame();
        assert_eq!(f.index, 2);
        assert_eq!(f.offset, 0);
        assert_eq!(f.alpha, 1.0);
        assert!(!tr.in_flight());
    }

    #[test]
    fn begin_shows_old_content_during_exit() {
        let mut tr = PhaseTransition::new(0);
        tr.begin(1);
        assert!(tr.in_flight());
        assert_eq!(tr.frame().index, 0);
        tr.advance(Duration::from_millis(250));
        let f = tr.frame();
        assert_eq!(f.index, 0);
        assert!(f.alpha < 1.0);
    }

    #[test]
    fn exit_leg_hands_off_to_enter_leg() {
        let mut tr = PhaseTransition::new(0);
        tr.begin(1);
        tr.advance(HALF);
        let f = tr.frame();
        assert_eq!(f.index, 1);
        assert!(f.alpha < 0.5, "enter leg starts faded out");
        assert!(f.offset > 0, "enter leg starts offset below");
    }

    #[test]
    fn full_swap_settles_on_target() {
        let mut tr = PhaseTransition::new(0);
        tr.begin(3);
        tr.advance(SWAP_DURATION);
        let f = tr.frame();
        assert_eq!(f.index, 3);
        assert_eq!(f.offset, 0);
        assert_eq!(f.alpha, 1.0);
        assert!(!tr.in_flight());
    }

    #[test]
    fn overshoot_carries_between_legs() {
        let mut tr = PhaseTransition::new(0);
        tr.begin(1);
        // One large tick spanning the whole swap still settles.
        tr.advance(Duration::from_millis(1700));
        assert!(!tr.in_flight());
        assert_eq!(tr.frame().index, 1);
    }

    #[test]
    fn begin_mid_flight_cancels_and_retargets() {
        let mut tr = PhaseTransition::new(0);
        tr.begin(1);
        tr.advance(Duration::from_millis(700)); // entering 1
        assert_eq!(tr.frame().index, 1);
        tr.begin(2);
        // The partially entered content exits; target is 2.
        assert_eq!(tr.frame().index, 1);
        assert_eq!(tr.target(), 2);
        tr.advance(SWAP_DURATION);
        assert_eq!(tr.frame().index, 2);
        assert!(!tr.in_flight());
    }

    #[test]
    fn begin_same_settled_index_is_noop() {
        let mut tr = PhaseTransition::new(1);
        tr.begin(1);
        assert!(!tr.in_flight());
    }
}
