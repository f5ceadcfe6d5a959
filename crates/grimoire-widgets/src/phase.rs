#![forbid(unsafe_code)]

//! Phase cycling: the ordered content sequence a panel steps through.
//!
//! One parameterized [`PhaseCycler`] drives every cycling surface in the
//! workspace: the grimoire panels' 6-second phase swap and the parasocial
//! panel's 3-second status ticker are the same mechanism over different
//! catalogs and intervals.

use std::time::Duration;

use grimoire_core::color::{Gradient, Rgba};

/// A symbol glyph used for phase icons and floating sprites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconGlyph {
    /// An eye.
    Eye,
    /// A brain.
    Brain,
    /// A network lattice.
    Network,
    /// A skull.
    Skull,
    /// A heart.
    Heart,
    /// A crescent moon.
    Moon,
    /// A sun.
    Sun,
    /// A star.
    Star,
}

impl IconGlyph {
    /// The single-cell character for this glyph.
    pub const fn ch(self) -> char {
        match self {
            IconGlyph::Eye => '◉',
            IconGlyph::Brain => 'Ψ',
            IconGlyph::Network => '╬',
            IconGlyph::Skull => '☠',
            IconGlyph::Heart => '♥',
            IconGlyph::Moon => '☾',
            IconGlyph::Sun => '☼',
            IconGlyph::Star => '✶',
        }
    }

    /// A smaller low-density variant, used when the viewport is narrow.
    pub const fn small_ch(self) -> char {
        match self {
            IconGlyph::Eye => 'o',
            IconGlyph::Brain => 'y',
            IconGlyph::Network => '+',
            IconGlyph::Skull => 'x',
            IconGlyph::Heart => 'v',
            IconGlyph::Moon => ')',
            IconGlyph::Sun => '*',
            IconGlyph::Star => '*',
        }
    }
}

/// One entry of a panel's content sequence.
#[derive(Debug, Clone, Copy)]
pub struct PhaseRecord {
    /// Heading shown while this phase is active.
    pub title: &'static str,
    /// Body copy.
    pub description: &'static str,
    /// Supplementary text shown when the reveal toggle is open.
    pub detail: &'static str,
    /// Icon displayed above the title.
    pub icon: IconGlyph,
    /// Color the icon is drawn with.
    pub icon_color: Rgba,
    /// Background wash for the phase card.
    pub backdrop: Gradient,
}

/// Steps an index through `[0, len)` on a fixed interval.
///
/// Time is pushed in via [`advance`](Self::advance), so the cycler is
/// agnostic to where ticks come from and tests drive it with a virtual
/// clock.
#[derive(Debug, Clone)]
pub struct PhaseCycler {
    index: usize,
    len: usize,
    interval: Duration,
    elapsed: Duration,
}

impl PhaseCycler {
    /// Create a cycler over `len` phases advancing every `interval`.
    ///
    /// `len` is clamped to at least 1 and `interval` to at least 1 ms.
    pub fn new(len: usize, interval: Duration) -> Self {
        Self {
            index: 0,
            len: len.max(1),
            interval: interval.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
        }
    }

    /// Current phase index, always in `[0, len)`.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of phases.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; a cycler has at least one phase.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The advance interval.
    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Accumulate `dt` and step the index once per full interval elapsed.
    ///
    /// Returns `true` if the index changed. A `dt` spanning several
    /// intervals steps several times (the index still lands where a
    /// tick-at-a-time caller would have landed).
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(dt);
        let mut changed = false;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            self.index = (self.index + 1) % self.len;
            changed = true;
        }
        changed
    }

    /// Jump directly to phase `i`.
    ///
    /// The accumulated interval time is untouched: the next automatic
    /// advance still happens on the original cadence. Out-of-range
    /// indices wrap.
    pub fn jump(&mut self, i: usize) {
        self.index = i % self.len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_at_zero() {
        let cycler = PhaseCycler::new(4, Duration::from_secs(6));
        assert_eq!(cycler.index(), 0);
    }

    #[test]
    fn advances_once_per_interval() {
        let mut cycler = PhaseCycler::new(4, Duration::from_secs(6));
        assert!(!cycler.advance(Duration::from_secs(5)));
        assert_eq!(cycler.index(), 0);
        assert!(cycler.advance(Duration::from_secs(1)));
        assert_eq!(cycler.index(), 1);
    }

    #[test]
    fn wraps_modulo_len() {
        let mut cycler = PhaseCycler::new(4, Duration::from_secs(6));
        for expected in [1, 2, 3, 0, 1] {
            cycler.advance(Duration::from_secs(6));
            assert_eq!(cycler.index(), expected);
        }
    }

    #[test]
    fn large_dt_steps_multiple_times() {
        let mut cycler = PhaseCycler::new(4, Duration::from_secs(6));
        // 4 full intervals bring the index back to 0.
        assert!(cycler.advance(Duration::from_secs(24)));
        assert_eq!(cycler.index(), 0);
        // 3 intervals land on 3.
        cycler.advance(Duration::from_secs(18));
        assert_eq!(cycler.index(), 3);
    }

    #[test]
    fn jump_is_immediate() {
        let mut cycler = PhaseCycler::new(4, Duration::from_secs(6));
        for i in 0..4 {
            cycler.jump(i);
            assert_eq!(cycler.index(), i);
        }
    }

    #[test]
    fn jump_does_not_reset_cadence() {
        let mut cycler = PhaseCycler::new(4, Duration::from_secs(6));
        cycler.advance(Duration::from_secs(5));
        cycler.jump(2);
        // 1 more second completes the interval that was already underway.
        assert!(cycler.advance(Duration::from_secs(1)));
        assert_eq!(cycler.index(), 3);
    }

    #[test]
    fn jump_wraps_out_of_range() {
        let mut cycler = PhaseCycler::new(4, Duration::from_secs(1));
        cycler.jump(7);
        assert_eq!(cycler.index(), 3);
    }

    #[test]
    fn zero_len_clamped_to_one() {
        let mut cycler = PhaseCycler::new(0, Duration::from_secs(1));
        cycler.advance(Duration::from_secs(10));
        assert_eq!(cycler.index(), 0);
        assert_eq!(cycler.len(), 1);
    }

    proptest! {
        #[test]
        fn index_always_in_range(
            len in 1usize..16,
            steps in proptest::collection::vec(0u64..20_000, 0..64),
        ) {
            let mut cycler = PhaseCycler::new(len, Duration::from_millis(100));
            for ms in steps {
                cycler.advance(Duration::from_millis(ms));
                prop_assert!(cycler.index() < len);
            }
        }

        #[test]
        fn advance_matches_tick_count(ticks in 0u32..200) {
            let mut cycler = PhaseCycler::new(4, Duration::from_secs(6));
            cycler.advance(Duration::from_secs(6) * ticks);
            prop_assert_eq!(cycler.index(), ticks as usize % 4);
        }
    }
}
