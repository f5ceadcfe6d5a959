#![forbid(unsafe_code)]

//! Glitch overlay: random duplicated copies of content in contrasting tints.
//!
//! An independent `active` flag is re-rolled on a fixed cadence. While
//! active, content drawn through [`render_glitched`] is composited as two
//! offset copies (red and blue, screen-blended at half strength) under a
//! dimmed primary; while inactive the primary renders untouched. The
//! overlay never reads or writes panel state.

use std::time::Duration;

use grimoire_core::buffer::Buffer;
use grimoire_core::color::{Rgba, apply_alpha, lerp, screen_blend};
use grimoire_core::geometry::Rect;
use grimoire_core::rng::SeededRng;

use crate::catalog::{BLUE_500, RED_500};

/// How often the active flag and offsets are re-rolled.
pub const ROLL_INTERVAL: Duration = Duration::from_millis(500);

/// Probability of the glitch being active after a roll.
pub const DEFAULT_ACTIVITY: f32 = 0.3;

/// Rolling state of the glitch overlay.
#[derive(Debug, Clone)]
pub struct GlitchState {
    rng: SeededRng,
    activity: f32,
    active: bool,
    elapsed: Duration,
    /// Offset of the first (red) copy.
    offset_a: (i16, i16),
    /// Offset of the second (blue) copy.
    offset_b: (i16, i16),
}

impl GlitchState {
    /// Create a glitch state with the default activation probability.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SeededRng::new(seed),
            activity: DEFAULT_ACTIVITY,
            active: false,
            elapsed: Duration::ZERO,
            offset_a: (0, 0),
            offset_b: (0, 0),
        }
    }

    /// Override the activation probability.
    #[must_use]
    pub fn activity(mut self, p: f32) -> Self {
        self.activity = p.clamp(0.0, 1.0);
        self
    }

    /// Whether the glitch is currently showing.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Accumulate time and re-roll once per [`ROLL_INTERVAL`].
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
        while self.elapsed >= ROLL_INTERVAL {
            self.elapsed -= ROLL_INTERVAL;
            self.roll();
        }
    }

    /// Re-roll the active flag and per-copy offsets.
    pub fn roll(&mut self) {
        self.active = self.rng.chance(self.activity);
        if self.active {
            // Copies drift in opposite directions, at most two cells.
            let dx = self.rng.next_i16_range(0, 3);
            let dy = self.rng.next_i16_range(0, 2);
            self.offset_a = (dx, dy);
            self.offset_b = (-self.rng.next_i16_range(0, 3), -dy);
        }
    }
}

/// Render `content` through the glitch overlay into `buf` at `area`.
///
/// The content closure draws into a scratch buffer the size of `area`
/// (origin at 0,0); compositing into the target happens here.
pub fn render_glitched(
    buf: &mut Buffer,
    area: Rect,
    state: &GlitchState,
    content: impl FnOnce(&mut Buffer),
) {
    if area.is_empty() {
        return;
    }
    let mut scratch = Buffer::new(area.width, area.height);
    content(&mut scratch);

    if state.is_active() {
        composite_tinted(buf, &scratch, area, state.offset_a, RED_500);
        composite_tinted(buf, &scratch, area, state.offset_b, BLUE_500);
        composite_dimmed(buf, &scratch, area, 0.3);
    } else {
        composite_plain(buf, &scratch, area);
    }
}

fn composite_plain(dst: &mut Buffer, src: &Buffer, area: Rect) {
    for y in 0..src.height() {
        for x in 0..src.width() {
            let Some(cell) = src.get(x, y) else { continue };
            if cell.is_blank() {
                continue;
            }
            dst.set(area.x + x, area.y + y, *cell);
        }
    }
}

fn composite_dimmed(dst: &mut Buffer, src: &Buffer, area: Rect, alpha: f32) {
    for y in 0..src.height() {
        for x in 0..src.width() {
            let Some(cell) = src.get(x, y) else { continue };
            if cell.is_blank() {
                continue;
            }
            let mut dimmed = *cell;
            dimmed.fg = apply_alpha(cell.fg, alpha);
            dst.set(area.x + x, area.y + y, dimmed);
        }
    }
}

fn composite_tinted(dst: &mut Buffer, src: &Buffer, area: Rect, offset: (i16, i16), tint: Rgba) {
    for y in 0..src.height() {
        for x in 0..src.width() {
            let Some(cell) = src.get(x, y) else { continue };
            if cell.is_blank() {
                continue;
            }
            let tx = area.x as i32 + x as i32 + offset.0 as i32;
            let ty = area.y as i32 + y as i32 + offset.1 as i32;
            if tx < 0 || ty < 0 {
                continue;
            }
            let (tx, ty) = (tx as u16, ty as u16);
            let mut copy = *cell;
            // Half-strength tint, screen-blended over whatever is below.
            let ghost = apply_alpha(lerp(cell.fg, tint, 0.7), 0.5);
            let under = dst
                .get(tx, ty)
                .map(|c| c.fg)
                .unwrap_or(Rgba::TRANSPARENT);
            copy.fg = screen_blend(ghost, apply_alpha(under, 0.5));
            dst.set(tx, ty, copy);
        }
    }
}
