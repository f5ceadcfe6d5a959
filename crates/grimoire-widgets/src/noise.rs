#![forbid(unsafe_code)]

//! ASCII noise backdrop: a probabilistic character grid.
//!
//! Each cell independently shows one of a small character set with
//! probability `density`, blank otherwise, re-rolled on every render
//! pass. The mutation lives in [`NoiseState`]'s RNG, which the widget
//! owns through the [`StatefulWidget`] contract.

use grimoire_core::buffer::Buffer;
use grimoire_core::cell::{Cell, CellAttrs};
use grimoire_core::color::{Rgba, apply_alpha};
use grimoire_core::geometry::Rect;
use grimoire_core::rng::SeededRng;

use crate::StatefulWidget;

/// Density ramp characters, sparse to heavy.
pub const ASCII_CHARS: &[char] = &['.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Grid rows drawn regardless of available height (clipped to the area).
const GRID_ROWS: u16 = 20;
/// Grid columns drawn regardless of available width (clipped to the area).
const GRID_COLS: u16 = 40;

/// Mutable render state: the noise RNG.
#[derive(Debug, Clone)]
pub struct NoiseState {
    rng: SeededRng,
}

impl NoiseState {
    /// Create noise state from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SeededRng::new(seed),
        }
    }
}

/// The noise backdrop widget.
#[derive(Debug, Clone, Copy)]
pub struct AsciiNoise {
    density: f32,
    color: Rgba,
    /// Brightness applied to every noise character.
    dimming: f32,
}

impl Default for AsciiNoise {
    fn default() -> Self {
        Self::new()
    }
}

impl AsciiNoise {
    /// Create a backdrop with the default density (0.3).
    pub fn new() -> Self {
        Self {
            density: 0.3,
            color: Rgba::rgb(180, 180, 180),
            dimming: 0.2,
        }
    }

    /// Set the per-cell fill probability.
    #[must_use]
    pub fn density(mut self, density: f32) -> Self {
        self.density = density.clamp(0.0, 1.0);
        self
    }

    /// Set the character color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Set the brightness scale applied to the characters.
    #[must_use]
    pub fn dimming(mut self, dimming: f32) -> Self {
        self.dimming = dimming.clamp(0.0, 1.0);
        self
    }
}

impl StatefulWidget for AsciiNoise {
    type State = NoiseState;

    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut NoiseState) {
        let rows = GRID_ROWS.min(area.height);
        let cols = GRID_COLS.min(area.width);
        let fg = apply_alpha(self.color, self.dimming);
        for row in 0..rows {
            for col in 0..cols {
                if !state.rng.chance(self.density) {
                    continue;
                }
                let ch = *state.rng.pick(ASCII_CHARS).unwrap_or(&'.');
                let mut cell = Cell::from_char(ch);
                cell.fg = fg;
                cell.attrs = CellAttrs::DIM;
                if let Some(existing) = buf.get(area.x + col, area.y + row) {
                    // Backdrop only: leave real content alone.
                    if existing.ch != ' ' {
                        continue;
                    }
                    cell.bg = existing.bg;
                }
                buf.set(area.x + col, area.y + row, cell);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_cells(buf: &Buffer) -> usize {
        (0..buf.height())
            .flat_map(|y| (0..buf.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| buf.get(x, y).is_some_and(|c| c.ch != ' '))
            .count()
    }

    #[test]
    fn zero_density_draws_nothing() {
        let mut buf = Buffer::new(40, 20);
        let mut state = NoiseState::new(1);
        AsciiNoise::new()
            .density(0.0)
            .render(Rect::from_size(40, 20), &mut buf, &mut state);
        assert_eq!(filled_cells(&buf), 0);
    }

    #[test]
    fn full_density_fills_grid() {
        let mut buf = Buffer::new(40, 20);
        let mut state = NoiseState::new(1);
        AsciiNoise::new()
            .density(1.0)
            .render(Rect::from_size(40, 20), &mut buf, &mut state);
        assert_eq!(filled_cells(&buf), 40 * 20);
    }

    #[test]
    fn default_density_fills_roughly_a_third() {
        let mut buf = Buffer::new(40, 20);
        let mut state = NoiseState::new(99);
        AsciiNoise::new().render(Rect::from_size(40, 20), &mut buf, &mut state);
        let filled = filled_cells(&buf);
        // 800 cells at p = 0.3: expect roughly 240, with generous slack.
        assert!((140..=340).contains(&filled), "filled = {filled}");
    }

    #[test]
    fn rerolls_between_render_passes() {
        let mut state = NoiseState::new(5);
        let noise = AsciiNoise::new();
        let mut a = Buffer::new(40, 20);
        noise.render(Rect::from_size(40, 20), &mut a, &mut state);
        let mut b = Buffer::new(40, 20);
        noise.render(Rect::from_size(40, 20), &mut b, &mut state);
        assert_ne!(a, b, "noise grid should differ between passes");
    }

    #[test]
    fn clips_to_grid_size() {
        let mut buf = Buffer::new(60, 30);
        let mut state = NoiseState::new(2);
        AsciiNoise::new()
            .density(1.0)
            .render(Rect::from_size(60, 30), &mut buf, &mut state);
        // Nothing beyond 40 columns or 20 rows.
        for y in 0..30 {
            for x in 0..60 {
                let cell = buf.get(x, y).unwrap();
                if x >= 40 || y >= 20 {
                    assert_eq!(cell.ch, ' ');
                }
            }
        }
    }

    #[test]
    fn only_uses_charset_characters() {
        let mut buf = Buffer::new(40, 20);
        let mut state = NoiseState::new(11);
        AsciiNoise::new()
            .density(1.0)
            .render(Rect::from_size(40, 20), &mut buf, &mut state);
        for y in 0..20 {
            for x in 0..40 {
                let ch = buf.get(x, y).unwrap().ch;
                assert!(ASCII_CHARS.contains(&ch), "unexpected char {ch:?}");
            }
        }
    }
}
