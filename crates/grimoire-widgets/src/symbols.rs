#![forbid(unsafe_code)]

//! Floating symbol sprites: decorative glyphs drifting in a container.
//!
//! Glyph, position, and stagger are fixed at construction from a seeded
//! RNG rather than re-rolled per render, so re-rendering the parent never
//! reshuffles the field. Each sprite loops forever: vertical oscillation,
//! brightness pulse between 0.4 and 1.0, and a scale pulse expressed as
//! bold/dim weight, offset from its neighbors by `index * 500 ms`.

use std::time::Duration;

use grimoire_core::buffer::Buffer;
use grimoire_core::cell::{Cell, CellAttrs};
use grimoire_core::color::{Rgba, apply_alpha};
use grimoire_core::geometry::Rect;
use grimoire_core::rng::SeededRng;

use crate::Widget;
use crate::phase::IconGlyph;

/// Per-sprite stagger between loop starts.
const STAGGER: Duration = Duration::from_millis(500);

/// One floating sprite. Immutable after construction.
#[derive(Debug, Clone, Copy)]
pub struct SymbolSprite {
    /// Glyph drawn for this sprite.
    pub glyph: IconGlyph,
    /// Tint color.
    pub color: Rgba,
    /// Fractional horizontal position within the container.
    pub fx: f32,
    /// Fractional vertical position within the container.
    pub fy: f32,
    /// Delay before this sprite's loop starts.
    pub delay: Duration,
}

/// A field of floating sprites sharing one clock.
#[derive(Debug, Clone)]
pub struct SymbolField {
    sprites: Vec<SymbolSprite>,
    /// Loop duration of each sprite's oscillation.
    cycle: Duration,
    /// Peak vertical travel in rows.
    amplitude: f32,
    elapsed: Duration,
}

impl SymbolField {
    /// Scatter `count` sprites over the container, picking glyph and
    /// position once from `seed`. Positions stay within the upper-left
    /// 80% of the container so sprites do not hug the far edges.
    pub fn scattered(count: usize, seed: u64, glyphs: &[IconGlyph], color: Rgba) -> Self {
        let mut rng = SeededRng::new(seed);
        let sprites = (0..count)
            .map(|i| SymbolSprite {
                glyph: glyphs
                    .get((rng.next_u64() % glyphs.len().max(1) as u64) as usize)
                    .copied()
                    .unwrap_or(IconGlyph::Star),
                color,
                fx: rng.next_f32() * 0.8,
                fy: rng.next_f32() * 0.8,
                delay: STAGGER * i as u32,
            })
            .collect();
        Self {
            sprites,
            cycle: Duration::from_secs(3),
            amplitude: 1.0,
            elapsed: Duration::ZERO,
        }
    }

    /// Build a field from explicit sprites (glyph and tint per sprite),
    /// scattering only their positions.
    pub fn fixed(specs: &[(IconGlyph, Rgba)], seed: u64) -> Self {
        let mut rng = SeededRng::new(seed);
        let sprites = specs
            .iter()
            .enumerate()
            .map(|(i, &(glyph, color))| SymbolSprite {
                glyph,
                color,
                fx: rng.next_f32() * 0.8,
                fy: rng.next_f32() * 0.8,
                delay: STAGGER * i as u32,
            })
            .collect();
        Self {
            sprites,
            cycle: Duration::from_secs(3),
            amplitude: 1.0,
            elapsed: Duration::ZERO,
        }
    }

    /// Set the loop duration.
    #[must_use]
    pub fn cycle(mut self, cycle: Duration) -> Self {
        self.cycle = cycle.max(Duration::from_millis(1));
        self
    }

    /// Set the peak vertical travel in rows.
    #[must_use]
    pub fn amplitude(mut self, rows: f32) -> Self {
        self.amplitude = rows;
        self
    }

    /// Adjust the peak vertical travel after construction (viewport
    /// rescaling).
    pub fn set_amplitude(&mut self, rows: f32) {
        self.amplitude = rows;
    }

    /// Number of sprites in the field.
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Whether the field has no sprites.
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// The sprites, for inspection.
    pub fn sprites(&self) -> &[SymbolSprite] {
        &self.sprites
    }

    /// Advance the shared clock.
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    /// Oscillation parameters for one sprite at the current clock:
    /// `(row_offset, brightness, emphasized)`.
    fn sample(&self, sprite: &SymbolSprite) -> (i16, f32, bool) {
        let local = self.elapsed.saturating_sub(sprite.delay);
        if local.is_zero() && !sprite.delay.is_zero() {
            // Loop not started yet: resting pose at low brightness.
            return (0, 0.4, false);
        }
        let t = (local.as_secs_f32() / self.cycle.as_secs_f32()).fract();
        let wave = (t * std::f32::consts::TAU).sin();
        let offset = (wave * self.amplitude).round() as i16;
        // Brightness pulses 0.4 -> 1.0 -> 0.4 over the loop.
        let brightness = 0.4 + 0.6 * (1.0 - (2.0 * t - 1.0).abs());
        let emphasized = brightness > 0.8;
        (offset, brightness, emphasized)
    }

    /// Render with a choice of glyph treatment (small glyphs for narrow
    /// viewports).
    pub fn render_scaled(&self, area: Rect, buf: &mut Buffer, small: bool) {
        if area.is_empty() {
            return;
        }
        for sprite in &self.sprites {
            let (dy, brightness, emphasized) = self.sample(sprite);
            let x = area.x + (sprite.fx * area.width.saturating_sub(1) as f32) as u16;
            let base_y = area.y as i32 + (sprite.fy * area.height.saturating_sub(1) as f32) as i32;
            let y = base_y + dy as i32;
            if y < area.y as i32 || y >= area.bottom() as i32 {
                continue;
            }
            let ch = if small {
                sprite.glyph.small_ch()
            } else {
                sprite.glyph.ch()
            };
            let mut cell = Cell::from_char(ch);
            cell.fg = apply_alpha(sprite.color, brightness);
            cell.attrs = if emphasized {
                CellAttrs::BOLD
            } else {
                CellAttrs::DIM
            };
            // Sprites sit behind text: never overwrite existing content.
            if buf.get(x, y as u16).is_some_and(|c| c.ch == ' ') {
                let bg = buf.get(x, y as u16).map(|c| c.bg).unwrap_or_default();
                cell.bg = bg;
                buf.set(x, y as u16, cell);
            }
        }
    }
}

impl Widget for SymbolField {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        self.render_scaled(area, buf, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GRAY_400;

    const GLYPHS: &[IconGlyph] = &[IconGlyph::Moon, IconGlyph::Star, IconGlyph::Sun];

    #[test]
    fn scattered_produces_requested_count() {
        let field = SymbolField::scattered(20, 9, GLYPHS, GRAY_400);
        assert_eq!(field.len(), 20);
    }

    #[test]
    fn sprites_are_stable_across_renders() {
        let mut field = SymbolField::scattered(8, 42, GLYPHS, GRAY_400);
        let before: Vec<_> = field
            .sprites()
            .iter()
            .map(|s| (s.glyph, s.fx.to_bits(), s.fy.to_bits()))
            .collect();
        let mut buf = Buffer::new(30, 12);
        field.render(Rect::from_size(30, 12), &mut buf);
        field.advance(Duration::from_millis(700));
        field.render(Rect::from_size(30, 12), &mut buf);
        let after: Vec<_> = field
            .sprites()
            .iter()
            .map(|s| (s.glyph, s.fx.to_bits(), s.fy.to_bits()))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn same_seed_same_field() {
        let a = SymbolField::scattered(6, 5, GLYPHS, GRAY_400);
        let b = SymbolField::scattered(6, 5, GLYPHS, GRAY_400);
        for (sa, sb) in a.sprites().iter().zip(b.sprites()) {
            assert_eq!(sa.glyph, sb.glyph);
            assert_eq!(sa.fx.to_bits(), sb.fx.to_bits());
        }
    }

    #[test]
    fn delays_are_staggered_by_index() {
        let field = SymbolField::scattered(4, 1, GLYPHS, GRAY_400);
        for (i, sprite) in field.sprites().iter().enumerate() {
            assert_eq!(sprite.delay, Duration::from_millis(500 * i as u64));
        }
    }

    #[test]
    fn positions_stay_in_upper_left_fraction() {
        let field = SymbolField::scattered(50, 77, GLYPHS, GRAY_400);
        for sprite in field.sprites() {
            assert!((0.0..0.8).contains(&sprite.fx));
            assert!((0.0..0.8).contains(&sprite.fy));
        }
    }

    #[test]
    fn render_does_not_overwrite_text() {
        let mut buf = Buffer::new(20, 10);
        for x in 0..20 {
            for y in 0..10 {
                buf.set(x, y, Cell::from_char('#'));
            }
        }
        let field = SymbolField::scattered(10, 3, GLYPHS, GRAY_400);
        field.render(Rect::from_size(20, 10), &mut buf);
        for y in 0..10 {
            assert_eq!(buf.row_text(y), "#".repeat(20));
        }
    }

    #[test]
    fn fixed_field_keeps_spec_order() {
        let specs = [
            (IconGlyph::Heart, GRAY_400),
            (IconGlyph::Skull, GRAY_400),
        ];
        let field = SymbolField::fixed(&specs, 2);
        assert_eq!(field.sprites()[0].glyph, IconGlyph::Heart);
        assert_eq!(field.sprites()[1].glyph, IconGlyph::Skull);
    }
}
