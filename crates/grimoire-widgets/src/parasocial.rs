#![forbid(unsafe_code)]

//! The parasocial panel: a retro terminal frame with ASCII noise, four
//! drifting sprites, and a pulsing status ticker.

use std::time::Duration;

use grimoire_core::buffer::Buffer;
use grimoire_core::cell::Cell;
use grimoire_core::color::apply_alpha;
use grimoire_core::geometry::Rect;
use grimoire_core::style::Style;

use crate::catalog::{PARASOCIAL_SPRITES, PARASOCIAL_TITLE, STATUS_MESSAGES, TERM_GREEN};
use crate::noise::{AsciiNoise, NoiseState};
use crate::symbols::SymbolField;
use crate::ticker::StatusTicker;
use crate::{StatefulWidget, draw_text_span};

/// Status ticker interval.
pub const STATUS_INTERVAL: Duration = Duration::from_millis(3000);

/// Viewport width below which sprites use the small glyph treatment.
const NARROW_WIDTH: u16 = 64;

/// Tracked terminal dimensions, updated from resize events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Columns.
    pub width: u16,
    /// Rows.
    pub height: u16,
}

impl Viewport {
    /// Whether effects should use their reduced treatment.
    pub fn is_narrow(&self) -> bool {
        self.width < NARROW_WIDTH
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

/// The parasocial terminal-effect panel.
#[derive(Debug, Clone)]
pub struct ParasocialPanel {
    noise: AsciiNoise,
    noise_state: NoiseState,
    symbols: SymbolField,
    ticker: StatusTicker,
    viewport: Viewport,
}

impl ParasocialPanel {
    /// Create the panel. `seed` drives noise and sprite placement.
    pub fn new(seed: u64) -> Self {
        Self {
            noise: AsciiNoise::new().color(TERM_GREEN),
            noise_state: NoiseState::new(seed ^ 0xa5c1),
            symbols: SymbolField::fixed(PARASOCIAL_SPRITES, seed ^ 0x5f1e)
                .cycle(Duration::from_secs(4))
                .amplitude(2.0),
            ticker: StatusTicker::new(STATUS_MESSAGES, STATUS_INTERVAL, TERM_GREEN),
            viewport: Viewport::default(),
        }
    }

    /// Override the noise fill probability.
    #[must_use]
    pub fn noise_density(mut self, density: f32) -> Self {
        self.noise = self.noise.density(density);
        self
    }

    /// Record new terminal dimensions, rescaling effect treatment.
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = Viewport { width, height };
        // Narrow viewports get a shallower drift, mirroring the reduced
        // animation scale on small screens.
        self.symbols
            .set_amplitude(if self.viewport.is_narrow() { 1.0 } else { 2.0 });
    }

    /// Current tracked viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Currently displayed status message.
    pub fn status(&self) -> &'static str {
        self.ticker.current()
    }

    /// Index of the current status message.
    pub fn status_index(&self) -> usize {
        self.ticker.index()
    }

    /// Advance the ticker and sprite clock by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.ticker.advance(dt);
        self.symbols.advance(dt);
    }

    /// Render the whole panel.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 6 {
            return;
        }
        self.render_frame(area, buf);

        let inner = area.inset(1);
        // Row 0 of the inner region is the title bar.
        let body = Rect::new(
            inner.x,
            inner.y + 1,
            inner.width,
            inner.height.saturating_sub(1),
        );
        self.noise.render(body, buf, &mut self.noise_state);
        self.symbols
            .render_scaled(body, buf, self.viewport.is_narrow());
        // Status line sits just above the bottom border.
        self.ticker
            .render_row(body, body.bottom().saturating_sub(1), buf);
    }

    fn render_frame(&self, area: Rect, buf: &mut Buffer) {
        let border = Style::new().fg(apply_alpha(TERM_GREEN, 0.3));
        let set = |buf: &mut Buffer, x: u16, y: u16, ch: char| {
            let mut cell = Cell::from_char(ch);
            crate::apply_style(&mut cell, border);
            buf.set(x, y, cell);
        };
        for x in area.x + 1..area.right() - 1 {
            set(buf, x, area.y, '─');
            set(buf, x, area.bottom() - 1, '─');
        }
        for y in area.y + 1..area.bottom() - 1 {
            set(buf, area.x, y, '│');
            set(buf, area.right() - 1, y, '│');
        }
        set(buf, area.x, area.y, '┌');
        set(buf, area.right() - 1, area.y, '┐');
        set(buf, area.x, area.bottom() - 1, '└');
        set(buf, area.right() - 1, area.bottom() - 1, '┘');

        // Title bar with the system label.
        let inner = area.inset(1);
        let bar_bg = apply_alpha(TERM_GREEN, 0.08);
        for x in inner.x..inner.right() {
            if let Some(cell) = buf.get_mut(x, inner.y) {
                cell.bg = bar_bg;
            }
        }
        draw_text_span(
            buf,
            inner.x + 1,
            inner.y,
            PARASOCIAL_TITLE,
            Style::new().fg(TERM_GREEN).bold(),
            inner.right(),
        );
    }
}
