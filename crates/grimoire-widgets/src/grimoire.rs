#![forbid(unsafe_code)]

//! The grimoire panel: heading, phase card, reveal button, indicator dots.
//!
//! One implementation serves both variants; everything that differs
//! between them (palette, labels, glitch, floating symbols) arrives as a
//! [`PanelTheme`].

use std::time::Duration;

use grimoire_core::animation::{Animation, Pulse};
use grimoire_core::buffer::Buffer;
use grimoire_core::cell::Cell;
use grimoire_core::color::{Rgba, apply_alpha, glow};
use grimoire_core::geometry::Rect;
use grimoire_core::style::Style;

use crate::glitch::{GlitchState, render_glitched};
use crate::phase::{PhaseCycler, PhaseRecord};
use crate::reveal::RevealToggle;
use crate::symbols::SymbolField;
use crate::theme::PanelTheme;
use crate::transition::PhaseTransition;
use crate::{draw_text_centered, draw_text_span, wrap_text};

/// Automatic phase interval for grimoire panels.
pub const PHASE_INTERVAL: Duration = Duration::from_millis(6000);

/// Horizontal spacing between indicator dots.
const DOT_SPACING: u16 = 2;
/// Widest the phase card will grow.
const CARD_MAX_WIDTH: u16 = 60;
/// Most detail rows the reveal block will occupy.
const DETAIL_MAX_ROWS: u16 = 4;

/// A themed, self-animating grimoire panel.
#[derive(Debug, Clone)]
pub struct GrimoirePanel {
    theme: PanelTheme,
    cycler: PhaseCycler,
    transition: PhaseTransition,
    reveal: RevealToggle,
    heading_glitch: GlitchState,
    card_glitch: GlitchState,
    symbols: SymbolField,
    heading_pulse: Pulse,
}

impl GrimoirePanel {
    /// Create a panel from a theme. `seed` drives every randomized layer.
    pub fn new(theme: PanelTheme, seed: u64) -> Self {
        let symbols = SymbolField::scattered(
            theme.symbol_count,
            seed ^ 0x51b0,
            theme.symbol_glyphs,
            theme.symbol_color,
        );
        Self {
            cycler: PhaseCycler::new(theme.phases.len(), PHASE_INTERVAL),
            transition: PhaseTransition::new(0),
            reveal: RevealToggle::new(),
            heading_glitch: GlitchState::new(seed ^ 0x9ead),
            card_glitch: GlitchState::new(seed ^ 0xca1d),
            symbols,
            heading_pulse: Pulse::with_period(Duration::from_secs(2)),
            theme,
        }
    }

    /// Override the automatic phase interval.
    #[must_use]
    pub fn interval(mut self, interval: Duration) -> Self {
        self.cycler = PhaseCycler::new(self.theme.phases.len(), interval);
        self
    }

    /// Start on a specific phase.
    #[must_use]
    pub fn initial_phase(mut self, index: usize) -> Self {
        self.cycler.jump(index);
        self.transition = PhaseTransition::new(self.cycler.index());
        self
    }

    /// The theme in use.
    pub fn theme(&self) -> &PanelTheme {
        &self.theme
    }

    /// Current (target) phase index.
    pub fn phase_index(&self) -> usize {
        self.cycler.index()
    }

    /// The record for the current phase.
    pub fn current_record(&self) -> &'static PhaseRecord {
        &self.theme.phases[self.cycler.index()]
    }

    /// Whether the detail block is shown.
    pub fn is_revealed(&self) -> bool {
        self.reveal.is_revealed()
    }

    /// Flip the detail block open or closed.
    pub fn toggle_reveal(&mut self) {
        self.reveal.toggle();
    }

    /// Jump straight to phase `i` (indicator dot activation). The
    /// automatic cadence is unaffected.
    pub fn jump_phase(&mut self, i: usize) {
        self.cycler.jump(i);
        self.transition.begin(self.cycler.index());
    }

    /// Advance every animation layer by `dt`.
    ///
    /// Layers keep independent cadences: the phase cycler steps every
    /// 6 s, the glitch re-rolls every 500 ms, sprites and pulses run
    /// continuously.
    pub fn advance(&mut self, dt: Duration) {
        if self.cycler.advance(dt) {
            self.transition.begin(self.cycler.index());
        }
        self.transition.advance(dt);
        self.reveal.advance(dt);
        self.heading_glitch.advance(dt);
        self.card_glitch.advance(dt);
        self.symbols.advance(dt);
        self.heading_pulse.tick(dt);
    }

    /// Hit-test an indicator dot. Returns the dot's phase index when
    /// (x, y) lands on one.
    pub fn dot_hit(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if !area.contains(x, y) {
            return None;
        }
        let (row, start_x) = self.dots_geometry(area)?;
        if y != row {
            return None;
        }
        let n = self.theme.phases.len() as u16;
        for i in 0..n {
            if x == start_x + i * DOT_SPACING {
                return Some(i as usize);
            }
        }
        None
    }

    /// Row and starting column of the indicator dots, if the area can
    /// hold them.
    fn dots_geometry(&self, area: Rect) -> Option<(u16, u16)> {
        if area.height < 8 || area.width < 8 {
            return None;
        }
        let n = self.theme.phases.len() as u16;
        let span = (n - 1) * DOT_SPACING + 1;
        if span > area.width {
            return None;
        }
        let row = area.bottom() - 2;
        let start_x = area.x + (area.width - span) / 2;
        Some((row, start_x))
    }

    /// Render the whole panel.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width < 8 || area.height < 8 {
            return;
        }
        if self.theme.scanlines {
            self.render_scanlines(area, buf);
        }

        // Floating symbols sit behind everything except the backdrop.
        if !self.symbols.is_empty() {
            self.symbols.render_scaled(area, buf, area.width < 40);
        }

        self.render_heading(area, buf);
        self.render_card(area, buf);
        self.render_dots(area, buf);
    }

    fn render_scanlines(&self, area: Rect, buf: &mut Buffer) {
        let wash = Rgba::rgb(10, 12, 14);
        for y in (area.y..area.bottom()).step_by(2) {
            for x in area.x..area.right() {
                if let Some(cell) = buf.get_mut(x, y) {
                    cell.bg = wash;
                }
            }
        }
    }

    fn render_heading(&self, area: Rect, buf: &mut Buffer) {
        let color = if self.theme.heading_glow {
            // Glow breathing: brightness swells with the pulse.
            glow(
                self.theme.heading_color,
                0.3 + 0.7 * self.heading_pulse.value(),
            )
        } else {
            self.theme.heading_color
        };
        let style = Style::new().fg(color).bold();
        let heading_area = Rect::new(area.x, area.y, area.width, 1);
        if self.theme.glitch {
            render_glitched(buf, heading_area, &self.heading_glitch, |scratch| {
                let line = scratch.area();
                draw_text_centered(scratch, line, 0, self.theme.heading, style);
            });
        } else {
            draw_text_centered(buf, heading_area, area.y, self.theme.heading, style);
        }
    }

    fn card_area(&self, area: Rect) -> Rect {
        let width = area.width.saturating_sub(4).min(CARD_MAX_WIDTH).max(4);
        let x = area.x + (area.width - width) / 2;
        let y = area.y + 2;
        let height = area.bottom().saturating_sub(2).saturating_sub(y).max(4);
        Rect::new(x, y, width, height)
    }

    fn render_card(&self, area: Rect, buf: &mut Buffer) {
        let card = self.card_area(area);
        let frame = self.transition.frame();
        let record = &self.theme.phases[frame.index.min(self.theme.phases.len() - 1)];

        // Diagonal gradient wash plus a border box.
        for y in card.y..card.bottom() {
            for x in card.x..card.right() {
                let tx = (x - card.x) as f32 / card.width.max(1) as f32;
                let ty = (y - card.y) as f32 / card.height.max(1) as f32;
                let bg = record.backdrop.sample((tx + ty) / 2.0);
                let mut cell = Cell::default();
                cell.bg = bg;
                buf.set(x, y, cell);
            }
        }
        self.render_border(card, buf);

        let inner = card.inset(1);
        if inner.is_empty() {
            return;
        }
        if self.theme.glitch {
            render_glitched(buf, inner, &self.card_glitch, |scratch| {
                let local = scratch.area();
                self.render_card_content(local, scratch, record, frame.offset, frame.alpha);
            });
            // The scratch pass loses the gradient backdrop behind glyphs;
            // restore it under the composited text.
            for y in inner.y..inner.bottom() {
                for x in inner.x..inner.right() {
                    let tx = (x - card.x) as f32 / card.width.max(1) as f32;
                    let ty = (y - card.y) as f32 / card.height.max(1) as f32;
                    let bg = record.backdrop.sample((tx + ty) / 2.0);
                    if let Some(cell) = buf.get_mut(x, y) {
                        if cell.bg.is_transparent() {
                            cell.bg = bg;
                        }
                    }
                }
            }
        } else {
            self.render_card_content(inner, buf, record, frame.offset, frame.alpha);
        }
    }

    fn render_border(&self, card: Rect, buf: &mut Buffer) {
        let style = Style::new().fg(self.theme.border_color);
        let set = |buf: &mut Buffer, x: u16, y: u16, ch: char| {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.ch = ch;
                if let Some(fg) = style.fg {
                    cell.fg = fg;
                }
            }
        };
        for x in card.x + 1..card.right() - 1 {
            set(buf, x, card.y, '─');
            set(buf, x, card.bottom() - 1, '─');
        }
        for y in card.y + 1..card.bottom() - 1 {
            set(buf, card.x, y, '│');
            set(buf, card.right() - 1, y, '│');
        }
        set(buf, card.x, card.y, '╭');
        set(buf, card.right() - 1, card.y, '╮');
        set(buf, card.x, card.bottom() - 1, '╰');
        set(buf, card.right() - 1, card.bottom() - 1, '╯');
    }

    /// Draw icon, title, description, button, and detail block into
    /// `inner`, shifted by `offset` rows and faded by `alpha`.
    fn render_card_content(
        &self,
        inner: Rect,
        buf: &mut Buffer,
        record: &PhaseRecord,
        offset: i16,
        alpha: f32,
    ) {
        let text_width = inner.width.saturating_sub(2);
        if text_width == 0 {
            return;
        }
        let fade = |color: Rgba| apply_alpha(color, alpha.clamp(0.0, 1.0));
        let mut cursor = inner.y as i32 + offset as i32;
        let put_centered = |buf: &mut Buffer, cursor: i32, text: &str, style: Style| {
            if cursor >= inner.y as i32 && (cursor as u16) < inner.bottom() {
                draw_text_centered(buf, inner, cursor as u16, text, style);
            }
        };

        // Icon.
        let icon = record.icon.ch().to_string();
        put_centered(
            buf,
            cursor,
            &icon,
            Style::new().fg(fade(record.icon_color)).bold(),
        );
        cursor += 2;

        // Title.
        put_centered(
            buf,
            cursor,
            record.title,
            Style::new().fg(fade(self.theme.title_color)).bold(),
        );
        cursor += 2;

        // Description.
        let body_style = Style::new().fg(fade(self.theme.body_color));
        for line in wrap_text(record.description, text_width) {
            put_centered(buf, cursor, &line, body_style);
            cursor += 1;
        }
        cursor += 1;

        // Reveal button.
        let label = if self.reveal.is_revealed() {
            self.theme.seal_label
        } else {
            self.theme.reveal_label
        };
        let button = format!("( {label} )");
        put_centered(
            buf,
            cursor,
            &button,
            Style::new()
                .fg(fade(self.theme.button_fg))
                .bg(self.theme.button_bg)
                .bold(),
        );
        cursor += 2;

        // Detail block, expanding from zero height.
        let detail_lines = wrap_text(record.detail, text_width);
        let full = (detail_lines.len() as u16).min(DETAIL_MAX_ROWS);
        let visible = self.reveal.visible_rows(full);
        if visible > 0 {
            let openness = self.reveal.openness();
            let style = Style::new()
                .fg(fade(apply_alpha(self.theme.detail_color, openness)))
                .bg(self.theme.detail_bg);
            for line in detail_lines.iter().take(visible as usize) {
                put_centered(buf, cursor, line, style);
                cursor += 1;
            }
        }
    }

    fn render_dots(&self, area: Rect, buf: &mut Buffer) {
        let Some((row, start_x)) = self.dots_geometry(area) else {
            return;
        };
        for (i, _) in self.theme.phases.iter().enumerate() {
            let x = start_x + i as u16 * DOT_SPACING;
            let color = if i == self.cycler.index() {
                self.theme.dot_active
            } else {
                self.theme.dot_inactive
            };
            draw_text_span(buf, x, row, "●", Style::new().fg(color), area.right());
        }
    }
}
