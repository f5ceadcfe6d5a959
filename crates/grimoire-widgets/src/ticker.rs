#![forbid(unsafe_code)]

//! Status ticker: cycles a fixed list of strings with an opacity pulse.

use std::time::Duration;

use grimoire_core::animation::{Animation, Pulse};
use grimoire_core::buffer::Buffer;
use grimoire_core::color::{Rgba, apply_alpha};
use grimoire_core::geometry::Rect;
use grimoire_core::style::Style;

use crate::draw_text_centered;
use crate::phase::PhaseCycler;

/// Cycles status messages on a fixed interval, pulsing their brightness.
///
/// Internally a [`PhaseCycler`] over the message list plus a continuous
/// [`Pulse`]; its clock is independent of any panel phase cycler.
#[derive(Debug, Clone)]
pub struct StatusTicker {
    messages: &'static [&'static str],
    cycler: PhaseCycler,
    pulse: Pulse,
    color: Rgba,
}

impl StatusTicker {
    /// Create a ticker over `messages`, advancing every `interval`.
    pub fn new(messages: &'static [&'static str], interval: Duration, color: Rgba) -> Self {
        Self {
            messages,
            cycler: PhaseCycler::new(messages.len(), interval),
            // Brightness swells and fades once every two seconds.
            pulse: Pulse::with_period(Duration::from_secs(2)),
            color,
        }
    }

    /// The currently displayed message.
    pub fn current(&self) -> &'static str {
        self.messages
            .get(self.cycler.index())
            .copied()
            .unwrap_or_default()
    }

    /// Index of the currently displayed message.
    pub fn index(&self) -> usize {
        self.cycler.index()
    }

    /// Advance both the message cycle and the brightness pulse.
    pub fn advance(&mut self, dt: Duration) {
        self.cycler.advance(dt);
        self.pulse.tick(dt);
    }

    /// Current brightness in [0.4, 1.0].
    pub fn brightness(&self) -> f32 {
        0.4 + 0.6 * self.pulse.value()
    }

    /// Draw the current message centered on row `y` (absolute).
    pub fn render_row(&self, area: Rect, y: u16, buf: &mut Buffer) {
        if area.is_empty() || y < area.y || y >= area.bottom() {
            return;
        }
        let style = Style::new().fg(apply_alpha(self.color, self.brightness()));
        draw_text_centered(buf, area, y, self.current(), style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{STATUS_MESSAGES, TERM_GREEN};

    fn ticker() -> StatusTicker {
        StatusTicker::new(STATUS_MESSAGES, Duration::from_secs(3), TERM_GREEN)
    }

    #[test]
    fn starts_on_first_message() {
        assert_eq!(ticker().current(), STATUS_MESSAGES[0]);
    }

    #[test]
    fn advances_every_three_seconds() {
        let mut t = ticker();
        t.advance(Duration::from_secs(3));
        assert_eq!(t.current(), STATUS_MESSAGES[1]);
        t.advance(Duration::from_secs(3));
        assert_eq!(t.current(), STATUS_MESSAGES[2]);
    }

    #[test]
    fn nine_seconds_lands_on_fourth_message() {
        let mut t = ticker();
        t.advance(Duration::from_secs(9));
        assert_eq!(t.index(), 3);
        assert_eq!(t.current(), STATUS_MESSAGES[3]);
    }

    #[test]
    fn full_cycle_wraps_to_first() {
        let mut t = ticker();
        t.advance(Duration::from_secs(12));
        assert_eq!(t.current(), STATUS_MESSAGES[0]);
    }

    #[test]
    fn brightness_stays_in_pulse_band() {
        let mut t = ticker();
        for _ in 0..200 {
            t.advance(Duration::from_millis(33));
            let b = t.brightness();
            assert!((0.4..=1.0).contains(&b), "brightness {b} out of band");
        }
    }

    #[test]
    fn render_row_draws_current_message() {
        let mut buf = Buffer::new(60, 3);
        let t = ticker();
        t.render_row(Rect::from_size(60, 3), 1, &mut buf);
        assert!(buf.row_text(1).contains(STATUS_MESSAGES[0]));
    }

    #[test]
    fn render_outside_area_is_ignored() {
        let mut buf = Buffer::new(60, 3);
        let t = ticker();
        t.render_row(Rect::from_size(60, 2), 2, &mut buf);
        assert_eq!(buf.row_text(2).trim(), "");
    }
}
