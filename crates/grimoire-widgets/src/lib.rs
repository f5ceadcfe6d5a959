#![forbid(unsafe_code)]

//! The Neural Grimoire panels and their effect layers.

pub mod catalog;
pub mod glitch;
pub mod grimoire;
pub mod noise;
pub mod parasocial;
pub mod phase;
pub mod reveal;
pub mod symbols;
pub mod theme;
pub mod ticker;
pub mod transition;

use grimoire_core::buffer::Buffer;
use grimoire_core::cell::Cell;
use grimoire_core::geometry::Rect;
use grimoire_core::style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a `Buffer` within a given `Rect`.
pub trait Widget {
    /// Render the widget into the buffer at the given area.
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// A `StatefulWidget` renders based on mutable state.
///
/// Used for layers whose appearance mutates per render pass (the ASCII
/// noise backdrop re-rolls its cells each time it is drawn).
pub trait StatefulWidget {
    /// The mutable state the widget renders from.
    type State;

    /// Render the widget into the buffer with mutable state.
    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State);
}

/// Helper to apply a style to a cell.
pub(crate) fn apply_style(cell: &mut Cell, style: Style) {
    if let Some(fg) = style.fg {
        cell.fg = fg;
    }
    if let Some(bg) = style.bg {
        cell.bg = bg;
    }
    if let Some(attrs) = style.attrs {
        cell.attrs |= attrs;
    }
}

/// Apply a style to all cells in a rectangular area, preserving content.
pub(crate) fn set_style_area(buf: &mut Buffer, area: Rect, style: Style) {
    if style.is_empty() {
        return;
    }
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                apply_style(cell, style);
            }
        }
    }
}

/// Draw a text span into a buffer at the given position.
///
/// Returns the x position after the last drawn character.
/// Stops at `max_x` (exclusive).
pub(crate) fn draw_text_span(
    buf: &mut Buffer,
    mut x: u16,
    y: u16,
    content: &str,
    style: Style,
    max_x: u16,
) -> u16 {
    for grapheme in content.graphemes(true) {
        if x >= max_x {
            break;
        }
        let w = UnicodeWidthStr::width(grapheme);
        if w == 0 {
            continue;
        }
        if x + w as u16 > max_x {
            break;
        }
        if let Some(c) = grapheme.chars().next() {
            let mut cell = Cell::from_char(c);
            apply_style(&mut cell, style);
            buf.set(x, y, cell);
        }
        x = x.saturating_add(w as u16);
    }
    x
}

/// Draw text horizontally centered within `area` on row `y` (absolute).
///
/// Text wider than the area is clipped at the right edge.
pub(crate) fn draw_text_centered(buf: &mut Buffer, area: Rect, y: u16, content: &str, style: Style) {
    let w = UnicodeWidthStr::width(content) as u16;
    let x = if w >= area.width {
        area.x
    } else {
        area.x + (area.width - w) / 2
    };
    draw_text_span(buf, x, y, content, style, area.right());
}

/// Greedy word-wrap of `content` into lines at most `width` cells wide.
///
/// Words longer than `width` are split hard. Returns owned lines.
pub(crate) fn wrap_text(content: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_w = 0usize;
    for word in content.split_whitespace() {
        let word_w = UnicodeWidthStr::width(word);
        if line_w > 0 {
            if line_w + 1 + word_w <= width {
                line.push(' ');
                line.push_str(word);
                line_w += 1 + word_w;
                continue;
            }
            lines.push(std::mem::take(&mut line));
            line_w = 0;
        }
        if word_w <= width {
            line.push_str(word);
            line_w = word_w;
        } else {
            // Hard-split an oversized word.
            let mut rest = word;
            while UnicodeWidthStr::width(rest) > width {
                let mut taken = 0;
                let mut byte_end = rest.len();
                for (i, g) in rest.grapheme_indices(true) {
                    let gw = UnicodeWidthStr::width(g);
                    if taken + gw > width {
                        byte_end = i;
                        break;
                    }
                    taken += gw;
                }
                lines.push(rest[..byte_end].to_string());
                rest = &rest[byte_end..];
            }
            line.push_str(rest);
            line_w = UnicodeWidthStr::width(rest);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
