#![forbid(unsafe_code)]

//! The terminal cell: one grid position's character and style.

use bitflags::bitflags;

use crate::color::Rgba;

bitflags! {
    /// Text attribute flags for a cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CellAttrs: u8 {
        /// Bold weight.
        const BOLD = 1 << 0;
        /// Dim/faint weight.
        const DIM = 1 << 1;
        /// Italic slant.
        const ITALIC = 1 << 2;
        /// Underline.
        const UNDERLINE = 1 << 3;
        /// Inverse video.
        const REVERSE = 1 << 4;
    }
}

/// A single cell of the terminal grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The displayed character. `' '` for empty cells.
    pub ch: char,
    /// Foreground color. Transparent means "inherit the buffer default".
    pub fg: Rgba,
    /// Background color. Transparent means "inherit the buffer default".
    pub bg: Rgba,
    /// Attribute flags.
    pub attrs: CellAttrs,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Rgba::TRANSPARENT,
            bg: Rgba::TRANSPARENT,
            attrs: CellAttrs::empty(),
        }
    }
}

impl Cell {
    /// Create a cell from a character with default colors.
    pub fn from_char(ch: char) -> Self {
        Self {
            ch,
            ..Self::default()
        }
    }

    /// Whether the cell shows nothing (blank character, no background).
    pub fn is_blank(&self) -> bool {
        self.ch == ' ' && self.bg.is_transparent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_blank() {
        assert!(Cell::default().is_blank());
    }

    #[test]
    fn from_char_keeps_char() {
        let c = Cell::from_char('Z');
        assert_eq!(c.ch, 'Z');
        assert!(!c.is_blank());
    }

    #[test]
    fn background_makes_cell_non_blank() {
        let mut c = Cell::default();
        c.bg = Rgba::rgb(1, 2, 3);
        assert!(!c.is_blank());
    }
}
