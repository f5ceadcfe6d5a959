#![forbid(unsafe_code)]

//! Style: optional fg/bg colors plus attribute flags.

use crate::cell::CellAttrs;
use crate::color::Rgba;

/// A partial style. `None` fields leave the target cell unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color override.
    pub fg: Option<Rgba>,
    /// Background color override.
    pub bg: Option<Rgba>,
    /// Attribute flags to OR in.
    pub attrs: Option<CellAttrs>,
}

impl Style {
    /// An empty style (no overrides).
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: Rgba) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: Rgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add attribute flags.
    #[must_use]
    pub fn attrs(mut self, attrs: CellAttrs) -> Self {
        self.attrs = Some(self.attrs.unwrap_or(CellAttrs::empty()) | attrs);
        self
    }

    /// Add the bold attribute.
    #[must_use]
    pub fn bold(self) -> Self {
        self.attrs(CellAttrs::BOLD)
    }

    /// Add the dim attribute.
    #[must_use]
    pub fn dim(self) -> Self {
        self.attrs(CellAttrs::DIM)
    }

    /// Whether the style overrides nothing.
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(Style::default().is_empty());
    }

    #[test]
    fn builder_accumulates_attrs() {
        let s = Style::new().bold().dim();
        assert_eq!(s.attrs, Some(CellAttrs::BOLD | CellAttrs::DIM));
    }

    #[test]
    fn fg_bg_set_independently() {
        let s = Style::new().fg(Rgba::rgb(1, 2, 3));
        assert_eq!(s.fg, Some(Rgba::rgb(1, 2, 3)));
        assert_eq!(s.bg, None);
    }
}
