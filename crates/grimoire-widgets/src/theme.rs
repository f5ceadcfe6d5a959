#![forbid(unsafe_code)]

//! Panel themes: color treatment, labels, and effect switches as data.
//!
//! The two grimoire variants are the same panel with different themes;
//! nothing about phase cycling, reveal, or transitions is re-implemented
//! per variant.

use grimoire_core::color::Rgba;

use crate::catalog;
use crate::phase::{IconGlyph, PhaseRecord};

/// Configuration data for a [`GrimoirePanel`](crate::grimoire::GrimoirePanel).
#[derive(Debug, Clone)]
pub struct PanelTheme {
    /// Large heading above the phase card.
    pub heading: &'static str,
    /// Heading color.
    pub heading_color: Rgba,
    /// Whether the heading brightness pulses (glow breathing).
    pub heading_glow: bool,
    /// Whether the glitch overlay wraps the heading and card content.
    pub glitch: bool,
    /// Number of floating symbol sprites (0 disables the field).
    pub symbol_count: usize,
    /// Glyph set the sprites draw from.
    pub symbol_glyphs: &'static [IconGlyph],
    /// Sprite tint.
    pub symbol_color: Rgba,
    /// Whether a horizontal scanline wash darkens alternating rows.
    pub scanlines: bool,
    /// Phase title color.
    pub title_color: Rgba,
    /// Body copy color.
    pub body_color: Rgba,
    /// Detail block text color.
    pub detail_color: Rgba,
    /// Detail block background.
    pub detail_bg: Rgba,
    /// Card border color.
    pub border_color: Rgba,
    /// Reveal button label while the detail block is hidden.
    pub reveal_label: &'static str,
    /// Reveal button label while the detail block is shown.
    pub seal_label: &'static str,
    /// Button text color.
    pub button_fg: Rgba,
    /// Button fill color.
    pub button_bg: Rgba,
    /// Indicator dot color for the active phase.
    pub dot_active: Rgba,
    /// Indicator dot color for inactive phases.
    pub dot_inactive: Rgba,
    /// The phase catalog this theme presents.
    pub phases: &'static [PhaseRecord],
}

/// Every glyph, for themes whose sprites draw from the full set.
pub const ALL_GLYPHS: &[IconGlyph] = &[
    IconGlyph::Eye,
    IconGlyph::Brain,
    IconGlyph::Network,
    IconGlyph::Skull,
    IconGlyph::Heart,
    IconGlyph::Moon,
    IconGlyph::Sun,
    IconGlyph::Star,
];

impl PanelTheme {
    /// The midnight variant: black washes, electric cyan, glitch overlay,
    /// scanline backdrop, no floating symbols.
    pub fn midnight() -> Self {
        Self {
            heading: "NEURAL GRIMOIRE",
            heading_color: catalog::CYAN,
            heading_glow: false,
            glitch: true,
            symbol_count: 0,
            symbol_glyphs: ALL_GLYPHS,
            symbol_color: catalog::GRAY_400,
            scanlines: true,
            title_color: catalog::CYAN_300,
            body_color: catalog::GRAY_300,
            detail_color: catalog::GRAY_300,
            detail_bg: catalog::GRAY_900,
            border_color: catalog::GRAY_800,
            reveal_label: "DECRYPT VECTORS",
            seal_label: "SEAL PROTOCOL",
            button_fg: catalog::CYAN_300,
            button_bg: catalog::GRAY_800,
            dot_active: catalog::CYAN_300,
            dot_inactive: catalog::GRAY_700,
            phases: catalog::MIDNIGHT_PHASES,
        }
    }

    /// The dreamcast variant: pastel orange washes, glowing heading,
    /// twenty floating symbols, no glitch.
    pub fn dreamcast() -> Self {
        Self {
            heading: "Neural Grimoire: LoRA",
            heading_color: catalog::DREAM_ORANGE,
            heading_glow: true,
            glitch: false,
            symbol_count: 20,
            symbol_glyphs: ALL_GLYPHS,
            symbol_color: catalog::ORANGE_500,
            scanlines: false,
            title_color: catalog::ORANGE_900,
            body_color: catalog::ORANGE_900,
            detail_color: catalog::ORANGE_900,
            detail_bg: catalog::ORANGE_50,
            border_color: catalog::ORANGE_300,
            reveal_label: "Reveal Truth",
            seal_label: "Seal Knowledge",
            button_fg: catalog::ORANGE_900,
            button_bg: catalog::ORANGE_200,
            dot_active: catalog::ORANGE_500,
            dot_inactive: catalog::ORANGE_300,
            phases: catalog::DREAMCAST_PHASES,
        }
    }
}
