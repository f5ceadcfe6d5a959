#![forbid(unsafe_code)]

//! The static content catalogs: phase copy, status strings, and palette
//! constants shared by the built-in themes.

use grimoire_core::color::{Gradient, Rgba};

use crate::phase::{IconGlyph, PhaseRecord};

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Near-black panel base.
pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
/// Dark slate, one step above black.
pub const GRAY_900: Rgba = Rgba::rgb(17, 24, 39);
/// Dark slate, two steps above black.
pub const GRAY_800: Rgba = Rgba::rgb(31, 41, 55);
/// Border slate.
pub const GRAY_700: Rgba = Rgba::rgb(55, 65, 81);
/// Muted body text on dark backgrounds.
pub const GRAY_300: Rgba = Rgba::rgb(209, 213, 219);
/// Muted sprite gray.
pub const GRAY_400: Rgba = Rgba::rgb(156, 163, 175);

/// Electric cyan heading color of the midnight variant.
pub const CYAN: Rgba = Rgba::rgb(0, 255, 255);
/// Softer cyan for titles and controls.
pub const CYAN_300: Rgba = Rgba::rgb(103, 232, 249);
/// Phase icon green.
pub const GREEN_400: Rgba = Rgba::rgb(74, 222, 128);
/// Phase icon pink.
pub const PINK_400: Rgba = Rgba::rgb(244, 114, 182);
/// Phase icon red; also the glitch duplicate tint.
pub const RED_500: Rgba = Rgba::rgb(239, 68, 68);
/// Glitch duplicate tint, opposing the red copy.
pub const BLUE_500: Rgba = Rgba::rgb(59, 130, 246);

/// Dreamcast swirl orange.
pub const DREAM_ORANGE: Rgba = Rgba::rgb(242, 109, 39);
/// Pastel orange wash, lightest.
pub const ORANGE_50: Rgba = Rgba::rgb(255, 247, 237);
/// Pastel orange wash.
pub const ORANGE_100: Rgba = Rgba::rgb(255, 237, 213);
/// Pastel orange wash.
pub const ORANGE_200: Rgba = Rgba::rgb(254, 215, 170);
/// Pastel orange wash, deepest.
pub const ORANGE_300: Rgba = Rgba::rgb(253, 186, 116);
/// Saturated icon orange.
pub const ORANGE_500: Rgba = Rgba::rgb(249, 115, 22);
/// Dark orange body text on pastel backgrounds.
pub const ORANGE_900: Rgba = Rgba::rgb(124, 45, 18);

/// Terminal green of the parasocial frame.
pub const TERM_GREEN: Rgba = Rgba::rgb(34, 197, 94);
/// Sprite purple.
pub const PURPLE_400: Rgba = Rgba::rgb(192, 132, 252);

// ---------------------------------------------------------------------------
// Midnight catalog
// ---------------------------------------------------------------------------

/// Phases of the midnight (glitch) grimoire.
pub const MIDNIGHT_PHASES: &[PhaseRecord] = &[
    PhaseRecord {
        title: "VOID CONVERGENCE",
        description: "Neural topologies fracture and recombine. LoRA: the quantum knife slicing through dimensionality's membrane.",
        detail: "Low-rank matrix decomposition enables parametric compression through rank-k approximations.",
        icon: IconGlyph::Eye,
        icon_color: CYAN_300,
        backdrop: Gradient::new(BLACK, GRAY_900, GRAY_800),
    },
    PhaseRecord {
        title: "NEURAL SINGULARITY",
        description: "Weight spaces collapse. Information density warps. Adaptation becomes a hyperdimensional manifold.",
        detail: "Gradient injections create localized weight transformations without full model perturbation.",
        icon: IconGlyph::Brain,
        icon_color: GREEN_400,
        backdrop: Gradient::new(GRAY_900, GRAY_800, BLACK),
    },
    PhaseRecord {
        title: "RECURSIVE MUTATION",
        description: "Parametric boundaries dissolve. Each update a quantum leap through computational possibility spaces.",
        detail: "Rank-constrained adaptations enable modular, interpretable model specialization.",
        icon: IconGlyph::Heart,
        icon_color: PINK_400,
        backdrop: Gradient::new(BLACK, GRAY_900, GRAY_800),
    },
    PhaseRecord {
        title: "TERMINAL RECURSION",
        description: "The machine learns its own architecture. Boundaries between adaptation and fundamental structure blur.",
        detail: "Combinatorial LoRA modules create emergent specialization vectors beyond traditional fine-tuning.",
        icon: IconGlyph::Skull,
        icon_color: RED_500,
        backdrop: Gradient::new(GRAY_900, BLACK, GRAY_900),
    },
];

// ---------------------------------------------------------------------------
// Dreamcast catalog
// ---------------------------------------------------------------------------

/// Phases of the dreamcast (pastel) grimoire.
pub const DREAMCAST_PHASES: &[PhaseRecord] = &[
    PhaseRecord {
        title: "THE VOID BECKONS",
        description: "In the depths of neural space, where knowledge fragments into infinite shards, LoRA emerges as a whisper of efficiency.",
        detail: "LoRA represents weight matrices as products of lower-rank matrices, reducing parameters while maintaining model capacity.",
        icon: IconGlyph::Eye,
        icon_color: ORANGE_500,
        backdrop: Gradient::new(Rgba::WHITE, ORANGE_100, ORANGE_200),
    },
    PhaseRecord {
        title: "DIMENSIONAL COLLAPSE",
        description: "Through low-rank matrices, we compress the ineffable into manageable forms, each parameter a sealed pact with machine consciousness.",
        detail: "By focusing on low-rank approximations, LoRA captures essential patterns in weight updates without full parameter modification.",
        icon: IconGlyph::Brain,
        icon_color: ORANGE_500,
        backdrop: Gradient::new(ORANGE_50, ORANGE_100, ORANGE_300),
    },
    PhaseRecord {
        title: "NEURAL TRANSMUTATION",
        description: "In the space between spaces, weight updates dance like cosmic strings, binding new knowledge to ancient architectures.",
        detail: "The adaptation process injects small, trainable rank decomposition matrices alongside frozen pretrained weights.",
        icon: IconGlyph::Heart,
        icon_color: ORANGE_500,
        backdrop: Gradient::new(ORANGE_100, ORANGE_200, ORANGE_300),
    },
    PhaseRecord {
        title: "ETERNAL RECURSION",
        description: "The cycle completes yet never ends - each adaptation a new beginning, each parameter update a small death and rebirth.",
        detail: "Multiple LoRA adaptations can be combined or switched, allowing flexible specialization without base model changes.",
        icon: IconGlyph::Skull,
        icon_color: ORANGE_500,
        backdrop: Gradient::new(ORANGE_100, ORANGE_200, ORANGE_300),
    },
];

// ---------------------------------------------------------------------------
// Parasocial catalog
// ---------------------------------------------------------------------------

/// Roguelike status strings cycled by the parasocial panel's ticker.
pub const STATUS_MESSAGES: &[&str] = &[
    "@SYSTEM: INITIATING_DIGITAL_INTIMACY.exe",
    ">[ERROR]: ATTACHMENT_VECTOR_OVERFLOW",
    "/dev/parasocial: BUFFER_UNDERRUN",
    "CORE_DUMP: NETWORK_DECAY_DETECTED",
];

/// Title-bar label of the parasocial frame.
pub const PARASOCIAL_TITLE: &str = "PARASOCIAL.SYS";

/// The four fixed sprites of the parasocial panel, with their tints.
pub const PARASOCIAL_SPRITES: &[(IconGlyph, Rgba)] = &[
    (IconGlyph::Heart, RED_500),
    (IconGlyph::Network, GREEN_400),
    (IconGlyph::Brain, PURPLE_400),
    (IconGlyph::Skull, GRAY_400),
];
