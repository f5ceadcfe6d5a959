#![forbid(unsafe_code)]

//! Packed RGBA color and gradient sampling.
//!
//! Colors are stored as a single `u32` so cells stay small and comparisons
//! stay cheap. The helpers here (lerp, alpha scaling, glow) are the basis of
//! every "opacity" and "blend" treatment in the panels: terminals have no
//! real alpha channel, so transparency is expressed by scaling channels
//! toward black.

/// A packed RGBA color (8 bits per channel, `0xRRGGBBAA`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Rgba(u32);

impl Rgba {
    /// Fully transparent black. Used as the "unset" color.
    pub const TRANSPARENT: Rgba = Rgba(0);

    /// Opaque white.
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    /// Opaque black.
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    /// Create an opaque color from RGB channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create a color from RGBA channels.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha channel.
    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Whether the color has zero alpha.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a() == 0
    }

    /// Raw packed value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl core::fmt::Debug for Rgba {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Rgba({}, {}, {}, {})",
            self.r(),
            self.g(),
            self.b(),
            self.a()
        )
    }
}

/// Interpolate between two colors. `t` is clamped to [0, 1].
pub fn lerp(a: Rgba, b: Rgba, t: f32) -> Rgba {
    let t = t.clamp(0.0, 1.0);
    let ch = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Rgba::rgba(
        ch(a.r(), b.r()),
        ch(a.g(), b.g()),
        ch(a.b(), b.b()),
        ch(a.a(), b.a()),
    )
}

/// Scale a color's channels toward black. `alpha` is clamped to [0, 1].
///
/// This is how the panels fake opacity: a "30% opacity" layer is the layer's
/// color at 0.3 brightness over the dark backdrop.
pub fn apply_alpha(color: Rgba, alpha: f32) -> Rgba {
    let alpha = alpha.clamp(0.0, 1.0);
    Rgba::rgb(
        (color.r() as f32 * alpha) as u8,
        (color.g() as f32 * alpha) as u8,
        (color.b() as f32 * alpha) as u8,
    )
}

/// Additive screen-style blend of two colors, saturating per channel.
pub fn screen_blend(a: Rgba, b: Rgba) -> Rgba {
    Rgba::rgb(
        a.r().saturating_add(b.r()),
        a.g().saturating_add(b.g()),
        a.b().saturating_add(b.b()),
    )
}

/// A glow color: the base pushed toward white by `intensity`.
pub fn glow(base: Rgba, intensity: f32) -> Rgba {
    lerp(base, Rgba::WHITE, intensity.clamp(0.0, 1.0) * 0.5)
}

/// An ordered sequence of color stops sampled by normalized position.
///
/// Stops are spaced evenly; `sample` interpolates piecewise-linearly
/// between adjacent stops. Used for the panels' background washes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    stops: [Rgba; 3],
}

impl Gradient {
    /// Create a three-stop gradient.
    pub const fn new(from: Rgba, via: Rgba, to: Rgba) -> Self {
        Self {
            stops: [from, via, to],
        }
    }

    /// A flat gradient (single color everywhere).
    pub const fn flat(color: Rgba) -> Self {
        Self::new(color, color, color)
    }

    /// Sample the gradient at `t` in [0, 1].
    pub fn sample(&self, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0) * 2.0;
        if t <= 1.0 {
            lerp(self.stops[0], self.stops[1], t)
        } else {
            lerp(self.stops[1], self.stops[2], t - 1.0)
        }
    }
}
