#![forbid(unsafe_code)]

//! Composable animation primitives.
//!
//! Time-based animations producing normalized `f32` values (0.0–1.0).
//! Callers drive them with an explicit `dt`, so tests can advance a virtual
//! clock without sleeping.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Easing functions
// ---------------------------------------------------------------------------

/// Easing function signature: maps `t` in [0, 1] to output in [0, 1].
pub type EasingFn = fn(f32) -> f32;

/// Identity easing (constant velocity).
#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-in (slow start).
#[inline]
pub fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Quadratic ease-out (slow end).
#[inline]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out (slow start and end).
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

// ---------------------------------------------------------------------------
// Animation trait
// ---------------------------------------------------------------------------

/// A time-based animation producing values in [0.0, 1.0].
pub trait Animation {
    /// Advance the animation by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its end.
    fn is_complete(&self) -> bool;

    /// Current output value, clamped to [0.0, 1.0].
    fn value(&self) -> f32;

    /// Reset the animation to its initial state.
    fn reset(&mut self);

    /// Time elapsed past completion, for forwarding into a follow-up
    /// animation. Returns [`Duration::ZERO`] for animations that never
    /// complete.
    fn overshoot(&self) -> Duration {
        Duration::ZERO
    }
}

// ---------------------------------------------------------------------------
// Fade
// ---------------------------------------------------------------------------

/// Progression from 0.0 to 1.0 over a duration, with configurable easing.
///
/// Elapsed time is tracked as [`Duration`] for precise accumulation and
/// accurate overshoot.
#[derive(Debug, Clone, Copy)]
pub struct Fade {
    elapsed: Duration,
    duration: Duration,
    easing: EasingFn,
}

impl Fade {
    /// Create a fade with the given duration and linear easing.
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
            easing: linear,
        }
    }

    /// Set the easing function.
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Raw linear progress (before easing), in [0.0, 1.0].
    pub fn raw_progress(&self) -> f32 {
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (t as f32).clamp(0.0, 1.0)
    }
}

impl Animation for Fade {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        (self.easing)(self.raw_progress())
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    fn overshoot(&self) -> Duration {
        self.elapsed.saturating_sub(self.duration)
    }
}

// ---------------------------------------------------------------------------
// Slide
// ---------------------------------------------------------------------------

/// Interpolates an `i16` offset between `from` and `to` over a duration.
///
/// [`Animation::value`] returns normalized progress; [`Slide::position`]
/// returns the interpolated integer offset.
#[derive(Debug, Clone, Copy)]
pub struct Slide {
    from: i16,
    to: i16,
    elapsed: Duration,
    duration: Duration,
    easing: EasingFn,
}

impl Slide {
    /// Create a slide from `from` to `to` over `duration`.
    pub fn new(from: i16, to: i16, duration: Duration) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
            easing: ease_out,
        }
    }

    /// Set the easing function.
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    fn progress(&self) -> f32 {
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (t as f32).clamp(0.0, 1.0)
    }

    /// Current interpolated offset.
    pub fn position(&self) -> i16 {
        let t = (self.easing)(self.progress());
        let range = f32::from(self.to) - f32::from(self.from);
        let pos = f32::from(self.from) + range * t;
        pos.round().clamp(f32::from(i16::MIN), f32::from(i16::MAX)) as i16
    }
}

impl Animation for Slide {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        (self.easing)(self.progress())
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    fn overshoot(&self) -> Duration {
        self.elapsed.saturating_sub(self.duration)
    }
}

// ---------------------------------------------------------------------------
// Pulse
// ---------------------------------------------------------------------------

/// Continuous sine-wave oscillation. Never completes.
///
/// `value()` oscillates between 0.0 and 1.0 at the given frequency (Hz).
#[derive(Debug, Clone, Copy)]
pub struct Pulse {
    frequency: f32,
    phase: f32,
}

impl Pulse {
    /// Create a pulse at the given frequency in Hz.
    pub fn new(frequency: f32) -> Self {
        Self {
            frequency: frequency.abs().max(f32::MIN_POSITIVE),
            phase: 0.0,
        }
    }

    /// Create a pulse that completes one cycle per `period`.
    pub fn with_period(period: Duration) -> Self {
        Self::new(1.0 / period.as_secs_f32().max(f32::MIN_POSITIVE))
    }

    /// Current phase in radians.
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Offset the starting phase by a fraction of a cycle. Used to stagger
    /// sprites that share a clock.
    #[must_use]
    pub fn phase_offset(mut self, fraction: f32) -> Self {
        self.phase = (self.phase + std::f32::consts::TAU * fraction) % std::f32::consts::TAU;
        self
    }
}

impl Animation for Pulse {
    fn tick(&mut self, dt: Duration) {
        self.phase += std::f32::consts::TAU * self.frequency * dt.as_secs_f32();
        // Keep phase bounded to avoid precision loss over long runs.
        self.phase %= std::f32::consts::TAU;
    }

    fn is_complete(&self) -> bool {
        false // Pulses never complete.
    }

    fn value(&self) -> f32 {
        // Map sin output from [-1, 1] to [0, 1].
        (self.phase.sin() + 1.0) / 2.0
    }

    fn reset(&mut self) {
        self.phase = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_progresses_linearly() {
        let mut fade = Fade::new(Duration::from_secs(2));
        assert_eq!(fade.value(), 0.0);
        fade.tick(Duration::from_secs(1));
        assert!((fade.value() - 0.5).abs() < 1e-6);
        fade.tick(Duration::from_secs(1));
        assert_eq!(fade.value(), 1.0);
        assert!(fade.is_complete());
    }

    #[test]
    fn fade_overshoot_reports_excess() {
        let mut fade = Fade::new(Duration::from_millis(500));
        fade.tick(Duration::from_millis(800));
        assert_eq!(fade.overshoot(), Duration::from_millis(300));
    }

    #[test]
    fn fade_reset_restarts() {
        let mut fade = Fade::new(Duration::from_secs(1));
        fade.tick(Duration::from_secs(1));
        fade.reset();
        assert_eq!(fade.value(), 0.0);
        assert!(!fade.is_complete());
    }

    #[test]
    fn fade_zero_duration_does_not_divide_by_zero() {
        let mut fade = Fade::new(Duration::ZERO);
        fade.tick(Duration::from_millis(1));
        assert_eq!(fade.value(), 1.0);
    }

    #[test]
    fn slide_interpolates_position() {
        let mut slide = Slide::new(0, 10, Duration::from_secs(1)).easing(linear);
        assert_eq!(slide.position(), 0);
        slide.tick(Duration::from_millis(500));
        assert_eq!(slide.position(), 5);
        slide.tick(Duration::from_millis(500));
        assert_eq!(slide.position(), 10);
    }

    #[test]
    fn slide_negative_range() {
        let mut slide = Slide::new(2, -2, Duration::from_secs(1)).easing(linear);
        slide.tick(Duration::from_secs(1));
        assert_eq!(slide.position(), -2);
    }

    #[test]
    fn pulse_oscillates_and_never_completes() {
        let mut pulse = Pulse::new(1.0);
        assert!((pulse.value() - 0.5).abs() < 1e-6);
        pulse.tick(Duration::from_millis(250));
        assert!(pulse.value() > 0.99);
        pulse.tick(Duration::from_millis(500));
        assert!(pulse.value() < 0.01);
        assert!(!pulse.is_complete());
    }

    #[test]
    fn pulse_phase_stays_bounded() {
        let mut pulse = Pulse::new(10.0);
        for _ in 0..10_000 {
            pulse.tick(Duration::from_millis(16));
        }
        assert!(pulse.phase() >= 0.0 && pulse.phase() < std::f32::consts::TAU + 1e-3);
    }

    #[test]
    fn easing_clamps_out_of_range_input() {
        assert_eq!(linear(-1.0), 0.0);
        assert_eq!(ease_in(2.0), 1.0);
        assert_eq!(ease_out(-0.5), 0.0);
        assert_eq!(ease_in_out(1.5), 1.0);
    }

    #[test]
    fn ease_in_out_midpoint() {
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
    }
}
