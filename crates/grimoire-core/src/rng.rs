#![forbid(unsafe_code)]

//! Seeded LCG PRNG for deterministic visual effects.
//!
//! Every randomized layer (glitch rolls, sprite placement, noise cells)
//! owns one of these, so effect output is reproducible under test and no
//! global RNG state is shared between layers.

/// Simple LCG PRNG (Numerical Recipes constants).
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create an RNG from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    /// Next raw value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    /// Uniform value in `[min, max)`. Returns `min` when the range is empty.
    pub fn next_range(&mut self, min: u64, max: u64) -> u64 {
        if max <= min {
            return min;
        }
        min + (self.next_u64() % (max - min))
    }

    /// Uniform `i16` in `[min, max)`.
    pub fn next_i16_range(&mut self, min: i16, max: i16) -> i16 {
        if max <= min {
            return min;
        }
        let span = (max as i32 - min as i32) as u64;
        min.wrapping_add(self.next_range(0, span) as i16)
    }

    /// Uniform `f32` in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        // Use the upper bits; LCG low bits have short periods.
        ((self.next_u64() >> 40) as f32) / ((1u64 << 24) as f32)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    pub fn chance(&mut self, p: f32) -> bool {
        self.next_f32() < p.clamp(0.0, 1.0)
    }

    /// Pick a random element of a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = (self.next_u64() % items.len() as u64) as usize;
        Some(&items[idx])
    }
}
