#![forbid(unsafe_code)]

//! Rendering substrate and shared primitives for the Neural Grimoire panels.
//!
//! Provides the cell grid ([`buffer::Buffer`]), packed colors and gradients
//! ([`color`]), composable time-based animations ([`animation`]), a seeded
//! deterministic RNG for visual effects ([`rng`]), and the input event model
//! ([`event`]).

pub mod animation;
pub mod buffer;
pub mod cell;
pub mod color;
pub mod event;
pub mod geometry;
pub mod rng;
pub mod style;
