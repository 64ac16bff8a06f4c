//! Noisetex generates procedural RGBA gradient textures from 2D Perlin-style
//! noise, optionally composited with a random grain overlay.
//!
//! # Pipeline overview
//!
//! 1. **Seed**: [`PermutationTable`] — the gradient-index lookup table
//! 2. **Evaluate**: [`NoiseField`] — continuous `(x, y) -> f64` in ~`[-1, 1]`
//! 3. **Synthesize**: three offset samples per pixel become decorrelated
//!    RGB channels of a [`PixelBuffer`]
//! 4. **Composite** (optional): a signed [`GrainBuffer`] is blended in with
//!    an asymmetric clamp
//!
//! The one-shot entry point is [`render_texture`]; the pieces are public for
//! callers that want to drive them separately.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: all randomness flows through injectable,
//!   seedable sources; the same table, settings, and seed reproduce the same
//!   bytes.
//! - **No IO**: output is an in-memory pixel buffer. Encoding and upload
//!   belong to the host.
//! - **Read-only sharing**: a table is immutable once built, so parallel row
//!   workers share it without locking; re-rolling the pattern means building
//!   a new table.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod noise;
mod render;

pub use foundation::error::{NoisetexError, NoisetexResult};
pub use noise::field::NoiseField;
pub use noise::permutation::{PermutationTable, TABLE_SIZE};
pub use render::buffer::{GrainBuffer, PixelBuffer};
pub use render::composite::{GRAIN_CONTRAST_BOOST, blend_grain};
pub use render::grain::generate_grain;
pub use render::pipeline::{
    CancelToken, DEFAULT_MAX_PIXELS, RenderOptions, RenderStats, RenderThreading, render_texture,
    render_texture_with_stats,
};
pub use render::settings::{
    AVAILABLE_SIZES, CONTRAST_ENHANCED, DEFAULT_CONTRAST, NoiseSettings,
};
pub use render::synth::render_base;
