//! Deterministic palette generation
//!
//! Same (genre, seed, options) always yields the same palette:
//! - Seeded RNG only, one per call
//! - Mood before rarity, every step re-clamped
//! - No platform or rendering dependencies

pub mod generator;
pub mod options;
pub mod scheme;

pub use generator::{Palette, PaletteGenerator};
pub use options::{GenerationOptions, Harmony, Mood, Rarity, default_options};
pub use scheme::ColorScheme;
