//! Genre catalog and blending
//!
//! - `types`: the `Genre` value and its validation
//! - `registry`: ID-keyed catalog plus the built-in genres
//! - `blend`: deterministic two-genre hybrids

pub mod blend;
pub mod registry;
pub mod types;

pub use blend::{BLEND_THEME_COUNT, BlendPreset, BlendedGenre, GenreBlender, blend_id};
pub use registry::{Registry, builtin_genres, default_registry};
pub use types::Genre;
