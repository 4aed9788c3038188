//! Genre Palette - deterministic themed colors for 2D games
//!
//! Core modules:
//! - `genre`: Genre registry and genre blending
//! - `palette`: Seeded HSL palette synthesis (harmony, mood, rarity)
//! - `color`: RGBA/HSL values and conversions
//! - `rng`: Namespaced seed derivation
//! - `config`: JSON preview configuration

pub mod color;
pub mod config;
pub mod error;
pub mod genre;
pub mod palette;
pub mod rng;

pub use color::{Hsl, Rgba};
pub use config::{BlendRequest, PreviewConfig};
pub use error::{Error, Result};
pub use genre::{BlendedGenre, Genre, GenreBlender, Registry, default_registry};
pub use palette::{
    ColorScheme, GenerationOptions, Harmony, Mood, Palette, PaletteGenerator, Rarity,
    default_options,
};

/// Generation constants
pub mod consts {
    /// Minimum number of indexed palette colors
    pub const DEFAULT_MIN_COLORS: usize = 12;
    /// Upper bound on requested indexed colors
    pub const MAX_COLORS: usize = 256;

    /// Semantic UI colors (hue, saturation, lightness), independent of genre
    pub const DANGER_HSL: (f64, f64, f64) = (0.0, 0.75, 0.5);
    pub const SUCCESS_HSL: (f64, f64, f64) = (120.0, 0.6, 0.45);
    pub const WARNING_HSL: (f64, f64, f64) = (45.0, 0.9, 0.55);
    pub const INFO_HSL: (f64, f64, f64) = (210.0, 0.7, 0.5);
}

/// Normalize a hue in degrees to [0, 360)
#[inline]
pub fn normalize_hue(hue: f64) -> f64 {
    if !hue.is_finite() {
        return 0.0;
    }
    let h = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if h >= 360.0 { 0.0 } else { h }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_hue() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(450.0), 90.0);
        assert_eq!(normalize_hue(-30.0), 330.0);
        assert_eq!(normalize_hue(-1e-20), 0.0);
        assert_eq!(normalize_hue(f64::NAN), 0.0);
    }
}
