//! Caller-selectable palette generation options

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MIN_COLORS, MAX_COLORS};
use crate::error::{Error, Result};

/// Color harmony rule used to spread hues around the base hue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Harmony {
    #[default]
    Complementary,
    Analogous,
    Triadic,
    Tetradic,
    SplitComplementary,
    Monochromatic,
}

impl Harmony {
    pub const ALL: [Harmony; 6] = [
        Harmony::Complementary,
        Harmony::Analogous,
        Harmony::Triadic,
        Harmony::Tetradic,
        Harmony::SplitComplementary,
        Harmony::Monochromatic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Harmony::Complementary => "complementary",
            Harmony::Analogous => "analogous",
            Harmony::Triadic => "triadic",
            Harmony::Tetradic => "tetradic",
            Harmony::SplitComplementary => "split_complementary",
            Harmony::Monochromatic => "monochromatic",
        }
    }

    /// Hue offsets in degrees relative to the base hue
    pub fn offsets(&self) -> &'static [f64] {
        match self {
            Harmony::Complementary => &[0.0, 180.0],
            Harmony::Analogous => &[0.0, 30.0, -30.0],
            Harmony::Triadic => &[0.0, 120.0, 240.0],
            Harmony::Tetradic => &[0.0, 90.0, 180.0, 270.0],
            Harmony::SplitComplementary => &[0.0, 150.0, 210.0],
            Harmony::Monochromatic => &[0.0],
        }
    }
}

/// Overall tone applied to the genre scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    #[default]
    Normal,
    Bright,
    Dark,
    Saturated,
    Muted,
    Vibrant,
    Pastel,
}

impl Mood {
    pub const ALL: [Mood; 7] = [
        Mood::Normal,
        Mood::Bright,
        Mood::Dark,
        Mood::Saturated,
        Mood::Muted,
        Mood::Vibrant,
        Mood::Pastel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Normal => "normal",
            Mood::Bright => "bright",
            Mood::Dark => "dark",
            Mood::Saturated => "saturated",
            Mood::Muted => "muted",
            Mood::Vibrant => "vibrant",
            Mood::Pastel => "pastel",
        }
    }
}

/// Item rarity tier; rarer tiers are more saturated and varied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

fn parse_variant<T: Copy>(kind: &str, s: &str, all: &[T], name: fn(&T) -> &'static str) -> Result<T> {
    let wanted = s.trim().to_lowercase().replace('-', "_");
    all.iter()
        .find(|v| name(v) == wanted)
        .copied()
        .ok_or_else(|| Error::config(format!("unknown {} '{}'", kind, s)))
}

impl FromStr for Harmony {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_variant("harmony", s, &Harmony::ALL, Harmony::as_str)
    }
}

impl FromStr for Mood {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_variant("mood", s, &Mood::ALL, Mood::as_str)
    }
}

impl FromStr for Rarity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_variant("rarity", s, &Rarity::ALL, Rarity::as_str)
    }
}

/// Options for a single palette generation call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    pub harmony: Harmony,
    pub mood: Mood,
    pub rarity: Rarity,
    /// Minimum length of `Palette::colors`; raised to 12 if lower
    pub min_colors: usize,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            harmony: Harmony::Complementary,
            mood: Mood::Normal,
            rarity: Rarity::Common,
            min_colors: DEFAULT_MIN_COLORS,
        }
    }
}

impl GenerationOptions {
    /// Reject option values the generator cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.min_colors > MAX_COLORS {
            return Err(Error::config(format!(
                "min_colors {} exceeds maximum of {}",
                self.min_colors, MAX_COLORS
            )));
        }
        Ok(())
    }

    /// Number of entries the `colors` list will hold
    pub fn color_count(&self) -> usize {
        self.min_colors.max(DEFAULT_MIN_COLORS)
    }
}

/// Harmony complementary, mood normal, rarity common, 12 colors
pub fn default_options() -> GenerationOptions {
    GenerationOptions::default()
}
