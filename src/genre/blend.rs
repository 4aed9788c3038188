//! Genre blending
//!
//! Combines two registered genres into a synthetic hybrid. Output is a pure
//! function of (primary, secondary, weight, seed).

use std::sync::Arc;

use rand::Rng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::registry::Registry;
use super::types::Genre;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::rng::{BLEND_NAMESPACE, SeedState};

/// Number of themes a blended genre carries
pub const BLEND_THEME_COUNT: usize = 6;

/// Weights are quantized to millionths before the ID percentage is taken
const WEIGHT_SCALE: i64 = 1_000_000;

/// A genre synthesized from two base genres
#[derive(Debug, Clone, Serialize)]
pub struct BlendedGenre {
    pub genre: Genre,
    #[serde(skip)]
    pub primary_base: Option<Arc<Genre>>,
    #[serde(skip)]
    pub secondary_base: Option<Arc<Genre>>,
    /// 0.0 = pure primary, 1.0 = pure secondary
    pub blend_weight: f64,
}

impl BlendedGenre {
    /// True when both base genres are known
    pub fn is_blended(&self) -> bool {
        self.primary_base.is_some() && self.secondary_base.is_some()
    }

    /// Primary and secondary base genres
    pub fn base_genres(&self) -> Option<(&Genre, &Genre)> {
        match (&self.primary_base, &self.secondary_base) {
            (Some(p), Some(s)) => Some((p.as_ref(), s.as_ref())),
            _ => None,
        }
    }
}

impl AsRef<Genre> for BlendedGenre {
    fn as_ref(&self) -> &Genre {
        &self.genre
    }
}

/// A named, fixed blend recipe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendPreset {
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub weight: f64,
}

impl BlendPreset {
    pub const ALL: [BlendPreset; 5] = [
        BlendPreset { name: "sci-fi-horror", primary: "scifi", secondary: "horror", weight: 0.5 },
        BlendPreset { name: "dark-fantasy", primary: "fantasy", secondary: "horror", weight: 0.3 },
        BlendPreset { name: "post-apoc-scifi", primary: "postapoc", secondary: "scifi", weight: 0.5 },
        BlendPreset { name: "cyber-horror", primary: "cyberpunk", secondary: "horror", weight: 0.4 },
        BlendPreset { name: "wasteland-fantasy", primary: "postapoc", secondary: "fantasy", weight: 0.6 },
    ];

    pub fn find(name: &str) -> Option<&'static BlendPreset> {
        Self::ALL.iter().find(|p| p.name == name)
    }
}

/// Blends genres resolved from a borrowed registry
#[derive(Debug, Clone, Copy)]
pub struct GenreBlender<'a> {
    registry: &'a Registry,
}

impl<'a> GenreBlender<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Blend `primary_id` toward `secondary_id` by `weight`
    pub fn blend(
        &self,
        primary_id: &str,
        secondary_id: &str,
        weight: f64,
        seed: i64,
    ) -> Result<BlendedGenre> {
        if !(0.0..=1.0).contains(&weight) {
            return Err(Error::InvalidWeight(weight));
        }
        let primary = self.registry.get_shared(primary_id)?;
        let secondary = self.registry.get_shared(secondary_id)?;
        if primary_id == secondary_id {
            return Err(Error::SelfBlend(primary_id.to_string()));
        }

        let mut rng = SeedState::new(seed).to_rng(BLEND_NAMESPACE);

        let themes = blend_themes(&primary.themes, &secondary.themes, weight, &mut rng);
        let pick_prefix = |rng: &mut Pcg32, p: &str, s: &str| -> String {
            let chosen = if rng.random_bool(weight) { s } else { p };
            chosen.to_string()
        };
        let entity_prefix = pick_prefix(&mut rng, primary.entity_prefix.as_str(), secondary.entity_prefix.as_str());
        let item_prefix = pick_prefix(&mut rng, primary.item_prefix.as_str(), secondary.item_prefix.as_str());
        let location_prefix =
            pick_prefix(&mut rng, primary.location_prefix.as_str(), secondary.location_prefix.as_str());

        let genre = Genre {
            id: blend_id(primary_id, secondary_id, weight),
            name: blend_name(&primary.name, &secondary.name, weight),
            description: blend_description(&primary, &secondary, weight),
            themes,
            primary_color: blend_hex(&primary.primary_color, &secondary.primary_color, weight),
            secondary_color: blend_hex(&primary.secondary_color, &secondary.secondary_color, weight),
            accent_color: blend_hex(&primary.accent_color, &secondary.accent_color, weight),
            entity_prefix,
            item_prefix,
            location_prefix,
        };

        log::info!(
            "Blended '{}' + '{}' at {:.2} (seed {}) -> '{}'",
            primary_id,
            secondary_id,
            weight,
            seed,
            genre.id
        );

        Ok(BlendedGenre {
            genre,
            primary_base: Some(primary),
            secondary_base: Some(secondary),
            blend_weight: weight,
        })
    }

    /// Blend using one of the [`BlendPreset::ALL`] recipes
    pub fn create_preset_blend(&self, preset_name: &str, seed: i64) -> Result<BlendedGenre> {
        let preset = BlendPreset::find(preset_name).ok_or_else(|| Error::preset_not_found(preset_name))?;
        self.blend(preset.primary, preset.secondary, preset.weight, seed)
    }

    pub fn preset_names() -> Vec<&'static str> {
        BlendPreset::ALL.iter().map(|p| p.name).collect()
    }
}

/// `"<low>-<high>-<percent>"` with the IDs in lexicographic order.
///
/// The weight is quantized to millionths first and flipped in that integer
/// domain when the IDs swap, so A/B at w and B/A at 1-w agree. The
/// percentage then truncates.
pub fn blend_id(primary_id: &str, secondary_id: &str, weight: f64) -> String {
    let micros = ((weight * WEIGHT_SCALE as f64).round() as i64).clamp(0, WEIGHT_SCALE);
    let (low, high, micros) = if primary_id <= secondary_id {
        (primary_id, secondary_id, micros)
    } else {
        (secondary_id, primary_id, WEIGHT_SCALE - micros)
    };
    let percent = micros / (WEIGHT_SCALE / 100);
    format!("{}-{}-{}", low, high, percent)
}

fn blend_name(primary: &str, secondary: &str, weight: f64) -> String {
    if weight < 0.5 {
        format!("{}-{}", primary, secondary)
    } else if weight > 0.5 {
        format!("{}-{}", secondary, primary)
    } else {
        format!("{}/{}", primary, secondary)
    }
}

fn blend_description(primary: &Genre, secondary: &Genre, weight: f64) -> String {
    if weight < 0.33 {
        format!(
            "A {} world with hints of {}. {}",
            primary.name, secondary.name, primary.description
        )
    } else if weight > 0.67 {
        format!(
            "A {} world with hints of {}. {}",
            secondary.name, primary.name, secondary.description
        )
    } else {
        format!(
            "An even fusion of {} and {}. {}. {}",
            primary.name,
            secondary.name,
            primary.description.trim_end_matches('.'),
            secondary.description
        )
    }
}

/// Pick themes from both sides in proportion to the weight.
///
/// Each side contributes at least one theme when both have any. Selection
/// is a seeded partial Fisher-Yates shuffle, duplicates are skipped and the
/// shortfall is topped up from the unchosen remainder.
fn blend_themes(primary: &[String], secondary: &[String], weight: f64, rng: &mut Pcg32) -> Vec<String> {
    let target = BLEND_THEME_COUNT;
    let mut primary_count = (target as f64 * (1.0 - weight)).round() as usize;
    let mut secondary_count = target - primary_count;

    if !primary.is_empty() && !secondary.is_empty() {
        if primary_count == 0 {
            primary_count = 1;
            secondary_count -= 1;
        } else if secondary_count == 0 {
            secondary_count = 1;
            primary_count -= 1;
        }
    }

    let primary_pool = partial_shuffle(primary, primary_count, rng);
    let secondary_pool = partial_shuffle(secondary, secondary_count, rng);
    let (primary_pick, primary_rest) = primary_pool.split_at(primary_count.min(primary.len()));
    let (secondary_pick, secondary_rest) =
        secondary_pool.split_at(secondary_count.min(secondary.len()));

    let mut themes: Vec<String> = Vec::with_capacity(target);
    let push = |themes: &mut Vec<String>, theme: &String| {
        if themes.len() < target && !themes.contains(theme) {
            themes.push(theme.clone());
        }
    };

    for theme in primary_pick.iter().chain(secondary_pick) {
        push(&mut themes, theme);
    }

    let leftovers: Vec<&String> = if weight <= 0.5 {
        primary_rest.iter().chain(secondary_rest).collect()
    } else {
        secondary_rest.iter().chain(primary_rest).collect()
    };
    for theme in leftovers {
        push(&mut themes, theme);
    }

    themes
}

/// Shuffle the first `count` slots of a copy of `items`
fn partial_shuffle(items: &[String], count: usize, rng: &mut Pcg32) -> Vec<String> {
    let mut pool = items.to_vec();
    let n = pool.len();
    for i in 0..count.min(n) {
        let j = rng.random_range(i..n);
        pool.swap(i, j);
    }
    pool
}

fn blend_hex(a: &str, b: &str, weight: f64) -> String {
    parse_or_black(a).lerp(&parse_or_black(b), weight).to_hex()
}

fn parse_or_black(hex: &str) -> Rgba {
    Rgba::from_hex(hex).unwrap_or_else(|| {
        log::warn!("Unparsable genre color '{}', blending as black", hex);
        Rgba::BLACK
    })
}
