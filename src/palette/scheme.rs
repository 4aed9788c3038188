//! Per-genre HSL schemes and the mood/rarity transforms applied to them

use serde::{Deserialize, Serialize};

use super::options::{Harmony, Mood, Rarity};
use crate::color::clamp_unit;
use crate::normalize_hue;

/// HSL generation parameters for one genre
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Degrees, `[0, 360)`
    pub base_hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    /// Max hue jitter in degrees (either direction)
    pub hue_variation: f64,
    pub saturation_variation: f64,
    pub lightness_variation: f64,
}

impl ColorScheme {
    const FANTASY: ColorScheme = ColorScheme {
        base_hue: 30.0,
        saturation: 0.6,
        lightness: 0.5,
        hue_variation: 60.0,
        saturation_variation: 0.2,
        lightness_variation: 0.2,
    };

    const SCIFI: ColorScheme = ColorScheme {
        base_hue: 210.0,
        saturation: 0.7,
        lightness: 0.5,
        hue_variation: 30.0,
        saturation_variation: 0.15,
        lightness_variation: 0.2,
    };

    const HORROR: ColorScheme = ColorScheme {
        base_hue: 0.0,
        saturation: 0.4,
        lightness: 0.3,
        hue_variation: 20.0,
        saturation_variation: 0.15,
        lightness_variation: 0.15,
    };

    const CYBERPUNK: ColorScheme = ColorScheme {
        base_hue: 300.0,
        saturation: 0.8,
        lightness: 0.5,
        hue_variation: 60.0,
        saturation_variation: 0.1,
        lightness_variation: 0.2,
    };

    const POSTAPOC: ColorScheme = ColorScheme {
        base_hue: 40.0,
        saturation: 0.3,
        lightness: 0.4,
        hue_variation: 20.0,
        saturation_variation: 0.1,
        lightness_variation: 0.15,
    };

    /// Base scheme for a genre ID. Unknown IDs (blends, custom genres)
    /// fall back to the fantasy scheme.
    pub fn for_genre(genre_id: &str) -> Self {
        match genre_id {
            "fantasy" => Self::FANTASY,
            "scifi" => Self::SCIFI,
            "horror" => Self::HORROR,
            "cyberpunk" => Self::CYBERPUNK,
            "postapoc" => Self::POSTAPOC,
            _ => Self::FANTASY,
        }
    }

    /// Adjust lightness/saturation for a mood. Result is clamped.
    pub fn apply_mood(mut self, mood: Mood) -> Self {
        match mood {
            Mood::Normal => {}
            Mood::Bright => {
                self.lightness = (self.lightness * 1.3).min(0.9);
                self.saturation *= 1.1;
            }
            Mood::Dark => {
                self.lightness = (self.lightness * 0.6).max(0.1);
                self.saturation *= 0.8;
            }
            Mood::Saturated => self.saturation *= 1.4,
            Mood::Muted => self.saturation *= 0.5,
            Mood::Vibrant => {
                self.saturation *= 1.5;
                self.lightness = (self.lightness * 1.2).min(0.7);
            }
            Mood::Pastel => {
                self.lightness = (self.lightness * 1.5).clamp(0.7, 0.95);
                self.saturation = (self.saturation * 0.4).min(0.5);
            }
        }
        self.clamped()
    }

    /// Adjust saturation/lightness/variation for a rarity tier. Result is clamped.
    pub fn apply_rarity(mut self, rarity: Rarity) -> Self {
        match rarity {
            Rarity::Common => self.saturation *= 0.8,
            Rarity::Uncommon => self.lightness *= 1.05,
            Rarity::Rare => {
                self.saturation *= 1.3;
                self.lightness *= 1.1;
            }
            Rarity::Epic => {
                self.saturation *= 1.5;
                self.lightness = (self.lightness * 1.15).min(0.85);
                self.lightness_variation *= 1.3;
            }
            Rarity::Legendary => {
                self.saturation *= 1.7;
                self.lightness = (self.lightness * 1.2).min(0.8);
                self.hue_variation *= 1.5;
                self.saturation_variation *= 1.4;
                self.lightness_variation *= 1.5;
            }
        }
        self.clamped()
    }

    /// Mood first, then rarity
    pub fn transformed(self, mood: Mood, rarity: Rarity) -> Self {
        self.apply_mood(mood).apply_rarity(rarity)
    }

    /// Hues for a harmony rule, each normalized to `[0, 360)`
    pub fn harmony_hues(&self, harmony: Harmony) -> Vec<f64> {
        harmony
            .offsets()
            .iter()
            .map(|offset| normalize_hue(self.base_hue + offset))
            .collect()
    }

    fn clamped(self) -> Self {
        Self {
            base_hue: normalize_hue(self.base_hue),
            saturation: clamp_unit(self.saturation),
            lightness: clamp_unit(self.lightness),
            hue_variation: self.hue_variation.clamp(0.0, 180.0),
            saturation_variation: clamp_unit(self.saturation_variation),
            lightness_variation: clamp_unit(self.lightness_variation),
        }
    }

    /// True when every field is inside its valid range
    pub fn is_valid(&self) -> bool {
        (0.0..360.0).contains(&self.base_hue)
            && (0.0..=1.0).contains(&self.saturation)
            && (0.0..=1.0).contains(&self.lightness)
            && (0.0..=180.0).contains(&self.hue_variation)
            && (0.0..=1.0).contains(&self.saturation_variation)
            && (0.0..=1.0).contains(&self.lightness_variation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_unknown_genre_uses_fantasy() {
        assert_eq!(ColorScheme::for_genre("fantasy-scifi-40"), ColorScheme::for_genre("fantasy"));
        assert_ne!(ColorScheme::for_genre("scifi"), ColorScheme::for_genre("fantasy"));
    }

    #[test]
    fn test_all_transform_combinations_stay_valid() {
        for id in ["fantasy", "scifi", "horror", "cyberpunk", "postapoc", "other"] {
            for mood in Mood::ALL {
                for rarity in Rarity::ALL {
                    let scheme = ColorScheme::for_genre(id).transformed(mood, rarity);
                    assert!(
                        scheme.is_valid(),
                        "{} / {} / {} produced {:?}",
                        id,
                        mood.as_str(),
                        rarity.as_str(),
                        scheme
                    );
                }
            }
        }
    }

    #[test]
    fn test_mood_table() {
        let base = ColorScheme::for_genre("scifi"); // s=0.7, l=0.5
        assert_eq!(base.apply_mood(Mood::Normal), base);

        let bright = base.apply_mood(Mood::Bright);
        assert!((bright.lightness - 0.65).abs() < EPS);
        assert!((bright.saturation - 0.77).abs() < EPS);

        let dark = base.apply_mood(Mood::Dark);
        assert!((dark.lightness - 0.3).abs() < EPS);
        assert!((dark.saturation - 0.56).abs() < EPS);

        assert!((base.apply_mood(Mood::Saturated).saturation - 0.98).abs() < EPS);
        assert!((base.apply_mood(Mood::Muted).saturation - 0.35).abs() < EPS);

        let vibrant = base.apply_mood(Mood::Vibrant);
        assert_eq!(vibrant.saturation, 1.0);
        assert!((vibrant.lightness - 0.6).abs() < EPS);

        let pastel = base.apply_mood(Mood::Pastel);
        assert!((pastel.lightness - 0.75).abs() < EPS);
        assert!((pastel.saturation - 0.28).abs() < EPS);
    }

    #[test]
    fn test_mood_floors_and_ceilings() {
        let horror = ColorScheme::for_genre("horror"); // s=0.4, l=0.3
        assert!((horror.apply_mood(Mood::Pastel).lightness - 0.7).abs() < EPS);
        let mut dim = horror;
        dim.lightness = 0.05;
        assert!((dim.apply_mood(Mood::Dark).lightness - 0.1).abs() < EPS);
        let mut light = horror;
        light.lightness = 0.8;
        assert!((light.apply_mood(Mood::Bright).lightness - 0.9).abs() < EPS);
    }

    #[test]
    fn test_rarity_table() {
        let base = ColorScheme::for_genre("fantasy"); // s=0.6, l=0.5
        assert!((base.apply_rarity(Rarity::Common).saturation - 0.48).abs() < EPS);
        assert!((base.apply_rarity(Rarity::Uncommon).lightness - 0.525).abs() < EPS);

        let rare = base.apply_rarity(Rarity::Rare);
        assert!((rare.saturation - 0.78).abs() < EPS);
        assert!((rare.lightness - 0.55).abs() < EPS);

        let epic = base.apply_rarity(Rarity::Epic);
        assert!((epic.saturation - 0.9).abs() < EPS);
        assert!((epic.lightness - 0.575).abs() < EPS);
        assert!((epic.lightness_variation - 0.26).abs() < EPS);

        let legendary = base.apply_rarity(Rarity::Legendary);
        assert_eq!(legendary.saturation, 1.0);
        assert!((legendary.lightness - 0.6).abs() < EPS);
        assert!((legendary.hue_variation - 90.0).abs() < EPS);
        assert!((legendary.saturation_variation - 0.28).abs() < EPS);
        assert!((legendary.lightness_variation - 0.3).abs() < EPS);
    }

    #[test]
    fn test_mood_applies_before_rarity() {
        let fantasy = ColorScheme::for_genre("fantasy");
        let ordered = fantasy.transformed(Mood::Pastel, Rarity::Legendary);
        assert_eq!(ordered, fantasy.apply_mood(Mood::Pastel).apply_rarity(Rarity::Legendary));
        assert_ne!(ordered, fantasy.apply_rarity(Rarity::Legendary).apply_mood(Mood::Pastel));

        // Pastel lifts lightness to 0.75, then Legendary caps it at 0.8
        assert!((ordered.lightness - 0.8).abs() < EPS);
        assert!((ordered.saturation - 0.408).abs() < EPS);
    }

    #[test]
    fn test_harmony_hues_normalized() {
        let mut scheme = ColorScheme::for_genre("cyberpunk"); // 300
        assert_eq!(scheme.harmony_hues(Harmony::Complementary), vec![300.0, 120.0]);
        assert_eq!(scheme.harmony_hues(Harmony::Tetradic), vec![300.0, 30.0, 120.0, 210.0]);

        scheme.base_hue = 10.0;
        let analogous = scheme.harmony_hues(Harmony::Analogous);
        assert_eq!(analogous, vec![10.0, 40.0, 340.0]);

        for harmony in Harmony::ALL {
            let hues = scheme.harmony_hues(harmony);
            assert_eq!(hues.len(), harmony.offsets().len());
            assert!(hues.iter().all(|h| (0.0..360.0).contains(h)));
        }
    }
}
