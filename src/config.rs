//! Preview configuration
//!
//! A JSON description of one generation run, used by the preview binary.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::genre::{BlendedGenre, GenreBlender, Registry};
use crate::palette::{GenerationOptions, Palette, PaletteGenerator};

/// Optional second genre to blend the base genre with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlendRequest {
    /// One of the named presets (ignores the base genre)
    Preset { preset: String },
    /// Blend the base genre toward `secondary` by `weight`
    Mix { secondary: String, weight: f64 },
}

/// One palette generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub genre: String,
    pub seed: i64,
    pub options: GenerationOptions,
    pub blend: Option<BlendRequest>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            genre: "fantasy".to_string(),
            seed: 0,
            options: GenerationOptions::default(),
            blend: None,
        }
    }
}

/// What a preview run produced
#[derive(Debug, Clone, Serialize)]
pub struct PreviewOutput {
    pub genre_id: String,
    pub blend: Option<BlendedGenre>,
    pub palette: Palette,
}

impl PreviewConfig {
    /// Parse from a JSON string; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded preview config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.genre.trim().is_empty() {
            return Err(Error::config("genre cannot be empty"));
        }
        if let Some(BlendRequest::Mix { weight, .. }) = &self.blend {
            if !(0.0..=1.0).contains(weight) {
                return Err(Error::InvalidWeight(*weight));
            }
        }
        self.options.validate()
    }

    /// Resolve the (possibly blended) genre and generate its palette
    pub fn run(&self, registry: &Registry) -> Result<PreviewOutput> {
        self.validate()?;
        let blender = GenreBlender::new(registry);
        let generator = PaletteGenerator::new(registry);

        let blend = match &self.blend {
            None => None,
            Some(BlendRequest::Preset { preset }) => Some(blender.create_preset_blend(preset, self.seed)?),
            Some(BlendRequest::Mix { secondary, weight }) => {
                Some(blender.blend(&self.genre, secondary, *weight, self.seed)?)
            }
        };

        let palette = match &blend {
            Some(blended) => generator.generate_for_genre(&blended.genre, self.seed, &self.options)?,
            None => generator.generate_with_options(&self.genre, self.seed, &self.options)?,
        };

        Ok(PreviewOutput {
            genre_id: blend
                .as_ref()
                .map(|b| b.genre.id.clone())
                .unwrap_or_else(|| self.genre.clone()),
            blend,
            palette,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genre::default_registry;
    use crate::palette::{Mood, Rarity};

    #[test]
    fn test_defaults_from_empty_json() {
        let config = PreviewConfig::from_json("{}").unwrap();
        assert_eq!(config, PreviewConfig::default());
        assert_eq!(config.genre, "fantasy");
    }

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "genre": "scifi",
            "seed": -42,
            "options": { "mood": "dark", "rarity": "epic", "min_colors": 20 },
            "blend": { "secondary": "horror", "weight": 0.25 }
        }"#;
        let config = PreviewConfig::from_json(json).unwrap();
        assert_eq!(config.seed, -42);
        assert_eq!(config.options.mood, Mood::Dark);
        assert_eq!(config.options.rarity, Rarity::Epic);
        assert_eq!(
            config.blend,
            Some(BlendRequest::Mix {
                secondary: "horror".into(),
                weight: 0.25
            })
        );

        let output = config.run(&default_registry()).unwrap();
        assert_eq!(output.genre_id, "horror-scifi-75");
        assert_eq!(output.palette.colors.len(), 20);
    }

    #[test]
    fn test_preset_config() {
        let config = PreviewConfig::from_json(r#"{"blend": {"preset": "cyber-horror"}, "seed": 3}"#).unwrap();
        let output = config.run(&default_registry()).unwrap();
        assert_eq!(output.genre_id, "cyberpunk-horror-40");
        assert!(output.blend.unwrap().is_blended());
    }

    #[test]
    fn test_invalid_configs() {
        assert!(matches!(
            PreviewConfig::from_json(r#"{"genre": ""}"#),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            PreviewConfig::from_json(r#"{"blend": {"secondary": "scifi", "weight": 2.0}}"#),
            Err(Error::InvalidWeight(_))
        ));
        assert!(matches!(PreviewConfig::from_json("not json"), Err(Error::Json(_))));
        assert!(matches!(
            PreviewConfig::load("/definitely/not/here.json"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = PreviewConfig {
            genre: "horror".into(),
            seed: 7,
            blend: Some(BlendRequest::Preset {
                preset: "dark-fantasy".into(),
            }),
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(PreviewConfig::from_json(&json).unwrap(), config);
    }
}
