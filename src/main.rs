//! palette-preview: print a generated genre palette as JSON

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use genre_palette::{
    BlendRequest, GenerationOptions, Harmony, Mood, PreviewConfig, Rarity, Rgba, default_registry,
};
use genre_palette::config::PreviewOutput;
use genre_palette::genre::GenreBlender;
use serde_json::{Map, Value, json};

/// Generate a deterministic palette for a genre (or a blend of two)
#[derive(Debug, Parser)]
#[command(name = "palette-preview", version)]
struct Cli {
    /// JSON config file; command-line flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Genre ID (fantasy, scifi, horror, cyberpunk, postapoc)
    #[arg(short, long)]
    genre: Option<String>,

    #[arg(short, long)]
    seed: Option<i64>,

    #[arg(long)]
    harmony: Option<Harmony>,

    #[arg(long)]
    mood: Option<Mood>,

    #[arg(long)]
    rarity: Option<Rarity>,

    /// Minimum number of indexed colors (at least 12 are produced)
    #[arg(long)]
    min_colors: Option<usize>,

    /// Blend the genre toward this one
    #[arg(long, requires = "weight", conflicts_with = "preset")]
    blend_with: Option<String>,

    /// Blend weight in [0, 1]; 0 keeps the base genre
    #[arg(long, requires = "blend_with")]
    weight: Option<f64>,

    /// Named blend preset
    #[arg(long)]
    preset: Option<String>,

    /// List genres and presets, then exit
    #[arg(long)]
    list: bool,
}

impl Cli {
    fn into_config(self) -> genre_palette::Result<PreviewConfig> {
        let mut config = match &self.config {
            Some(path) => PreviewConfig::load(path)?,
            None => PreviewConfig::default(),
        };

        if let Some(genre) = self.genre {
            config.genre = genre;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }

        let options: &mut GenerationOptions = &mut config.options;
        if let Some(harmony) = self.harmony {
            options.harmony = harmony;
        }
        if let Some(mood) = self.mood {
            options.mood = mood;
        }
        if let Some(rarity) = self.rarity {
            options.rarity = rarity;
        }
        if let Some(min_colors) = self.min_colors {
            options.min_colors = min_colors;
        }

        if let Some(preset) = self.preset {
            config.blend = Some(BlendRequest::Preset { preset });
        } else if let (Some(secondary), Some(weight)) = (self.blend_with, self.weight) {
            config.blend = Some(BlendRequest::Mix { secondary, weight });
        }

        Ok(config)
    }
}

fn hex_list(colors: &[Rgba]) -> Value {
    Value::Array(colors.iter().map(|c| Value::String(c.to_hex())).collect())
}

fn render(output: &PreviewOutput) -> Value {
    let mut named = Map::new();
    for (name, color) in output.palette.named_colors() {
        named.insert(name.to_string(), Value::String(color.to_hex()));
    }

    let blend = output.blend.as_ref().map(|b| {
        json!({
            "name": b.genre.name,
            "description": b.genre.description,
            "themes": b.genre.themes,
            "colors": b.genre.color_palette(),
            "weight": b.blend_weight,
        })
    });

    json!({
        "genre": output.genre_id,
        "blend": blend,
        "named": named,
        "colors": hex_list(&output.palette.colors),
    })
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let registry = default_registry();

    if cli.list {
        for genre in registry.all() {
            println!("{:<10} {} - {}", genre.id, genre.name, genre.description);
        }
        for preset in GenreBlender::preset_names() {
            println!("preset: {}", preset);
        }
        return ExitCode::SUCCESS;
    }

    let result = cli.into_config().and_then(|config| {
        log::info!("Generating palette for '{}' with seed {}", config.genre, config.seed);
        config.run(&registry)
    });

    match result {
        Ok(output) => match serde_json::to_string_pretty(&render(&output)) {
            Ok(text) => {
                println!("{}", text);
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("Failed to render palette: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_requires_blend_partner() {
        let err = Cli::try_parse_from(["palette-preview", "--weight", "0.4"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_blend_partner_requires_weight() {
        assert!(Cli::try_parse_from(["palette-preview", "--blend-with", "horror"]).is_err());
    }

    #[test]
    fn test_blend_flags_build_mix_request() {
        let cli = Cli::try_parse_from([
            "palette-preview",
            "--genre",
            "scifi",
            "--blend-with",
            "horror",
            "--weight",
            "0.4",
        ])
        .unwrap();
        let config = cli.into_config().unwrap();
        assert_eq!(config.genre, "scifi");
        assert_eq!(
            config.blend,
            Some(BlendRequest::Mix {
                secondary: "horror".into(),
                weight: 0.4
            })
        );
    }
}
