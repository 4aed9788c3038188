//! Palette synthesis
//!
//! genre + seed + options → scheme → mood/rarity → harmony hues → jittered
//! HSL colors → RGBA. One RNG per call, passed down by `&mut`.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::options::GenerationOptions;
use super::scheme::ColorScheme;
use crate::color::{Hsl, Rgba};
use crate::consts::{DANGER_HSL, INFO_HSL, SUCCESS_HSL, WARNING_HSL};
use crate::error::Result;
use crate::genre::{Genre, Registry};
use crate::rng::{PALETTE_NAMESPACE, SeedState};

/// A complete, immutable set of theme colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub background: Rgba,
    pub text: Rgba,
    pub accent1: Rgba,
    pub accent2: Rgba,
    pub accent3: Rgba,
    pub highlight1: Rgba,
    pub highlight2: Rgba,
    pub shadow1: Rgba,
    pub shadow2: Rgba,
    pub neutral: Rgba,
    pub danger: Rgba,
    pub success: Rgba,
    pub warning: Rgba,
    pub info: Rgba,
    /// Indexed colors cycling through the harmony hues
    pub colors: Vec<Rgba>,
}

impl Palette {
    /// The named colors in declaration order
    pub fn named_colors(&self) -> [(&'static str, Rgba); 16] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("background", self.background),
            ("text", self.text),
            ("accent1", self.accent1),
            ("accent2", self.accent2),
            ("accent3", self.accent3),
            ("highlight1", self.highlight1),
            ("highlight2", self.highlight2),
            ("shadow1", self.shadow1),
            ("shadow2", self.shadow2),
            ("neutral", self.neutral),
            ("danger", self.danger),
            ("success", self.success),
            ("warning", self.warning),
            ("info", self.info),
        ]
    }
}

/// Generates palettes for genres held in a borrowed registry
#[derive(Debug, Clone, Copy)]
pub struct PaletteGenerator<'a> {
    registry: &'a Registry,
}

impl<'a> PaletteGenerator<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Generate with [`GenerationOptions::default`]
    pub fn generate(&self, genre_id: &str, seed: i64) -> Result<Palette> {
        self.generate_with_options(genre_id, seed, &GenerationOptions::default())
    }

    pub fn generate_with_options(
        &self,
        genre_id: &str,
        seed: i64,
        options: &GenerationOptions,
    ) -> Result<Palette> {
        let genre = self.registry.get(genre_id)?;
        self.generate_for_genre(genre, seed, options)
    }

    /// Generate for a genre value that need not be registered (e.g. a fresh blend)
    pub fn generate_for_genre(
        &self,
        genre: &Genre,
        seed: i64,
        options: &GenerationOptions,
    ) -> Result<Palette> {
        options.validate()?;

        let scheme = ColorScheme::for_genre(&genre.id).transformed(options.mood, options.rarity);
        let hues = scheme.harmony_hues(options.harmony);
        let mut rng = SeedState::new(seed).to_rng(PALETTE_NAMESPACE);

        let palette = build_palette(&scheme, &hues, options.color_count(), &mut rng);

        log::debug!(
            "Generated palette for '{}' (seed {}, {}/{}/{}, {} colors)",
            genre.id,
            seed,
            options.harmony.as_str(),
            options.mood.as_str(),
            options.rarity.as_str(),
            palette.colors.len()
        );

        Ok(palette)
    }
}

/// Base value plus a uniform offset in `[-variation, variation]`
fn jitter(rng: &mut Pcg32, base: f64, variation: f64) -> f64 {
    if variation <= 0.0 {
        return base;
    }
    base + rng.random_range(-variation..=variation)
}

/// Max hue jitter for a scheme, in degrees either side of the target hue
fn hue_jitter(scheme: &ColorScheme) -> f64 {
    scheme.hue_variation * 0.25
}

/// One HSL color near `hue` using the scheme's variation bounds
fn vary_hsl(rng: &mut Pcg32, scheme: &ColorScheme, hue: f64, saturation: f64, lightness: f64) -> Hsl {
    let h = jitter(rng, hue, hue_jitter(scheme));
    let s = jitter(rng, saturation, scheme.saturation_variation);
    let l = jitter(rng, lightness, scheme.lightness_variation);
    Hsl::new(h, s, l)
}

fn vary(rng: &mut Pcg32, scheme: &ColorScheme, hue: f64, saturation: f64, lightness: f64) -> Rgba {
    vary_hsl(rng, scheme, hue, saturation, lightness).to_rgba()
}

/// Indexed colors: entry `i` sits near `hues[i % hues.len()]`
fn indexed_hsl(scheme: &ColorScheme, hues: &[f64], count: usize, rng: &mut Pcg32) -> Vec<Hsl> {
    let (s, l) = (scheme.saturation, scheme.lightness);
    (0..count)
        .map(|i| {
            // Each pass through the hue set steps lightness a little
            let round = (i / hues.len()) as f64;
            let lightness = l + (round % 3.0 - 1.0) * 0.1;
            vary_hsl(rng, scheme, hues[i % hues.len()], s, lightness)
        })
        .collect()
}

fn fixed((h, s, l): (f64, f64, f64)) -> Rgba {
    Hsl::new(h, s, l).to_rgba()
}

fn build_palette(scheme: &ColorScheme, hues: &[f64], count: usize, rng: &mut Pcg32) -> Palette {
    let hue_at = |i: usize| hues[i % hues.len()];
    let (s, l) = (scheme.saturation, scheme.lightness);

    let primary = vary(rng, scheme, hue_at(0), s, l);
    let secondary = vary(rng, scheme, hue_at(1), s * 0.9, l);

    let background = Hsl::new(
        jitter(rng, scheme.base_hue, scheme.hue_variation * 0.1),
        s * 0.3,
        (l * 0.25).min(0.15),
    )
    .to_rgba();
    let text = Hsl::new(scheme.base_hue, s * 0.1, 0.9).to_rgba();

    let accent1 = vary(rng, scheme, hue_at(1), s * 1.1, l);
    let accent2 = vary(rng, scheme, hue_at(2), s * 1.1, l);
    let accent3 = vary(rng, scheme, hue_at(3), s, l * 1.1);

    let highlight1 = vary(rng, scheme, hue_at(0), s * 0.8, (l + 0.25).min(0.95));
    let highlight2 = vary(rng, scheme, hue_at(1), s * 0.8, (l + 0.3).min(0.95));

    let shadow1 = vary(rng, scheme, hue_at(0), s * 0.7, l * 0.4);
    let shadow2 = vary(rng, scheme, hue_at(1), s * 0.7, l * 0.3);

    let neutral = vary(rng, scheme, scheme.base_hue, s * 0.1, 0.5);

    let colors = indexed_hsl(scheme, hues, count, rng)
        .iter()
        .map(Hsl::to_rgba)
        .collect();

    Palette {
        primary,
        secondary,
        background,
        text,
        accent1,
        accent2,
        accent3,
        highlight1,
        highlight2,
        shadow1,
        shadow2,
        neutral,
        danger: fixed(DANGER_HSL),
        success: fixed(SUCCESS_HSL),
        warning: fixed(WARNING_HSL),
        info: fixed(INFO_HSL),
        colors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::genre::{GenreBlender, default_registry};
    use crate::palette::options::{Harmony, Mood, Rarity};

    #[test]
    fn test_generate_is_deterministic() {
        let registry = default_registry();
        let generator = PaletteGenerator::new(&registry);
        let a = generator.generate("horror", 12345).unwrap();
        let b = generator.generate("horror", 12345).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.primary, b.primary);
    }

    #[test]
    fn test_different_seeds_differ() {
        let registry = default_registry();
        let generator = PaletteGenerator::new(&registry);
        let a = generator.generate("horror", 12345).unwrap();
        let b = generator.generate("horror", 54321).unwrap();
        assert!(a.named_colors().iter().zip(b.named_colors().iter()).any(|(x, y)| x.1 != y.1));
    }

    #[test]
    fn test_unknown_genre() {
        let registry = default_registry();
        let generator = PaletteGenerator::new(&registry);
        assert!(generator.generate("nope", 1).unwrap_err().is_not_found());
    }

    #[test]
    fn test_color_count() {
        let registry = default_registry();
        let generator = PaletteGenerator::new(&registry);
        assert_eq!(generator.generate("scifi", 3).unwrap().colors.len(), 12);

        let opts = GenerationOptions {
            min_colors: 24,
            ..Default::default()
        };
        assert!(generator.generate_with_options("scifi", 3, &opts).unwrap().colors.len() >= 24);

        let opts = GenerationOptions {
            min_colors: 1,
            ..Default::default()
        };
        assert_eq!(generator.generate_with_options("scifi", 3, &opts).unwrap().colors.len(), 12);

        let opts = GenerationOptions {
            min_colors: 10_000,
            ..Default::default()
        };
        assert!(matches!(
            generator.generate_with_options("scifi", 3, &opts),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_semantic_colors_ignore_genre() {
        let registry = default_registry();
        let generator = PaletteGenerator::new(&registry);
        let opts = GenerationOptions {
            harmony: Harmony::Triadic,
            mood: Mood::Dark,
            rarity: Rarity::Legendary,
            min_colors: 12,
        };
        let a = generator.generate("fantasy", 1).unwrap();
        let b = generator.generate_with_options("cyberpunk", 99, &opts).unwrap();
        assert_eq!(a.danger, b.danger);
        assert_eq!(a.success, b.success);
        assert_eq!(a.warning, b.warning);
        assert_eq!(a.info, b.info);
        assert!(a.danger.r > a.danger.g && a.danger.r > a.danger.b);
        assert!(a.success.g > a.success.r && a.success.g > a.success.b);
        assert!(a.info.b > a.info.r);
    }

    #[test]
    fn test_options_change_output() {
        let registry = default_registry();
        let generator = PaletteGenerator::new(&registry);
        let base = generator.generate("scifi", 5).unwrap();
        let pastel = generator
            .generate_with_options(
                "scifi",
                5,
                &GenerationOptions {
                    mood: Mood::Pastel,
                    ..Default::default()
                },
            )
            .unwrap();
        assert_ne!(base.primary, pastel.primary);
    }

    #[test]
    fn test_all_colors_opaque() {
        let registry = default_registry();
        let generator = PaletteGenerator::new(&registry);
        for harmony in Harmony::ALL {
            let opts = GenerationOptions {
                harmony,
                ..Default::default()
            };
            let palette = generator.generate_with_options("postapoc", 77, &opts).unwrap();
            assert!(palette.named_colors().iter().all(|(_, c)| c.a == 255));
            assert!(palette.colors.iter().all(|c| c.a == 255));
        }
    }

    fn hue_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).abs() % 360.0;
        d.min(360.0 - d)
    }

    #[test]
    fn test_monochromatic_colors_stay_near_base_hue() {
        let opts = GenerationOptions {
            harmony: Harmony::Monochromatic,
            rarity: Rarity::Legendary,
            min_colors: 48,
            ..Default::default()
        };
        for genre in ["fantasy", "cyberpunk", "horror"] {
            let scheme = ColorScheme::for_genre(genre).transformed(opts.mood, opts.rarity);
            let hues = scheme.harmony_hues(opts.harmony);
            let mut rng = SeedState::new(2024).to_rng(PALETTE_NAMESPACE);
            let colors = indexed_hsl(&scheme, &hues, opts.color_count(), &mut rng);
            assert_eq!(colors.len(), 48);
            for hsl in &colors {
                assert!(hue_distance(hsl.h, scheme.base_hue) <= hue_jitter(&scheme) + 1e-9);
            }
        }
    }

    #[test]
    fn test_complementary_colors_alternate_hues() {
        let scheme = ColorScheme::for_genre("scifi").transformed(Mood::Normal, Rarity::Common);
        let hues = scheme.harmony_hues(Harmony::Complementary);
        let opposite = crate::normalize_hue(scheme.base_hue + 180.0);
        let mut rng = SeedState::new(7).to_rng(PALETTE_NAMESPACE);
        let colors = indexed_hsl(&scheme, &hues, 12, &mut rng);
        let bound = hue_jitter(&scheme) + 1e-9;
        for (i, hsl) in colors.iter().enumerate() {
            let target = if i % 2 == 0 { scheme.base_hue } else { opposite };
            assert!(hue_distance(hsl.h, target) <= bound, "entry {} hue {} not near {}", i, hsl.h, target);
        }
    }

    #[test]
    fn test_blended_genre_uses_fallback_scheme() {
        let registry = default_registry();
        let blended = GenreBlender::new(&registry)
            .create_preset_blend("dark-fantasy", 4)
            .unwrap();
        let generator = PaletteGenerator::new(&registry);
        let opts = GenerationOptions::default();

        let from_blend = generator.generate_for_genre(&blended.genre, 8, &opts).unwrap();
        let fantasy = generator.generate("fantasy", 8).unwrap();
        assert_eq!(from_blend, fantasy);
    }
}
