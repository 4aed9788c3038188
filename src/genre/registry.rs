//! Genre registry and the built-in genre catalog
//!
//! Populate first (`&mut self`), then share for reads (`&self`). The borrow
//! checker enforces the single-writer-then-many-readers pattern.

use std::collections::HashMap;
use std::sync::Arc;

use super::blend::BlendedGenre;
use super::types::Genre;
use crate::error::{Error, Result};

/// In-memory catalog of genres keyed by ID
#[derive(Debug, Clone, Default)]
pub struct Registry {
    genres: HashMap<String, Arc<Genre>>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            genres: HashMap::new(),
        }
    }

    /// Create a registry holding the five built-in genres.
    ///
    /// Every call returns a fresh instance; there is no shared global.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for genre in builtin_genres() {
            // Built-ins are valid and unique by construction (see tests)
            let _ = registry.register(genre);
        }
        log::info!("Default genre registry ready ({} genres)", registry.count());
        registry
    }

    /// Validate and add a genre. Existing genres are never replaced.
    pub fn register(&mut self, genre: Genre) -> Result<()> {
        genre.validate()?;
        if self.genres.contains_key(&genre.id) {
            return Err(Error::DuplicateGenre(genre.id));
        }
        log::debug!("Registered genre '{}'", genre.id);
        self.genres.insert(genre.id.clone(), Arc::new(genre));
        Ok(())
    }

    /// Register the genre produced by a blend so it can be looked up by ID
    pub fn register_blended(&mut self, blended: &BlendedGenre) -> Result<()> {
        self.register(blended.genre.clone())
    }

    /// Look up a genre by ID
    pub fn get(&self, id: &str) -> Result<&Genre> {
        self.genres
            .get(id)
            .map(|g| g.as_ref())
            .ok_or_else(|| Error::genre_not_found(id))
    }

    /// Shared handle to a registered genre
    pub(crate) fn get_shared(&self, id: &str) -> Result<Arc<Genre>> {
        self.genres
            .get(id)
            .cloned()
            .ok_or_else(|| Error::genre_not_found(id))
    }

    pub fn has(&self, id: &str) -> bool {
        self.genres.contains_key(id)
    }

    /// All genres, sorted by ID
    pub fn all(&self) -> Vec<&Genre> {
        let mut all: Vec<&Genre> = self.genres.values().map(|g| g.as_ref()).collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    /// All genre IDs, sorted
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.genres.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn count(&self) -> usize {
        self.genres.len()
    }
}

/// Fresh registry pre-populated with the built-in genres
pub fn default_registry() -> Registry {
    Registry::with_defaults()
}

#[allow(clippy::too_many_arguments)]
fn genre(
    id: &str,
    name: &str,
    description: &str,
    themes: [&str; 6],
    colors: [&str; 3],
    entity_prefix: &str,
    item_prefix: &str,
    location_prefix: &str,
) -> Genre {
    Genre {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        themes: themes.iter().map(|t| t.to_string()).collect(),
        primary_color: colors[0].into(),
        secondary_color: colors[1].into(),
        accent_color: colors[2].into(),
        entity_prefix: entity_prefix.into(),
        item_prefix: item_prefix.into(),
        location_prefix: location_prefix.into(),
    }
}

/// The five genres every default registry ships with
pub fn builtin_genres() -> Vec<Genre> {
    vec![
        genre(
            "fantasy",
            "Fantasy",
            "Traditional fantasy with magic, dragons, and medieval settings",
            ["medieval", "magic", "dragons", "knights", "wizards", "dungeons"],
            ["#8B4513", "#DAA520", "#4169E1"],
            "Ancient",
            "Enchanted",
            "Kingdom",
        ),
        genre(
            "scifi",
            "Sci-Fi",
            "Science fiction with technology, space travel, and aliens",
            ["technology", "space", "aliens", "robots", "lasers", "starships"],
            ["#00CED1", "#4682B4", "#00FF00"],
            "Cyber",
            "Quantum",
            "Station",
        ),
        genre(
            "horror",
            "Horror",
            "Dark and terrifying world filled with undead and cursed places",
            ["dark", "undead", "cursed", "haunted", "twisted", "nightmare"],
            ["#8B0000", "#2F4F4F", "#9400D3"],
            "Cursed",
            "Bloodstained",
            "Abandoned",
        ),
        genre(
            "cyberpunk",
            "Cyberpunk",
            "High-tech dystopia with megacorporations and neon-lit streets",
            ["neon", "corporate", "hackers", "augmented", "urban", "dystopian"],
            ["#FF00FF", "#00FFFF", "#FFFF00"],
            "Augmented",
            "Neural",
            "District",
        ),
        genre(
            "postapoc",
            "Post-Apocalyptic",
            "Survival in the ruins of a collapsed civilization",
            ["wasteland", "survival", "ruins", "mutants", "scavenging", "radiation"],
            ["#8B7355", "#556B2F", "#CD853F"],
            "Scavenged",
            "Salvaged",
            "Ruins",
        ),
    ]
}
