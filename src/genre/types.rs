//! Genre definitions

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A named theme that drives procedural content.
///
/// Immutable once registered. Colors are `#RRGGBB` hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    /// Unique slug, e.g. `"fantasy"`
    pub id: String,
    pub name: String,
    pub description: String,
    /// Theme keywords (at least one)
    pub themes: Vec<String>,
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    /// Prefix for entity names ("Ancient", "Cyber", ...)
    pub entity_prefix: String,
    pub item_prefix: String,
    pub location_prefix: String,
}

impl Genre {
    /// Check the fields every registered genre must have
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(Error::InvalidGenre("genre ID cannot be empty".into()));
        }
        if self.name.is_empty() {
            return Err(Error::InvalidGenre(format!(
                "genre '{}' has an empty name",
                self.id
            )));
        }
        if self.description.is_empty() {
            return Err(Error::InvalidGenre(format!(
                "genre '{}' has an empty description",
                self.id
            )));
        }
        if self.themes.is_empty() {
            return Err(Error::InvalidGenre(format!(
                "genre '{}' must have at least one theme",
                self.id
            )));
        }
        Ok(())
    }

    /// Primary, secondary and accent colors in that order
    pub fn color_palette(&self) -> [&str; 3] {
        [&self.primary_color, &self.secondary_color, &self.accent_color]
    }

    pub fn has_theme(&self, theme: &str) -> bool {
        self.themes.iter().any(|t| t == theme)
    }
}
