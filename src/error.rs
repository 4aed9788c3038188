//! Error types shared by the registry, blender and palette generator.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong when registering, blending or generating.
///
/// Every failure here is an input problem. Operations are pure, so retrying
/// with the same input fails the same way.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unknown genre ID or preset name.
    #[error("{kind} '{id}' not found")]
    NotFound {
        /// What was looked up ("genre" or "preset").
        kind: &'static str,
        /// The missing key.
        id: String,
    },

    /// Genre failed validation on register.
    #[error("invalid genre: {0}")]
    InvalidGenre(String),

    /// A genre with this ID is already registered.
    #[error("genre '{0}' is already registered")]
    DuplicateGenre(String),

    /// Blend weight outside [0, 1].
    #[error("blend weight {0} is outside [0, 1]")]
    InvalidWeight(f64),

    /// Attempted to blend a genre with itself.
    #[error("cannot blend genre '{0}' with itself")]
    SelfBlend(String),

    /// Bad generation or preview parameters.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// I/O errors (config loading).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON errors (config loading).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Unknown genre ID.
    pub fn genre_not_found(id: impl Into<String>) -> Self {
        Error::NotFound {
            kind: "genre",
            id: id.into(),
        }
    }

    /// Unknown blend preset name.
    pub fn preset_not_found(name: impl Into<String>) -> Self {
        Error::NotFound {
            kind: "preset",
            id: name.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::InvalidConfig(msg.into())
    }

    /// True for [`Error::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
