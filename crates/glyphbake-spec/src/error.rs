//! Error types for variant resolution and generator configuration.

use thiserror::Error;

/// Errors raised while resolving a font variant or loading the generator config.
///
/// All of these are configuration errors: they are caught before any font is
/// loaded or any file is written.
#[derive(Debug, Error)]
pub enum SpecError {
    /// A preset name that is not in the built-in table was requested.
    #[error("Unknown font preset '{0}'. Known presets: body, title")]
    UnknownPreset(String),

    /// A variant's geometry or threshold is unusable.
    #[error("Invalid variant '{name}': {reason}")]
    InvalidVariant { name: String, reason: String },

    /// The character table does not fill the 16x6 glyph grid exactly.
    #[error("Glyph table has {actual} entries but the grid holds {expected}")]
    GridMismatch { expected: usize, actual: usize },

    /// The config file could not be read.
    #[error("Failed to read config {path}: {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for [`crate::config::GeneratorConfig`].
    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Common interface for errors reported by the generator.
///
/// Gives every error a stable code and a category so the CLI can report
/// failures uniformly in both human and JSON output.
pub trait BackendError: std::error::Error {
    /// Stable error code such as "GLYPH_001".
    fn code(&self) -> &'static str;

    /// Human-readable message. Defaults to the `Display` output.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Error category: "config", "asset", or "io".
    fn category(&self) -> &'static str;
}

impl BackendError for SpecError {
    fn code(&self) -> &'static str {
        match self {
            SpecError::UnknownPreset(_) => "GLYPH_001",
            SpecError::InvalidVariant { .. } => "GLYPH_002",
            SpecError::GridMismatch { .. } => "GLYPH_003",
            SpecError::ConfigIo { .. } => "GLYPH_004",
            SpecError::ConfigParse { .. } => "GLYPH_005",
        }
    }

    fn category(&self) -> &'static str {
        "config"
    }
}
