//! # Theme Error Types
//!
//! Errors raised while loading a theme. Cosmetic attributes never produce an
//! error (they fall back to defaults); these variants cover the structural
//! failures that abort a load: unreadable files, unknown references and
//! unknown enum tokens.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or resolving a theme.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// The theme configuration file could not be read.
    #[error("Failed to read theme config {path:?}: {source}")]
    ConfigRead {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The theme configuration text is not valid TOML.
    #[error("Failed to parse theme config {origin}: {details}")]
    ConfigParse {
        /// Where the text came from (a path or `<memory>`).
        origin: String,
        /// Details about the parse error.
        details: String,
    },

    /// A required subtree is missing from the configuration.
    #[error("Theme config is missing the [{node}] node")]
    MissingNode {
        /// The name of the missing node.
        node: String,
    },

    /// A required key is missing from a configuration entry.
    #[error("Entry in {section} is missing required field '{field}'")]
    MissingField {
        /// The section the entry belongs to.
        section: String,
        /// The missing key.
        field: String,
    },

    /// A style references a color that is not in the palette.
    #[error("Unknown color '{name}' referenced by '{key}'")]
    UnresolvedColor {
        /// The referenced color name.
        name: String,
        /// The configuration key holding the reference.
        key: String,
    },

    /// A style references a texture that is not in the palette.
    #[error("Unknown texture '{name}' referenced by '{key}'")]
    UnresolvedTexture {
        /// The referenced texture name.
        name: String,
        /// The configuration key holding the reference.
        key: String,
    },

    /// An enum attribute holds a token outside its value set.
    #[error("Invalid {kind} value '{token}' for '{key}'")]
    InvalidEnum {
        /// The enum type name.
        kind: &'static str,
        /// The configuration key.
        key: String,
        /// The offending token.
        token: String,
    },

    /// A color value could not be parsed.
    #[error("Invalid color format: {0}")]
    InvalidColor(String),

    /// A texture file could not be read.
    #[error("Failed to read texture {path:?}: {source}")]
    TextureRead {
        /// The texture path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A texture file could not be decoded.
    #[error("Failed to decode texture {path:?}: {source}")]
    TextureDecode {
        /// The texture path.
        path: PathBuf,
        /// The underlying decoder error.
        #[source]
        source: image::ImageError,
    },

    /// `reload` was called before any theme was loaded.
    #[error("No theme source has been loaded yet")]
    NothingToReload,
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create a config parse error.
    pub fn parse_error(origin: impl Into<String>, details: impl Into<String>) -> Self {
        Self::ConfigParse {
            origin: origin.into(),
            details: details.into(),
        }
    }

    /// Create a missing node error.
    pub fn missing_node(node: impl Into<String>) -> Self {
        Self::MissingNode { node: node.into() }
    }

    /// Create a missing field error.
    pub fn missing_field(section: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            section: section.into(),
            field: field.into(),
        }
    }

    /// Create an unresolved color error.
    pub fn unresolved_color(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self::UnresolvedColor {
            name: name.into(),
            key: key.into(),
        }
    }

    /// Create an unresolved texture error.
    pub fn unresolved_texture(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self::UnresolvedTexture {
            name: name.into(),
            key: key.into(),
        }
    }

    /// Create an invalid enum error.
    pub fn invalid_enum(kind: &'static str, key: impl Into<String>, token: impl Into<String>) -> Self {
        Self::InvalidEnum {
            kind,
            key: key.into(),
            token: token.into(),
        }
    }
}
