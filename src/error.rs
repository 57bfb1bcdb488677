//! Error type shared by every stage of a build run.
//!
//! Nothing in the pipeline recovers from an error: each variant is created at
//! the failure site, propagated with `?`, and reported once by the binary.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::path_format::FormatError;

/// Result alias for build operations.
pub type BuildResult<T> = Result<T, BuildError>;

/// Broad category of a [`BuildError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Settings file missing, unreadable, malformed or invalid
    Config,
    /// Palette file missing, unreadable or malformed
    Palette,
    /// Template file missing or unreadable
    TemplateIo,
    /// Placeholder key with no palette entry
    MissingKey,
    /// Output directory or file could not be created or written
    OutputIo,
}

/// Fatal error raised while building themes.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Settings file could not be read.
    #[error("Failed to read settings file '{}'", path.display())]
    SettingsRead {
        /// Settings file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Settings file is not a valid settings document.
    #[error("Failed to parse '{}'", path.display())]
    SettingsParse {
        /// Settings file path
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A path format in the settings cannot be applied.
    #[error("Invalid {field} '{pattern}'")]
    PathFormat {
        /// Settings field holding the format
        field: &'static str,
        /// The format string as written
        pattern: String,
        /// What is wrong with it
        #[source]
        source: FormatError,
    },

    /// Palette file could not be read.
    #[error("Failed to read palette file '{}'", path.display())]
    PaletteRead {
        /// Palette file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Palette file is not a flat string-to-string JSON object.
    #[error("Failed to parse '{}'", path.display())]
    PaletteParse {
        /// Palette file path
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Template file could not be read.
    #[error("Failed to read {editor} template '{}'", path.display())]
    TemplateRead {
        /// Editor identifier
        editor: String,
        /// Template file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A placeholder names a key the palette does not have.
    #[error("Key '{key}' is missing. (referenced by {editor} template '{}')", template.display())]
    MissingKey {
        /// Placeholder key as written in the template
        key: String,
        /// Editor identifier
        editor: String,
        /// Template file path
        template: PathBuf,
    },

    /// Output directory could not be created.
    #[error("Failed to create output directory '{}'", path.display())]
    OutputDir {
        /// Output directory path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Output file could not be created, written or moved into place.
    #[error("Failed to write theme file '{}'", path.display())]
    OutputWrite {
        /// Output file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl BuildError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SettingsRead { .. } | Self::SettingsParse { .. } | Self::PathFormat { .. } => {
                ErrorKind::Config
            }
            Self::PaletteRead { .. } | Self::PaletteParse { .. } => ErrorKind::Palette,
            Self::TemplateRead { .. } => ErrorKind::TemplateIo,
            Self::MissingKey { .. } => ErrorKind::MissingKey,
            Self::OutputDir { .. } | Self::OutputWrite { .. } => ErrorKind::OutputIo,
        }
    }
}
