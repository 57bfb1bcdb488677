//! Theme Builder Library
//!
//! This library renders editor color themes by filling the colors of a
//! palette into per-editor template files, driven by a JSON settings file.

// Module declarations
pub mod builder;
pub mod config;
pub mod constants;
pub mod error;
pub mod palette;
pub mod path_format;
pub mod render;

pub use builder::{BuiltTheme, EditorSource, ThemeBuilder};
pub use config::Settings;
pub use error::{BuildError, BuildResult, ErrorKind};
pub use palette::Palette;
