//! Application-wide constants.
//!
//! This module defines the fixed inputs of a build run: where the settings
//! live and which editors get a theme.

/// The display name of the application.
pub const APP_NAME: &str = "Theme Builder";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "theme-builder";

/// Settings file read when `--settings` is not given, relative to the working directory.
pub const SETTINGS_FILE_PATH: &str = "settings.json";

/// Editors a theme is rendered for, in build order.
///
/// This list is independent of the `EditorCodes` array in the settings file;
/// see [`crate::builder::EditorSource`].
pub const EDITOR_CODES: &[&str] = &["vscode", "zed"];

/// Byte-order mark some editors write at the start of UTF-8 JSON files.
pub const UTF8_BOM: char = '\u{feff}';

/// Length of the `{{` / `}}` placeholder delimiters.
pub const PLACEHOLDER_DELIMITER_LEN: usize = 2;

/// Suffix appended to an output file name while it is being written.
pub const TEMP_FILE_SUFFIX: &str = "tmp";
