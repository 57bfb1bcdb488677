//! Build settings.
//!
//! This module loads and validates the JSON settings document that tells a
//! build run where the palette, templates and outputs live.

use crate::constants::UTF8_BOM;
use crate::error::{BuildError, BuildResult};
use crate::path_format::format_path;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for a build run.
///
/// # File Format
///
/// ```json
/// {
///   "EditorCodes": ["vscode", "zed"],
///   "OutputDirectory": "out",
///   "OutputFilePathFormat": "{0}/{1}.json",
///   "PaletteFilePath": "palette.json",
///   "TemplateFilePathFormat": "templates/{0}.tmpl"
/// }
/// ```
///
/// Every field is required. Unknown fields are ignored. A leading UTF-8
/// byte-order mark is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Settings {
    /// Editor identifiers listed by the user
    pub editor_codes: Vec<String>,
    /// Directory created before any output is written
    pub output_directory: String,
    /// Output path format: `{0}` = output directory, `{1}` = editor identifier
    pub output_file_path_format: String,
    /// Path to the palette JSON file
    pub palette_file_path: String,
    /// Template path format: `{0}` = editor identifier
    pub template_file_path_format: String,
}

impl Settings {
    /// Loads settings from a JSON file and validates them.
    pub fn load(path: &Path) -> BuildResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| BuildError::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;

        let json = content.strip_prefix(UTF8_BOM).unwrap_or(&content);
        let settings: Self =
            serde_json::from_str(json).map_err(|source| BuildError::SettingsParse {
                path: path.to_path_buf(),
                source,
            })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validates the path formats.
    ///
    /// Checks:
    /// - `TemplateFilePathFormat` only references `{0}`
    /// - `OutputFilePathFormat` only references `{0}` and `{1}`
    /// - neither contains stray or malformed braces
    pub fn validate(&self) -> BuildResult<()> {
        self.template_path("editor")?;
        self.output_path("editor")?;
        Ok(())
    }

    /// Computes the template path for an editor.
    pub fn template_path(&self, editor: &str) -> BuildResult<PathBuf> {
        format_path(&self.template_file_path_format, &[editor])
            .map(PathBuf::from)
            .map_err(|source| BuildError::PathFormat {
                field: "TemplateFilePathFormat",
                pattern: self.template_file_path_format.clone(),
                source,
            })
    }

    /// Computes the output path for an editor.
    pub fn output_path(&self, editor: &str) -> BuildResult<PathBuf> {
        format_path(
            &self.output_file_path_format,
            &[self.output_directory.as_str(), editor],
        )
        .map(PathBuf::from)
        .map_err(|source| BuildError::PathFormat {
            field: "OutputFilePathFormat",
            pattern: self.output_file_path_format.clone(),
            source,
        })
    }

    /// Path of the palette file.
    pub fn palette_path(&self) -> &Path {
        Path::new(&self.palette_file_path)
    }

    /// Path of the output directory.
    pub fn output_dir(&self) -> &Path {
        Path::new(&self.output_directory)
    }
}
