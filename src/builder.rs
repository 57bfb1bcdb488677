//! Theme build pipeline.
//!
//! A [`ThemeBuilder`] holds the settings and palette for one run and renders
//! one theme file per editor. Editors are processed strictly one after
//! another; the first error stops the run.
//!
//! Each theme is streamed into a sibling `<name>.tmp` file and renamed over
//! the target only once rendering finished, so a failing editor never leaves
//! a half-written theme behind. Themes finished earlier in the run are kept.

use crate::config::Settings;
use crate::constants::{EDITOR_CODES, TEMP_FILE_SUFFIX};
use crate::error::{BuildError, BuildResult};
use crate::palette::Palette;
use crate::render::{placeholders, render_to, RenderError};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Which list of editors a run iterates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorSource {
    /// The built-in [`EDITOR_CODES`] list
    #[default]
    BuiltIn,
    /// The `EditorCodes` array from the settings file
    Configured,
}

/// A theme file that was written successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltTheme {
    /// Editor identifier
    pub editor: String,
    /// Path of the written theme file
    pub path: PathBuf,
    /// Number of placeholders replaced
    pub placeholders: usize,
}

/// Renders editor themes from loaded settings and palette.
#[derive(Debug, Clone)]
pub struct ThemeBuilder {
    settings: Settings,
    palette: Palette,
}

impl ThemeBuilder {
    /// Creates a builder from already loaded inputs.
    pub fn new(settings: Settings, palette: Palette) -> Self {
        Self { settings, palette }
    }

    /// Loads the settings file and the palette it points to.
    pub fn load(settings_path: &Path) -> BuildResult<Self> {
        let settings = Settings::load(settings_path)?;
        debug!("Loaded settings from {}", settings_path.display());

        let palette = Palette::load(settings.palette_path())?;
        debug!(
            "Loaded {} colors from {}",
            palette.len(),
            settings.palette_path().display()
        );

        Ok(Self::new(settings, palette))
    }

    /// Returns the editors to process, in order.
    ///
    /// Logs a warning when the built-in list and the configured list differ,
    /// since only one of them is honoured.
    pub fn editor_codes(&self, source: EditorSource) -> Vec<&str> {
        let configured: Vec<&str> = self
            .settings
            .editor_codes
            .iter()
            .map(String::as_str)
            .collect();

        if configured != EDITOR_CODES {
            let ignored = match source {
                EditorSource::BuiltIn => "EditorCodes from settings",
                EditorSource::Configured => "built-in editor list",
            };
            warn!(
                "EditorCodes {:?} differ from built-in editors {:?}; ignoring {}",
                configured, EDITOR_CODES, ignored
            );
        }

        match source {
            EditorSource::BuiltIn => EDITOR_CODES.to_vec(),
            EditorSource::Configured => configured,
        }
    }

    /// Creates the output directory (and parents) if it does not exist.
    pub fn prepare_output_dir(&self) -> BuildResult<()> {
        let dir = self.settings.output_dir();
        if dir.exists() {
            return Ok(());
        }

        fs::create_dir_all(dir).map_err(|source| BuildError::OutputDir {
            path: dir.to_path_buf(),
            source,
        })?;
        debug!("Created output directory {}", dir.display());
        Ok(())
    }

    /// Builds every editor in `editors`, calling `on_built` after each one.
    ///
    /// Stops at the first error; themes already written stay on disk.
    pub fn build_all(
        &self,
        editors: &[&str],
        mut on_built: impl FnMut(&BuiltTheme),
    ) -> BuildResult<Vec<BuiltTheme>> {
        self.prepare_output_dir()?;

        let mut built = Vec::with_capacity(editors.len());
        for editor in editors {
            let theme = self.build_editor(editor)?;
            on_built(&theme);
            built.push(theme);
        }
        Ok(built)
    }

    /// Renders the theme for a single editor.
    ///
    /// Expects the output directory to exist; see [`Self::prepare_output_dir`].
    pub fn build_editor(&self, editor: &str) -> BuildResult<BuiltTheme> {
        let (template_path, template) = self.read_template(editor)?;
        let output_path = self.settings.output_path(editor)?;

        let placeholders = self.write_theme(editor, &template, &template_path, &output_path)?;
        debug!(
            "Rendered {} ({} placeholders) into {}",
            template_path.display(),
            placeholders,
            output_path.display()
        );

        Ok(BuiltTheme {
            editor: editor.to_string(),
            path: output_path,
            placeholders,
        })
    }

    /// Resolves every placeholder of an editor's template without writing anything.
    ///
    /// Returns the number of placeholders resolved.
    pub fn check_editor(&self, editor: &str) -> BuildResult<usize> {
        let (template_path, template) = self.read_template(editor)?;

        let mut resolved = 0;
        for key in placeholders(&template) {
            if self.palette.get(key).is_none() {
                return Err(BuildError::MissingKey {
                    key: key.to_string(),
                    editor: editor.to_string(),
                    template: template_path,
                });
            }
            resolved += 1;
        }
        Ok(resolved)
    }

    fn read_template(&self, editor: &str) -> BuildResult<(PathBuf, String)> {
        let path = self.settings.template_path(editor)?;
        debug!("Reading {} template {}", editor, path.display());

        let content = fs::read_to_string(&path).map_err(|source| BuildError::TemplateRead {
            editor: editor.to_string(),
            path: path.clone(),
            source,
        })?;
        Ok((path, content))
    }

    fn write_theme(
        &self,
        editor: &str,
        template: &str,
        template_path: &Path,
        output_path: &Path,
    ) -> BuildResult<usize> {
        let temp_path = temp_path_for(output_path);

        let written = File::create(&temp_path)
            .map_err(|source| BuildError::OutputWrite {
                path: temp_path.clone(),
                source,
            })
            .and_then(|file| {
                let mut writer = BufWriter::new(file);
                let placeholders = render_to(template, &self.palette, &mut writer)
                    .map_err(|err| render_error(err, editor, template_path, output_path))?;
                writer.flush().map_err(|source| BuildError::OutputWrite {
                    path: temp_path.clone(),
                    source,
                })?;
                Ok(placeholders)
            });

        match written {
            Ok(placeholders) => {
                fs::rename(&temp_path, output_path).map_err(|source| {
                    BuildError::OutputWrite {
                        path: output_path.to_path_buf(),
                        source,
                    }
                })?;
                Ok(placeholders)
            }
            Err(err) => {
                if let Err(remove_err) = fs::remove_file(&temp_path) {
                    if remove_err.kind() != io::ErrorKind::NotFound {
                        debug!(
                            "Could not remove {}: {}",
                            temp_path.display(),
                            remove_err
                        );
                    }
                }
                Err(err)
            }
        }
    }
}

fn render_error(
    err: RenderError,
    editor: &str,
    template_path: &Path,
    output_path: &Path,
) -> BuildError {
    match err {
        RenderError::MissingKey(key) => BuildError::MissingKey {
            key,
            editor: editor.to_string(),
            template: template_path.to_path_buf(),
        },
        RenderError::Io(source) => BuildError::OutputWrite {
            path: output_path.to_path_buf(),
            source,
        },
    }
}

/// `out/zed.json` -> `out/zed.json.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(TEMP_FILE_SUFFIX);
    path.with_file_name(name)
}
