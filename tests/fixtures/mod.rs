//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Settings matching the end-to-end scenario: `out/<editor>.json` from
/// `templates/<editor>.tmpl` with `palette.json`.
pub const DEFAULT_SETTINGS: &str = r#"{
    "EditorCodes": ["vscode", "zed"],
    "OutputDirectory": "out",
    "OutputFilePathFormat": "{0}/{1}.json",
    "PaletteFilePath": "palette.json",
    "TemplateFilePathFormat": "templates/{0}.tmpl"
}"#;

/// Palette with a background and a foreground color.
pub const DEFAULT_PALETTE: &str = r##"{"bg": "#000000", "fg": "#ffffff"}"##;

/// Path to the theme-builder binary
pub fn theme_builder_bin() -> &'static str {
    env!("CARGO_BIN_EXE_theme-builder")
}

/// A working directory holding settings, palette and templates.
pub struct Workspace {
    /// Keeps the directory alive for the duration of the test
    pub temp: TempDir,
}

impl Workspace {
    /// Creates a workspace with the default settings and palette and the
    /// given `(editor, template content)` pairs.
    pub fn new(templates: &[(&str, &str)]) -> Self {
        Self::with_files(DEFAULT_SETTINGS, DEFAULT_PALETTE, templates)
    }

    /// Creates a workspace with custom settings and palette content.
    pub fn with_files(settings: &str, palette: &str, templates: &[(&str, &str)]) -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let root = temp.path();

        fs::write(root.join("settings.json"), settings).expect("Failed to write settings");
        fs::write(root.join("palette.json"), palette).expect("Failed to write palette");

        fs::create_dir_all(root.join("templates")).expect("Failed to create templates dir");
        for (editor, content) in templates {
            fs::write(root.join("templates").join(format!("{editor}.tmpl")), content)
                .expect("Failed to write template");
        }

        Self { temp }
    }

    /// Workspace root.
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Runs the binary inside the workspace with the given arguments.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(theme_builder_bin())
            .args(args)
            .current_dir(self.path())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute command")
    }

    /// Reads a file relative to the workspace root.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path().join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"))
    }

    /// Whether a file exists relative to the workspace root.
    pub fn exists(&self, relative: &str) -> bool {
        self.path().join(relative).exists()
    }
}

/// Stdout of a finished command, lossily decoded.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a finished command, lossily decoded.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
