//! Color palette loading.

use crate::constants::UTF8_BOM;
use crate::error::{BuildError, BuildResult};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Mapping of symbolic color names to color values.
///
/// Values are opaque: they are copied into themes exactly as written, whether
/// they hold `#RRGGBB`, `#RRGGBBAA`, `rgb(...)` or anything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: HashMap<String, String>,
}

impl Palette {
    /// Loads a palette from a JSON object of string keys to string values.
    ///
    /// A leading UTF-8 byte-order mark is skipped.
    pub fn load(path: &Path) -> BuildResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| BuildError::PaletteRead {
            path: path.to_path_buf(),
            source,
        })?;

        let json = content.strip_prefix(UTF8_BOM).unwrap_or(&content);
        serde_json::from_str(json).map_err(|source| BuildError::PaletteParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Looks up a color by name. Names are case-sensitive.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }

    /// Number of colors in the palette.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Palette
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            colors: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    fn load_str(content: &str) -> BuildResult<Palette> {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("palette.json");
        fs::write(&path, content).unwrap();
        Palette::load(&path)
    }

    #[test]
    fn test_load_flat_object() {
        let palette = load_str(r##"{"bg": "#000000", "fg": "#ffffff"}"##).unwrap();

        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get("bg"), Some("#000000"));
        assert_eq!(palette.get("fg"), Some("#ffffff"));
        assert_eq!(palette.get("accent"), None);
    }

    #[test]
    fn test_byte_order_mark_skipped() {
        let palette = load_str("\u{feff}{\"bg\": \"#000000\"}").unwrap();
        assert_eq!(palette.get("bg"), Some("#000000"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let palette: Palette = [("foo", "#123456")].into_iter().collect();
        assert_eq!(palette.get("foo"), Some("#123456"));
        assert_eq!(palette.get("Foo"), None);
    }

    #[test]
    fn test_values_are_opaque() {
        let palette = load_str(r#"{"shadow": "rgba(0, 0, 0, 0.5)", "empty": ""}"#).unwrap();
        assert_eq!(palette.get("shadow"), Some("rgba(0, 0, 0, 0.5)"));
        assert_eq!(palette.get("empty"), Some(""));
    }

    #[test]
    fn test_empty_object() {
        let palette = load_str("{}").unwrap();
        assert!(palette.is_empty());
    }

    #[test]
    fn test_nested_values_rejected() {
        for content in [
            r#"{"bg": {"dark": "x"}}"#,
            r#"{"bg": 12}"#,
            r#"["bg"]"#,
            "null",
            "{",
        ] {
            let err = load_str(content).unwrap_err();
            assert!(
                matches!(err, BuildError::PaletteParse { .. }),
                "{content} should fail to parse"
            );
            assert_eq!(err.kind(), ErrorKind::Palette);
        }
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = Palette::load(&temp.path().join("palette.json")).unwrap_err();
        assert!(matches!(err, BuildError::PaletteRead { .. }));
    }
}
