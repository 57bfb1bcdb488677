//! Placeholder substitution.
//!
//! Templates are plain text with `{{name}}` placeholders, where `name` is one
//! or more ASCII letters, digits or underscores. Anything else, including
//! `{{ name}}`, `{{}}` and `{{name-2}}`, is literal text. There is no escape
//! syntax for a literal `{{name}}`.
//!
//! Placeholders are found in a single left-to-right pass of non-overlapping
//! matches. Substituted values are written verbatim and never rescanned.

use crate::constants::PLACEHOLDER_DELIMITER_LEN;
use crate::palette::Palette;
use regex::Regex;
use std::io::{self, Write};
use std::sync::LazyLock;
use thiserror::Error;

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{[A-Za-z0-9_]+\}\}").expect("placeholder pattern is valid")
});

/// Errors raised while rendering a single template.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A placeholder names a key the palette does not have.
    #[error("Key '{0}' is missing.")]
    MissingKey(String),

    /// The output sink failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Returns the placeholder keys of a template in order of appearance.
///
/// Keys that occur more than once are yielded once per occurrence.
pub fn placeholders(template: &str) -> impl Iterator<Item = &str> {
    PLACEHOLDER_RE
        .find_iter(template)
        .map(|m| placeholder_key(m.as_str()))
}

/// Renders a template into `out`, returning the number of placeholders replaced.
///
/// Output is streamed as the template is scanned, so on error `out` holds
/// whatever preceded the failing placeholder.
pub fn render_to<W: Write>(
    template: &str,
    palette: &Palette,
    out: &mut W,
) -> Result<usize, RenderError> {
    substitute(template, palette, |chunk| out.write_all(chunk.as_bytes()))
}

/// Renders a template into a new string.
pub fn render(template: &str, palette: &Palette) -> Result<String, RenderError> {
    let mut output = String::with_capacity(template.len());
    substitute(template, palette, |chunk| {
        output.push_str(chunk);
        Ok(())
    })?;
    Ok(output)
}

fn substitute(
    template: &str,
    palette: &Palette,
    mut emit: impl FnMut(&str) -> io::Result<()>,
) -> Result<usize, RenderError> {
    let mut current = 0;
    let mut replaced = 0;

    for found in PLACEHOLDER_RE.find_iter(template) {
        emit(&template[current..found.start()])?;
        current = found.end();

        let key = placeholder_key(found.as_str());
        let value = palette
            .get(key)
            .ok_or_else(|| RenderError::MissingKey(key.to_string()))?;
        emit(value)?;
        replaced += 1;
    }

    if current < template.len() {
        emit(&template[current..])?;
    }

    Ok(replaced)
}

/// Strips the delimiters from a matched `{{key}}`.
fn placeholder_key(placeholder: &str) -> &str {
    &placeholder[PLACEHOLDER_DELIMITER_LEN..placeholder.len() - PLACEHOLDER_DELIMITER_LEN]
}
