//! Positional path formats.
//!
//! Settings describe file locations with composite format strings such as
//! `"{0}/{1}.json"`. `{n}` inserts the n-th argument, `{{` and `}}` produce
//! literal braces. Alignment and format specifiers are not supported.

use thiserror::Error;

/// Reasons a path format cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// `{` without a matching `}`.
    #[error("unclosed '{{' at byte {position}")]
    UnclosedPlaceholder {
        /// Byte offset of the opening brace
        position: usize,
    },

    /// A lone `}` that is not part of a `}}` escape.
    #[error("unmatched '}}' at byte {position}")]
    UnmatchedClosingBrace {
        /// Byte offset of the closing brace
        position: usize,
    },

    /// Placeholder content is not a plain argument index.
    #[error("'{{{placeholder}}}' at byte {position} is not an argument index")]
    InvalidPlaceholder {
        /// Byte offset of the opening brace
        position: usize,
        /// Text between the braces
        placeholder: String,
    },

    /// Placeholder refers to an argument that was not supplied.
    #[error("argument {{{index}}} requested but only {count} available")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of arguments supplied
        count: usize,
    },
}

/// Applies `args` to a positional format string.
///
/// # Examples
///
/// ```
/// use theme_builder::path_format::format_path;
///
/// let path = format_path("{0}/{1}.json", &["out", "zed"]).unwrap();
/// assert_eq!(path, "out/zed.json");
/// ```
pub fn format_path(format: &str, args: &[&str]) -> Result<String, FormatError> {
    let mut output = String::with_capacity(format.len());
    let mut chars = format.char_indices().peekable();

    while let Some((position, ch)) = chars.next() {
        match ch {
            '{' => {
                if chars.next_if(|&(_, next)| next == '{').is_some() {
                    output.push('{');
                    continue;
                }

                let start = position + 1;
                let end = chars
                    .by_ref()
                    .find(|&(_, c)| c == '}')
                    .map(|(i, _)| i)
                    .ok_or(FormatError::UnclosedPlaceholder { position })?;

                let placeholder = &format[start..end];
                let index =
                    parse_index(placeholder).ok_or_else(|| FormatError::InvalidPlaceholder {
                        position,
                        placeholder: placeholder.to_string(),
                    })?;
                let arg = args.get(index).ok_or(FormatError::IndexOutOfRange {
                    index,
                    count: args.len(),
                })?;
                output.push_str(arg);
            }
            '}' => {
                if chars.next_if(|&(_, next)| next == '}').is_none() {
                    return Err(FormatError::UnmatchedClosingBrace { position });
                }
                output.push('}');
            }
            _ => output.push(ch),
        }
    }

    Ok(output)
}

fn parse_index(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
