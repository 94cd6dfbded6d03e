//! Filename parsing and display labels.
//!
//! Every manifest entry gets its `alt` text from the source filename alone:
//! the extension is dropped, separators become spaces and each word gets an
//! upper-case first letter.
//!
//! ## Display Labels
//!
//! - `my-cool_photo.jpg` → "My Cool Photo"
//! - `IMG_0001.JPG` → "IMG 0001" (existing capitals are kept)
//! - `--beach__day--.mp4` → "Beach Day"

use std::path::Path;

/// A file name split into its base name and extension.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// File name with the final extension removed.
    pub base: String,
    /// Extension without the dot, if the name has one.
    pub extension: Option<String>,
}

/// Split a file name on its last dot.
///
/// A leading dot does not start an extension:
/// - `"photo.jpg"` → base="photo", extension=Some("jpg")
/// - `"archive.tar.gz"` → base="archive.tar", extension=Some("gz")
/// - `"README"` → base="README", extension=None
/// - `".hidden"` → base=".hidden", extension=None
pub fn parse_file_name(name: &str) -> ParsedName {
    let path = Path::new(name);
    let base = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string());
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().into_owned());
    ParsedName { base, extension }
}

/// Turn a base name into a human-readable label.
///
/// Runs of `-` and `_` become a single space, whitespace is collapsed and
/// trimmed, then the first letter or digit of each word is upper-cased.
/// Nothing else in the word is touched.
pub fn derive_label(base: &str) -> String {
    base.replace(['-', '_'], " ")
        .split_whitespace()
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    // Leading punctuation stays; the first letter or digit after it is raised
    match word.char_indices().find(|(_, c)| c.is_alphanumeric()) {
        Some((i, first)) => {
            let rest = &word[i + first.len_utf8()..];
            let mut out = String::with_capacity(word.len());
            out.push_str(&word[..i]);
            out.extend(first.to_uppercase());
            out.push_str(rest);
            out
        }
        None => word.to_string(),
    }
}
