//! Possessive marker detection and stripping.

use crate::constants::POSSESSIVE_MARKERS;

/// Returns true when `text` ends with `'s` or `’s`.
pub fn ends_with_possessive(text: &str) -> bool {
    POSSESSIVE_MARKERS.iter().any(|m| text.ends_with(m))
}

/// Returns true when `text` starts with `'s` or `’s`.
pub fn starts_with_possessive(text: &str) -> bool {
    POSSESSIVE_MARKERS.iter().any(|m| text.starts_with(m))
}

/// Removes one trailing possessive marker and trims surrounding whitespace.
///
/// Only the display name is normalised this way; the offsets recorded for the occurrence keep
/// covering the marker.
pub fn strip_possessive(name: &str) -> String {
    let trimmed = name.trim();
    POSSESSIVE_MARKERS
        .iter()
        .find_map(|m| trimmed.strip_suffix(m))
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}
