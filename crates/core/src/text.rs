//! Character-offset view over request text.
//!
//! Entity offsets on the wire are character (Unicode scalar value) offsets, the same unit a
//! browser or a Python recogniser reports. Rust slices by byte, so every lookup goes through
//! [`SourceText`], which maps between the two once per request.

use crate::constants::TRAILING_PUNCTUATION;

/// Request text plus a char -> byte boundary table.
#[derive(Debug, Clone)]
pub struct SourceText<'a> {
    text: &'a str,
    // boundaries[i] is the byte offset of char i; the final entry is text.len().
    boundaries: Vec<usize>,
}

impl<'a> SourceText<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut boundaries: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        boundaries.push(text.len());
        Self { text, boundaries }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Byte offset of the character at `char_idx`, clamped to the end of the text.
    pub fn byte_offset(&self, char_idx: usize) -> usize {
        self.boundaries
            .get(char_idx)
            .copied()
            .unwrap_or(self.text.len())
    }

    /// Character index of the char boundary at or before `byte_idx`.
    pub fn char_offset(&self, byte_idx: usize) -> usize {
        match self.boundaries.binary_search(&byte_idx) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        }
    }

    /// Text between two character offsets.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        let start = self.byte_offset(start);
        let end = self.byte_offset(end).max(start);
        &self.text[start..end]
    }

    /// Text before the character offset `end`.
    pub fn before(&self, end: usize) -> &'a str {
        &self.text[..self.byte_offset(end)]
    }

    /// Text from the character offset `start` onwards.
    pub fn after(&self, start: usize) -> &'a str {
        &self.text[self.byte_offset(start)..]
    }

    /// The word immediately preceding the character offset `start`.
    ///
    /// Whitespace between the word and `start` is skipped; the word is the maximal run of
    /// non-whitespace ending there, with trailing `.`, `,`, `;` and `:` removed. Returns an empty
    /// string when nothing precedes `start`.
    pub fn preceding_word(&self, start: usize) -> &'a str {
        let before = self.before(start).trim_end();
        before
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("")
            .trim_end_matches(TRAILING_PUNCTUATION)
    }
}
