//! Honorific title dictionary.

use crate::constants::TITLES;
use once_cell::sync::Lazy;
use std::collections::HashSet;

static TITLE_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| TITLES.iter().copied().collect());

/// Returns true when `word`, compared case-insensitively, is a known honorific.
///
/// The word is expected to be bare: callers strip trailing punctuation ("Dr." -> "Dr") first.
pub fn is_title(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    TITLE_SET.contains(word.to_lowercase().as_str())
}

/// Iterates over the dictionary in its declared order.
pub fn titles() -> impl Iterator<Item = &'static str> {
    TITLES.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_title_ignores_case() {
        assert!(is_title("Prince"));
        assert!(is_title("DR"));
        assert!(is_title("president"));
    }

    #[test]
    fn test_is_title_rejects_other_words() {
        assert!(!is_title(""));
        assert!(!is_title("Philip"));
        assert!(!is_title("Dr."));
    }

    #[test]
    fn test_titles_are_lowercase_and_unique() {
        let all: Vec<&str> = titles().collect();
        assert!(all.iter().all(|t| *t == t.to_lowercase()));
        assert_eq!(all.len(), TITLE_SET.len());
    }
}
