//! Title expansion for accepted spans.

use crate::text::SourceText;
use crate::titles::is_title;

/// Moves `start` back over an adjoining honorific.
///
/// When the word right before `start` is a title, returns the character offset of that word in
/// the text; otherwise returns `start` unchanged. The search runs over the whitespace-trimmed
/// prefix ending at the title, so the rightmost match is always the adjoining one.
pub fn expand_start(text: &SourceText<'_>, start: usize) -> usize {
    let prev = text.preceding_word(start);
    if !is_title(prev) {
        return start;
    }

    let before = text.before(start).trim_end();
    match before.rfind(prev) {
        Some(byte_idx) => text.char_offset(byte_idx),
        None => start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expands_over_title() {
        let text = SourceText::new("Prince Philip died.");
        assert_eq!(expand_start(&text, 7), 0);
    }

    #[test]
    fn test_expands_over_abbreviated_title() {
        let text = SourceText::new("Thanks to Dr.  Jones");
        assert_eq!(expand_start(&text, 15), 10);
    }

    #[test]
    fn test_uses_adjoining_title_when_repeated() {
        let text = SourceText::new("Sir John and Sir Paul");
        assert_eq!(expand_start(&text, 17), 13);
        assert_eq!(expand_start(&text, 4), 0);
    }

    #[test]
    fn test_leaves_untitled_start() {
        let text = SourceText::new("Yesterday John Smith spoke");
        assert_eq!(expand_start(&text, 10), 10);
        assert_eq!(expand_start(&text, 0), 0);
    }

    #[test]
    fn test_expansion_counts_characters() {
        let text = SourceText::new("Café: Président Macron");
        // "Président" is not in the English title list.
        assert_eq!(expand_start(&text, 16), 16);

        let text = SourceText::new("Zoë’s friend Mr Ng");
        assert_eq!(expand_start(&text, 16), 13);
    }
}
