//! Person classification for recognizer spans.
//!
//! A statistical recognizer routinely mislabels people: "Prince Philip" comes back as a place,
//! "Mountbatten-Windsor's" as an organisation or nothing at all. Two cheap signals recover most of
//! these: an honorific right before the span, and a possessive right at its end.

use crate::constants::{NON_PERSON_LABELS, PERSON_LABEL};
use crate::possessive::{ends_with_possessive, starts_with_possessive};
use crate::recognizer::EntitySpan;
use crate::text::SourceText;
use crate::titles::is_title;

/// Decides whether `entity` denotes a person.
///
/// - `PERSON` spans are accepted as-is.
/// - Blank spans are rejected.
/// - A span preceded by an honorific ("Prince Philip") is accepted whatever its label.
/// - A possessive span ("Windsor's", or "Windsor" followed by "'s") is accepted unless its label
///   is one of `ORG`, `GPE`, `FAC`, `NORP` or `EVENT`.
pub fn is_person(entity: &EntitySpan, text: &SourceText<'_>) -> bool {
    if entity.label == PERSON_LABEL {
        return true;
    }

    if entity.text.trim().is_empty() {
        return false;
    }

    if is_title(text.preceding_word(entity.start)) {
        return true;
    }

    has_possessive(entity, text) && !NON_PERSON_LABELS.contains(&entity.label.as_str())
}

/// True when the span text ends with a possessive marker or one follows the span directly.
pub fn has_possessive(entity: &EntitySpan, text: &SourceText<'_>) -> bool {
    ends_with_possessive(&entity.text) || starts_with_possessive(text.after(entity.end))
}
