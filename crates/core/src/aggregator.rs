//! Groups accepted spans into one record per normalised name.

use crate::classifier::is_person;
use crate::error::ExtractResult;
use crate::expander::expand_start;
use crate::possessive::strip_possessive;
use crate::recognizer::Recognizer;
use crate::text::SourceText;
use names_types::NonEmptyText;
use serde::Serialize;
use std::collections::HashMap;

/// One location of a name in the source text, as character offsets.
///
/// `start` includes any expanded title; `end` is the recognizer's end and still covers a
/// possessive marker the recognizer put inside the span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NamedOccurrence {
    pub start: usize,
    pub end: usize,
}

/// Every occurrence of one normalised name, in text order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonRecord {
    pub name: NonEmptyText,
    pub positions: Vec<NamedOccurrence>,
}

impl PersonRecord {
    fn new(name: NonEmptyText) -> Self {
        Self {
            name,
            positions: Vec::new(),
        }
    }
}

/// Runs `recognizer` over `text` and returns the people found, in first-seen order.
///
/// Blank text short-circuits to an empty result without calling the recognizer. Names are grouped
/// on their exact normalised text, so "Philip" and "Prince Philip" stay separate records.
///
/// # Errors
///
/// Returns [`crate::ExtractError::Recognizer`] if recognition fails; no partial result is
/// produced.
pub fn extract<R>(recognizer: &R, text: &str) -> ExtractResult<Vec<PersonRecord>>
where
    R: Recognizer + ?Sized,
{
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let entities = recognizer.recognize(text)?;
    let source = SourceText::new(text);
    let mut records: Vec<PersonRecord> = Vec::new();
    let mut by_name: HashMap<NonEmptyText, usize> = HashMap::new();

    for entity in &entities {
        if !is_person(entity, &source) {
            continue;
        }

        let start = expand_start(&source, entity.start);
        let end = entity.end;

        let Ok(name) = NonEmptyText::new(strip_possessive(source.slice(start, end))) else {
            continue;
        };

        let idx = *by_name.entry(name.clone()).or_insert_with(|| {
            records.push(PersonRecord::new(name));
            records.len() - 1
        });
        records[idx].positions.push(NamedOccurrence { start, end });
    }

    tracing::debug!(
        "{} entities -> {} people ({})",
        entities.len(),
        records.len(),
        recognizer.name()
    );

    Ok(records)
}
