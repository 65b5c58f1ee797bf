//! Rule-based recognizer.
//!
//! Groups runs of capitalised words into entities and labels them from cheap structural signals:
//! organisation keywords, a small place gazetteer and locative prepositions. Everything else that
//! looks like a proper noun is reported as `PERSON`. Honorifics are never part of a run, which
//! leaves title handling to the heuristic layer exactly as it would be for a statistical model.

use super::{EntitySpan, Recognizer, RecognizerResult};
use crate::constants::PERSON_LABEL;
use crate::possessive::ends_with_possessive;
use crate::text::SourceText;
use crate::titles::is_title;

const ORG_KEYWORDS: &[&str] = &[
    "inc", "corp", "ltd", "llc", "plc", "co", "company", "corporation", "limited", "group",
    "foundation", "institute", "university", "college", "bank", "agency", "council", "party",
    "ministry", "department", "commission", "committee", "trust", "club", "fc", "association",
    "society", "times", "guardian", "bbc",
];

const PLACES: &[&str] = &[
    "london", "paris", "berlin", "rome", "madrid", "moscow", "beijing", "tokyo", "delhi",
    "washington", "york", "edinburgh", "glasgow", "cardiff", "belfast", "dublin", "manchester",
    "birmingham", "liverpool", "england", "scotland", "wales", "ireland", "britain", "europe",
    "africa", "asia", "america", "australia", "canada", "china", "india", "japan", "france",
    "germany", "italy", "spain", "russia", "ukraine", "brazil", "mexico", "usa", "uk",
];

const LOC_PREPOSITIONS: &[&str] = &["in", "from", "at", "near", "to", "across", "outside"];

// Lowercase words allowed inside a run when followed by another capitalised word.
const CONNECTORS: &[&str] = &["of", "van", "von", "de", "da", "di", "du", "der", "bin"];

// Capitalised only because they start a sentence.
const SENTENCE_STARTERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "it", "its", "he", "she", "we", "they",
    "i", "you", "his", "her", "their", "our", "my", "in", "on", "at", "to", "for", "from", "by",
    "with", "and", "but", "or", "so", "yet", "if", "when", "where", "what", "who", "why", "how",
    "after", "before", "while", "during", "since", "today", "yesterday", "tomorrow", "now",
    "then", "there", "here", "is", "are", "was", "were", "has", "have", "had", "mr", "mrs",
    "however", "meanwhile", "although", "despite",
];

/// One whitespace-delimited token, trimmed to its alphanumeric core.
#[derive(Debug)]
struct Word<'a> {
    core: &'a str,
    start: usize,
    end: usize,
    // Trailing punctuation or a possessive closes any run ending at this word.
    closes_run: bool,
}

/// Capitalisation-driven recognizer with no model files.
#[derive(Debug, Clone, Default)]
pub struct HeuristicRecognizer;

impl HeuristicRecognizer {
    pub fn new() -> Self {
        Self
    }

    fn words<'a>(source: &SourceText<'a>) -> Vec<Word<'a>> {
        let text = source.as_str();
        let mut words = Vec::new();
        let mut token_start: Option<usize> = None;

        for (i, c) in text.char_indices().chain(std::iter::once((text.len(), ' '))) {
            match (c.is_whitespace(), token_start) {
                (true, Some(start)) => {
                    if let Some(word) = Self::word(source, start, i) {
                        words.push(word);
                    }
                    token_start = None;
                }
                (false, None) => token_start = Some(i),
                _ => {}
            }
        }

        words
    }

    fn word<'a>(source: &SourceText<'a>, byte_start: usize, byte_end: usize) -> Option<Word<'a>> {
        let raw = &source.as_str()[byte_start..byte_end];
        let lead = raw.len() - raw.trim_start_matches(|c: char| !c.is_alphanumeric()).len();
        let trimmed = raw[lead..].trim_end_matches(|c: char| !c.is_alphanumeric());
        if trimmed.is_empty() {
            return None;
        }

        let mut core = trimmed;
        let mut closes_run = trimmed.len() + lead < raw.len();
        if ends_with_possessive(core) {
            let marker = core.chars().rev().take(2).map(char::len_utf8).sum::<usize>();
            core = &core[..core.len() - marker];
            closes_run = true;
        }
        if core.is_empty() {
            return None;
        }

        // "J." is an initial, not the end of a sentence.
        let is_initial = core.chars().count() == 1
            && core.chars().all(char::is_uppercase)
            && raw[lead + core.len()..].starts_with('.');
        if is_initial {
            closes_run = raw[lead + core.len()..].len() > 1;
        }

        let start = byte_start + lead;
        Some(Word {
            core,
            start: source.char_offset(start),
            end: source.char_offset(start + core.len()),
            closes_run,
        })
    }

    fn starts_run(word: &Word<'_>) -> bool {
        is_capitalised(word.core)
            && !is_title(word.core)
            && !SENTENCE_STARTERS.contains(&word.core.to_lowercase().as_str())
    }

    fn continues_run(word: &Word<'_>) -> bool {
        is_capitalised(word.core) && !is_title(word.core)
    }

    fn label(source: &SourceText<'_>, run: &[Word<'_>]) -> &'static str {
        let lowered: Vec<String> = run.iter().map(|w| w.core.to_lowercase()).collect();

        if lowered.iter().any(|w| ORG_KEYWORDS.contains(&w.as_str())) {
            return "ORG";
        }
        if lowered.iter().any(|w| PLACES.contains(&w.as_str())) {
            return "GPE";
        }

        let prev = source.preceding_word(run[0].start).to_lowercase();
        if LOC_PREPOSITIONS.contains(&prev.as_str()) {
            return "GPE";
        }

        PERSON_LABEL
    }
}

fn is_capitalised(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

impl Recognizer for HeuristicRecognizer {
    fn recognize(&self, text: &str) -> RecognizerResult<Vec<EntitySpan>> {
        let source = SourceText::new(text);
        let words = Self::words(&source);
        let mut spans = Vec::new();

        let mut i = 0;
        while i < words.len() {
            if !Self::starts_run(&words[i]) {
                i += 1;
                continue;
            }

            let mut last = i;
            while !words[last].closes_run && last + 1 < words.len() {
                let next = &words[last + 1];
                if Self::continues_run(next) {
                    last += 1;
                    continue;
                }
                let bridges = CONNECTORS.contains(&next.core)
                    && !next.closes_run
                    && words.get(last + 2).is_some_and(Self::continues_run);
                if bridges {
                    last += 2;
                    continue;
                }
                break;
            }

            let run = &words[i..=last];
            let (start, end) = (run[0].start, run[run.len() - 1].end);
            spans.push(EntitySpan::new(
                source.slice(start, end),
                Self::label(&source, run),
                start,
                end,
            ));
            i = last + 1;
        }

        tracing::debug!("heuristic recognizer found {} spans", spans.len());
        Ok(spans)
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}
