//! # Names Core
//!
//! Person-name extraction on top of a pluggable entity recognizer.
//!
//! The recognizer proposes spans; this crate decides which of them are people and how they should
//! be reported:
//! - promoting mislabelled spans that follow an honorific or carry a possessive
//! - widening spans to cover the honorific ("Prince Philip", not "Philip")
//! - stripping possessives from the display name while keeping the offsets intact
//! - grouping repeated mentions under one name, in first-seen order
//!
//! **No API concerns**: HTTP routing, static files and CORS belong in `api-rest`.

pub mod aggregator;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod error;
pub mod expander;
pub mod possessive;
pub mod recognizer;
pub mod text;
pub mod titles;

// Wire types shared with the REST and CLI front ends.
pub use api_shared::wire;

pub use aggregator::{extract, NamedOccurrence, PersonRecord};
pub use config::{RecognizerBackend, ServerConfig};
pub use error::{ConfigError, ConfigResult, ExtractError, ExtractResult};
pub use recognizer::{EntitySpan, Recognizer, RecognizerError, SharedRecognizer};

impl From<PersonRecord> for wire::PersonName {
    fn from(record: PersonRecord) -> Self {
        wire::PersonName {
            name: record.name.into_string(),
            positions: record
                .positions
                .into_iter()
                .map(|p| wire::Position {
                    start: p.start,
                    end: p.end,
                })
                .collect(),
        }
    }
}

/// Name extraction over a shared recognizer - no API concerns
#[derive(Clone)]
pub struct NameService {
    recognizer: SharedRecognizer,
}

impl NameService {
    /// Creates a new service backed by `recognizer`.
    pub fn new(recognizer: SharedRecognizer) -> Self {
        Self { recognizer }
    }

    /// Name of the recognizer backend.
    pub fn recognizer_name(&self) -> &'static str {
        self.recognizer.name()
    }

    /// Extracts people from `text` and shapes them as the `/extract-names` response.
    ///
    /// This call is synchronous and may block on the recognizer; async callers should run it on
    /// a blocking thread.
    ///
    /// # Errors
    /// Returns `ExtractError::Recognizer` if the recognizer fails.
    pub fn extract_names(&self, text: &str) -> ExtractResult<wire::ExtractNamesRes> {
        let records = extract(&*self.recognizer, text)?;
        Ok(wire::ExtractNamesRes {
            names: records.into_iter().map(wire::PersonName::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognizer::FixedRecognizer;
    use std::sync::Arc;

    #[test]
    fn test_extract_names_builds_wire_response() {
        let service = NameService::new(Arc::new(FixedRecognizer::new(vec![EntitySpan::new(
            "Philip", "GPE", 7, 13,
        )])));

        let res = service.extract_names("Prince Philip died.").unwrap();

        assert_eq!(
            res,
            wire::ExtractNamesRes {
                names: vec![wire::PersonName {
                    name: "Prince Philip".into(),
                    positions: vec![wire::Position { start: 0, end: 13 }],
                }],
            }
        );
        assert_eq!(service.recognizer_name(), "fixed");
    }

    #[test]
    fn test_blank_text_gives_empty_names() {
        let service = NameService::new(Arc::new(FixedRecognizer::default()));
        assert_eq!(
            service.extract_names("   ").unwrap(),
            wire::ExtractNamesRes::default()
        );
    }
}
