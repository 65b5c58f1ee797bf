//! Entity recognizer seam.
//!
//! The heuristic layer never looks inside a recognizer: it only consumes the spans one returns.
//! Backends:
//! - [`HeuristicRecognizer`]: in-process, capitalisation-driven, no model files
//! - [`RemoteRecognizer`]: delegates to an external NER service over HTTP
//! - [`FixedRecognizer`]: replays a recorded span list
//! - [`SerializedRecognizer`]: wraps a backend that must not be called concurrently

mod fixed;
mod heuristic;
mod remote;
mod serialized;

pub use fixed::FixedRecognizer;
pub use heuristic::HeuristicRecognizer;
pub use remote::RemoteRecognizer;
pub use serialized::SerializedRecognizer;

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One entity reported by a recognizer.
///
/// `start` and `end` are character offsets into the text that was recognised, `end > start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub text: String,
    pub label: String,
    pub start: usize,
    pub end: usize,
}

impl EntitySpan {
    pub fn new(text: impl Into<String>, label: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
            start,
            end,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RecognizerError {
    #[error("recognizer request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("recognizer service returned status {0}")]
    Status(u16),
    #[error("recognizer returned an invalid span: {0}")]
    InvalidSpan(String),
    #[error("recognizer lock poisoned")]
    Poisoned,
}

pub type RecognizerResult<T> = std::result::Result<T, RecognizerError>;

/// Produces entity spans for a piece of text.
///
/// Implementations must be deterministic for a given model version and free of side effects that
/// outlive the call.
pub trait Recognizer {
    fn recognize(&self, text: &str) -> RecognizerResult<Vec<EntitySpan>>;

    /// Short identifier reported by the health endpoint.
    fn name(&self) -> &'static str {
        "unknown"
    }
}

/// A recognizer shared across request handlers.
pub type SharedRecognizer = Arc<dyn Recognizer + Send + Sync>;

impl<R: Recognizer + ?Sized> Recognizer for Arc<R> {
    fn recognize(&self, text: &str) -> RecognizerResult<Vec<EntitySpan>> {
        (**self).recognize(text)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<R: Recognizer + ?Sized> Recognizer for Box<R> {
    fn recognize(&self, text: &str) -> RecognizerResult<Vec<EntitySpan>> {
        (**self).recognize(text)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
