use super::{EntitySpan, Recognizer, RecognizerResult};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Replays a fixed list of spans regardless of the input text.
///
/// Useful for replaying the output of an external recogniser offline (`names extract
/// --entities`) and as a test double: [`FixedRecognizer::calls`] counts invocations.
#[derive(Debug, Default)]
pub struct FixedRecognizer {
    spans: Vec<EntitySpan>,
    calls: AtomicUsize,
}

impl FixedRecognizer {
    pub fn new(spans: Vec<EntitySpan>) -> Self {
        Self {
            spans,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `recognize` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Recognizer for FixedRecognizer {
    fn recognize(&self, _text: &str) -> RecognizerResult<Vec<EntitySpan>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.spans.clone())
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}
