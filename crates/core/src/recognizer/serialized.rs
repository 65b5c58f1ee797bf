use super::{EntitySpan, Recognizer, RecognizerError, RecognizerResult};
use std::sync::Mutex;

/// Serialises calls into a recognizer that is not safe for concurrent use.
///
/// Only the `recognize` call is held under the lock; the heuristic pipeline around it runs
/// unsynchronised.
#[derive(Debug)]
pub struct SerializedRecognizer<R> {
    inner: Mutex<R>,
    name: &'static str,
}

impl<R: Recognizer> SerializedRecognizer<R> {
    pub fn new(inner: R) -> Self {
        let name = inner.name();
        Self {
            inner: Mutex::new(inner),
            name,
        }
    }
}

impl<R: Recognizer> Recognizer for SerializedRecognizer<R> {
    fn recognize(&self, text: &str) -> RecognizerResult<Vec<EntitySpan>> {
        let guard = self.inner.lock().map_err(|_| RecognizerError::Poisoned)?;
        guard.recognize(text)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
