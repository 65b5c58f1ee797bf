use super::{EntitySpan, Recognizer, RecognizerError, RecognizerResult};
use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;

#[derive(Serialize)]
struct RecognizeReq<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct RecognizeRes {
    #[serde(default)]
    ents: Vec<EntitySpan>,
}

/// Delegates recognition to an external NER service.
///
/// The service receives `POST {"text": ...}` and answers `{"ents": [{"text", "label", "start",
/// "end"}]}` with character offsets. Calls block on the runtime `handle`, so `recognize` must run
/// on a blocking thread (`tokio::task::spawn_blocking`), never directly inside an async task.
#[derive(Debug, Clone)]
pub struct RemoteRecognizer {
    client: reqwest::Client,
    url: String,
    handle: Handle,
}

impl RemoteRecognizer {
    pub fn new(url: impl Into<String>, handle: Handle) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            handle,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch(&self, text: &str) -> RecognizerResult<Vec<EntitySpan>> {
        let resp = self
            .client
            .post(&self.url)
            .json(&RecognizeReq { text })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RecognizerError::Status(status.as_u16()));
        }

        let body: RecognizeRes = resp.json().await?;
        Ok(body.ents)
    }
}

impl Recognizer for RemoteRecognizer {
    fn recognize(&self, text: &str) -> RecognizerResult<Vec<EntitySpan>> {
        let spans = self.handle.block_on(self.fetch(text))?;

        let char_len = text.chars().count();
        if let Some(bad) = spans
            .iter()
            .find(|s| s.start >= s.end || s.end > char_len)
        {
            tracing::warn!(
                "remote recognizer span out of range: {}..{} in {} chars",
                bad.start,
                bad.end,
                char_len
            );
            return Err(RecognizerError::InvalidSpan(format!(
                "{:?} [{}, {})",
                bad.text, bad.start, bad.end
            )));
        }

        tracing::debug!("remote recognizer returned {} spans", spans.len());
        Ok(spans)
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
