//! JSON bodies exchanged on `/extract-names` and `/health`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /extract-names`.
///
/// A missing or `null` `text` is treated as empty text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ExtractNamesReq {
    #[serde(default)]
    pub text: Option<String>,
}

impl ExtractNamesReq {
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

/// One occurrence of a name, as character offsets into the request text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Position {
    pub start: usize,
    pub end: usize,
}

/// A distinct person name and every place it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PersonName {
    pub name: String,
    pub positions: Vec<Position>,
}

/// Response body for `POST /extract-names`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExtractNamesRes {
    pub names: Vec<PersonName>,
}

/// Response body for `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
    pub recognizer: String,
}
