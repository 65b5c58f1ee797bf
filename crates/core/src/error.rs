use crate::recognizer::RecognizerError;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("entity recognition failed: {0}")]
    Recognizer(#[from] RecognizerError),
}

pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid bind address {value:?}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),
    #[error("unknown recognizer backend {0:?} (expected \"heuristic\" or \"remote\")")]
    UnknownRecognizer(String),
    #[error("NAMES_RECOGNIZER_URL is required for the remote recognizer")]
    MissingRecognizerUrl,
    #[error("invalid boolean for {name}: {value:?}")]
    InvalidFlag { name: &'static str, value: String },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
