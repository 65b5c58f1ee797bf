//! Server runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the server. Request
//! handling never reads environment variables.

use crate::constants::{DEFAULT_PORT, DEFAULT_STATIC_DIR};
use crate::error::{ConfigError, ConfigResult};
use crate::recognizer::{
    HeuristicRecognizer, RemoteRecognizer, SerializedRecognizer, SharedRecognizer,
};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Which recognizer backend serves requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecognizerBackend {
    Heuristic,
    Remote { url: String },
}

/// Server configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    rest_addr: SocketAddr,
    static_dir: PathBuf,
    recognizer: RecognizerBackend,
    serialize_recognizer: bool,
}

impl ServerConfig {
    pub fn new(
        rest_addr: SocketAddr,
        static_dir: PathBuf,
        recognizer: RecognizerBackend,
        serialize_recognizer: bool,
    ) -> Self {
        Self {
            rest_addr,
            static_dir,
            recognizer,
            serialize_recognizer,
        }
    }

    /// Resolve configuration from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through `lookup`, which maps a variable name to its value.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let rest_addr = match get("NAMES_REST_ADDR") {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidAddr { value, source })?,
            None => {
                let port = match get("PORT") {
                    Some(value) => value
                        .parse::<u16>()
                        .map_err(|_| ConfigError::InvalidPort(value))?,
                    None => DEFAULT_PORT,
                };
                SocketAddr::from(([0, 0, 0, 0], port))
            }
        };

        let static_dir = get("NAMES_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let recognizer = match get("NAMES_RECOGNIZER").as_deref() {
            None | Some("heuristic") => RecognizerBackend::Heuristic,
            Some("remote") => RecognizerBackend::Remote {
                url: get("NAMES_RECOGNIZER_URL").ok_or(ConfigError::MissingRecognizerUrl)?,
            },
            Some(other) => return Err(ConfigError::UnknownRecognizer(other.to_string())),
        };

        let serialize_recognizer = match get("NAMES_SERIALIZE_RECOGNIZER") {
            None => false,
            Some(value) => parse_flag("NAMES_SERIALIZE_RECOGNIZER", value)?,
        };

        Ok(Self {
            rest_addr,
            static_dir,
            recognizer,
            serialize_recognizer,
        })
    }

    pub fn rest_addr(&self) -> SocketAddr {
        self.rest_addr
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    pub fn recognizer(&self) -> &RecognizerBackend {
        &self.recognizer
    }

    pub fn serialize_recognizer(&self) -> bool {
        self.serialize_recognizer
    }

    /// Build the configured recognizer.
    ///
    /// `handle` drives the remote backend's HTTP client; it is unused for the heuristic backend.
    pub fn build_recognizer(&self, handle: tokio::runtime::Handle) -> SharedRecognizer {
        match (&self.recognizer, self.serialize_recognizer) {
            (RecognizerBackend::Heuristic, false) => Arc::new(HeuristicRecognizer::new()),
            (RecognizerBackend::Heuristic, true) => {
                Arc::new(SerializedRecognizer::new(HeuristicRecognizer::new()))
            }
            (RecognizerBackend::Remote { url }, false) => {
                Arc::new(RemoteRecognizer::new(url.clone(), handle))
            }
            (RecognizerBackend::Remote { url }, true) => Arc::new(SerializedRecognizer::new(
                RemoteRecognizer::new(url.clone(), handle),
            )),
        }
    }
}

fn parse_flag(name: &'static str, value: String) -> ConfigResult<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { name, value }),
    }
}
