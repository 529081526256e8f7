use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::models::{DungeonSettings, WordDefinition};

/// Errors from the word and definition services
///
/// The player never sees these; batch failures collapse into one generic
/// message. The typed variants exist for the log.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unusable response body: {0}")]
    Malformed(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(reqwest::Error),
}

/// The two external collaborators of the generation pipeline.
///
/// [`HttpWordApi`] is the production implementation; tests substitute a mock.
///
/// # Contract
///
/// - `random_words` is fatal-to-the-batch: any `Err` aborts the round.
/// - `definition` is per-word: `Ok(Some)` is a dictionary entry, `Ok(None)`
///   means the service answered but knows no such word, `Err` means the
///   lookup itself failed. Callers degrade the latter two instead of
///   propagating.
#[cfg_attr(test, mockall::automock)]
pub trait WordApi: Send + Sync {
    /// Fetch `count` random words of `length` letters, in source order.
    async fn random_words(&self, count: usize, length: usize) -> Result<Vec<String>, ApiError>;

    /// Fetch the first dictionary entry for `word`, if the service has one.
    async fn definition(&self, word: &str) -> Result<Option<WordDefinition>, ApiError>;
}

/// HTTP implementation of [`WordApi`] over the two public services.
///
/// Word source: `GET {word_api_url}?words=<count>&length=<length>`, body an
/// ordered JSON array of strings. Definition source:
/// `GET {dictionary_api_url}/{word}`, body either an array of entry objects
/// or an error object.
///
/// Mirrors the upstream services' quirk of signalling "unknown word" through
/// the body shape rather than the status code: any valid-JSON body that is
/// not a non-empty array counts as "no entry", only transport and decode
/// failures are errors.
pub struct HttpWordApi {
    client: Client,
    word_api_url: String,
    dictionary_api_url: String,
}

impl HttpWordApi {
    /// Create a client for the given endpoints.
    ///
    /// # Arguments
    /// * `word_api_url` - Base URL of the random-word service
    /// * `dictionary_api_url` - Base URL of the definition service
    /// * `timeout` - Per-request timeout
    pub fn new(
        word_api_url: impl Into<String>,
        dictionary_api_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("world-dungeon/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            word_api_url: word_api_url.into(),
            dictionary_api_url: dictionary_api_url.into(),
        })
    }

    /// Create a client from user settings.
    pub fn from_settings(settings: &DungeonSettings) -> Result<Self, ApiError> {
        Self::new(
            &settings.word_api_url,
            &settings.dictionary_api_url,
            Duration::from_secs(settings.request_timeout as u64),
        )
    }

    /// Build the definition-source URL for a word.
    fn definition_url(&self, word: &str) -> String {
        format!("{}/{}", self.dictionary_api_url.trim_end_matches('/'), word)
    }
}

impl WordApi for HttpWordApi {
    async fn random_words(&self, count: usize, length: usize) -> Result<Vec<String>, ApiError> {
        let response = self
            .client
            .get(&self.word_api_url)
            .query(&[("words", count), ("length", length)])
            .send()
            .await?;

        // The service is expected to answer with a plain array of strings;
        // anything else is a protocol violation.
        let words: Vec<String> = response
            .json()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))?;

        tracing::debug!("Word source returned {} words", words.len());
        Ok(words)
    }

    async fn definition(&self, word: &str) -> Result<Option<WordDefinition>, ApiError> {
        let response = self.client.get(self.definition_url(word)).send().await?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))?;

        // Unknown words come back as an error object, not an array.
        let Value::Array(entries) = body else {
            return Ok(None);
        };

        let Some(first) = entries.into_iter().next() else {
            return Ok(None);
        };

        let entry: WordDefinition = serde_json::from_value(first)
            .map_err(|e| ApiError::Malformed(e.to_string()))?;

        Ok(Some(entry))
    }
}
