use std::collections::HashMap;
use std::env;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use quiz_core::model::{Question, QuestionSet};

use crate::error::{ContentConfigError, LoadError, TransportError};

/// Default content location when `QUIZ_CONTENT_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

/// Default request timeout when `QUIZ_FETCH_TIMEOUT_SECS` is unset.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

/// Where quiz documents are fetched from and how long a fetch may take.
#[derive(Clone, Debug)]
pub struct ContentConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ContentConfig {
    /// Build a config from `QUIZ_CONTENT_URL` and `QUIZ_FETCH_TIMEOUT_SECS`,
    /// falling back to defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns `ContentConfigError` when a variable is set but invalid.
    pub fn from_env() -> Result<Self, ContentConfigError> {
        let base_url = match env::var("QUIZ_CONTENT_URL") {
            Ok(value) => parse_base_url(&value)?,
            Err(_) => parse_base_url(DEFAULT_BASE_URL)?,
        };
        let timeout = match env::var("QUIZ_FETCH_TIMEOUT_SECS") {
            Ok(value) => parse_timeout_secs(&value)?,
            Err(_) => DEFAULT_FETCH_TIMEOUT,
        };
        Ok(Self { base_url, timeout })
    }

    /// Replace the base URL, normalizing it for path joins.
    ///
    /// # Errors
    ///
    /// Returns `ContentConfigError::InvalidBaseUrl` if the value does not
    /// parse as an absolute URL.
    pub fn with_base_url(mut self, value: &str) -> Result<Self, ContentConfigError> {
        self.base_url = parse_base_url(value)?;
        Ok(self)
    }

    /// Replace the fetch timeout.
    ///
    /// # Errors
    ///
    /// Returns `ContentConfigError::InvalidTimeout` if the value does not
    /// parse as whole seconds.
    pub fn with_timeout_secs(mut self, value: &str) -> Result<Self, ContentConfigError> {
        self.timeout = parse_timeout_secs(value)?;
        Ok(self)
    }
}

/// Parse a base URL, appending a trailing slash so joining a source ref
/// appends a segment instead of replacing the last one.
fn parse_base_url(value: &str) -> Result<Url, ContentConfigError> {
    let normalized = if value.ends_with('/') {
        value.to_string()
    } else {
        format!("{value}/")
    };
    Url::parse(&normalized).map_err(|source| ContentConfigError::InvalidBaseUrl {
        value: value.to_string(),
        source,
    })
}

fn parse_timeout_secs(value: &str) -> Result<Duration, ContentConfigError> {
    let secs = value
        .trim()
        .parse::<u64>()
        .map_err(|_| ContentConfigError::InvalidTimeout {
            value: value.to_string(),
        })?;
    Ok(Duration::from_secs(secs))
}

//
// ─── QUESTION SOURCES ──────────────────────────────────────────────────────────
//

/// Transport contract for fetching raw quiz documents.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch the raw document body behind a catalog source ref.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` when the document cannot be retrieved.
    async fn fetch(&self, source_ref: &str) -> Result<String, TransportError>;
}

/// HTTP-backed source joining source refs onto a base URL.
#[derive(Clone)]
pub struct HttpSource {
    client: Client,
    base_url: Url,
}

impl HttpSource {
    /// Build an HTTP source with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns `ContentConfigError` if the HTTP client cannot be built.
    pub fn new(config: &ContentConfig) -> Result<Self, ContentConfigError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl QuestionSource for HttpSource {
    async fn fetch(&self, source_ref: &str) -> Result<String, TransportError> {
        let url = self.base_url.join(source_ref)?;
        tracing::debug!(%url, "fetching quiz content");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(TransportError::Status {
                source_ref: source_ref.to_string(),
                status: response.status(),
            });
        }

        Ok(response.text().await?)
    }
}

/// In-memory source for tests and prototyping.
///
/// A missing source ref reports the same not-found status an HTTP server
/// would, so callers exercise the identical failure path.
#[derive(Clone, Default)]
pub struct StaticSource {
    documents: HashMap<String, String>,
}

impl StaticSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document body under a source ref.
    #[must_use]
    pub fn with_document(
        mut self,
        source_ref: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        self.documents.insert(source_ref.into(), body.into());
        self
    }
}

#[async_trait]
impl QuestionSource for StaticSource {
    async fn fetch(&self, source_ref: &str) -> Result<String, TransportError> {
        self.documents
            .get(source_ref)
            .cloned()
            .ok_or_else(|| TransportError::Status {
                source_ref: source_ref.to_string(),
                status: reqwest::StatusCode::NOT_FOUND,
            })
    }
}

//
// ─── LOADER ────────────────────────────────────────────────────────────────────
//

/// Fetches quiz documents and validates them into question sets.
///
/// Stateless and idempotent: every call re-fetches.
#[derive(Clone)]
pub struct ContentLoader {
    source: Arc<dyn QuestionSource>,
}

impl ContentLoader {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self { source }
    }

    /// Fetch and validate the question set behind a source ref.
    ///
    /// Checks run in a fixed order: transport, JSON parse, title match,
    /// question shape. An empty `questions` array is accepted here;
    /// rejecting it is the session's job.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Transport` when the fetch fails,
    /// `LoadError::Parse` when the body is not JSON,
    /// `LoadError::TitleMismatch` when the document title differs from the
    /// expected one, and `LoadError::Schema` when `questions` is missing
    /// or its entries do not deserialize.
    pub async fn load(
        &self,
        source_ref: &str,
        expected_title: &str,
    ) -> Result<QuestionSet, LoadError> {
        let body = self.source.fetch(source_ref).await?;
        let mut document: Value = serde_json::from_str(&body)?;

        let actual_title = match document.get("title") {
            Some(Value::String(title)) => title.clone(),
            // A non-string title can never match; surface its JSON text.
            Some(other) => other.to_string(),
            None => String::new(),
        };
        if actual_title != expected_title {
            return Err(LoadError::TitleMismatch {
                expected: expected_title.to_string(),
                actual: actual_title,
            });
        }

        let Some(questions_value) = document.get_mut("questions").map(Value::take) else {
            return Err(LoadError::Schema {
                reason: "missing questions field".into(),
            });
        };
        let questions: Vec<Question> =
            serde_json::from_value(questions_value).map_err(|err| LoadError::Schema {
                reason: err.to_string(),
            })?;

        Ok(QuestionSet::new(actual_title, questions))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
