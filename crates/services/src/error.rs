//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{TallyError, UnitId};

/// Errors emitted by the unit catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("unknown quiz unit: {unit}")]
    UnknownUnit { unit: UnitId },
}

/// Errors emitted while fetching raw quiz content.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransportError {
    #[error("content request for {source_ref} failed with status {status}")]
    Status {
        source_ref: String,
        status: reqwest::StatusCode,
    },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),
}

/// Errors emitted by the content loader.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("content title {actual:?} does not match expected {expected:?}")]
    TitleMismatch { expected: String, actual: String },
    #[error("content shape is invalid: {reason}")]
    Schema { reason: String },
}

/// Errors emitted by the session state machine.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,
    #[error("session already completed")]
    Completed,
    #[error("current question was already graded")]
    AlreadyGraded,
    #[error("session is not finished")]
    Incomplete,
    #[error(transparent)]
    Tally(#[from] TallyError),
}

/// Errors surfaced when starting a quiz session for a unit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StartError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Errors building the content loader configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentConfigError {
    #[error("invalid content base url {value:?}: {source}")]
    InvalidBaseUrl {
        value: String,
        source: url::ParseError,
    },
    #[error("invalid fetch timeout {value:?}: expected whole seconds")]
    InvalidTimeout { value: String },
    #[error(transparent)]
    Client(#[from] reqwest::Error),
}
