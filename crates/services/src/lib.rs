#![forbid(unsafe_code)]

pub mod catalog;
pub mod content;
pub mod error;
pub mod sessions;

pub use quiz_core::Clock;

pub use catalog::{Catalog, CatalogEntry};
pub use content::{
    ContentConfig, ContentLoader, DEFAULT_BASE_URL, HttpSource, QuestionSource, StaticSource,
};
pub use error::{
    CatalogError, ContentConfigError, LoadError, SessionError, StartError, TransportError,
};
pub use sessions::{GradeOutcome, QuizFlow, QuizSession, SessionProgress};
