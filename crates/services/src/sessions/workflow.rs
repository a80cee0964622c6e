use quiz_core::Clock;
use quiz_core::model::UnitId;

use super::session::QuizSession;
use crate::catalog::{Catalog, CatalogEntry};
use crate::content::ContentLoader;
use crate::error::StartError;

/// Orchestrates unit selection, content loading, and session start.
///
/// Owns the clock so every session timestamp has one deterministic
/// source. Sessions themselves are handed to the caller; dropping one is
/// how a run is abandoned or reset.
#[derive(Clone)]
pub struct QuizFlow {
    clock: Clock,
    catalog: Catalog,
    loader: ContentLoader,
}

impl QuizFlow {
    #[must_use]
    pub fn new(catalog: Catalog, loader: ContentLoader) -> Self {
        Self {
            clock: Clock::default(),
            catalog,
            loader,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Clock used for every session timestamp.
    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Units available for selection, in catalog order.
    #[must_use]
    pub fn units(&self) -> &[CatalogEntry] {
        self.catalog.entries()
    }

    /// Resolve a unit, load its content, and start a shuffled session.
    ///
    /// # Errors
    ///
    /// Returns `StartError` when the unit is unknown, its content cannot
    /// be loaded or validated, or the loaded set is empty.
    pub async fn start_unit(&self, unit: &UnitId) -> Result<QuizSession, StartError> {
        let entry = self.catalog.resolve(unit)?;
        tracing::debug!(unit = %unit, source_ref = entry.source_ref(), "loading quiz content");

        let set = match self
            .loader
            .load(entry.source_ref(), entry.expected_title())
            .await
        {
            Ok(set) => set,
            Err(err) => {
                tracing::warn!(unit = %unit, error = %err, "failed to load quiz content");
                return Err(err.into());
            }
        };

        let session = match QuizSession::new(set, self.clock.now()) {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(unit = %unit, error = %err, "failed to start quiz session");
                return Err(err.into());
            }
        };

        tracing::info!(
            unit = %unit,
            questions = session.total_questions(),
            "quiz session started"
        );
        Ok(session)
    }
}
