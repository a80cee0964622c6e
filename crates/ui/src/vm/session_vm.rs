use std::collections::{BTreeMap, BTreeSet};

use quiz_core::model::UnitId;
use services::{
    CatalogError, Clock, LoadError, QuizFlow, QuizSession, SessionError, StartError,
};

use crate::views::ViewError;
use crate::vm::question_vm::{FeedbackVm, QuestionVm, ResultsVm};

/// Where the learner is inside a running session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Question,
    Feedback(FeedbackVm),
    Results(ResultsVm),
}

/// Owns one quiz session and the presentation phase driving it.
///
/// The phase gates the session operations: a question can only be graded
/// from `Question` and only left from `Feedback`, so a submitted answer is
/// retired until the next question comes up. Dropping the vm abandons the
/// run; there is nothing to unwind.
#[derive(Debug)]
pub struct SessionVm {
    session: QuizSession,
    clock: Clock,
    phase: SessionPhase,
}

impl SessionVm {
    #[must_use]
    pub fn new(session: QuizSession, clock: Clock) -> Self {
        Self {
            session,
            clock,
            phase: SessionPhase::Question,
        }
    }

    #[must_use]
    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// Snapshot of the current question, while one is up.
    #[must_use]
    pub fn question(&self) -> Option<QuestionVm> {
        QuestionVm::for_session(&self.session)
    }

    /// Options of the current question, for input validation.
    #[must_use]
    pub fn current_options(&self) -> Option<&BTreeMap<String, String>> {
        self.session.current_question().map(|q| &q.options)
    }

    /// Grade the learner's selection and move to feedback.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` when called outside the `Question`
    /// phase or when the session rejects the grade.
    pub fn submit(&mut self, selected: &BTreeSet<String>) -> Result<(), ViewError> {
        if !matches!(self.phase, SessionPhase::Question) {
            return Err(ViewError::Unknown);
        }

        let outcome = self
            .session
            .grade(selected)
            .map_err(|_| ViewError::Unknown)?;
        let Some(question) = self.session.current_question() else {
            return Err(ViewError::Unknown);
        };

        self.phase = SessionPhase::Feedback(FeedbackVm::from_outcome(&outcome, question));
        Ok(())
    }

    /// Leave feedback: advance to the next question or to the results.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` when called outside the `Feedback`
    /// phase or when the session rejects the advance.
    pub fn proceed(&mut self) -> Result<(), ViewError> {
        if !matches!(self.phase, SessionPhase::Feedback(_)) {
            return Err(ViewError::Unknown);
        }

        let progress = self
            .session
            .advance(self.clock.now())
            .map_err(|_| ViewError::Unknown)?;

        self.phase = if progress.is_complete {
            SessionPhase::Results(ResultsVm::from_session(&self.session)?)
        } else {
            SessionPhase::Question
        };
        Ok(())
    }
}

/// Start a session for a unit, mapping every failure to a view message.
///
/// # Errors
///
/// Returns a `ViewError` describing why the unit could not start; the
/// caller shows its message and stays on the selection menu.
pub async fn start_session(flow: &QuizFlow, unit: &UnitId) -> Result<SessionVm, ViewError> {
    match flow.start_unit(unit).await {
        Ok(session) => Ok(SessionVm::new(session, flow.clock())),
        Err(err) => Err(map_start_error(err)),
    }
}

fn map_start_error(err: StartError) -> ViewError {
    match err {
        StartError::Catalog(CatalogError::UnknownUnit { .. }) => ViewError::UnknownUnit,
        StartError::Load(LoadError::TitleMismatch { expected, actual }) => {
            ViewError::TitleMismatch { expected, actual }
        }
        StartError::Load(LoadError::Parse(_) | LoadError::Schema { .. }) => ViewError::BadContent,
        StartError::Load(_) => ViewError::LoadFailed,
        StartError::Session(SessionError::Empty) => ViewError::EmptyUnit,
        _ => ViewError::Unknown,
    }
}
