use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;

use quiz_core::model::{Question, QuestionSet, SessionTally, TallyError};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── GRADE OUTCOME ─────────────────────────────────────────────────────────────
//

/// Captures the result of grading one question within a session.
///
/// Carries everything feedback needs so the caller never re-reads the
/// question: the verdict, the answer key in key order, and the
/// explanations available for the correct keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeOutcome {
    pub correct: bool,
    pub correct_keys: Vec<String>,
    pub explanations: BTreeMap<String, String>,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz run over one question set.
///
/// Owns the questions for its whole lifetime. Construction shuffles them
/// once and starts at the first; `grade` scores the current question and
/// `advance` moves on. Once the last question is advanced past, the
/// session is complete and only `final_tally` remains useful. There is no
/// way to rewind; starting over means constructing a new session.
#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    position: usize,
    score: u32,
    graded_current: bool,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Create a session over the given set, shuffled uniformly.
    ///
    /// `started_at` should come from the services layer clock to keep
    /// time deterministic.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the set has no questions.
    pub fn new(set: QuestionSet, started_at: DateTime<Utc>) -> Result<Self, SessionError> {
        Self::with_rng(set, started_at, &mut rand::rng())
    }

    /// Create a session using the caller's RNG, for deterministic tests.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the set has no questions.
    pub fn with_rng<R: Rng + ?Sized>(
        set: QuestionSet,
        started_at: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        if set.is_empty() {
            return Err(SessionError::Empty);
        }

        let mut questions = set.into_questions();
        questions.shuffle(rng);

        Ok(Self {
            questions,
            position: 0,
            score: 0,
            graded_current: false,
            started_at,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Zero-based index of the current question.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Correct answers so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of questions not yet advanced past.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.questions.len().saturating_sub(self.position)
    }

    /// Whether the current question has already received its grade.
    #[must_use]
    pub fn is_current_graded(&self) -> bool {
        self.graded_current
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.total_questions(),
            answered: self.position,
            remaining: self.remaining(),
            is_complete: self.is_complete(),
        }
    }

    /// The question awaiting an answer, or `None` once the session is done.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.position)
    }

    /// Grade a selection against the current question.
    ///
    /// Exact set equality, no partial credit. A correct grade increments
    /// the score. Grading does not advance; call [`Self::advance`] when
    /// the learner moves on.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is finished and
    /// `SessionError::AlreadyGraded` if the current question was graded
    /// before.
    pub fn grade(&mut self, selected: &BTreeSet<String>) -> Result<GradeOutcome, SessionError> {
        if self.graded_current {
            return Err(SessionError::AlreadyGraded);
        }
        let Some(question) = self.current_question() else {
            return Err(SessionError::Completed);
        };

        let outcome = GradeOutcome {
            correct: question.is_correct_selection(selected),
            correct_keys: question.correct_keys.iter().cloned().collect(),
            explanations: question.correct_explanations(),
        };

        self.graded_current = true;
        if outcome.correct {
            self.score = self.score.saturating_add(1);
        }

        Ok(outcome)
    }

    /// Move to the next question, completing the session after the last.
    ///
    /// Advancing past an ungraded question is allowed and simply forfeits
    /// its point. `at` should come from the services layer clock; it
    /// becomes the completion timestamp when this advance finishes the
    /// session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already
    /// finished.
    pub fn advance(&mut self, at: DateTime<Utc>) -> Result<SessionProgress, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }

        self.position += 1;
        self.graded_current = false;
        if self.position >= self.questions.len() {
            self.completed_at = Some(at);
        }

        Ok(self.progress())
    }

    /// Final score of a finished session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Incomplete` while questions remain.
    pub fn final_tally(&self) -> Result<SessionTally, SessionError> {
        if !self.is_complete() {
            return Err(SessionError::Incomplete);
        }

        let total = u32::try_from(self.questions.len()).map_err(|_| {
            TallyError::TooManyQuestions {
                len: self.questions.len(),
            }
        })?;
        Ok(SessionTally::new(self.score, total)?)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
