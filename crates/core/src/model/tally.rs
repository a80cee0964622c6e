use thiserror::Error;

/// Minimum rounded percentage counted as a pass (inclusive).
pub const PASS_THRESHOLD_PERCENT: u32 = 60;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TallyError {
    #[error("a tally requires at least one question")]
    EmptyTally,

    #[error("score ({score}) exceeds total ({total})")]
    ScoreExceedsTotal { score: u32, total: u32 },

    #[error("too many questions for a single session: {len}")]
    TooManyQuestions { len: usize },
}

/// Final result of a completed quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTally {
    score: u32,
    total: u32,
}

impl SessionTally {
    /// Build a validated tally.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::EmptyTally` when `total` is zero and
    /// `TallyError::ScoreExceedsTotal` when `score` exceeds `total`.
    pub fn new(score: u32, total: u32) -> Result<Self, TallyError> {
        if total == 0 {
            return Err(TallyError::EmptyTally);
        }
        if score > total {
            return Err(TallyError::ScoreExceedsTotal { score, total });
        }
        Ok(Self { score, total })
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Percentage of correct answers, rounded to the nearest whole number
    /// with halves rounding up.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        let score = u64::from(self.score);
        let total = u64::from(self.total);
        let rounded = (100 * score + total / 2) / total;
        // score <= total keeps this within 0..=100
        u32::try_from(rounded).unwrap_or(100)
    }

    /// A session passes when the rounded percentage reaches
    /// [`PASS_THRESHOLD_PERCENT`].
    #[must_use]
    pub fn is_passing(&self) -> bool {
        self.percentage() >= PASS_THRESHOLD_PERCENT
    }
}
