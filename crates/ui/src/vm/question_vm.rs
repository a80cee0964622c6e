use quiz_core::model::Question;
use services::{GradeOutcome, QuizSession};

use crate::views::ViewError;
use crate::vm::time_fmt::format_duration;

/// One selectable option row, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionRowVm {
    pub key: String,
    pub text: String,
}

/// Presentation-ready snapshot of the current question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    /// 1-based position shown to the learner.
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub options: Vec<OptionRowVm>,
    pub multi_select: bool,
}

impl QuestionVm {
    #[must_use]
    pub(crate) fn for_session(session: &QuizSession) -> Option<Self> {
        let question = session.current_question()?;
        Some(Self {
            number: session.position() + 1,
            total: session.total_questions(),
            prompt: question.prompt.clone(),
            options: question
                .options
                .iter()
                .map(|(key, text)| OptionRowVm {
                    key: key.clone(),
                    text: text.clone(),
                })
                .collect(),
            multi_select: question.is_multi_select(),
        })
    }
}

/// One explanation line for the feedback view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplanationVm {
    /// Option key, uppercased for display.
    pub key: String,
    pub option_text: String,
    pub text: String,
}

/// Presentation-ready grading feedback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    /// Answer keys, uppercased for display.
    pub correct_keys: Vec<String>,
    pub explanations: Vec<ExplanationVm>,
}

impl FeedbackVm {
    #[must_use]
    pub(crate) fn from_outcome(outcome: &GradeOutcome, question: &Question) -> Self {
        let explanations = outcome
            .explanations
            .iter()
            .map(|(key, text)| ExplanationVm {
                key: key.to_uppercase(),
                option_text: question
                    .options
                    .get(key)
                    .cloned()
                    .unwrap_or_default(),
                text: text.clone(),
            })
            .collect();

        Self {
            correct: outcome.correct,
            correct_keys: outcome
                .correct_keys
                .iter()
                .map(|key| key.to_uppercase())
                .collect(),
            explanations,
        }
    }
}

/// Presentation-ready final results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score: u32,
    pub total: u32,
    pub percentage: u32,
    pub passed: bool,
    pub duration_str: String,
}

impl ResultsVm {
    pub(crate) fn from_session(session: &QuizSession) -> Result<Self, ViewError> {
        let tally = session.final_tally().map_err(|_| ViewError::Unknown)?;
        let Some(completed_at) = session.completed_at() else {
            return Err(ViewError::Unknown);
        };

        Ok(Self {
            score: tally.score(),
            total: tally.total(),
            percentage: tally.percentage(),
            passed: tally.is_passing(),
            duration_str: format_duration(completed_at - session.started_at()),
        })
    }
}
