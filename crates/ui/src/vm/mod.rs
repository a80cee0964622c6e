mod question_vm;
mod session_vm;
mod time_fmt;

pub use question_vm::{ExplanationVm, FeedbackVm, OptionRowVm, QuestionVm, ResultsVm};
pub use session_vm::{SessionPhase, SessionVm, start_session};
