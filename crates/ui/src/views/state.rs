/// Learner-facing failures, one message per distinct cause.
///
/// Every variant renders as a message over the selection menu; none of
/// them leaves a session behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    UnknownUnit,
    EmptyUnit,
    TitleMismatch { expected: String, actual: String },
    BadContent,
    LoadFailed,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            ViewError::UnknownUnit => "That unit does not exist.".into(),
            ViewError::EmptyUnit => "This unit has no questions yet.".into(),
            ViewError::TitleMismatch { expected, actual } => format!(
                "This unit's content looks wrong: expected title {expected:?}, found {actual:?}."
            ),
            ViewError::BadContent => "This unit's content could not be understood.".into(),
            ViewError::LoadFailed => {
                "The questions could not be loaded. Check your connection and try again.".into()
            }
            ViewError::Unknown => "Something went wrong. Please try again.".into(),
        }
    }
}
