mod question;
mod tally;
mod unit;

pub use question::{Question, QuestionSet};
pub use tally::{PASS_THRESHOLD_PERCENT, SessionTally, TallyError};
pub use unit::{UnitId, UnitIdError};
