use thiserror::Error;

use crate::model::TallyError;
use crate::model::UnitIdError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    UnitId(#[from] UnitIdError),
    #[error(transparent)]
    Tally(#[from] TallyError),
}
