/// Where a session stands after an advance.
///
/// `answered` counts questions the session has moved past, whether or not
/// a grade was recorded for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}
