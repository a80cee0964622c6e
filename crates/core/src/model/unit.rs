use thiserror::Error;

/// Validated quiz unit identifier (trimmed, non-empty).
///
/// Opaque to everything except the catalog, which maps it to a content
/// location and an expected title.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnitId(String);

impl UnitId {
    /// Create a validated unit id.
    ///
    /// # Errors
    ///
    /// Returns `UnitIdError::Empty` if the id is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, UnitIdError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UnitIdError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UnitIdError {
    #[error("unit id cannot be empty")]
    Empty,
}
