use quiz_core::model::UnitId;

use crate::error::CatalogError;

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

const BUILTIN_UNITS: [(&str, &str, &str, &str); 5] = [
    ("unidad-1", "Unidad 1", "01_unidad.json", "unidad 1"),
    ("unidad-2", "Unidad 2", "02_unidad.json", "unidad 2"),
    ("unidad-3a", "Unidad 3-A", "03a_unidad.json", "unidad 3-A"),
    ("unidad-3b", "Unidad 3-B", "03b_unidad.json", "unidad 3-B"),
    ("unidad-4", "Unidad 4", "04_unidad.json", "unidad 4"),
];

/// One quiz unit the selector can offer: where its content lives and the
/// title the loader must find there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    unit: UnitId,
    label: String,
    source_ref: String,
    expected_title: String,
}

impl CatalogEntry {
    #[must_use]
    pub fn new(
        unit: UnitId,
        label: impl Into<String>,
        source_ref: impl Into<String>,
        expected_title: impl Into<String>,
    ) -> Self {
        Self {
            unit,
            label: label.into(),
            source_ref: source_ref.into(),
            expected_title: expected_title.into(),
        }
    }

    #[must_use]
    pub fn unit(&self) -> &UnitId {
        &self.unit
    }

    /// Human-readable name shown in the selection menu.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Location of the unit's content, relative to the content base URL.
    #[must_use]
    pub fn source_ref(&self) -> &str {
        &self.source_ref
    }

    /// Title the loaded document must carry.
    #[must_use]
    pub fn expected_title(&self) -> &str {
        &self.expected_title
    }
}

/// Fixed table mapping unit ids to content locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    #[must_use]
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// The built-in course table.
    ///
    /// # Panics
    ///
    /// Panics if a built-in unit id fails validation, which would be a
    /// defect in the table itself.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = BUILTIN_UNITS
            .iter()
            .map(|(id, label, source_ref, expected_title)| {
                CatalogEntry::new(
                    UnitId::new(*id).expect("builtin unit id should be valid"),
                    *label,
                    *source_ref,
                    *expected_title,
                )
            })
            .collect();
        Self { entries }
    }

    /// Entries in menu order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the entry for a unit id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownUnit` for ids outside the table.
    pub fn resolve(&self, unit: &UnitId) -> Result<&CatalogEntry, CatalogError> {
        self.entries
            .iter()
            .find(|entry| entry.unit() == unit)
            .ok_or_else(|| CatalogError::UnknownUnit { unit: unit.clone() })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
