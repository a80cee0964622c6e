use services::CatalogEntry;

/// Selection menu listing every unit plus the quit hint.
#[must_use]
pub fn render_menu(units: &[CatalogEntry]) -> String {
    let mut out = String::from("\nChoose a unit:\n");
    for (index, entry) in units.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", index + 1, entry.label()));
    }
    out.push_str("Type the unit number, or q to quit.\n");
    out
}

#[cfg(test)]
mod tests {
    use quiz_core::model::UnitId;

    use super::*;

    #[test]
    fn menu_lists_units_in_order_with_one_based_numbers() {
        let units = vec![
            CatalogEntry::new(
                UnitId::new("unidad-1").unwrap(),
                "Unidad 1",
                "01_unidad.json",
                "unidad 1",
            ),
            CatalogEntry::new(
                UnitId::new("unidad-2").unwrap(),
                "Unidad 2",
                "02_unidad.json",
                "unidad 2",
            ),
        ];

        let rendered = render_menu(&units);

        assert!(rendered.contains("  1. Unidad 1\n"));
        assert!(rendered.contains("  2. Unidad 2\n"));
        assert!(rendered.contains("q to quit"));
    }
}
