use std::collections::{BTreeMap, BTreeSet};

/// What the learner picked on the selection menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    /// Zero-based index into the menu.
    Unit(usize),
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputError {
    Empty,
    NotAChoice,
    OutOfRange { max: usize },
    UnknownKey(String),
}

impl InputError {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            InputError::Empty => "Type something first.".into(),
            InputError::NotAChoice => "Pick a unit number, or q to quit.".into(),
            InputError::OutOfRange { max } => {
                format!("Pick a number between 1 and {max}, or q to quit.")
            }
            InputError::UnknownKey(key) => format!("{key:?} is not one of the options."),
        }
    }
}

/// Parse a selection-menu line: a 1-based unit number or `q` to quit.
///
/// # Errors
///
/// Returns `InputError` for blank lines, non-numbers, and numbers outside
/// the menu.
pub fn parse_menu_choice(line: &str, unit_count: usize) -> Result<MenuChoice, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Ok(MenuChoice::Quit);
    }

    let number: usize = trimmed.parse().map_err(|_| InputError::NotAChoice)?;
    if number == 0 || number > unit_count {
        return Err(InputError::OutOfRange { max: unit_count });
    }
    Ok(MenuChoice::Unit(number - 1))
}

/// Parse an answer line into a set of option keys.
///
/// Keys may be separated by commas or whitespace and match the options
/// case-insensitively. Duplicates collapse into the set. At least one key
/// is required; the caller re-prompts on error rather than grading.
///
/// # Errors
///
/// Returns `InputError::UnknownKey` for a token matching no option and
/// `InputError::Empty` when no key was given.
pub fn parse_selection(
    line: &str,
    options: &BTreeMap<String, String>,
) -> Result<BTreeSet<String>, InputError> {
    let mut selected = BTreeSet::new();
    for token in line.split(|c: char| c == ',' || c.is_whitespace()) {
        if token.is_empty() {
            continue;
        }
        let key =
            resolve_key(token, options).ok_or_else(|| InputError::UnknownKey(token.to_string()))?;
        selected.insert(key);
    }

    if selected.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(selected)
}

/// Match a token to an option key, exactly first, then case-insensitively
/// when that is unambiguous.
fn resolve_key(token: &str, options: &BTreeMap<String, String>) -> Option<String> {
    if options.contains_key(token) {
        return Some(token.to_string());
    }

    let mut candidates = options.keys().filter(|key| key.eq_ignore_ascii_case(token));
    match (candidates.next(), candidates.next()) {
        (Some(key), None) => Some(key.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(keys: &[&str]) -> BTreeMap<String, String> {
        keys.iter()
            .map(|k| ((*k).to_string(), format!("text {k}")))
            .collect()
    }

    #[test]
    fn menu_accepts_numbers_in_range() {
        assert_eq!(parse_menu_choice("1", 5).unwrap(), MenuChoice::Unit(0));
        assert_eq!(parse_menu_choice(" 5 \n", 5).unwrap(), MenuChoice::Unit(4));
    }

    #[test]
    fn menu_accepts_quit_in_any_case() {
        assert_eq!(parse_menu_choice("q", 5).unwrap(), MenuChoice::Quit);
        assert_eq!(parse_menu_choice("QUIT", 5).unwrap(), MenuChoice::Quit);
    }

    #[test]
    fn menu_rejects_out_of_range_numbers() {
        assert_eq!(
            parse_menu_choice("0", 5).unwrap_err(),
            InputError::OutOfRange { max: 5 }
        );
        assert_eq!(
            parse_menu_choice("6", 5).unwrap_err(),
            InputError::OutOfRange { max: 5 }
        );
    }

    #[test]
    fn menu_rejects_garbage_and_blanks() {
        assert_eq!(parse_menu_choice("x", 5).unwrap_err(), InputError::NotAChoice);
        assert_eq!(parse_menu_choice("   ", 5).unwrap_err(), InputError::Empty);
    }

    #[test]
    fn selection_splits_on_commas_and_whitespace() {
        let opts = options(&["a", "b", "c"]);

        let one = parse_selection("a", &opts).unwrap();
        assert_eq!(one.len(), 1);

        let many = parse_selection("a, c", &opts).unwrap();
        assert!(many.contains("a") && many.contains("c"));

        let spaced = parse_selection("a c", &opts).unwrap();
        assert_eq!(spaced, many);
    }

    #[test]
    fn selection_matches_case_insensitively() {
        let opts = options(&["a", "b"]);
        let selected = parse_selection("A", &opts).unwrap();
        assert!(selected.contains("a"));
    }

    #[test]
    fn selection_collapses_duplicates() {
        let opts = options(&["a", "b"]);
        let selected = parse_selection("a, a, A", &opts).unwrap();
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn selection_rejects_unknown_keys() {
        let opts = options(&["a", "b"]);
        assert_eq!(
            parse_selection("a, z", &opts).unwrap_err(),
            InputError::UnknownKey("z".into())
        );
    }

    #[test]
    fn selection_requires_at_least_one_key() {
        let opts = options(&["a"]);
        assert_eq!(parse_selection("  ", &opts).unwrap_err(), InputError::Empty);
    }

    #[test]
    fn ambiguous_case_insensitive_match_is_rejected() {
        let opts = options(&["ab", "AB"]);

        assert!(parse_selection("ab", &opts).is_ok(), "exact match wins");
        assert_eq!(
            parse_selection("Ab", &opts).unwrap_err(),
            InputError::UnknownKey("Ab".into())
        );
    }
}
