use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// A single multiple-choice question.
///
/// Option keys are short labels ("a", "b", ...). Options live in a
/// `BTreeMap` so iteration follows key order, which is also display order.
/// `correct_keys` is a set: duplicates collapse and order carries no
/// meaning. Explanations are optional per key; questions without any
/// deserialize with an empty map.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub prompt: String,
    pub options: BTreeMap<String, String>,
    pub correct_keys: BTreeSet<String>,
    #[serde(default)]
    pub explanations: BTreeMap<String, String>,
}

impl Question {
    /// Returns true when more than one key must be selected.
    #[must_use]
    pub fn is_multi_select(&self) -> bool {
        self.correct_keys.len() > 1
    }

    /// Grade a selection: exact set equality against the answer key.
    ///
    /// There is no partial credit. A subset, a superset, or any stray key
    /// makes the whole selection incorrect.
    #[must_use]
    pub fn is_correct_selection(&self, selected: &BTreeSet<String>) -> bool {
        *selected == self.correct_keys
    }

    /// Explanations for the correct keys that have one, in key order.
    #[must_use]
    pub fn correct_explanations(&self) -> BTreeMap<String, String> {
        self.correct_keys
            .iter()
            .filter_map(|key| {
                self.explanations
                    .get(key)
                    .map(|text| (key.clone(), text.clone()))
            })
            .collect()
    }
}

/// A titled, ordered sequence of questions as delivered by the loader.
///
/// The title is the value the loader already checked against the catalog
/// expectation. A set may be empty; rejecting empty sets is the session's
/// job, not the model's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    title: String,
    questions: Vec<Question>,
}

impl QuestionSet {
    #[must_use]
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            title: title.into(),
            questions,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Consume the set, yielding the questions for a session to own.
    #[must_use]
    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(keys: &[&str]) -> BTreeSet<String> {
        keys.iter().map(|k| (*k).to_string()).collect()
    }

    fn build_question(correct: &[&str]) -> Question {
        Question {
            prompt: "Pick the right ones".into(),
            options: BTreeMap::from([
                ("a".into(), "first".into()),
                ("b".into(), "second".into()),
                ("c".into(), "third".into()),
            ]),
            correct_keys: correct.iter().map(|k| (*k).to_string()).collect(),
            explanations: BTreeMap::new(),
        }
    }

    #[test]
    fn exact_selection_is_correct() {
        let q = build_question(&["a", "c"]);
        assert!(q.is_correct_selection(&selection(&["a", "c"])));
        assert!(q.is_correct_selection(&selection(&["c", "a"])));
    }

    #[test]
    fn subset_selection_is_incorrect() {
        let q = build_question(&["a", "c"]);
        assert!(!q.is_correct_selection(&selection(&["a"])));
    }

    #[test]
    fn superset_selection_is_incorrect() {
        let q = build_question(&["a"]);
        assert!(!q.is_correct_selection(&selection(&["a", "b"])));
    }

    #[test]
    fn disjoint_selection_is_incorrect() {
        let q = build_question(&["a", "c"]);
        assert!(!q.is_correct_selection(&selection(&["b"])));
    }

    #[test]
    fn empty_selection_is_incorrect() {
        let q = build_question(&["b"]);
        assert!(!q.is_correct_selection(&selection(&[])));
    }

    #[test]
    fn multi_select_requires_more_than_one_key() {
        assert!(!build_question(&["a"]).is_multi_select());
        assert!(build_question(&["a", "b"]).is_multi_select());
    }

    #[test]
    fn question_deserializes_from_camel_case() {
        let json = r#"{
            "prompt": "2 + 2?",
            "options": { "b": "5", "a": "4" },
            "correctKeys": ["a"],
            "explanations": { "a": "basic arithmetic" }
        }"#;

        let q: Question = serde_json::from_str(json).unwrap();

        assert_eq!(q.prompt, "2 + 2?");
        assert_eq!(
            q.options.keys().collect::<Vec<_>>(),
            vec!["a", "b"],
            "options iterate in key order"
        );
        assert_eq!(q.correct_keys, selection(&["a"]));
        assert_eq!(q.explanations.get("a").map(String::as_str), Some("basic arithmetic"));
    }

    #[test]
    fn missing_explanations_default_to_empty() {
        let json = r#"{
            "prompt": "2 + 2?",
            "options": { "a": "4" },
            "correctKeys": ["a"]
        }"#;

        let q: Question = serde_json::from_str(json).unwrap();
        assert!(q.explanations.is_empty());
    }

    #[test]
    fn duplicate_correct_keys_collapse() {
        let json = r#"{
            "prompt": "2 + 2?",
            "options": { "a": "4", "b": "5" },
            "correctKeys": ["a", "a"]
        }"#;

        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.correct_keys.len(), 1);
        assert!(q.is_correct_selection(&selection(&["a"])));
    }

    #[test]
    fn correct_explanations_skip_keys_without_one() {
        let mut q = build_question(&["a", "b"]);
        q.explanations.insert("b".into(), "because b".into());
        q.explanations.insert("c".into(), "not a correct key".into());

        let explained = q.correct_explanations();

        assert_eq!(explained.len(), 1);
        assert_eq!(explained.get("b").map(String::as_str), Some("because b"));
    }
}
