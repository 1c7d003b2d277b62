use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{AnswerValue, QuestionKey};

/// One respondent's submitted values, keyed by question.
///
/// Keys are kept sorted so that anything derived from iterating an answer set
/// comes out in the same order every time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    values: BTreeMap<QuestionKey, AnswerValue>,
}

impl AnswerSet {
    /// Create a new empty answer set.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Add an answer, returning the set (builder style).
    pub fn with(mut self, key: impl Into<QuestionKey>, value: impl Into<AnswerValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert an answer for the given question.
    pub fn insert(&mut self, key: impl Into<QuestionKey>, value: impl Into<AnswerValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get the answer for a question.
    pub fn get(&self, key: &QuestionKey) -> Option<&AnswerValue> {
        self.values.get(key)
    }

    /// Get the answer for a question, treating empty values as absent.
    pub fn value_of(&self, key: &QuestionKey) -> Option<&AnswerValue> {
        self.get(key).filter(|value| !value.is_empty())
    }

    /// Check if an answer exists for a question.
    pub fn contains(&self, key: &QuestionKey) -> bool {
        self.values.contains_key(key)
    }

    /// Remove the answer for a question.
    pub fn remove(&mut self, key: &QuestionKey) -> Option<AnswerValue> {
        self.values.remove(key)
    }

    /// Iterate over all answers in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionKey, &AnswerValue)> {
        self.values.iter()
    }

    /// Iterate over the answered keys in key order.
    pub fn keys(&self) -> impl Iterator<Item = &QuestionKey> {
        self.values.keys()
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Merge another answer set into this one; later values win.
    pub fn extend(&mut self, other: AnswerSet) {
        self.values.extend(other.values);
    }
}

impl<K: Into<QuestionKey>, V: Into<AnswerValue>> FromIterator<(K, V)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl IntoIterator for AnswerSet {
    type Item = (QuestionKey, AnswerValue);
    type IntoIter = std::collections::btree_map::IntoIter<QuestionKey, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a AnswerSet {
    type Item = (&'a QuestionKey, &'a AnswerValue);
    type IntoIter = std::collections::btree_map::Iter<'a, QuestionKey, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FileDescriptor;

    #[test]
    fn insert_and_get() {
        let answers = AnswerSet::new()
            .with("q1", "Alice")
            .with("q2", vec!["A", "B"]);

        assert_eq!(
            answers.get(&"q1".into()).and_then(AnswerValue::as_str),
            Some("Alice")
        );
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn value_of_skips_empty() {
        let answers = AnswerSet::new()
            .with("q1", "")
            .with("q2", FileDescriptor::named("scan.png"));

        assert!(answers.contains(&"q1".into()));
        assert!(answers.value_of(&"q1".into()).is_none());
        assert!(answers.value_of(&"q2".into()).is_some());
    }

    #[test]
    fn extend_overwrites() {
        let mut answers = AnswerSet::new().with("q1", "draft").with("q2", "kept");
        answers.extend(AnswerSet::new().with("q1", "final").with("q3", "new"));

        assert_eq!(answers.len(), 3);
        assert_eq!(answers.get(&"q1".into()), Some(&AnswerValue::from("final")));
        assert_eq!(answers.get(&"q2".into()), Some(&AnswerValue::from("kept")));
    }

    #[test]
    fn iteration_is_key_ordered() {
        let answers: AnswerSet = [("q3", "c"), ("q1", "a"), ("q2", "b")].into_iter().collect();
        let keys: Vec<_> = answers.keys().map(QuestionKey::as_str).collect();
        assert_eq!(keys, vec!["q1", "q2", "q3"]);
    }

    #[test]
    fn json_object_round_trip() {
        let answers: AnswerSet =
            serde_json::from_str(r#"{"q1": "5", "q2": ["A"], "q3": {"name": "x.pdf"}}"#).unwrap();
        assert_eq!(answers.len(), 3);
        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"q1":"5","q2":["A"],"q3":{"name":"x.pdf"}}"#);
    }
}
