use std::collections::HashMap;

/// The key/value input collected for a single payment attempt.
///
/// Built by prompting the user once per field, in the order the payment
/// method defines. Nothing is retained beyond one workflow run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FieldSet {
    values: HashMap<String, String>,
}

impl FieldSet {
    /// Creates an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Looks up a field by key. Absent keys yield `None` so that validation
    /// can treat a missing field as a failed match instead of panicking.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
