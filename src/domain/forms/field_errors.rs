use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::AppResult;

/// Validation messages for one form field, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors {
    pub field: String,
    pub messages: Vec<String>,
}

/// Field name → messages, in the order the server listed the fields.
///
/// Field names are unique. Inserting an existing name keeps its position
/// and replaces its messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrorSet {
    fields: Vec<FieldErrors>,
}

impl FieldErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a 400 response body
    pub fn from_json(body: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn insert(&mut self, field: impl Into<String>, messages: Vec<String>) {
        let field = field.into();
        match self.fields.iter_mut().find(|entry| entry.field == field) {
            Some(entry) => entry.messages = messages,
            None => self.fields.push(FieldErrors { field, messages }),
        }
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.fields
            .iter()
            .find(|entry| entry.field == field)
            .map(|entry| entry.messages.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldErrors> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn message_count(&self) -> usize {
        self.fields.iter().map(|entry| entry.messages.len()).sum()
    }
}

impl<F, M> FromIterator<(F, M)> for FieldErrorSet
where
    F: Into<String>,
    M: IntoIterator,
    M::Item: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (F, M)>>(iter: I) -> Self {
        let mut set = FieldErrorSet::new();
        for (field, messages) in iter {
            set.insert(field, messages.into_iter().map(Into::into).collect());
        }
        set
    }
}

impl<'a> IntoIterator for &'a FieldErrorSet {
    type Item = &'a FieldErrors;
    type IntoIter = std::slice::Iter<'a, FieldErrors>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl Serialize for FieldErrorSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for entry in &self.fields {
            map.serialize_entry(&entry.field, &entry.messages)?;
        }
        map.end()
    }
}

// Visits the object entries directly so key order survives decoding
// without depending on serde_json's map implementation.
struct FieldErrorSetVisitor;

impl<'de> Visitor<'de> for FieldErrorSetVisitor {
    type Value = FieldErrorSet;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object mapping field names to lists of messages")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut set = FieldErrorSet::new();
        while let Some((field, messages)) = access.next_entry::<String, Vec<String>>()? {
            set.insert(field, messages);
        }
        Ok(set)
    }
}

impl<'de> Deserialize<'de> for FieldErrorSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(FieldErrorSetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_server_key_order() {
        let set = FieldErrorSet::from_json(
            r#"{"title": ["a"], "start_date": ["b"], "grade": ["c"]}"#,
        )
        .unwrap();
        let order: Vec<&str> = set.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(order, ["title", "start_date", "grade"]);
    }

    #[test]
    fn duplicate_key_keeps_first_position_last_value() {
        let set = FieldErrorSet::from_json(r#"{"a": ["1"], "b": [], "a": ["2"]}"#).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().next().unwrap().field, "a");
        assert_eq!(set.get("a").unwrap(), ["2".to_string()]);
    }
}
