//! Defensive normalization of content collections.
//!
//! Configuration arrives as untyped JSON-ish data. [`normalize`] runs once at
//! that boundary and always returns a well-formed [`Entries`] sequence:
//!
//! - absent, `null`, or non-array input becomes an empty sequence
//! - an array keeps every element, in order
//!
//! Only the top-level shape is guarded. An element that is not an object, or
//! whose fields are missing or not strings, is still turned into an entry with
//! empty fields; it is neither repaired nor dropped. Rendering such an entry
//! produces an empty `href`/`src`, which is the observable behavior callers
//! rely on.

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::content::{NavEntry, UpdateEntry};

/// An entry shape that can be read leniently from one sequence element.
pub trait Entry: Clone {
    /// Build an entry from any element. Must not fail.
    fn from_element(element: &Value) -> Self;
}

/// String field of an object element, or empty.
fn text_field(element: &Value, key: &str) -> String {
    element
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

impl Entry for NavEntry {
    fn from_element(element: &Value) -> Self {
        NavEntry {
            label: text_field(element, "label"),
            href: text_field(element, "href"),
        }
    }
}

impl Entry for UpdateEntry {
    fn from_element(element: &Value) -> Self {
        UpdateEntry {
            src: text_field(element, "src"),
            href: text_field(element, "href"),
        }
    }
}

/// An ordered sequence that has already passed normalization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entries<T>(Vec<T>);

impl<T> Entries<T> {
    /// An empty sequence.
    pub fn empty() -> Self {
        Entries(Vec::new())
    }

    /// Borrow the entries as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Take the entries out.
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Default for Entries<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Deref for Entries<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

/// A typed vector is already a valid sequence and passes through unchanged.
impl<T> From<Vec<T>> for Entries<T> {
    fn from(entries: Vec<T>) -> Self {
        Entries(entries)
    }
}

impl<'a, T> IntoIterator for &'a Entries<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Normalize any value into an ordered entry sequence. Total and idempotent.
pub fn normalize<T: Entry>(input: Option<&Value>) -> Entries<T> {
    match input {
        Some(Value::Array(elements)) => Entries(elements.iter().map(T::from_element).collect()),
        Some(other) => {
            tracing::debug!(kind = value_kind(other), "collection is not a sequence, using empty");
            Entries::empty()
        }
        None => {
            tracing::debug!("collection absent, using empty");
            Entries::empty()
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn renormalize<T: Entry + Serialize>(entries: &Entries<T>) -> Entries<T> {
        let value = serde_json::to_value(entries).expect("entries serialize");
        normalize(Some(&value))
    }

    #[test]
    fn absent_input_is_empty() {
        let nav: Entries<NavEntry> = normalize(None);
        assert!(nav.is_empty());
    }

    #[test]
    fn non_sequence_inputs_are_empty() {
        for input in [
            json!(null),
            json!(true),
            json!(42),
            json!("Home"),
            json!({ "label": "Home", "href": "#home" }),
        ] {
            let nav: Entries<NavEntry> = normalize(Some(&input));
            assert!(nav.is_empty(), "expected empty for {input}");
        }
    }

    #[test]
    fn valid_sequence_passes_through() {
        let input = json!([
            { "label": "Home", "href": "#home" },
            { "label": "Events", "href": "#events" },
        ]);
        let nav: Entries<NavEntry> = normalize(Some(&input));
        assert_eq!(
            nav.as_slice(),
            &[NavEntry::new("Home", "#home"), NavEntry::new("Events", "#events")]
        );
    }

    #[test]
    fn malformed_elements_are_kept_with_empty_fields() {
        let input = json!([
            { "src": "/a.jpg" },
            7,
            { "src": 3, "href": "https://example.org" },
        ]);
        let updates: Entries<UpdateEntry> = normalize(Some(&input));
        assert_eq!(updates.len(), 3);
        assert_eq!(updates[0], UpdateEntry::new("/a.jpg", ""));
        assert_eq!(updates[1], UpdateEntry::default());
        assert_eq!(updates[2], UpdateEntry::new("", "https://example.org"));
    }

    #[test]
    fn normalization_is_idempotent() {
        for input in [
            json!(null),
            json!([]),
            json!([{ "label": "Home", "href": "#home" }, "junk", { "label": 1 }]),
        ] {
            let once: Entries<NavEntry> = normalize(Some(&input));
            assert_eq!(renormalize(&once), once);
        }
    }

    #[test]
    fn typed_vec_is_unchanged() {
        let entries = vec![UpdateEntry::new("/a.jpg", "https://example.org")];
        let normalized: Entries<UpdateEntry> = entries.clone().into();
        assert_eq!(normalized.into_vec(), entries);
    }
}
