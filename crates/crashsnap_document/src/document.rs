//! Object documents with dotted-path writes.

use crate::error::{DocumentError, DocumentResult};
use crate::path::DottedPath;
use serde_json::{Map, Value};
use std::fmt;

/// A JSON object under construction.
///
/// Keys keep insertion order. Writing to a dotted path creates every missing
/// intermediate object on first use, so `dotset("a.b.c", 1)` on an empty
/// document yields `{"a":{"b":{"c":1}}}`. Writing the same path twice
/// replaces the earlier value in place.
///
/// The [`fmt::Display`] impl renders compact text; the alternate form
/// (`{:#}`) renders pretty text with two-space indentation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: Map<String, Value>,
}

impl Document {
    /// Creates an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a top-level key. The key is taken literally; dots are not split.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.root.insert(key.to_string(), value.into());
    }

    /// Sets a value at a dotted path, creating intermediate objects.
    ///
    /// # Errors
    ///
    /// - [`DocumentError::InvalidPath`] if the path has an empty segment
    /// - [`DocumentError::PathConflict`] if an intermediate segment already
    ///   holds a value that is not an object; the document is left unchanged
    pub fn dotset(&mut self, path: &str, value: impl Into<Value>) -> DocumentResult<()> {
        let path = DottedPath::parse(path)?;
        let (parents, last) = path.split_last();

        if let Some(segment) = self.first_conflict(&parents) {
            return Err(DocumentError::path_conflict(path.as_str(), segment));
        }

        let mut current = &mut self.root;
        for segment in parents {
            let entry = current
                .entry(segment)
                .or_insert_with(|| Value::Object(Map::new()));
            current = match entry {
                Value::Object(map) => map,
                _ => return Err(DocumentError::path_conflict(path.as_str(), segment)),
            };
        }
        current.insert(last.to_string(), value.into());
        Ok(())
    }

    // The first parent segment that exists but is not an object.
    fn first_conflict<'p>(&self, parents: &[&'p str]) -> Option<&'p str> {
        let mut current = &self.root;
        for segment in parents {
            match current.get(*segment) {
                None => return None,
                Some(Value::Object(map)) => current = map,
                Some(_) => return Some(*segment),
            }
        }
        None
    }

    /// Returns the value stored under a top-level key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Returns the value stored at a dotted path.
    #[must_use]
    pub fn dotget(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.root.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Returns `true` if a value exists at the dotted path.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.dotget(path).is_some()
    }

    /// Returns the number of top-level keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Returns `true` if the document has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Renders compact JSON text.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Renders pretty-printed JSON text.
    #[must_use]
    pub fn to_pretty_text(&self) -> String {
        format!("{self:#}")
    }

    /// Consumes the document and returns it as a JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.root)
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        doc.into_value()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = if f.alternate() {
            serde_json::to_string_pretty(&self.root)
        } else {
            serde_json::to_string(&self.root)
        }
        .map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
