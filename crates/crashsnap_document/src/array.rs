//! Array documents.

use serde_json::Value;

/// A JSON array under construction.
///
/// Elements keep the order they were appended in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentArray {
    items: Vec<Value>,
}

impl DocumentArray {
    /// Creates an empty array.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the array has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }
}

impl From<DocumentArray> for Value {
    fn from(array: DocumentArray) -> Self {
        Value::Array(array.items)
    }
}

impl<T: Into<Value>> FromIterator<T> for DocumentArray {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}
