//! Custom metadata attached to a report.

use super::bounded::{BoundedStr, BoundedVec, CapacityExceeded};
use super::METADATA_MAX;

/// A typed metadata value.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    /// A boolean.
    Bool(bool),
    /// A short string.
    Text(BoundedStr<64>),
    /// A number.
    Number(f64),
}

/// A single `section.name = value` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataEntry {
    /// Section (tab) the entry belongs to.
    pub section: BoundedStr<32>,
    /// Entry name within the section.
    pub name: BoundedStr<32>,
    /// The value.
    pub value: MetadataValue,
}

/// An ordered, capacity-bounded list of metadata entries.
///
/// Duplicate `section.name` pairs are kept; when rendered, the later entry
/// wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    entries: BoundedVec<MetadataEntry, METADATA_MAX>,
}

impl Metadata {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityExceeded`] when the list already holds
    /// [`METADATA_MAX`] entries.
    pub fn add(&mut self, section: &str, name: &str, value: MetadataValue) -> Result<(), CapacityExceeded> {
        self.entries.try_push(MetadataEntry {
            section: BoundedStr::new(section),
            name: BoundedStr::new(name),
            value,
        })
    }

    /// Appends a boolean entry.
    ///
    /// # Errors
    ///
    /// See [`Metadata::add`].
    pub fn add_bool(&mut self, section: &str, name: &str, value: bool) -> Result<(), CapacityExceeded> {
        self.add(section, name, MetadataValue::Bool(value))
    }

    /// Appends a string entry, truncating the value to fit.
    ///
    /// # Errors
    ///
    /// See [`Metadata::add`].
    pub fn add_text(&mut self, section: &str, name: &str, value: &str) -> Result<(), CapacityExceeded> {
        self.add(section, name, MetadataValue::Text(BoundedStr::new(value)))
    }

    /// Appends a numeric entry.
    ///
    /// # Errors
    ///
    /// See [`Metadata::add`].
    pub fn add_number(&mut self, section: &str, name: &str, value: f64) -> Result<(), CapacityExceeded> {
        self.add(section, name, MetadataValue::Number(value))
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, MetadataEntry> {
        self.entries.iter()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries(&self) -> &BoundedVec<MetadataEntry, METADATA_MAX> {
        &self.entries
    }

    pub(crate) fn from_entries(entries: BoundedVec<MetadataEntry, METADATA_MAX>) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_keep_order_and_type() {
        let mut metadata = Metadata::new();
        metadata.add_bool("flags", "beta", true).unwrap();
        metadata.add_text("account", "plan", "pro").unwrap();
        metadata.add_number("account", "seats", 12.0).unwrap();

        let values: Vec<_> = metadata.iter().map(|e| e.value.clone()).collect();
        assert_eq!(
            values,
            vec![
                MetadataValue::Bool(true),
                MetadataValue::Text(BoundedStr::new("pro")),
                MetadataValue::Number(12.0),
            ]
        );
        assert_eq!(metadata.iter().next().unwrap().section, "flags");
    }

    #[test]
    fn capacity_is_enforced() {
        let mut metadata = Metadata::new();
        for i in 0..METADATA_MAX {
            metadata.add_number("bulk", &format!("n{i}"), i as f64).unwrap();
        }
        assert!(metadata.add_bool("bulk", "overflow", true).is_err());
        assert_eq!(metadata.len(), METADATA_MAX);
    }
}
