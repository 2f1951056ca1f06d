//! Dotted path parsing.

use crate::error::{DocumentError, DocumentResult};

/// A validated dotted path such as `metaData.device.locale`.
///
/// Every segment is non-empty. The last segment names the key that is
/// written; the preceding segments name the objects leading to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DottedPath<'a> {
    raw: &'a str,
}

impl<'a> DottedPath<'a> {
    /// Parses a dotted path.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidPath`] if the path is empty or has an
    /// empty segment (`"a..b"`, `".a"`, `"a."`).
    pub fn parse(raw: &'a str) -> DocumentResult<Self> {
        if raw.split('.').any(str::is_empty) {
            return Err(DocumentError::invalid_path(raw));
        }
        Ok(Self { raw })
    }

    /// Returns the path as written.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Splits the path into its parent segments and the final key.
    #[must_use]
    pub fn split_last(&self) -> (Vec<&'a str>, &'a str) {
        match self.raw.rsplit_once('.') {
            Some((parents, last)) => (parents.split('.').collect(), last),
            None => (Vec::new(), self.raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_segment() {
        let path = DottedPath::parse("context").unwrap();
        assert_eq!(path.split_last(), (vec![], "context"));
    }

    #[test]
    fn nested_segments() {
        let path = DottedPath::parse("severityReason.attributes.signalType").unwrap();
        assert_eq!(
            path.split_last(),
            (vec!["severityReason", "attributes"], "signalType")
        );
    }

    #[test]
    fn empty_segments_rejected() {
        for raw in ["", ".", "a..b", ".a", "a."] {
            assert!(
                matches!(DottedPath::parse(raw), Err(DocumentError::InvalidPath { .. })),
                "{raw:?} should be rejected"
            );
        }
    }
}
