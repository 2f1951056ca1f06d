//! The `breadcrumbs` array.

use crate::model::{Breadcrumb, BreadcrumbRing};
use crashsnap_document::{Document, DocumentArray};

/// Renders the live breadcrumbs, oldest first.
pub(crate) fn breadcrumbs(ring: &BreadcrumbRing) -> DocumentArray {
    ring.iter().map(breadcrumb).collect()
}

fn breadcrumb(crumb: &Breadcrumb) -> Document {
    let mut doc = Document::new();
    doc.set("name", crumb.name.as_str());
    doc.set("timestamp", crumb.timestamp.as_str());
    doc.set("type", crumb.crumb_type.as_str());

    let mut metadata = Document::new();
    for pair in crumb.metadata() {
        metadata.set(pair.key.as_str(), pair.value.as_str());
    }
    doc.set("metaData", metadata);
    doc
}
