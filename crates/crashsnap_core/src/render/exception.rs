//! The `exceptions` array.

use crate::model::{Exception, StackFrame};
use crashsnap_document::{Document, DocumentArray};

/// Exception type reported for native crashes.
const NATIVE_EXCEPTION_TYPE: &str = "c";

/// Renders the single-entry `exceptions` array.
pub(crate) fn exceptions(exception: &Exception) -> DocumentArray {
    let mut entry = Document::new();
    entry.set("errorClass", exception.name.as_str());
    entry.set("message", exception.message.as_str());
    entry.set("type", NATIVE_EXCEPTION_TYPE);
    entry.set(
        "stacktrace",
        exception.frames.iter().map(frame).collect::<DocumentArray>(),
    );
    std::iter::once(entry).collect()
}

fn frame(frame: &StackFrame) -> Document {
    let mut doc = Document::new();
    doc.set("frameAddress", frame.frame_address);
    doc.set("symbolAddress", frame.symbol_address);
    doc.set("loadAddress", frame.load_address);
    doc.set("lineNumber", frame.line_number);
    if !frame.filename.is_empty() {
        doc.set("file", frame.filename.as_str());
    }
    if frame.method.is_empty() {
        doc.set("method", format!("0x{:x}", frame.frame_address));
    } else {
        doc.set("method", frame.method.as_str());
    }
    doc
}
