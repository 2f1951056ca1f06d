//! Conversion of a report into the JSON event document the ingestion
//! service accepts.
//!
//! Rendering is total: every report value produces a document. Fixed paths
//! cannot collide. Custom metadata is written last, and an entry whose path
//! runs through an existing non-object value (or has an empty segment) is
//! skipped.
//!
//! Top-level keys appear in this order: `context`, `severity`, `unhandled`,
//! `severityReason`, `app`, `metaData`, `device`, `user`, `session`,
//! `exceptions`, `breadcrumbs`.

mod breadcrumbs;
mod event;
mod exception;
mod handled;

pub use handled::{HandledState, SignalHandledState};

use crate::config::Config;
use crate::model::Report;
use crashsnap_document::{Document, Value};
use tracing::trace;

/// Builds event documents from reports.
#[derive(Debug, Clone, Default)]
pub struct Renderer<H = SignalHandledState> {
    handled: H,
    pretty: bool,
}

impl Renderer {
    /// Creates a renderer for signal-captured reports with compact output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer configured from `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new().pretty(config.pretty)
    }
}

impl<H: HandledState> Renderer<H> {
    /// Creates a renderer that classifies reports with `handled`.
    #[must_use]
    pub fn with_handled_state(handled: H) -> Self {
        Self {
            handled,
            pretty: false,
        }
    }

    /// Sets whether [`Renderer::render`] pretty-prints.
    #[must_use]
    pub fn pretty(mut self, value: bool) -> Self {
        self.pretty = value;
        self
    }

    /// Builds the event document for `report`.
    #[must_use]
    pub fn render_document(&self, report: &Report) -> Document {
        let mut doc = Document::new();
        event::context(report, &mut doc);
        self.handled.write(report, &mut doc);
        event::app(&report.app, &mut doc);
        event::app_metadata(&report.app, &mut doc);
        event::device(&report.device, &mut doc);
        event::device_metadata(&report.device, &mut doc);
        event::custom_metadata(&report.metadata, &mut doc);
        event::user(&report.user, &mut doc);
        event::session(report, &mut doc);
        doc.set("exceptions", exception::exceptions(&report.exception));
        doc.set("breadcrumbs", breadcrumbs::breadcrumbs(&report.breadcrumbs));
        doc
    }

    /// Renders `report` as JSON text.
    #[must_use]
    pub fn render(&self, report: &Report) -> String {
        let doc = self.render_document(report);
        if self.pretty {
            doc.to_pretty_text()
        } else {
            doc.to_text()
        }
    }
}

/// Builds the event document for a signal-captured report.
#[must_use]
pub fn render_document(report: &Report) -> Document {
    Renderer::new().render_document(report)
}

/// Renders a signal-captured report as compact JSON text.
#[must_use]
pub fn render(report: &Report) -> String {
    Renderer::new().render(report)
}

/// Writes `value` at a dotted path, skipping paths that cannot be written.
pub(crate) fn put(doc: &mut Document, path: &str, value: impl Into<Value>) {
    if let Err(err) = doc.dotset(path, value) {
        trace!(%path, %err, "skipping document field");
    }
}
