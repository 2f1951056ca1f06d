//! Severity and handled-state fields of a rendered event.

use super::put;
use crate::model::Report;
use crashsnap_document::Document;

/// Writes `severity`, `unhandled` and `severityReason` for a report.
///
/// How a report is classified depends on what captured it. Native crash
/// reports come from signal handlers and use [`SignalHandledState`]; other
/// capture paths can supply their own implementation to
/// [`Renderer::with_handled_state`](super::Renderer::with_handled_state).
pub trait HandledState {
    /// Writes the handled-state fields into `event`.
    fn write(&self, report: &Report, event: &mut Document);
}

/// Handled state of a report captured by a signal handler: always
/// unhandled, with the signal name as the reason.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalHandledState;

impl HandledState for SignalHandledState {
    fn write(&self, report: &Report, event: &mut Document) {
        event.set("severity", report.severity.as_str());
        put(event, "unhandled", true);
        put(event, "severityReason.type", "signal");
        put(
            event,
            "severityReason.attributes.signalType",
            report.exception.name.as_str(),
        );
    }
}
