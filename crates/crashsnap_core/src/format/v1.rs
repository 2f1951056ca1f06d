//! Version 1 payload: every section, without the unhandled-event counter.

use super::layout::{FixedLayout, LayoutReader, LayoutWriter};
use super::sections::{ReportBody, BODY_LEN};
use crate::error::CoreResult;
use crate::model::LegacyReport;

impl FixedLayout for LegacyReport {
    const ENCODED_LEN: usize = BODY_LEN;

    fn encode(&self, w: &mut LayoutWriter) {
        ReportBody::from(self).encode(w);
    }

    fn decode(r: &mut LayoutReader<'_>) -> CoreResult<Self> {
        ReportBody::decode(r)
    }
}
