//! Version 2 payload: the version 1 sections followed by the unhandled-event
//! counter.

use super::layout::{FixedLayout, LayoutReader, LayoutWriter};
use super::sections::{ReportBody, BODY_LEN};
use crate::error::CoreResult;
use crate::model::Report;

impl FixedLayout for Report {
    const ENCODED_LEN: usize = BODY_LEN + 4;

    fn encode(&self, w: &mut LayoutWriter) {
        ReportBody::from(self).encode(w);
        w.put_i32(self.unhandled_events);
    }

    fn decode(r: &mut LayoutReader<'_>) -> CoreResult<Self> {
        let body = ReportBody::decode(r)?;
        let unhandled_events = r.get_i32()?;
        Ok(Self {
            unhandled_events,
            ..Self::from(body)
        })
    }
}
