use time::OffsetDateTime;

use super::SentenceDecoder;
use crate::codes::CodeTable;
use crate::message::{Iff, StationMessage, TargetStatus, TargetType, TrackedTarget};
use crate::sentence::layout::{self, TtmLayout};
use crate::sentence::{FieldReader, SentenceError};

/// Tracked target message decoder.
#[derive(Debug, Clone)]
pub struct TtmDecoder {
    layout: TtmLayout,
    status_codes: CodeTable<TargetStatus>,
    iff_codes: CodeTable<Iff>,
}

impl TtmDecoder {
    pub fn new(
        layout: TtmLayout,
        status_codes: CodeTable<TargetStatus>,
        iff_codes: CodeTable<Iff>,
    ) -> Self {
        Self {
            layout,
            status_codes,
            iff_codes,
        }
    }
}

impl Default for TtmDecoder {
    fn default() -> Self {
        Self::new(
            layout::TTM_LAYOUT,
            CodeTable::target_status(),
            CodeTable::iff(),
        )
    }
}

impl SentenceDecoder for TtmDecoder {
    fn type_code(&self) -> &'static str {
        layout::TTM
    }

    fn min_fields(&self) -> usize {
        self.layout.max_index() + 1
    }

    fn decode(
        &self,
        reader: &FieldReader<'_>,
        received_at: OffsetDateTime,
    ) -> Result<Vec<StationMessage>, SentenceError> {
        reader.require_len(self.min_fields())?;
        let l = &self.layout;

        let target = TrackedTarget {
            target_number: reader.read_i32(l.target_number)?,
            distance: reader.read_f64(l.distance)?,
            bearing: reader.read_f64(l.bearing)?,
            course: reader.read_f64(l.course)?,
            speed: reader.read_f64(l.speed)?,
            status: reader.read_code(l.status, &self.status_codes)?,
            iff: reader.read_code(l.iff, &self.iff_codes)?,
            target_type: TargetType::Unknown,
            received_at,
        };
        Ok(vec![StationMessage::TrackedTarget(target)])
    }
}
