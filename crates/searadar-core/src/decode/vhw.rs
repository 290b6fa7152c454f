use time::OffsetDateTime;

use super::SentenceDecoder;
use crate::message::{StationMessage, WaterSpeedHeading};
use crate::sentence::layout::{self, VhwLayout};
use crate::sentence::{FieldReader, SentenceError};

/// Water speed and heading decoder (MR-231 only).
#[derive(Debug, Clone)]
pub struct VhwDecoder {
    layout: VhwLayout,
}

impl VhwDecoder {
    pub fn new(layout: VhwLayout) -> Self {
        Self { layout }
    }
}

impl Default for VhwDecoder {
    fn default() -> Self {
        Self::new(layout::VHW_LAYOUT)
    }
}

impl SentenceDecoder for VhwDecoder {
    fn type_code(&self) -> &'static str {
        layout::VHW
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

        let heading = WaterSpeedHeading {
            course: reader.read_f64(l.course)?,
            course_attr: reader.read_string(l.course_attr)?,
            speed: reader.read_f64(l.speed)?,
            speed_unit: reader.read_string(l.speed_unit)?,
            received_at,
        };
        Ok(vec![StationMessage::WaterSpeedHeading(heading)])
    }
}

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;

    use super::VhwDecoder;
    use crate::decode::SentenceDecoder;
    use crate::message::StationMessage;
    use crate::sentence::{FieldReader, SentenceError, extract};

    #[test]
    fn decode_control_example() {
        let raw = extract("$RAVHW,115.6,T,,,46.0,N,,*71").unwrap();
        let messages = VhwDecoder::default()
            .decode(&FieldReader::new(&raw), OffsetDateTime::UNIX_EPOCH)
            .unwrap();
        let StationMessage::WaterSpeedHeading(heading) = &messages[0] else {
            panic!("expected water speed heading, got {:?}", messages[0]);
        };
        assert_eq!(heading.course, 115.6);
        assert_eq!(heading.course_attr, "T");
        assert_eq!(heading.speed, 46.0);
        assert_eq!(heading.speed_unit, "N");
    }

    #[test]
    fn decode_truncated() {
        let raw = extract("$RAVHW,115.6,T,,,46.0*71").unwrap();
        let err = VhwDecoder::default()
            .decode(&FieldReader::new(&raw), OffsetDateTime::UNIX_EPOCH)
            .unwrap_err();
        assert!(matches!(err, SentenceError::InsufficientFields { .. }));
    }
}
