use time::OffsetDateTime;

use super::SentenceDecoder;
use crate::message::{RadarSystemData, StationMessage};
use crate::sentence::layout::{self, RsdLayout};
use crate::sentence::{FieldReader, SentenceError};

/// Radar system data decoder. Distance scale legality is checked later by
/// `validate::DistanceScaleValidator`.
#[derive(Debug, Clone)]
pub struct RsdDecoder {
    layout: RsdLayout,
}

impl RsdDecoder {
    pub fn new(layout: RsdLayout) -> Self {
        Self { layout }
    }
}

impl Default for RsdDecoder {
    fn default() -> Self {
        Self::new(layout::RSD_LAYOUT)
    }
}

impl SentenceDecoder for RsdDecoder {
    fn type_code(&self) -> &'static str {
        layout::RSD
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

        let data = RadarSystemData {
            initial_distance: reader.read_f64(l.initial_distance)?,
            initial_bearing: reader.read_f64(l.initial_bearing)?,
            moving_circle_of_distance: reader.read_f64(l.moving_circle_of_distance)?,
            bearing: reader.read_f64(l.bearing)?,
            distance_from_ship: reader.read_f64(l.distance_from_ship)?,
            bearing2: reader.read_f64(l.bearing2)?,
            distance_scale: reader.read_f64(l.distance_scale)?,
            distance_unit: reader.read_string(l.distance_unit)?,
            display_orientation: reader.read_string(l.display_orientation)?,
            working_mode: reader.read_string(l.working_mode)?,
            received_at,
        };
        Ok(vec![StationMessage::RadarSystemData(data)])
    }
}
