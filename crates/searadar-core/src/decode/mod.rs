//! Per-type sentence decoders.
//!
//! Each decoder owns its field layout and any code tables it needs, checks
//! the field count up front and reads fields only through `FieldReader`.

use time::OffsetDateTime;

use crate::message::StationMessage;
use crate::sentence::{FieldReader, SentenceError};

pub mod rsd;
pub mod ttm;
pub mod vhw;

pub use rsd::RsdDecoder;
pub use ttm::TtmDecoder;
pub use vhw::VhwDecoder;

/// Maps the fields of one sentence type to domain messages.
///
/// Decoders return a list so a single sentence may carry several messages;
/// every current decoder returns exactly one.
pub trait SentenceDecoder: Send + Sync {
    /// Type code this decoder handles (e.g. `TTM`).
    fn type_code(&self) -> &'static str;

    /// Minimum field count, type code included.
    fn min_fields(&self) -> usize;

    fn decode(
        &self,
        reader: &FieldReader<'_>,
        received_at: OffsetDateTime,
    ) -> Result<Vec<StationMessage>, SentenceError>;
}
