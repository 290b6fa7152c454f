//! Sentence-to-message conversion entry point.

use log::{debug, trace};

use crate::clock::{Clock, SystemClock};
use crate::message::StationMessage;
use crate::registry::DecoderRegistry;
use crate::sentence::{FieldReader, SentenceError, extract};
use crate::validate::run_validators;

/// Converts sentence lines into station messages using one registry.
///
/// Conversion holds no state between calls; a converter can be shared
/// across threads.
///
/// # Examples
/// ```
/// use searadar_core::{DecoderRegistry, SentenceConverter, StationMessage};
///
/// let converter = SentenceConverter::new(DecoderRegistry::base());
/// let messages = converter.convert("$RAVHW,115.6,T,,,46.0,N,,*71")?;
/// assert!(matches!(messages[0], StationMessage::WaterSpeedHeading(_)));
/// # Ok::<(), searadar_core::SentenceError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SentenceConverter<C = SystemClock> {
    registry: DecoderRegistry,
    clock: C,
}

impl SentenceConverter<SystemClock> {
    pub fn new(registry: DecoderRegistry) -> Self {
        Self::with_clock(registry, SystemClock)
    }
}

impl<C: Clock> SentenceConverter<C> {
    pub fn with_clock(registry: DecoderRegistry, clock: C) -> Self {
        Self { registry, clock }
    }

    pub fn registry(&self) -> &DecoderRegistry {
        &self.registry
    }

    /// Convert one line.
    ///
    /// Returns an empty list for unsupported type codes. A decoded message
    /// that fails validation is replaced by `StationMessage::Invalid`.
    pub fn convert(&self, line: &str) -> Result<Vec<StationMessage>, SentenceError> {
        let raw = extract(line)?;
        let Some(entry) = self.registry.lookup(raw.type_code()) else {
            debug!("ignoring unsupported sentence type {:?}", raw.type_code());
            return Ok(Vec::new());
        };

        let reader = FieldReader::new(&raw);
        let decoded = entry.decoder.decode(&reader, self.clock.now())?;
        let messages = decoded
            .into_iter()
            .map(|message| match run_validators(&entry.validators, &message) {
                Some(invalid) => {
                    debug!("{} rejected: {}", raw.type_code(), invalid.info);
                    StationMessage::Invalid(invalid)
                }
                None => message,
            })
            .collect::<Vec<_>>();
        trace!("{} -> {} message(s)", raw.type_code(), messages.len());
        Ok(messages)
    }
}
