//! Searadar core library: radar station sentence conversion.
//!
//! Lines emitted by MR-231 family radar stations are turned into typed
//! station messages. The pipeline is: `sentence` extraction and typed
//! field reads -> per-type decoders (`decode`) -> `validate` checks ->
//! output messages. A `DecoderRegistry` decides which type codes a station
//! understands; `SentenceConverter` ties the stages together.
//!
//! Invariants:
//! - Conversion is pure apart from the receipt timestamp, which comes from
//!   an injectable `Clock`.
//! - Unsupported type codes produce no messages and no error.
//! - Domain validation failures are output as `StationMessage::Invalid`,
//!   never as errors.
//!
//! I/O is limited to the `source` module, which frames lines for the
//! stream layer.
//!
//! # Examples
//! ```
//! use searadar_core::{StationMessage, StationType};
//!
//! let converter = StationType::Mr231.create_converter();
//! let messages =
//!     converter.convert("$RATTM,66,28.71,341.1,T,57.6,024.5,T,0.4,4.1,N,b,L,,457362,А*42")?;
//! match &messages[0] {
//!     StationMessage::TrackedTarget(target) => assert_eq!(target.target_number, 66),
//!     other => panic!("unexpected message: {other:?}"),
//! }
//! # Ok::<(), searadar_core::SentenceError>(())
//! ```

mod clock;
mod codes;
mod converter;
pub mod decode;
mod message;
mod registry;
pub mod sentence;
mod source;
mod station;
mod stream;
mod validate;

pub use clock::{Clock, FixedClock, SystemClock};
pub use codes::CodeTable;
pub use converter::SentenceConverter;
pub use decode::SentenceDecoder;
pub use message::{
    Iff, InvalidMessage, RadarSystemData, StationMessage, TargetStatus, TargetType,
    TrackedTarget, WaterSpeedHeading,
};
pub use registry::{DecoderRegistry, RegistryEntry};
pub use sentence::{FieldReader, RawSentence, SentenceError, extract};
pub use source::{LineReaderSource, SentenceSource, SourceError, SourceLine};
pub use station::{StationType, UnknownStationType};
pub use stream::{RejectedLine, StreamError, StreamMode, StreamReport, convert_source};
pub use validate::{DISTANCE_SCALES, DistanceScaleValidator, Validator, run_validators};
