//! Sentence framing and field access.
//!
//! Follows a layered structure:
//! - `layout`: framing constants and named field positions per type code
//! - `parser`: prefix/checksum stripping and field splitting
//! - `reader`: bounds-checked, typed field reads
//! - `error`: explicit parse errors
//!
//! Nothing here knows what a field means; decoders in `decode` do.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use error::SentenceError;
pub use parser::{RawSentence, extract};
pub use reader::FieldReader;
