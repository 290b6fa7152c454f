//! Line sources feeding the converter.
//!
//! All file and reader I/O lives here; the converter only sees complete
//! lines with their terminators removed.

mod lines;

pub use lines::LineReaderSource;

use thiserror::Error;

/// One input line and its 1-based position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: u64,
    pub text: String,
}

pub trait SentenceSource {
    fn next_line(&mut self) -> Result<Option<SourceLine>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: invalid UTF-8")]
    InvalidUtf8 { line: u64 },
}
