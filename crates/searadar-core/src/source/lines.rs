use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::{SentenceSource, SourceError, SourceLine};

/// Splits a buffered reader into lines ending in `\n` or `\r\n`.
///
/// Blank lines are skipped but still counted, so line numbers match the
/// input. A final line without a terminator is returned as-is. A line that
/// is not UTF-8 is consumed and reported as `SourceError::InvalidUtf8`; the
/// next call resumes after it.
pub struct LineReaderSource<R> {
    reader: R,
    line_number: u64,
    buf: Vec<u8>,
}

impl LineReaderSource<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LineReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> SentenceSource for LineReaderSource<R> {
    fn next_line(&mut self) -> Result<Option<SourceLine>, SourceError> {
        loop {
            self.buf.clear();
            if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let text = std::str::from_utf8(strip_terminator(&self.buf)).map_err(|_| {
                SourceError::InvalidUtf8 {
                    line: self.line_number,
                }
            })?;
            if text.trim().is_empty() {
                continue;
            }
            return Ok(Some(SourceLine {
                number: self.line_number,
                text: text.to_string(),
            }));
        }
    }
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
