//! Line-by-line conversion of a whole input.

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clock::Clock;
use crate::converter::SentenceConverter;
use crate::message::StationMessage;
use crate::sentence::SentenceError;
use crate::source::{SentenceSource, SourceError, SourceLine};

/// What to do with a line that fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamMode {
    /// Log and record the line, then continue.
    #[default]
    Lenient,
    /// Stop at the first failing line.
    Strict,
}

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
    #[error("line {line}: {source}")]
    Sentence {
        line: u64,
        #[source]
        source: SentenceError,
    },
}

/// A line dropped in lenient mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedLine {
    pub line: u64,
    pub error: String,
}

/// Result of converting a whole source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamReport {
    /// Non-blank lines read.
    pub lines_total: u64,
    pub messages: Vec<StationMessage>,
    pub rejected: Vec<RejectedLine>,
}

impl StreamReport {
    pub fn invalid_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_invalid()).count()
    }
}

/// Convert every line of `source`.
///
/// # Examples
/// ```
/// use std::io::Cursor;
///
/// use searadar_core::{
///     DecoderRegistry, LineReaderSource, SentenceConverter, StreamMode, convert_source,
/// };
///
/// let converter = SentenceConverter::new(DecoderRegistry::base());
/// let input = "$RAVHW,115.6,T,,,46.0,N,,*71\r\nnot a sentence\n";
/// let source = LineReaderSource::new(Cursor::new(input));
/// let report = convert_source(&converter, source, StreamMode::Lenient)?;
/// assert_eq!(report.messages.len(), 1);
/// assert_eq!(report.rejected[0].line, 2);
/// # Ok::<(), searadar_core::StreamError>(())
/// ```
pub fn convert_source<C, S>(
    converter: &SentenceConverter<C>,
    mut source: S,
    mode: StreamMode,
) -> Result<StreamReport, StreamError>
where
    C: Clock,
    S: SentenceSource,
{
    let mut report = StreamReport::default();

    loop {
        let SourceLine { number, text } = match source.next_line() {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(SourceError::InvalidUtf8 { line }) if mode == StreamMode::Lenient => {
                warn!("dropping line {line}: invalid UTF-8");
                report.lines_total += 1;
                report.rejected.push(RejectedLine {
                    line,
                    error: "invalid UTF-8".to_string(),
                });
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        report.lines_total += 1;
        match converter.convert(&text) {
            Ok(messages) => report.messages.extend(messages),
            Err(err) if mode == StreamMode::Strict => {
                return Err(StreamError::Sentence {
                    line: number,
                    source: err,
                });
            }
            Err(err) => {
                warn!("dropping line {number}: {err}");
                report.rejected.push(RejectedLine {
                    line: number,
                    error: err.to_string(),
                });
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{RejectedLine, StreamError, StreamMode, convert_source};
    use crate::clock::FixedClock;
    use crate::converter::SentenceConverter;
    use crate::registry::DecoderRegistry;
    use crate::sentence::SentenceError;
    use crate::source::{LineReaderSource, SourceError};

    const INPUT: &str = "$RATTM,66,28.71,341.1,T,57.6,024.5,T,0.4,4.1,N,b,L,,457362,А*42\n\
                         $RATTM,66\n\
                         $RARSD,50.5,309.9,64.8,132.3,,,,,52.6,155.0,999.0,K,N,S*28\n\
                         $GPGLL,1,2*00\n\
                         $RAVHW,115.6,T,,,46.0,N,,*71\n";

    fn converter() -> SentenceConverter<FixedClock> {
        SentenceConverter::with_clock(DecoderRegistry::base(), FixedClock::default())
    }

    #[test]
    fn lenient_mode_drops_bad_lines() {
        let source = LineReaderSource::new(Cursor::new(INPUT));
        let report = convert_source(&converter(), source, StreamMode::Lenient).unwrap();
        assert_eq!(report.lines_total, 5);
        assert_eq!(report.messages.len(), 3);
        assert_eq!(report.invalid_count(), 1);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].line, 2);
        assert!(report.rejected[0].error.contains("malformed sentence"));
    }

    #[test]
    fn strict_mode_stops_at_first_bad_line() {
        let source = LineReaderSource::new(Cursor::new(INPUT));
        let err = convert_source(&converter(), source, StreamMode::Strict).unwrap_err();
        match err {
            StreamError::Sentence { line, source } => {
                assert_eq!(line, 2);
                assert!(matches!(source, SentenceError::Malformed { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn lenient_mode_skips_non_utf8_line() {
        let input = b"$RAVHW,115.6,T,,,46.0,N,,*71\n$RA\xff*00\n$RAVHW,115.6,T,,,46.0,N,,*71\n";
        let source = LineReaderSource::new(Cursor::new(input.to_vec()));
        let report = convert_source(&converter(), source, StreamMode::Lenient).unwrap();
        assert_eq!(report.lines_total, 3);
        assert_eq!(report.messages.len(), 2);
        assert_eq!(
            report.rejected,
            vec![RejectedLine {
                line: 2,
                error: "invalid UTF-8".to_string()
            }]
        );
    }

    #[test]
    fn strict_mode_fails_on_non_utf8_line() {
        let source = LineReaderSource::new(Cursor::new(b"$RA\xff*00\n".to_vec()));
        let err = convert_source(&converter(), source, StreamMode::Strict).unwrap_err();
        assert!(matches!(
            err,
            StreamError::Source(SourceError::InvalidUtf8 { line: 1 })
        ));
    }

    #[test]
    fn empty_input() {
        let source = LineReaderSource::new(Cursor::new(""));
        let report = convert_source(&converter(), source, StreamMode::Strict).unwrap();
        assert_eq!(report.lines_total, 0);
        assert!(report.messages.is_empty());
    }
}
