use thiserror::Error;

/// Errors returned by sentence extraction and field decoding.
///
/// Unsupported type codes are not errors; the converter yields no messages
/// for them instead.
///
/// # Examples
/// ```
/// use searadar_core::SentenceError;
///
/// let err = SentenceError::InsufficientFields {
///     type_code: "TTM".to_string(),
///     required: 13,
///     actual: 4,
/// };
/// assert!(err.to_string().contains("need 13 fields"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SentenceError {
    #[error("malformed sentence: {reason}")]
    Malformed { reason: &'static str },
    #[error("{type_code} sentence too short: need {required} fields, got {actual}")]
    InsufficientFields {
        type_code: String,
        required: usize,
        actual: usize,
    },
    #[error("invalid numeric field {index}: {raw:?}")]
    FieldFormat { index: usize, raw: String },
}
