use super::error::SentenceError;
use super::layout;

/// One sentence split into its fields; `fields[0]` is the type code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSentence<'a> {
    fields: Vec<&'a str>,
}

impl<'a> RawSentence<'a> {
    pub fn type_code(&self) -> &'a str {
        self.fields[0]
    }

    pub fn fields(&self) -> &[&'a str] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Strip the sentence prefix and checksum, then split the payload into fields.
///
/// Empty fields are preserved, so `a,,b` yields three fields. The checksum
/// after `*` is not verified.
///
/// # Examples
/// ```
/// use searadar_core::extract;
///
/// let raw = extract("$RAVHW,115.6,T,,,46.0,N,,*71").unwrap();
/// assert_eq!(raw.type_code(), "VHW");
/// assert_eq!(raw.len(), 9);
/// assert_eq!(raw.fields()[3], "");
/// ```
pub fn extract(line: &str) -> Result<RawSentence<'_>, SentenceError> {
    let end = line
        .find(layout::CHECKSUM_DELIMITER)
        .ok_or(SentenceError::Malformed {
            reason: "missing checksum delimiter",
        })?;
    if end < layout::PREFIX_LEN {
        return Err(SentenceError::Malformed {
            reason: "checksum delimiter inside sentence prefix",
        });
    }
    let payload = line
        .get(layout::PREFIX_LEN..end)
        .ok_or(SentenceError::Malformed {
            reason: "sentence prefix is not ASCII",
        })?
        .trim();
    if payload.is_empty() {
        return Err(SentenceError::Malformed {
            reason: "empty payload",
        });
    }

    // `split` yields at least one item, so `type_code` always has a field 0.
    let fields: Vec<&str> = payload.split(layout::FIELD_SEPARATOR).collect();
    Ok(RawSentence { fields })
}

#[cfg(test)]
mod tests {
    use super::extract;
    use crate::sentence::error::SentenceError;

    #[test]
    fn extract_ttm_fields() {
        let raw = extract("$RATTM,66,28.71,341.1,T,57.6,024.5,T,0.4,4.1,N,b,L,,457362,А*42").unwrap();
        assert_eq!(raw.type_code(), "TTM");
        assert_eq!(raw.len(), 16);
        assert_eq!(raw.fields()[1], "66");
        assert_eq!(raw.fields()[12], "L");
        assert_eq!(raw.fields()[13], "");
        assert_eq!(raw.fields()[15], "А");
    }

    #[test]
    fn extract_keeps_trailing_empty_fields() {
        let raw = extract("$RAVHW,115.6,T,,,46.0,N,,*71").unwrap();
        assert_eq!(raw.fields(), &["VHW", "115.6", "T", "", "", "46.0", "N", "", ""]);
    }

    #[test]
    fn extract_trims_payload() {
        let raw = extract("$RA  RSD,1,2 *00").unwrap();
        assert_eq!(raw.type_code(), "RSD");
        assert_eq!(raw.fields()[2], "2");
    }

    #[test]
    fn extract_payload_without_separator_is_type_code_only() {
        let raw = extract("$RAXYZ*00").unwrap();
        assert_eq!(raw.fields(), &["XYZ"]);
        assert_eq!(raw.type_code(), "XYZ");
    }

    #[test]
    fn extract_missing_delimiter() {
        let err = extract("$RATTM,1,2,3").unwrap_err();
        assert!(matches!(err, SentenceError::Malformed { .. }));
        assert!(err.to_string().contains("missing checksum delimiter"));
    }

    #[test]
    fn extract_empty_payload() {
        let err = extract("$RA   *00").unwrap_err();
        assert_eq!(
            err,
            SentenceError::Malformed {
                reason: "empty payload"
            }
        );
    }

    #[test]
    fn extract_delimiter_in_prefix() {
        let err = extract("$*ATTM,1").unwrap_err();
        assert!(matches!(err, SentenceError::Malformed { .. }));
    }

    #[test]
    fn extract_non_ascii_prefix() {
        let err = extract("$RР,TTM*00").unwrap_err();
        assert!(matches!(err, SentenceError::Malformed { .. }));
    }
}
