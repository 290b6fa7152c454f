use std::str::FromStr;

use super::error::SentenceError;
use super::parser::RawSentence;
use crate::codes::CodeTable;

/// Typed, bounds-checked access to the fields of one sentence.
pub struct FieldReader<'a> {
    type_code: &'a str,
    fields: &'a [&'a str],
}

impl<'a> FieldReader<'a> {
    pub fn new(sentence: &'a RawSentence<'a>) -> Self {
        Self {
            type_code: sentence.type_code(),
            fields: sentence.fields(),
        }
    }

    pub fn type_code(&self) -> &'a str {
        self.type_code
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn require_len(&self, needed: usize) -> Result<(), SentenceError> {
        if self.fields.len() < needed {
            return Err(SentenceError::InsufficientFields {
                type_code: self.type_code.to_string(),
                required: needed,
                actual: self.fields.len(),
            });
        }
        Ok(())
    }

    pub fn read_str(&self, index: usize) -> Result<&'a str, SentenceError> {
        self.fields
            .get(index)
            .copied()
            .ok_or_else(|| SentenceError::InsufficientFields {
                type_code: self.type_code.to_string(),
                required: index + 1,
                actual: self.fields.len(),
            })
    }

    pub fn read_string(&self, index: usize) -> Result<String, SentenceError> {
        self.read_str(index).map(str::to_string)
    }

    pub fn read_f64(&self, index: usize) -> Result<f64, SentenceError> {
        self.read_number(index)
    }

    pub fn read_i32(&self, index: usize) -> Result<i32, SentenceError> {
        self.read_number(index)
    }

    /// Resolve a coded field through `table`; unknown codes map to its default.
    pub fn read_code<T: Copy>(
        &self,
        index: usize,
        table: &CodeTable<T>,
    ) -> Result<T, SentenceError> {
        self.read_str(index).map(|raw| table.resolve(raw))
    }

    fn read_number<T: FromStr>(&self, index: usize) -> Result<T, SentenceError> {
        let raw = self.read_str(index)?;
        raw.trim()
            .parse::<T>()
            .map_err(|_| SentenceError::FieldFormat {
                index,
                raw: raw.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::FieldReader;
    use crate::codes::CodeTable;
    use crate::message::Iff;
    use crate::sentence::error::SentenceError;
    use crate::sentence::parser::extract;

    #[test]
    fn read_numbers() {
        let raw = extract("$RATTM,66,28.71,024.5*00").unwrap();
        let reader = FieldReader::new(&raw);
        assert_eq!(reader.read_i32(1).unwrap(), 66);
        assert_eq!(reader.read_f64(2).unwrap(), 28.71);
        assert_eq!(reader.read_f64(3).unwrap(), 24.5);
    }

    #[test]
    fn read_signed_integer() {
        let raw = extract("$RATTM,-5,+7*00").unwrap();
        let reader = FieldReader::new(&raw);
        assert_eq!(reader.read_i32(1).unwrap(), -5);
        assert_eq!(reader.read_i32(2).unwrap(), 7);
    }

    #[test]
    fn read_number_rejects_empty_field() {
        let raw = extract("$RARSD,50.5,,64.8*00").unwrap();
        let reader = FieldReader::new(&raw);
        let err = reader.read_f64(2).unwrap_err();
        assert_eq!(
            err,
            SentenceError::FieldFormat {
                index: 2,
                raw: String::new()
            }
        );
    }

    #[test]
    fn read_number_rejects_text() {
        let raw = extract("$RATTM,six*00").unwrap();
        let reader = FieldReader::new(&raw);
        let err = reader.read_i32(1).unwrap_err();
        assert!(err.to_string().contains("\"six\""));
    }

    #[test]
    fn read_beyond_fields() {
        let raw = extract("$RAVHW,1.0*00").unwrap();
        let reader = FieldReader::new(&raw);
        let err = reader.read_str(5).unwrap_err();
        assert!(matches!(
            err,
            SentenceError::InsufficientFields {
                required: 6,
                actual: 2,
                ..
            }
        ));
    }

    #[test]
    fn require_len_reports_type_code() {
        let raw = extract("$RATTM,1,2*00").unwrap();
        let reader = FieldReader::new(&raw);
        let err = reader.require_len(13).unwrap_err();
        assert_eq!(
            err,
            SentenceError::InsufficientFields {
                type_code: "TTM".to_string(),
                required: 13,
                actual: 3
            }
        );
    }

    #[test]
    fn read_code_uses_table_default() {
        let raw = extract("$RATTM,b,x*00").unwrap();
        let reader = FieldReader::new(&raw);
        let table = CodeTable::iff();
        assert_eq!(reader.read_code(1, &table).unwrap(), Iff::Friend);
        assert_eq!(reader.read_code(2, &table).unwrap(), Iff::Unknown);
    }
}
