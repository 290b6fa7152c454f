//! Code-letter tables for coded sentence fields.
//!
//! Unknown codes never fail: they resolve to the table default, since a
//! garbled classification letter is expected noise on a live feed.

use crate::message::{Iff, TargetStatus};

/// Immutable mapping from a field code to a value, with a fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<T> {
    entries: Vec<(&'static str, T)>,
    default: T,
}

impl<T: Copy> CodeTable<T> {
    pub fn new(entries: Vec<(&'static str, T)>, default: T) -> Self {
        Self { entries, default }
    }

    pub fn resolve(&self, code: &str) -> T {
        self.entries
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, value)| *value)
            .unwrap_or(self.default)
    }

    pub fn default_value(&self) -> T {
        self.default
    }
}

impl CodeTable<TargetStatus> {
    /// TTM target status: `L` lost, `Q` unreliable, `T` tracked.
    ///
    /// Any other letter is reported as unreliable data.
    pub fn target_status() -> Self {
        Self::new(
            vec![
                ("L", TargetStatus::Lost),
                ("Q", TargetStatus::UnreliableData),
                ("T", TargetStatus::Tracked),
            ],
            TargetStatus::UnreliableData,
        )
    }
}

impl CodeTable<Iff> {
    /// TTM identification: `b` friend, `p` foe, `d` unknown.
    pub fn iff() -> Self {
        Self::new(
            vec![("b", Iff::Friend), ("p", Iff::Foe), ("d", Iff::Unknown)],
            Iff::Unknown,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::CodeTable;
    use crate::message::{Iff, TargetStatus};

    #[test]
    fn target_status_codes() {
        let table = CodeTable::target_status();
        assert_eq!(table.resolve("T"), TargetStatus::Tracked);
        assert_eq!(table.resolve("Q"), TargetStatus::UnreliableData);
        assert_eq!(table.resolve("L"), TargetStatus::Lost);
    }

    #[test]
    fn target_status_unknown_defaults_to_unreliable() {
        let table = CodeTable::target_status();
        for code in ["X", "t", "", "LL"] {
            assert_eq!(table.resolve(code), TargetStatus::UnreliableData, "{code}");
        }
    }

    #[test]
    fn iff_codes() {
        let table = CodeTable::iff();
        assert_eq!(table.resolve("b"), Iff::Friend);
        assert_eq!(table.resolve("p"), Iff::Foe);
        assert_eq!(table.resolve("d"), Iff::Unknown);
        assert_eq!(table.resolve("B"), Iff::Unknown);
        assert_eq!(table.resolve(""), Iff::Unknown);
    }

    #[test]
    fn custom_table() {
        let table = CodeTable::new(vec![("A", 1u8)], 0);
        assert_eq!(table.resolve("A"), 1);
        assert_eq!(table.resolve("Z"), table.default_value());
    }
}
