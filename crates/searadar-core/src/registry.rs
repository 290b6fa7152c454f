//! Type code to decoder/validator lookup.
//!
//! Both station registries start from the same core set (TTM, RSD); the
//! MR-231 registry adds VHW on top. Registries are built once and only
//! read afterwards.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::decode::{RsdDecoder, SentenceDecoder, TtmDecoder, VhwDecoder};
use crate::validate::{DistanceScaleValidator, Validator};

/// A decoder plus the validators run on its output, in order.
#[derive(Clone)]
pub struct RegistryEntry {
    pub decoder: Arc<dyn SentenceDecoder>,
    pub validators: Vec<Arc<dyn Validator>>,
}

impl std::fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("type_code", &self.decoder.type_code())
            .field("validators", &self.validators.len())
            .finish()
    }
}

/// Registry of supported sentence types.
///
/// # Examples
/// ```
/// use searadar_core::DecoderRegistry;
///
/// let base = DecoderRegistry::base();
/// assert!(base.lookup("VHW").is_some());
///
/// let extended = DecoderRegistry::extended();
/// assert!(extended.lookup("VHW").is_none());
/// assert_eq!(extended.type_codes(), vec!["RSD", "TTM"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DecoderRegistry {
    entries: BTreeMap<&'static str, RegistryEntry>,
}

impl DecoderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sentence types shared by every station variant.
    pub fn core() -> Self {
        Self::new()
            .register(TtmDecoder::default(), Vec::new())
            .register(
                RsdDecoder::default(),
                vec![Arc::new(DistanceScaleValidator::default()) as Arc<dyn Validator>],
            )
    }

    /// MR-231: TTM, RSD and VHW.
    pub fn base() -> Self {
        Self::core().register(VhwDecoder::default(), Vec::new())
    }

    /// MR-231-3: TTM and RSD only.
    pub fn extended() -> Self {
        Self::core()
    }

    /// Add or replace the entry for `decoder`'s type code.
    pub fn register<D>(mut self, decoder: D, validators: Vec<Arc<dyn Validator>>) -> Self
    where
        D: SentenceDecoder + 'static,
    {
        let decoder: Arc<dyn SentenceDecoder> = Arc::new(decoder);
        self.entries.insert(
            decoder.type_code(),
            RegistryEntry {
                decoder,
                validators,
            },
        );
        self
    }

    /// Append a validator to an already registered type; unknown codes are ignored.
    pub fn with_validator<V>(mut self, type_code: &str, validator: V) -> Self
    where
        V: Validator + 'static,
    {
        if let Some(entry) = self.entries.get_mut(type_code) {
            entry.validators.push(Arc::new(validator));
        }
        self
    }

    pub fn lookup(&self, type_code: &str) -> Option<&RegistryEntry> {
        self.entries.get(type_code)
    }

    /// Supported type codes in sorted order.
    pub fn type_codes(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }
}
