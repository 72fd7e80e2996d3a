//! Custom option resolution.
//!
//! protoc hands custom options to plugins as unknown fields inside the
//! serialized `MessageOptions` / `FieldOptions`. The generator keeps those
//! bytes untouched in an [`OptionSet`] and walks them on demand for the
//! extension it is interested in.

use crate::error::OptionError;
use prost::encoding::{self, DecodeContext, WireType};

/// Message-level flag exempting a message from detection and enforcement.
pub const IGNORE: OptionKey = OptionKey::new("entity.ignore", 51001);

/// Field-level flag marking the field as the message's entity identifier.
pub const IDENTIFIER: OptionKey = OptionKey::new("entity.identifier", 51002);

/// Name and extension field number of a custom option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionKey {
    name: &'static str,
    number: u32,
}

impl OptionKey {
    /// Creates a new option key.
    #[must_use]
    pub const fn new(name: &'static str, number: u32) -> Self {
        Self { name, number }
    }

    /// Returns the fully qualified option name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the extension field number.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }
}

/// Resolved state of a boolean option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OptionFlag {
    /// The option is not set on the element.
    #[default]
    Absent,
    /// The option is set to the given value.
    Set(bool),
}

impl OptionFlag {
    /// Returns true if the option is present.
    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Returns true if the option is present and true.
    #[must_use]
    pub const fn is_true(self) -> bool {
        matches!(self, Self::Set(true))
    }
}

/// Serialized option block of a message or field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    raw: Vec<u8>,
}

impl OptionSet {
    /// Wraps the serialized options of a descriptor.
    #[must_use]
    pub fn from_bytes(raw: Vec<u8>) -> Self {
        Self { raw }
    }

    /// Returns the serialized options.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    /// Returns true if no options are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Appends a boolean option.
    #[must_use]
    pub fn with_flag(mut self, key: &OptionKey, value: bool) -> Self {
        encoding::encode_key(key.number, WireType::Varint, &mut self.raw);
        encoding::encode_varint(u64::from(value), &mut self.raw);
        self
    }

    /// Appends a string option.
    #[must_use]
    pub fn with_string(mut self, key: &OptionKey, value: &str) -> Self {
        encoding::encode_key(key.number, WireType::LengthDelimited, &mut self.raw);
        encoding::encode_varint(value.len() as u64, &mut self.raw);
        self.raw.extend_from_slice(value.as_bytes());
        self
    }

    /// Resolves a boolean option.
    ///
    /// A repeated occurrence overrides earlier ones, as protobuf merging does
    /// for singular fields.
    ///
    /// # Errors
    /// Returns `OptionError::Malformed` if the option is stored with a
    /// non-varint encoding or the option block cannot be decoded.
    pub fn resolve_bool(&self, key: &OptionKey) -> Result<OptionFlag, OptionError> {
        let mut buf = self.raw.as_slice();
        let mut flag = OptionFlag::Absent;

        while !buf.is_empty() {
            let (number, wire_type) = encoding::decode_key(&mut buf)
                .map_err(|e| OptionError::malformed(key.name, e.to_string()))?;

            if number != key.number {
                encoding::skip_field(wire_type, number, &mut buf, DecodeContext::default())
                    .map_err(|e| OptionError::malformed(key.name, e.to_string()))?;
                continue;
            }

            if wire_type != WireType::Varint {
                return Err(OptionError::malformed(
                    key.name,
                    format!("expected a boolean, found {wire_type:?} encoding"),
                ));
            }

            let value = encoding::decode_varint(&mut buf)
                .map_err(|e| OptionError::malformed(key.name, e.to_string()))?;
            flag = OptionFlag::Set(value != 0);
        }

        Ok(flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OTHER: OptionKey = OptionKey::new("other.flag", 50000);

    #[test]
    fn test_resolve_empty() {
        let options = OptionSet::default();
        assert_eq!(options.resolve_bool(&IDENTIFIER).unwrap(), OptionFlag::Absent);
    }

    #[test]
    fn test_resolve_absent_key() {
        let options = OptionSet::default()
            .with_flag(&OTHER, true)
            .with_string(&OptionKey::new("other.name", 50001), "x");
        assert_eq!(options.resolve_bool(&IDENTIFIER).unwrap(), OptionFlag::Absent);
    }

    #[test]
    fn test_resolve_true_and_false() {
        let options = OptionSet::default().with_flag(&IDENTIFIER, true);
        assert_eq!(options.resolve_bool(&IDENTIFIER).unwrap(), OptionFlag::Set(true));

        let options = OptionSet::default().with_flag(&IDENTIFIER, false);
        let flag = options.resolve_bool(&IDENTIFIER).unwrap();
        assert_eq!(flag, OptionFlag::Set(false));
        assert!(flag.is_present());
        assert!(!flag.is_true());
    }

    #[test]
    fn test_resolve_last_occurrence_wins() {
        let options = OptionSet::default()
            .with_flag(&IGNORE, true)
            .with_flag(&OTHER, false)
            .with_flag(&IGNORE, false);
        assert_eq!(options.resolve_bool(&IGNORE).unwrap(), OptionFlag::Set(false));
    }

    #[test]
    fn test_resolve_wrong_wire_type() {
        let options = OptionSet::default().with_string(&IDENTIFIER, "yes");
        let err = options.resolve_bool(&IDENTIFIER).unwrap_err();
        assert!(err.to_string().contains("entity.identifier"));
    }

    #[test]
    fn test_resolve_truncated_block() {
        let mut raw = OptionSet::default().with_flag(&IDENTIFIER, true).as_bytes().to_vec();
        raw.push(0x80);
        let options = OptionSet::from_bytes(raw);
        assert!(options.resolve_bool(&IDENTIFIER).is_err());
    }

    #[test]
    fn test_nonzero_varint_is_true() {
        let mut raw = Vec::new();
        encoding::encode_key(IDENTIFIER.number(), WireType::Varint, &mut raw);
        encoding::encode_varint(7, &mut raw);
        let options = OptionSet::from_bytes(raw);
        assert!(options.resolve_bool(&IDENTIFIER).unwrap().is_true());
    }

    #[test]
    fn test_flag_default_is_absent() {
        assert_eq!(OptionFlag::default(), OptionFlag::Absent);
        assert!(!OptionFlag::Absent.is_present());
    }
}
