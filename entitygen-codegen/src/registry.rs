//! Field type registry.
//!
//! Maps the schema type of an identifier field to the Rust return type and
//! default literal of its generated accessor. Supporting another identifier
//! type only requires registering it here.

use entitygen_schema::ScalarKind;
use std::collections::BTreeMap;

/// Accessor shape for one field type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Accessor return type.
    pub return_type: String,
    /// Value returned when an explicit-presence field is unset.
    pub default_literal: String,
    /// True if the accessor borrows from the message (`&str`), false if the
    /// value is copied out.
    pub borrowed: bool,
}

impl TypeDescriptor {
    /// Creates a descriptor for a `Copy` value.
    #[must_use]
    pub fn copied(return_type: impl Into<String>, default_literal: impl Into<String>) -> Self {
        Self {
            return_type: return_type.into(),
            default_literal: default_literal.into(),
            borrowed: false,
        }
    }

    /// Creates a descriptor for a value borrowed from the message.
    #[must_use]
    pub fn borrowed(return_type: impl Into<String>, default_literal: impl Into<String>) -> Self {
        Self {
            return_type: return_type.into(),
            default_literal: default_literal.into(),
            borrowed: true,
        }
    }
}

/// Registry of identifier-capable field types.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    entries: BTreeMap<ScalarKind, TypeDescriptor>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Creates a registry with the built-in `string` mapping.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(ScalarKind::String, TypeDescriptor::borrowed("&str", "\"\""));
        registry
    }

    /// Adds or replaces the mapping for a field type.
    pub fn register(&mut self, kind: ScalarKind, descriptor: TypeDescriptor) -> &mut Self {
        self.entries.insert(kind, descriptor);
        self
    }

    /// Looks up the mapping for a field type.
    #[must_use]
    pub fn get(&self, kind: ScalarKind) -> Option<&TypeDescriptor> {
        self.entries.get(&kind)
    }

    /// Returns true if the field type can be an identifier.
    #[must_use]
    pub fn supports(&self, kind: ScalarKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry() {
        let registry = TypeRegistry::default();
        assert_eq!(registry.len(), 1);

        let string = registry.get(ScalarKind::String).unwrap();
        assert_eq!(string.return_type, "&str");
        assert_eq!(string.default_literal, "\"\"");
        assert!(string.borrowed);

        assert!(!registry.supports(ScalarKind::Int64));
        assert!(registry.get(ScalarKind::Bytes).is_none());
    }

    #[test]
    fn test_empty_registry() {
        let registry = TypeRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.supports(ScalarKind::String));
    }

    #[test]
    fn test_register_extends_and_replaces() {
        let mut registry = TypeRegistry::with_defaults();
        registry
            .register(ScalarKind::Int64, TypeDescriptor::copied("i64", "0"))
            .register(ScalarKind::String, TypeDescriptor::borrowed("&str", "\"unknown\""));

        assert_eq!(registry.len(), 2);
        assert!(!registry.get(ScalarKind::Int64).unwrap().borrowed);
        assert_eq!(
            registry.get(ScalarKind::String).unwrap().default_literal,
            "\"unknown\""
        );
    }
}
