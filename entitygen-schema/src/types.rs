//! Schema type definitions.
//!
//! This module contains the data structures representing a protobuf schema
//! file as seen by the generator: files, top-level messages, their fields and
//! the scalar kind of each field.

use crate::options::OptionSet;
use std::fmt;

/// A single `.proto` file.
#[derive(Debug, Clone)]
pub struct SchemaFile {
    /// File name relative to the import root (e.g. `events/user.proto`).
    pub name: String,
    /// Declared syntax.
    pub syntax: Syntax,
    /// Top-level messages in declaration order.
    pub messages: Vec<MessageDef>,
}

impl SchemaFile {
    /// Creates a new empty schema file.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            syntax: Syntax::Proto3,
            messages: Vec::new(),
        }
    }

    /// Adds a message to the file.
    pub fn add_message(&mut self, message: MessageDef) {
        self.messages.push(message);
    }

    /// Looks up a message by name.
    #[must_use]
    pub fn get_message(&self, name: &str) -> Option<&MessageDef> {
        self.messages.iter().find(|m| m.name == name)
    }

    /// Returns true if the file declares no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Message definition.
#[derive(Debug, Clone)]
pub struct MessageDef {
    /// Message name as declared.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDef>,
    /// Raw `MessageOptions`.
    pub options: OptionSet,
}

impl MessageDef {
    /// Creates a new message definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            options: OptionSet::default(),
        }
    }

    /// Replaces the message options.
    #[must_use]
    pub fn with_options(mut self, options: OptionSet) -> Self {
        self.options = options;
        self
    }

    /// Adds a field to the message.
    pub fn add_field(&mut self, field: FieldDef) {
        self.fields.push(field);
    }

    /// Builder form of [`MessageDef::add_field`].
    #[must_use]
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }
}

/// Field definition within a message.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Field name as declared.
    pub name: String,
    /// Field number.
    pub number: i32,
    /// Scalar kind of the field.
    pub kind: ScalarKind,
    /// Field cardinality.
    pub label: FieldLabel,
    /// True when the field tracks presence explicitly.
    pub explicit_presence: bool,
    /// True when the field is a member of a declared `oneof`.
    pub oneof: bool,
    /// Raw `FieldOptions`.
    pub options: OptionSet,
}

impl FieldDef {
    /// Creates a new singular field with implicit presence.
    #[must_use]
    pub fn new(name: impl Into<String>, number: i32, kind: ScalarKind) -> Self {
        Self {
            name: name.into(),
            number,
            kind,
            label: FieldLabel::Optional,
            explicit_presence: false,
            oneof: false,
            options: OptionSet::default(),
        }
    }

    /// Replaces the field options.
    #[must_use]
    pub fn with_options(mut self, options: OptionSet) -> Self {
        self.options = options;
        self
    }

    /// Sets the field label.
    #[must_use]
    pub fn with_label(mut self, label: FieldLabel) -> Self {
        self.label = label;
        self
    }

    /// Marks the field as tracking presence explicitly.
    #[must_use]
    pub fn with_explicit_presence(mut self) -> Self {
        self.explicit_presence = true;
        self
    }

    /// Marks the field as a member of a declared `oneof`.
    #[must_use]
    pub fn in_oneof(mut self) -> Self {
        self.oneof = true;
        self
    }

    /// Returns true if the field is a list.
    #[must_use]
    pub const fn is_repeated(&self) -> bool {
        matches!(self.label, FieldLabel::Repeated)
    }
}

/// Declared protobuf syntax of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Syntax {
    /// `syntax = "proto2"` (also the default when unspecified).
    Proto2,
    /// `syntax = "proto3"`.
    #[default]
    Proto3,
    /// `edition = "..."`.
    Editions,
}

impl Syntax {
    /// Parses the `syntax` string of a file descriptor.
    ///
    /// protoc leaves the value empty for proto2 files.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "" | "proto2" => Some(Self::Proto2),
            "proto3" => Some(Self::Proto3),
            "editions" => Some(Self::Editions),
            _ => None,
        }
    }
}

/// Field cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldLabel {
    /// Singular field.
    Optional,
    /// proto2 required field.
    Required,
    /// List field.
    Repeated,
}

impl FieldLabel {
    /// Converts a `FieldDescriptorProto.Label` value.
    #[must_use]
    pub const fn from_i32(value: i32) -> Option<Self> {
        match value {
            1 => Some(Self::Optional),
            2 => Some(Self::Required),
            3 => Some(Self::Repeated),
            _ => None,
        }
    }
}

/// Protobuf field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScalarKind {
    /// `double`.
    Double,
    /// `float`.
    Float,
    /// `int64`.
    Int64,
    /// `uint64`.
    Uint64,
    /// `int32`.
    Int32,
    /// `fixed64`.
    Fixed64,
    /// `fixed32`.
    Fixed32,
    /// `bool`.
    Bool,
    /// `string`.
    String,
    /// proto2 group.
    Group,
    /// Nested message.
    Message,
    /// `bytes`.
    Bytes,
    /// `uint32`.
    Uint32,
    /// Enum.
    Enum,
    /// `sfixed32`.
    Sfixed32,
    /// `sfixed64`.
    Sfixed64,
    /// `sint32`.
    Sint32,
    /// `sint64`.
    Sint64,
}

impl ScalarKind {
    /// Converts a `FieldDescriptorProto.Type` value.
    #[must_use]
    pub const fn from_i32(value: i32) -> Option<Self> {
        Some(match value {
            1 => Self::Double,
            2 => Self::Float,
            3 => Self::Int64,
            4 => Self::Uint64,
            5 => Self::Int32,
            6 => Self::Fixed64,
            7 => Self::Fixed32,
            8 => Self::Bool,
            9 => Self::String,
            10 => Self::Group,
            11 => Self::Message,
            12 => Self::Bytes,
            13 => Self::Uint32,
            14 => Self::Enum,
            15 => Self::Sfixed32,
            16 => Self::Sfixed64,
            17 => Self::Sint32,
            18 => Self::Sint64,
            _ => return None,
        })
    }

    /// Returns the name used in `.proto` source.
    #[must_use]
    pub const fn proto_name(&self) -> &'static str {
        match self {
            Self::Double => "double",
            Self::Float => "float",
            Self::Int64 => "int64",
            Self::Uint64 => "uint64",
            Self::Int32 => "int32",
            Self::Fixed64 => "fixed64",
            Self::Fixed32 => "fixed32",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Group => "group",
            Self::Message => "message",
            Self::Bytes => "bytes",
            Self::Uint32 => "uint32",
            Self::Enum => "enum",
            Self::Sfixed32 => "sfixed32",
            Self::Sfixed64 => "sfixed64",
            Self::Sint32 => "sint32",
            Self::Sint64 => "sint64",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.proto_name())
    }
}
