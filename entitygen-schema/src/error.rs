//! Error types for descriptor decoding and option resolution.

use thiserror::Error;

/// Error type for descriptor decoding operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Protobuf wire decoding error.
    #[error("protobuf decode error: {0}")]
    Decode(#[from] prost::DecodeError),

    /// Missing required descriptor field.
    #[error("missing required field '{field}' on {element}")]
    MissingField {
        /// Descriptor element (file, message or field path).
        element: String,
        /// Descriptor field name.
        field: String,
    },

    /// Descriptor field holds a value outside the known range.
    #[error("invalid value {value} for '{field}' on {element}")]
    InvalidValue {
        /// Descriptor element (file, message or field path).
        element: String,
        /// Descriptor field name.
        field: String,
        /// Raw value.
        value: i32,
    },

    /// Unknown `syntax` value on a file.
    #[error("file '{file}' declares unsupported syntax '{syntax}'")]
    UnsupportedSyntax {
        /// File name.
        file: String,
        /// Declared syntax.
        syntax: String,
    },

    /// A file named in `file_to_generate` has no descriptor in the request.
    #[error("file '{name}' requested for generation but not present in the request")]
    FileNotFound {
        /// File name.
        name: String,
    },
}

/// Error type for option resolution.
#[derive(Debug, Error)]
pub enum OptionError {
    /// The option is present but cannot be read as the expected type.
    #[error("option '{option}' is malformed: {reason}")]
    Malformed {
        /// Option name.
        option: String,
        /// What was wrong with the stored value.
        reason: String,
    },
}

impl ParseError {
    /// Creates a missing field error.
    pub fn missing_field(element: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            element: element.into(),
            field: field.into(),
        }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(element: impl Into<String>, field: impl Into<String>, value: i32) -> Self {
        Self::InvalidValue {
            element: element.into(),
            field: field.into(),
            value,
        }
    }
}

impl OptionError {
    /// Creates a malformed option error.
    pub fn malformed(option: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            option: option.into(),
            reason: reason.into(),
        }
    }
}
