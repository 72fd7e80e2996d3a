//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
///
/// Every variant is fatal for the run.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Descriptor decoding error.
    #[error("descriptor parse error: {0}")]
    Parse(#[from] entitygen_schema::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generator parameter could not be interpreted.
    #[error("invalid value '{value}' for parameter '{parameter}': {reason}")]
    Config {
        /// Parameter name.
        parameter: String,
        /// Raw value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A custom option is present but unreadable.
    #[error("{location}: {source}")]
    MalformedOption {
        /// `file:message` or `file:message.field`.
        location: String,
        /// Underlying option error.
        #[source]
        source: entitygen_schema::OptionError,
    },

    /// An identifier field has a type with no registered accessor mapping.
    #[error("{file}:{message}.{field} unable to handle identifier field type: {type_name}")]
    UnsupportedFieldType {
        /// File name.
        file: String,
        /// Message name.
        message: String,
        /// Field name.
        field: String,
        /// Field type as written in the schema.
        type_name: String,
    },

    /// A message subject to enforcement has no identifier field.
    #[error("{file}:{message} `{option}` not set")]
    EnforcementViolation {
        /// File name.
        file: String,
        /// Message name.
        message: String,
        /// Name of the missing option.
        option: String,
    },
}

impl CodegenError {
    /// Creates a configuration error.
    pub fn config(
        parameter: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Config {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enforcement_message() {
        let err = CodegenError::EnforcementViolation {
            file: "events/ping.proto".to_string(),
            message: "Ping".to_string(),
            option: "entity.identifier".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "events/ping.proto:Ping `entity.identifier` not set"
        );
    }

    #[test]
    fn test_config_message() {
        let err = CodegenError::config("enforce", "maybe", "expected a boolean");
        assert!(err.to_string().contains("'enforce'"));
    }
}
