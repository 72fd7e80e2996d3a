//! Schema walking and identifier detection.

use crate::config::EnforcementPolicy;
use crate::error::CodegenError;
use crate::registry::{TypeDescriptor, TypeRegistry};
use entitygen_schema::{FieldDef, IDENTIFIER, IGNORE, MessageDef, OptionError, SchemaFile};

/// A message paired with one of its identifier fields.
#[derive(Debug, Clone, Copy)]
pub struct EntityBinding<'a> {
    /// Owning message.
    pub message: &'a MessageDef,
    /// Field marked as identifier.
    pub field: &'a FieldDef,
    /// Accessor shape for the field type.
    pub descriptor: &'a TypeDescriptor,
}

/// Walks the messages of a schema file and collects entity bindings.
pub struct SchemaWalker<'a> {
    policy: &'a EnforcementPolicy,
    registry: &'a TypeRegistry,
}

impl<'a> SchemaWalker<'a> {
    /// Creates a new walker.
    #[must_use]
    pub fn new(policy: &'a EnforcementPolicy, registry: &'a TypeRegistry) -> Self {
        Self { policy, registry }
    }

    /// Scans a file, returning its bindings in declaration order.
    ///
    /// Messages flagged `entity.ignore = true` and, when a suffix is
    /// configured, messages whose name lacks it are skipped entirely. A
    /// message counts as identified once any of its fields is flagged true;
    /// a later field flagged false does not undo that.
    ///
    /// # Errors
    /// Returns the first `MalformedOption`, `UnsupportedFieldType` or
    /// `EnforcementViolation` encountered.
    pub fn scan<'f>(&self, file: &'f SchemaFile) -> Result<Vec<EntityBinding<'f>>, CodegenError>
    where
        'a: 'f,
    {
        if file.is_empty() {
            tracing::debug!("zero messages, skipping: {}", file.name);
            return Ok(Vec::new());
        }

        let mut bindings = Vec::with_capacity(file.messages.len());

        for message in &file.messages {
            let ignore = message
                .options
                .resolve_bool(&IGNORE)
                .map_err(|e| malformed(file, message, None, e))?;
            if ignore.is_true() {
                tracing::debug!("{}:{} ignoring entity", file.name, message.name);
                continue;
            }

            if !self.policy.qualifies(&message.name) {
                tracing::debug!(
                    "{}:{} does not match enforced suffix, skipping",
                    file.name,
                    message.name
                );
                continue;
            }

            let mut has_identifier = false;

            for field in &message.fields {
                let flag = field
                    .options
                    .resolve_bool(&IDENTIFIER)
                    .map_err(|e| malformed(file, message, Some(field), e))?;
                if !flag.is_true() {
                    continue;
                }

                let descriptor = self.descriptor_for(file, message, field)?;
                tracing::debug!(
                    "{}:{} entity identifier: {}",
                    file.name,
                    message.name,
                    field.name
                );
                bindings.push(EntityBinding {
                    message,
                    field,
                    descriptor,
                });
                has_identifier = true;
            }

            self.policy
                .check(&file.name, &message.name, has_identifier)?;
        }

        Ok(bindings)
    }

    fn descriptor_for(
        &self,
        file: &SchemaFile,
        message: &MessageDef,
        field: &FieldDef,
    ) -> Result<&'a TypeDescriptor, CodegenError> {
        let unsupported = |type_name: String| CodegenError::UnsupportedFieldType {
            file: file.name.clone(),
            message: message.name.clone(),
            field: field.name.clone(),
            type_name,
        };

        if field.is_repeated() {
            return Err(unsupported(format!("repeated {}", field.kind)));
        }
        // prost folds oneof members into an enum; there is no struct member to read.
        if field.oneof {
            return Err(unsupported(format!("oneof {}", field.kind)));
        }

        self.registry
            .get(field.kind)
            .ok_or_else(|| unsupported(field.kind.to_string()))
    }
}

fn malformed(
    file: &SchemaFile,
    message: &MessageDef,
    field: Option<&FieldDef>,
    source: OptionError,
) -> CodegenError {
    let location = match field {
        Some(field) => format!("{}:{}.{}", file.name, message.name, field.name),
        None => format!("{}:{}", file.name, message.name),
    };
    CodegenError::MalformedOption { location, source }
}
