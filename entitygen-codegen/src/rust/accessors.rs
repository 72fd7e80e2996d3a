//! Entity identifier accessor code generation.

use crate::walker::EntityBinding;
use entitygen_schema::naming::{field_member_name, message_type_name, to_snake_case};

/// Generator for entity identifier accessors.
pub struct AccessorGenerator<'a> {
    source: &'a str,
    bindings: &'a [EntityBinding<'a>],
}

impl<'a> AccessorGenerator<'a> {
    /// Creates a new accessor generator.
    ///
    /// # Arguments
    /// * `source` - Name of the schema file the bindings came from
    /// * `bindings` - Bindings in the order accessors are emitted
    #[must_use]
    pub fn new(source: &'a str, bindings: &'a [EntityBinding<'a>]) -> Self {
        Self { source, bindings }
    }

    /// Generates the file body.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str("// @generated by protoc-gen-entity. DO NOT EDIT.\n");
        output.push_str(&format!("// source: {}\n", self.source));

        for binding in self.bindings {
            output.push('\n');
            output.push_str(&self.generate_accessor(binding));
        }

        output
    }

    /// Generates one accessor in its own impl block.
    fn generate_accessor(&self, binding: &EntityBinding<'_>) -> String {
        let mut output = String::new();
        let descriptor = binding.descriptor;
        let member = field_member_name(&binding.field.name);
        let method = format!("entity_{}", to_snake_case(&binding.field.name));

        output.push_str(&format!(
            "impl {} {{\n",
            message_type_name(&binding.message.name)
        ));

        if binding.field.explicit_presence {
            output.push_str(&format!(
                "    /// Entity identifier `{}` (field {}), or `{}` when unset.\n",
                binding.field.name, binding.field.number, descriptor.default_literal
            ));
        } else {
            output.push_str(&format!(
                "    /// Entity identifier `{}` (field {}).\n",
                binding.field.name, binding.field.number
            ));
        }
        output.push_str("    #[inline]\n");
        output.push_str("    #[must_use]\n");
        output.push_str(&format!(
            "    pub fn {}(&self) -> {} {{\n",
            method, descriptor.return_type
        ));

        let body = match (binding.field.explicit_presence, descriptor.borrowed) {
            (true, true) => format!(
                "self.{}.as_deref().unwrap_or({})",
                member, descriptor.default_literal
            ),
            (true, false) => format!("self.{}.unwrap_or({})", member, descriptor.default_literal),
            (false, true) => format!("&self.{}", member),
            (false, false) => format!("self.{}", member),
        };
        output.push_str(&format!("        {}\n", body));
        output.push_str("    }\n");
        output.push_str("}\n");

        output
    }
}
