//! # Entitygen Codegen
//!
//! Entity identifier accessor generation from annotated protobuf schemas.
//!
//! This crate provides:
//! - Identifier detection driven by the `entity.identifier` and
//!   `entity.ignore` options
//! - Mandatory-identifier enforcement, optionally scoped by message suffix
//! - Accessor generation for prost-generated message structs
//! - protoc plugin request/response handling

pub mod config;
pub mod error;
pub mod generator;
pub mod plugin;
pub mod registry;
pub mod renderer;
pub mod rust;
pub mod walker;

pub use config::{EnforcementPolicy, Parameters};
pub use error::CodegenError;
pub use generator::{GenerationReport, Generator};
pub use registry::{TypeDescriptor, TypeRegistry};
pub use renderer::{Artifact, render};
pub use walker::{EntityBinding, SchemaWalker};

/// Generates accessors from a serialized `FileDescriptorSet`.
///
/// Every file in the set is a target.
///
/// # Arguments
/// * `bytes` - Serialized descriptor set (`protoc --descriptor_set_out`)
/// * `parameter` - Generator parameters, e.g. `enforce=true`
///
/// # Returns
/// Generated artifacts, ordered by source file name.
///
/// # Errors
/// Returns `CodegenError` if decoding, configuration or generation fails.
pub fn generate_from_descriptor_set_bytes(
    bytes: &[u8],
    parameter: &str,
) -> Result<Vec<Artifact>, CodegenError> {
    let generator = Generator::from_parameters(parameter)?;
    let set = entitygen_schema::decode_descriptor_set(bytes)?;
    let files: Vec<_> = set.file.iter().collect();
    generator.generate(&files).into_result()
}

/// Generates accessors from a descriptor set file.
///
/// # Arguments
/// * `path` - Path to the serialized descriptor set
/// * `parameter` - Generator parameters, e.g. `enforce=true`
///
/// # Returns
/// Generated artifacts, ordered by source file name.
///
/// # Errors
/// Returns `CodegenError` if reading, decoding, configuration or generation fails.
pub fn generate_from_descriptor_set(
    path: &std::path::Path,
    parameter: &str,
) -> Result<Vec<Artifact>, CodegenError> {
    let bytes = std::fs::read(path)?;
    generate_from_descriptor_set_bytes(&bytes, parameter)
}
