//! # Entitygen Schema
//!
//! Protobuf descriptor model for the entity identifier generator.
//!
//! This crate provides:
//! - Decoding of plugin requests and descriptor sets
//! - Type definitions for files, messages and fields
//! - Resolution of custom boolean options from raw option blocks
//! - Rust identifier naming that matches prost output

pub mod descriptor;
pub mod error;
pub mod naming;
pub mod options;
pub mod parser;
pub mod types;

pub use descriptor::{CodeGeneratorRequest, FileDescriptorProto, FileDescriptorSet};
pub use error::{OptionError, ParseError};
pub use options::{IDENTIFIER, IGNORE, OptionFlag, OptionKey, OptionSet};
pub use parser::{decode_descriptor_set, parse_file, parse_request, target_descriptors};
pub use types::{FieldDef, FieldLabel, MessageDef, ScalarKind, SchemaFile, Syntax};
