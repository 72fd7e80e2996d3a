//! Wire-level descriptor messages.
//!
//! These mirror the subset of `google/protobuf/descriptor.proto` and
//! `google/protobuf/compiler/plugin.proto` the generator reads. Option
//! messages are kept as raw bytes so custom extensions survive decoding.

/// `google.protobuf.compiler.CodeGeneratorRequest`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CodeGeneratorRequest {
    /// Files explicitly listed on the protoc command line.
    #[prost(string, repeated, tag = "1")]
    pub file_to_generate: Vec<String>,
    /// Plugin parameter string.
    #[prost(string, optional, tag = "2")]
    pub parameter: Option<String>,
    /// All files in `file_to_generate` and everything they import.
    #[prost(message, repeated, tag = "15")]
    pub proto_file: Vec<FileDescriptorProto>,
}

/// `google.protobuf.FileDescriptorSet`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FileDescriptorSet {
    /// Files in the set.
    #[prost(message, repeated, tag = "1")]
    pub file: Vec<FileDescriptorProto>,
}

/// `google.protobuf.FileDescriptorProto`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FileDescriptorProto {
    /// File name relative to the import root.
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    /// Protobuf package.
    #[prost(string, optional, tag = "2")]
    pub package: Option<String>,
    /// Top-level messages.
    #[prost(message, repeated, tag = "4")]
    pub message_type: Vec<DescriptorProto>,
    /// `proto2`, `proto3` or `editions`; empty for proto2.
    #[prost(string, optional, tag = "12")]
    pub syntax: Option<String>,
}

/// `google.protobuf.DescriptorProto`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DescriptorProto {
    /// Message name.
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    /// Fields.
    #[prost(message, repeated, tag = "2")]
    pub field: Vec<FieldDescriptorProto>,
    /// Serialized `MessageOptions`.
    #[prost(bytes = "vec", optional, tag = "7")]
    pub options: Option<Vec<u8>>,
}

/// `google.protobuf.FieldDescriptorProto`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FieldDescriptorProto {
    /// Field name.
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    /// Field number.
    #[prost(int32, optional, tag = "3")]
    pub number: Option<i32>,
    /// `FieldDescriptorProto.Label`.
    #[prost(int32, optional, tag = "4")]
    pub label: Option<i32>,
    /// `FieldDescriptorProto.Type`.
    #[prost(int32, optional, tag = "5")]
    pub r#type: Option<i32>,
    /// Referenced message or enum type.
    #[prost(string, optional, tag = "6")]
    pub type_name: Option<String>,
    /// Serialized `FieldOptions`.
    #[prost(bytes = "vec", optional, tag = "8")]
    pub options: Option<Vec<u8>>,
    /// Index of the containing oneof, including synthetic proto3 `optional` oneofs.
    #[prost(int32, optional, tag = "9")]
    pub oneof_index: Option<i32>,
    /// Set for proto3 `optional` fields.
    #[prost(bool, optional, tag = "17")]
    pub proto3_optional: Option<bool>,
}
