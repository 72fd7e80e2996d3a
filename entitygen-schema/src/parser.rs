//! Descriptor parser.
//!
//! This module decodes serialized plugin requests and descriptor sets and
//! converts the wire descriptors into the internal schema representation.

use crate::descriptor::{
    CodeGeneratorRequest, DescriptorProto, FieldDescriptorProto, FileDescriptorProto,
    FileDescriptorSet,
};
use crate::error::ParseError;
use crate::options::OptionSet;
use crate::types::{FieldDef, FieldLabel, MessageDef, ScalarKind, SchemaFile, Syntax};
use prost::Message;

/// Decodes a serialized `CodeGeneratorRequest`.
///
/// # Errors
/// Returns `ParseError::Decode` if the bytes are not a valid request.
pub fn parse_request(bytes: &[u8]) -> Result<CodeGeneratorRequest, ParseError> {
    Ok(CodeGeneratorRequest::decode(bytes)?)
}

/// Decodes a serialized `FileDescriptorSet`.
///
/// Descriptors are left in wire form; convert each one with [`parse_file`]
/// when it is processed.
///
/// # Errors
/// Returns `ParseError::Decode` if the bytes are not a valid set.
pub fn decode_descriptor_set(bytes: &[u8]) -> Result<FileDescriptorSet, ParseError> {
    Ok(FileDescriptorSet::decode(bytes)?)
}

/// Looks up the descriptors a request asks to generate.
///
/// # Errors
/// Returns `ParseError::FileNotFound` if a requested file has no descriptor.
pub fn target_descriptors(
    request: &CodeGeneratorRequest,
) -> Result<Vec<&FileDescriptorProto>, ParseError> {
    request
        .file_to_generate
        .iter()
        .map(|name| {
            request
                .proto_file
                .iter()
                .find(|f| f.name.as_deref() == Some(name.as_str()))
                .ok_or_else(|| ParseError::FileNotFound { name: name.clone() })
        })
        .collect()
}

/// Converts a file descriptor.
///
/// # Errors
/// Returns `ParseError` if a name, field number or field type is missing or
/// out of range.
pub fn parse_file(desc: &FileDescriptorProto) -> Result<SchemaFile, ParseError> {
    let name = desc
        .name
        .clone()
        .ok_or_else(|| ParseError::missing_field("file", "name"))?;

    let syntax_str = desc.syntax.as_deref().unwrap_or("");
    let syntax = Syntax::parse(syntax_str).ok_or_else(|| ParseError::UnsupportedSyntax {
        file: name.clone(),
        syntax: syntax_str.to_string(),
    })?;

    let mut file = SchemaFile::new(name);
    file.syntax = syntax;

    for msg in &desc.message_type {
        let message = parse_message(&file.name, syntax, msg)?;
        file.add_message(message);
    }

    Ok(file)
}

fn parse_message(
    file: &str,
    syntax: Syntax,
    desc: &DescriptorProto,
) -> Result<MessageDef, ParseError> {
    let name = desc
        .name
        .clone()
        .ok_or_else(|| ParseError::missing_field(file, "message name"))?;

    let mut message = MessageDef::new(name);
    if let Some(options) = &desc.options {
        message.options = OptionSet::from_bytes(options.clone());
    }

    let element = format!("{}:{}", file, message.name);
    for field in &desc.field {
        message.add_field(parse_field(&element, syntax, field)?);
    }

    Ok(message)
}

fn parse_field(
    element: &str,
    syntax: Syntax,
    desc: &FieldDescriptorProto,
) -> Result<FieldDef, ParseError> {
    let name = desc
        .name
        .clone()
        .ok_or_else(|| ParseError::missing_field(element, "field name"))?;
    let element = format!("{element}.{name}");

    let number = desc
        .number
        .ok_or_else(|| ParseError::missing_field(element.as_str(), "number"))?;

    let raw_type = desc
        .r#type
        .ok_or_else(|| ParseError::missing_field(element.as_str(), "type"))?;
    let kind = ScalarKind::from_i32(raw_type)
        .ok_or_else(|| ParseError::invalid_value(element.as_str(), "type", raw_type))?;

    // protoc always sets the label; treat a missing one as singular.
    let raw_label = desc.label.unwrap_or(1);
    let label = FieldLabel::from_i32(raw_label)
        .ok_or_else(|| ParseError::invalid_value(element.as_str(), "label", raw_label))?;

    let proto3_optional = desc.proto3_optional.unwrap_or(false);

    let mut field = FieldDef::new(name, number, kind).with_label(label);
    field.explicit_presence =
        proto3_optional || (syntax != Syntax::Proto3 && label == FieldLabel::Optional);
    // proto3 `optional` lives in a synthetic oneof that prost flattens to `Option<T>`.
    field.oneof = desc.oneof_index.is_some() && !proto3_optional;
    if let Some(options) = &desc.options {
        field.options = OptionSet::from_bytes(options.clone());
    }

    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{IDENTIFIER, IGNORE, OptionFlag};

    fn string_field(name: &str, number: i32) -> FieldDescriptorProto {
        FieldDescriptorProto {
            name: Some(name.to_string()),
            number: Some(number),
            label: Some(1),
            r#type: Some(9),
            ..Default::default()
        }
    }

    fn user_file() -> FileDescriptorProto {
        let mut id = string_field("user_id", 1);
        id.options = Some(
            OptionSet::default()
                .with_flag(&IDENTIFIER, true)
                .as_bytes()
                .to_vec(),
        );

        let mut nickname = string_field("nickname", 2);
        nickname.proto3_optional = Some(true);
        nickname.oneof_index = Some(0);

        let mut email = string_field("email", 3);
        email.oneof_index = Some(1);

        FileDescriptorProto {
            name: Some("events/user.proto".to_string()),
            package: Some("events".to_string()),
            syntax: Some("proto3".to_string()),
            message_type: vec![
                DescriptorProto {
                    name: Some("UserCreated".to_string()),
                    field: vec![id, nickname, email],
                    options: None,
                },
                DescriptorProto {
                    name: Some("Ping".to_string()),
                    field: vec![],
                    options: Some(OptionSet::default().with_flag(&IGNORE, true).as_bytes().to_vec()),
                },
            ],
        }
    }

    #[test]
    fn test_parse_file() {
        let file = parse_file(&user_file()).expect("Failed to parse file");

        assert_eq!(file.name, "events/user.proto");
        assert_eq!(file.syntax, Syntax::Proto3);
        assert_eq!(file.messages.len(), 2);

        let msg = file.get_message("UserCreated").unwrap();
        assert_eq!(msg.fields.len(), 3);
        assert_eq!(msg.fields[0].kind, ScalarKind::String);
        assert!(!msg.fields[0].explicit_presence);
        assert!(msg.fields[1].explicit_presence);
        assert!(!msg.fields[0].oneof);
        assert!(!msg.fields[1].oneof);
        assert!(msg.fields[2].oneof);
        assert!(msg.fields[0].options.resolve_bool(&IDENTIFIER).unwrap().is_true());

        let ping = file.get_message("Ping").unwrap();
        assert_eq!(ping.options.resolve_bool(&IGNORE).unwrap(), OptionFlag::Set(true));
    }

    #[test]
    fn test_proto2_optional_has_presence() {
        let mut desc = user_file();
        desc.syntax = None;
        let file = parse_file(&desc).expect("Failed to parse file");

        assert_eq!(file.syntax, Syntax::Proto2);
        assert!(file.messages[0].fields[0].explicit_presence);
    }

    #[test]
    fn test_parse_field_unknown_type() {
        let mut desc = user_file();
        desc.message_type[0].field[0].r#type = Some(42);

        let err = parse_file(&desc).unwrap_err();
        assert!(matches!(err, ParseError::InvalidValue { value: 42, .. }));
        assert!(err.to_string().contains("events/user.proto:UserCreated.user_id"));
    }

    #[test]
    fn test_parse_file_missing_name() {
        let mut desc = user_file();
        desc.name = None;
        assert!(matches!(
            parse_file(&desc),
            Err(ParseError::MissingField { .. })
        ));
    }

    #[test]
    fn test_parse_request_round_trip() {
        let request = CodeGeneratorRequest {
            file_to_generate: vec!["events/user.proto".to_string()],
            parameter: Some("enforce=true".to_string()),
            proto_file: vec![user_file()],
        };

        let decoded = parse_request(&request.encode_to_vec()).expect("Failed to decode");
        assert_eq!(decoded, request);

        let targets = target_descriptors(&decoded).expect("Failed to resolve targets");
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].name.as_deref(), Some("events/user.proto"));
    }

    #[test]
    fn test_target_descriptors_missing() {
        let request = CodeGeneratorRequest {
            file_to_generate: vec!["missing.proto".to_string()],
            parameter: None,
            proto_file: vec![user_file()],
        };

        assert!(matches!(
            target_descriptors(&request),
            Err(ParseError::FileNotFound { name }) if name == "missing.proto"
        ));
    }

    #[test]
    fn test_decode_descriptor_set() {
        let mut broken = user_file();
        broken.name = Some("events/zz.proto".to_string());
        broken.message_type[0].field[0].r#type = Some(42);
        let set = FileDescriptorSet {
            file: vec![user_file(), broken],
        };

        // Decoding does not convert, so a bad descriptor only fails its own file.
        let decoded = decode_descriptor_set(&set.encode_to_vec()).expect("Failed to decode");
        assert_eq!(decoded.file.len(), 2);

        let first = parse_file(&decoded.file[0]).expect("Failed to parse file");
        assert_eq!(first.messages[0].name, "UserCreated");
        assert!(parse_file(&decoded.file[1]).is_err());
    }

    #[test]
    fn test_parse_request_garbage() {
        assert!(matches!(
            parse_request(&[0xff, 0xff, 0xff]),
            Err(ParseError::Decode(_))
        ));
    }
}
