//! protoc plugin protocol glue.
//!
//! Maps a `CodeGeneratorRequest` onto a generation run and the run's outcome
//! onto a `CodeGeneratorResponse`.

use crate::error::CodegenError;
use crate::generator::{GenerationReport, Generator};
use entitygen_schema::{CodeGeneratorRequest, parse_request, target_descriptors};
use prost::Message;
use prost_types::compiler::CodeGeneratorResponse;
use prost_types::compiler::code_generator_response::{Feature, File};

/// Runs the plugin on a serialized request.
///
/// # Returns
/// The serialized response. Generation failures are reported inside the
/// response, as protoc expects.
///
/// # Errors
/// Returns `CodegenError::Parse` if the request cannot be decoded.
pub fn run(input: &[u8]) -> Result<Vec<u8>, CodegenError> {
    let request = parse_request(input)?;
    Ok(generate(&request).encode_to_vec())
}

/// Runs the generator for a decoded request.
#[must_use]
pub fn generate(request: &CodeGeneratorRequest) -> CodeGeneratorResponse {
    let generator = match Generator::from_parameters(request.parameter.as_deref().unwrap_or("")) {
        Ok(generator) => generator,
        Err(err) => return error_response(&err),
    };

    let files = match target_descriptors(request) {
        Ok(files) => files,
        Err(err) => return error_response(&CodegenError::from(err)),
    };

    into_response(generator.generate(&files))
}

/// Converts a generation report into a response.
#[must_use]
pub fn into_response(report: GenerationReport) -> CodeGeneratorResponse {
    CodeGeneratorResponse {
        error: report.error.map(|err| err.to_string()),
        supported_features: Some(Feature::Proto3Optional as u64),
        file: report
            .artifacts
            .into_iter()
            .map(|artifact| File {
                name: Some(artifact.path),
                content: Some(artifact.content),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

fn error_response(err: &CodegenError) -> CodeGeneratorResponse {
    tracing::warn!("generation aborted: {}", err);
    CodeGeneratorResponse {
        error: Some(err.to_string()),
        supported_features: Some(Feature::Proto3Optional as u64),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entitygen_schema::FileDescriptorProto;

    fn request(parameter: Option<&str>, files: &[&str]) -> CodeGeneratorRequest {
        CodeGeneratorRequest {
            file_to_generate: files.iter().map(|f| f.to_string()).collect(),
            parameter: parameter.map(str::to_string),
            proto_file: files
                .iter()
                .map(|f| FileDescriptorProto {
                    name: Some(f.to_string()),
                    syntax: Some("proto3".to_string()),
                    ..Default::default()
                })
                .collect(),
        }
    }

    #[test]
    fn test_generate_empty_files() {
        let response = generate(&request(Some("enforce=true"), &["a.proto", "b.proto"]));
        assert!(response.error.is_none());
        assert!(response.file.is_empty());
        assert_eq!(response.supported_features, Some(Feature::Proto3Optional as u64));
    }

    #[test]
    fn test_generate_config_error() {
        let response = generate(&request(Some("enforce=perhaps"), &["a.proto"]));
        let error = response.error.expect("error");
        assert!(error.contains("enforce"));
        assert!(response.file.is_empty());
    }

    #[test]
    fn test_generate_missing_target() {
        let mut req = request(None, &["a.proto"]);
        req.file_to_generate.push("missing.proto".to_string());

        let response = generate(&req);
        assert!(response.error.expect("error").contains("missing.proto"));
    }

    #[test]
    fn test_generate_unsupported_syntax() {
        let mut req = request(None, &["a.proto", "b.proto"]);
        req.proto_file[1].syntax = Some("proto4".to_string());

        let response = generate(&req);
        assert!(response.error.expect("error").contains("proto4"));
    }

    #[test]
    fn test_run_round_trip() {
        let bytes = request(None, &["a.proto"]).encode_to_vec();
        let output = run(&bytes).expect("run");
        let response = CodeGeneratorResponse::decode(output.as_slice()).expect("decode");
        assert!(response.error.is_none());
    }

    #[test]
    fn test_run_rejects_garbage() {
        assert!(matches!(run(&[0x0a, 0xff]), Err(CodegenError::Parse(_))));
    }
}
