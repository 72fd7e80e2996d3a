//! Artifact rendering.
//!
//! Turns the bindings of one schema file into the generated file the host
//! writes out. Rendering never touches the filesystem.

use crate::rust::AccessorGenerator;
use crate::walker::EntityBinding;
use entitygen_schema::SchemaFile;

/// Suffix replacing the schema file extension in generated file names.
pub const GENERATED_SUFFIX: &str = ".entity.rs";

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Output path relative to the plugin output directory.
    pub path: String,
    /// Generated source text.
    pub content: String,
}

/// Derives the output path for a schema file.
///
/// `events/user.proto` becomes `events/user.entity.rs`. Only the extension
/// of the last path segment is replaced.
#[must_use]
pub fn output_path(source: &str) -> String {
    let stem_end = match source.rfind('.') {
        Some(dot) if !source[dot..].contains('/') => dot,
        _ => source.len(),
    };
    format!("{}{}", &source[..stem_end], GENERATED_SUFFIX)
}

/// Renders the artifact for a file.
///
/// Returns `None` when the file produced no bindings.
#[must_use]
pub fn render(file: &SchemaFile, bindings: &[EntityBinding<'_>]) -> Option<Artifact> {
    if bindings.is_empty() {
        return None;
    }

    Some(Artifact {
        path: output_path(&file.name),
        content: AccessorGenerator::new(&file.name, bindings).generate(),
    })
}
