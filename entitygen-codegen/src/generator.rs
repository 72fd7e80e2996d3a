//! Generation driver.

use crate::config::{EnforcementPolicy, Parameters};
use crate::error::CodegenError;
use crate::registry::TypeRegistry;
use crate::renderer::{self, Artifact};
use crate::walker::SchemaWalker;
use entitygen_schema::{FileDescriptorProto, SchemaFile, parse_file};

/// Outcome of a generation run.
///
/// Artifacts rendered before a fatal error are kept.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Rendered artifacts, in processing order.
    pub artifacts: Vec<Artifact>,
    /// The error that stopped the run, if any.
    pub error: Option<CodegenError>,
}

impl GenerationReport {
    /// Converts the report into a result, discarding partial output on error.
    ///
    /// # Errors
    /// Returns the error that stopped the run.
    pub fn into_result(self) -> Result<Vec<Artifact>, CodegenError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.artifacts),
        }
    }
}

/// Entity accessor generator.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    policy: EnforcementPolicy,
    registry: TypeRegistry,
}

impl Generator {
    /// Creates a generator with the built-in type registry.
    #[must_use]
    pub fn new(policy: EnforcementPolicy) -> Self {
        Self {
            policy,
            registry: TypeRegistry::default(),
        }
    }

    /// Creates a generator from a plugin parameter string.
    ///
    /// # Errors
    /// Returns `CodegenError::Config` if a parameter value is invalid.
    pub fn from_parameters(parameter: &str) -> Result<Self, CodegenError> {
        let params = Parameters::parse(parameter);
        Ok(Self::new(EnforcementPolicy::from_parameters(&params)?))
    }

    /// Replaces the type registry.
    #[must_use]
    pub fn with_registry(mut self, registry: TypeRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Returns the enforcement policy.
    #[must_use]
    pub fn policy(&self) -> &EnforcementPolicy {
        &self.policy
    }

    /// Returns the type registry.
    #[must_use]
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Scans and renders a single file.
    ///
    /// # Errors
    /// Returns the first scan error for the file.
    pub fn generate_file(&self, file: &SchemaFile) -> Result<Option<Artifact>, CodegenError> {
        let walker = SchemaWalker::new(&self.policy, &self.registry);
        let bindings = walker.scan(file)?;
        Ok(renderer::render(file, &bindings))
    }

    /// Processes file descriptors one at a time, sorted by name.
    ///
    /// Each descriptor is converted just before it is scanned. The first
    /// error stops the run; files after it are neither parsed nor scanned.
    #[must_use]
    pub fn generate(&self, files: &[&FileDescriptorProto]) -> GenerationReport {
        let mut ordered = files.to_vec();
        ordered.sort_by(|a, b| a.name.cmp(&b.name));

        let mut report = GenerationReport::default();

        for desc in ordered {
            let name = desc.name.as_deref().unwrap_or("<unnamed>");
            tracing::debug!("generating for target: {}", name);

            let result = parse_file(desc)
                .map_err(CodegenError::from)
                .and_then(|file| self.generate_file(&file));

            match result {
                Ok(Some(artifact)) => report.artifacts.push(artifact),
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!("generation stopped at {}: {}", name, err);
                    report.error = Some(err);
                    break;
                }
            }
        }

        report
    }
}
