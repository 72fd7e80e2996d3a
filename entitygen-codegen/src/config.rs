//! Generator parameters and the enforcement policy built from them.

use crate::error::CodegenError;

/// Parameter enabling mandatory identifiers.
pub const PARAM_ENFORCE: &str = "enforce";

/// Parameter restricting detection and enforcement to a message name suffix.
pub const PARAM_ENFORCE_SUFFIX: &str = "enforce-suffix";

/// Parsed `key=value,key=value` plugin parameter string.
///
/// A key without `=` maps to an empty value. When a key repeats, the last
/// value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    entries: Vec<(String, String)>,
}

impl Parameters {
    /// Parses a parameter string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let entries = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| match part.split_once('=') {
                Some((key, value)) => (key.trim().to_string(), value.trim().to_string()),
                None => (part.to_string(), String::new()),
            })
            .collect();

        Self { entries }
    }

    /// Returns the raw value of a parameter.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns a string parameter, or an empty string when absent.
    #[must_use]
    pub fn str(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    /// Returns a boolean parameter, or false when absent.
    ///
    /// # Errors
    /// Returns `CodegenError::Config` if the value is not a boolean literal.
    pub fn bool(&self, key: &str) -> Result<bool, CodegenError> {
        match self.get(key) {
            None => Ok(false),
            Some(value) => parse_bool(value)
                .ok_or_else(|| CodegenError::config(key, value, "expected a boolean")),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Decides which messages are scanned and whether they must carry an
/// identifier.
///
/// A non-empty suffix always implies mandatory identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnforcementPolicy {
    enforce_all: bool,
    enforce_suffix: Option<String>,
}

impl EnforcementPolicy {
    /// Creates a policy.
    #[must_use]
    pub fn new(enforce_all: bool, enforce_suffix: Option<String>) -> Self {
        let enforce_suffix = enforce_suffix.filter(|s| !s.is_empty());
        Self {
            enforce_all: enforce_all || enforce_suffix.is_some(),
            enforce_suffix,
        }
    }

    /// Builds the policy from plugin parameters.
    ///
    /// # Errors
    /// Returns `CodegenError::Config` if `enforce` is not a boolean literal.
    pub fn from_parameters(params: &Parameters) -> Result<Self, CodegenError> {
        let enforce = params.bool(PARAM_ENFORCE)?;
        let suffix = params.str(PARAM_ENFORCE_SUFFIX).to_string();
        Ok(Self::new(enforce, Some(suffix)))
    }

    /// Returns true if every qualifying message needs an identifier.
    #[must_use]
    pub const fn enforce_all(&self) -> bool {
        self.enforce_all
    }

    /// Returns the configured name suffix.
    #[must_use]
    pub fn enforce_suffix(&self) -> Option<&str> {
        self.enforce_suffix.as_deref()
    }

    /// Returns true if the message is scanned at all.
    ///
    /// With a suffix configured, non-matching messages are skipped for both
    /// detection and enforcement.
    #[must_use]
    pub fn qualifies(&self, message: &str) -> bool {
        self.enforce_suffix
            .as_deref()
            .is_none_or(|suffix| message.ends_with(suffix))
    }

    /// Checks a scanned message against the policy.
    ///
    /// # Errors
    /// Returns `CodegenError::EnforcementViolation` if identifiers are
    /// mandatory and the message has none.
    pub fn check(
        &self,
        file: &str,
        message: &str,
        has_identifier: bool,
    ) -> Result<(), CodegenError> {
        if self.enforce_all && !has_identifier {
            return Err(CodegenError::EnforcementViolation {
                file: file.to_string(),
                message: message.to_string(),
                option: entitygen_schema::IDENTIFIER.name().to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_parse() {
        let params = Parameters::parse("enforce=true, enforce-suffix=Event,paths=source_relative,flag");
        assert_eq!(params.get("enforce"), Some("true"));
        assert_eq!(params.str("enforce-suffix"), "Event");
        assert_eq!(params.get("flag"), Some(""));
        assert_eq!(params.get("missing"), None);
        assert_eq!(params.str("missing"), "");
    }

    #[test]
    fn test_parameters_last_value_wins() {
        let params = Parameters::parse("enforce=false,enforce=1");
        assert!(params.bool("enforce").unwrap());
    }

    #[test]
    fn test_parameters_bool() {
        assert!(!Parameters::parse("").bool("enforce").unwrap());
        assert!(Parameters::parse("enforce=T").bool("enforce").unwrap());
        assert!(!Parameters::parse("enforce=False").bool("enforce").unwrap());

        let err = Parameters::parse("enforce=yes").bool("enforce").unwrap_err();
        assert!(matches!(err, CodegenError::Config { .. }));

        assert!(Parameters::parse("enforce").bool("enforce").is_err());
    }

    #[test]
    fn test_policy_suffix_forces_enforce() {
        let policy = EnforcementPolicy::new(false, Some("Event".to_string()));
        assert!(policy.enforce_all());
        assert_eq!(policy.enforce_suffix(), Some("Event"));

        let policy = EnforcementPolicy::new(false, Some(String::new()));
        assert!(!policy.enforce_all());
        assert_eq!(policy.enforce_suffix(), None);
    }

    #[test]
    fn test_policy_from_parameters() {
        let policy =
            EnforcementPolicy::from_parameters(&Parameters::parse("enforce-suffix=Event")).unwrap();
        assert!(policy.enforce_all());

        let policy = EnforcementPolicy::from_parameters(&Parameters::parse("")).unwrap();
        assert_eq!(policy, EnforcementPolicy::default());

        assert!(EnforcementPolicy::from_parameters(&Parameters::parse("enforce=2")).is_err());
    }

    #[test]
    fn test_policy_qualifies() {
        let policy = EnforcementPolicy::new(true, Some("Event".to_string()));
        assert!(policy.qualifies("OrderEvent"));
        assert!(!policy.qualifies("Order"));

        let policy = EnforcementPolicy::new(true, None);
        assert!(policy.qualifies("Order"));
    }

    #[test]
    fn test_policy_check() {
        let lenient = EnforcementPolicy::default();
        assert!(lenient.check("a.proto", "Ping", false).is_ok());

        let strict = EnforcementPolicy::new(true, None);
        assert!(strict.check("a.proto", "Ping", true).is_ok());
        let err = strict.check("a.proto", "Ping", false).unwrap_err();
        assert!(err.to_string().contains("a.proto:Ping"));
    }
}
