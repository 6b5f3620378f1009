//! Configuration validation for rowdiff.

use super::types::{AppConfig, InputConfig, MatchingConfig, OutputConfig};
use crate::utils::lookup_encoding;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.matching.validate());
        errors.extend(self.input.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for MatchingConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        // NaN fails the range check too
        if !(0.0..=1.0).contains(&self.threshold) {
            errors.push(ConfigError {
                field: "matching.threshold".to_string(),
                message: format!("Threshold must be between 0.0 and 1.0, got {}", self.threshold),
            });
        }
        errors
    }
}

impl Validatable for InputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(error) = check_encoding("input.encoding", self.encoding.as_deref()) {
            errors.push(error);
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError {
                        field: "output.file".to_string(),
                        message: format!("Parent directory does not exist: {}", parent.display()),
                    });
                }
            }
        }

        if let Some(error) = check_encoding("output.encoding", self.encoding.as_deref()) {
            errors.push(error);
        }

        if self.line_terminator.is_empty() {
            errors.push(ConfigError {
                field: "output.line_terminator".to_string(),
                message: "Line terminator must not be empty".to_string(),
            });
        }

        errors
    }
}

fn check_encoding(field: &str, label: Option<&str>) -> Option<ConfigError> {
    let label = label?;
    if lookup_encoding(label).is_some() {
        return None;
    }
    Some(ConfigError {
        field: field.to_string(),
        message: format!("Unknown encoding '{label}'"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_threshold_range() {
        for bad in [-0.1, 1.5, f64::NAN] {
            let config = MatchingConfig {
                threshold: bad,
                ..MatchingConfig::default()
            };
            let errors = config.validate();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "matching.threshold");
        }
        for good in [0.0, 0.6, 1.0] {
            let config = MatchingConfig {
                threshold: good,
                ..MatchingConfig::default()
            };
            assert!(config.is_valid());
        }
    }

    #[test]
    fn test_unknown_encodings() {
        let mut config = AppConfig::default();
        config.input.encoding = Some("cp932".into());
        assert!(config.is_valid());

        config.input.encoding = Some("klingon".into());
        config.output.encoding = Some("nope".into());
        let fields: Vec<_> = config.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["input.encoding", "output.encoding"]);
    }

    #[test]
    fn test_output_checks() {
        let config = OutputConfig {
            file: Some(PathBuf::from("/nonexistent/dir/out.csv")),
            line_terminator: String::new(),
            ..OutputConfig::default()
        };
        assert_eq!(config.validate().len(), 2);
    }
}
