//! Fail-fast adaptation of validation results
//!
//! Rule functions report failures as values; call sites that want to abort
//! before constructing a live client convert a failing
//! [`ValidationResult`] into a [`ConfigurationError`] through
//! [`ensure_valid`]. The named variants exist so callers can match on the
//! failure kind without walking the error list.

use crate::validation::{ValidationError, ValidationErrorKind, ValidationResult};
use thiserror::Error;

/// Error raised when a configuration is rejected at a fail-fast boundary.
///
/// Every variant wraps exactly one [`ValidationResult`]; the named variants
/// pre-populate it with a single error of the matching taxonomy (one per
/// property for [`MissingRequiredProperty`](Self::MissingRequiredProperty)).
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// A validation run produced one or more errors.
    #[error("{}", failure_summary(.0))]
    Invalid(ValidationResult),

    /// One or more required properties are absent or blank.
    #[error("{}", failure_summary(.result))]
    MissingRequiredProperty {
        /// The missing property names.
        properties: Vec<String>,
        /// The pre-populated validation result.
        result: ValidationResult,
    },

    /// A property is set to a value outside its allowed set.
    #[error("{}", failure_summary(.result))]
    InvalidPropertyValue {
        /// The offending property.
        property: String,
        /// The rejected value.
        actual: String,
        /// The expected value or format.
        expected: String,
        /// The pre-populated validation result.
        result: ValidationResult,
    },

    /// A numeric property is outside its inclusive range.
    #[error("{}", failure_summary(.result))]
    PropertyOutOfRange {
        /// The offending property.
        property: String,
        /// The rejected value.
        actual: i64,
        /// The minimum allowed value.
        min: i64,
        /// The maximum allowed value.
        max: i64,
        /// The pre-populated validation result.
        result: ValidationResult,
    },
}

impl ConfigurationError {
    /// Error for one or more missing required properties.
    pub fn missing_required_property(properties: impl IntoIterator<Item = String>) -> Self {
        let properties: Vec<String> = properties.into_iter().collect();
        let mut result = ValidationResult::new();
        for property in &properties {
            result.add_error(ValidationError::missing_required(property.clone()));
        }
        ConfigurationError::MissingRequiredProperty { properties, result }
    }

    /// Error for a property holding a value outside its allowed set.
    pub fn invalid_property_value(
        property: impl Into<String>,
        actual: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        let property = property.into();
        let actual = actual.into();
        let expected = expected.into();
        let result = ValidationResult::error(ValidationError::invalid_value(
            property.clone(),
            actual.clone(),
            expected.clone(),
        ));
        ConfigurationError::InvalidPropertyValue {
            property,
            actual,
            expected,
            result,
        }
    }

    /// Error for a numeric property outside `[min, max]`.
    pub fn property_out_of_range(property: impl Into<String>, actual: i64, min: i64, max: i64) -> Self {
        let property = property.into();
        let result =
            ValidationResult::error(ValidationError::out_of_range(property.clone(), actual, min, max));
        ConfigurationError::PropertyOutOfRange {
            property,
            actual,
            min,
            max,
            result,
        }
    }

    /// Error carrying a free-form message under the general taxonomy.
    pub fn general(message: impl Into<String>) -> Self {
        ConfigurationError::Invalid(ValidationResult::error(ValidationError::new(
            None,
            message,
            ValidationErrorKind::General,
        )))
    }

    /// The wrapped validation result.
    pub fn validation_result(&self) -> &ValidationResult {
        match self {
            ConfigurationError::Invalid(result) => result,
            ConfigurationError::MissingRequiredProperty { result, .. } => result,
            ConfigurationError::InvalidPropertyValue { result, .. } => result,
            ConfigurationError::PropertyOutOfRange { result, .. } => result,
        }
    }

    /// The wrapped errors.
    pub fn errors(&self) -> &[ValidationError] {
        self.validation_result().errors()
    }

    /// The wrapped warnings.
    pub fn warnings(&self) -> &[crate::validation::ValidationWarning] {
        self.validation_result().warnings()
    }

    /// True when any wrapped error or warning carries a non-blank
    /// suggestion.
    pub fn has_recovery_suggestions(&self) -> bool {
        let result = self.validation_result();
        result.errors().iter().any(|e| e.has_suggestion())
            || result.warnings().iter().any(|w| w.has_suggestion())
    }

    /// All suggestions, deduplicated.
    pub fn recovery_suggestions(&self) -> Vec<String> {
        self.validation_result().recovery_suggestions()
    }

    /// The full multi-line report for logs and diagnostics.
    pub fn detailed_message(&self) -> String {
        self.validation_result().detailed_message()
    }
}

/// Fail-fast boundary adapter: passes a valid result through (warnings
/// intact) and converts a failing one into a [`ConfigurationError`].
pub fn ensure_valid(result: ValidationResult) -> Result<ValidationResult, ConfigurationError> {
    if result.is_valid() {
        Ok(result)
    } else {
        Err(ConfigurationError::Invalid(result))
    }
}

fn failure_summary(result: &ValidationResult) -> String {
    match result.errors() {
        [single] => format!("configuration validation failed: {}", single.message()),
        errors if errors.len() > 1 => {
            format!("configuration validation failed with {} errors", errors.len())
        }
        _ => "configuration validation failed".to_string(),
    }
}
