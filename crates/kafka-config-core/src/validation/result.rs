//! Validation verdict model
//!
//! A validation run produces a [`ValidationResult`]: an append-only log of
//! [`ValidationError`]s (blocking) and [`ValidationWarning`]s (advisory).
//! Results compose through [`ValidationResult::merge`], which lets callers
//! stitch together any number of independent rule checks into one report.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Machine-readable category of a blocking validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// A required property is missing.
    MissingRequired,
    /// A property has an invalid value.
    InvalidValue,
    /// A property value is out of the allowed range.
    OutOfRange,
    /// A property value is not one of the allowed choices.
    InvalidChoice,
    /// An implementation identifier is unknown or does not provide the
    /// expected capability.
    InvalidClass,
    /// A property value has an invalid format.
    InvalidFormat,
    /// A general validation error.
    General,
}

/// Machine-readable category of an advisory validation warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationWarningKind {
    /// Performance implications.
    Performance,
    /// Security concerns.
    Security,
    /// Deprecated configuration.
    Deprecated,
    /// Best-practice deviation.
    BestPractice,
    /// Potential reliability issues.
    Reliability,
    /// A general validation warning.
    General,
}

/// A single blocking validation error.
///
/// Identity is deliberately narrow: two errors are equal when their
/// property, message, and kind match. The suggestion and the
/// actual/expected context are descriptive payload, not identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    property: Option<String>,
    message: String,
    kind: ValidationErrorKind,
    suggestion: Option<String>,
    actual: Option<String>,
    expected: Option<String>,
}

impl ValidationError {
    /// Creates a new error for `property` with the given message and kind.
    pub fn new(
        property: impl Into<Option<String>>,
        message: impl Into<String>,
        kind: ValidationErrorKind,
    ) -> Self {
        Self {
            property: property.into(),
            message: message.into(),
            kind,
            suggestion: None,
            actual: None,
            expected: None,
        }
    }

    /// Attaches a recovery suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attaches the offending value.
    pub fn with_actual(mut self, actual: impl Into<String>) -> Self {
        self.actual = Some(actual.into());
        self
    }

    /// Attaches the expected value or format.
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Error for a required property that is missing or blank.
    pub fn missing_required(property: impl Into<String>) -> Self {
        Self::new(
            Some(property.into()),
            "required property is missing",
            ValidationErrorKind::MissingRequired,
        )
        .with_suggestion("provide a value for this required property")
    }

    /// Error for a property set to a value outside the allowed set.
    pub fn invalid_value(
        property: impl Into<String>,
        actual: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        let actual = actual.into();
        let expected = expected.into();
        Self::new(
            Some(property.into()),
            format!("invalid value: {}", actual),
            ValidationErrorKind::InvalidValue,
        )
        .with_suggestion(format!("expected: {}", expected))
        .with_actual(actual)
        .with_expected(expected)
    }

    /// Error for a numeric property outside its inclusive range.
    pub fn out_of_range(property: impl Into<String>, actual: i64, min: i64, max: i64) -> Self {
        Self::new(
            Some(property.into()),
            format!("value {} is out of range", actual),
            ValidationErrorKind::OutOfRange,
        )
        .with_suggestion(format!("value must be between {} and {}", min, max))
        .with_actual(actual.to_string())
        .with_expected(format!("{} - {}", min, max))
    }

    /// The property this error refers to, if it refers to one.
    pub fn property(&self) -> Option<&str> {
        self.property.as_deref()
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error category.
    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    /// The recovery suggestion, if any.
    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    /// The offending value, if recorded.
    pub fn actual(&self) -> Option<&str> {
        self.actual.as_deref()
    }

    /// The expected value or format, if recorded.
    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    /// True when a non-blank recovery suggestion is attached.
    pub fn has_suggestion(&self) -> bool {
        self.suggestion
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }

    /// Renders `[property] message Suggestion: ...`, omitting absent parts.
    pub fn formatted_message(&self) -> String {
        let mut out = String::new();
        if let Some(property) = &self.property {
            out.push_str(&format!("[{}] ", property));
        }
        out.push_str(&self.message);
        if let Some(suggestion) = self.suggestion.as_deref().filter(|s| !s.trim().is_empty()) {
            out.push_str(&format!(" Suggestion: {}", suggestion));
        }
        out
    }
}

// Identity excludes suggestion/actual/expected on purpose; see the type docs.
impl PartialEq for ValidationError {
    fn eq(&self, other: &Self) -> bool {
        self.property == other.property && self.message == other.message && self.kind == other.kind
    }
}

impl Eq for ValidationError {}

impl Hash for ValidationError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.property.hash(state);
        self.message.hash(state);
        self.kind.hash(state);
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted_message())
    }
}

/// A single advisory validation warning. Warnings never affect validity.
///
/// Same identity contract as [`ValidationError`]: property, message, and
/// kind only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationWarning {
    property: Option<String>,
    message: String,
    kind: ValidationWarningKind,
    suggestion: Option<String>,
    actual: Option<String>,
}

impl ValidationWarning {
    /// Creates a new warning for `property` with the given message and kind.
    pub fn new(
        property: impl Into<Option<String>>,
        message: impl Into<String>,
        kind: ValidationWarningKind,
    ) -> Self {
        Self {
            property: property.into(),
            message: message.into(),
            kind,
            suggestion: None,
            actual: None,
        }
    }

    /// Attaches a suggestion for addressing the warning.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attaches the value that triggered the warning.
    pub fn with_actual(mut self, actual: impl Into<String>) -> Self {
        self.actual = Some(actual.into());
        self
    }

    /// Warning about a setting with performance implications.
    pub fn performance(
        property: impl Into<String>,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::new(Some(property.into()), message, ValidationWarningKind::Performance)
            .with_suggestion(suggestion)
    }

    /// Warning about a security-sensitive setting.
    pub fn security(
        property: impl Into<String>,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::new(Some(property.into()), message, ValidationWarningKind::Security)
            .with_suggestion(suggestion)
    }

    /// Warning about a deprecated property, naming its replacement.
    pub fn deprecated(property: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self::new(
            Some(property.into()),
            "property is deprecated",
            ValidationWarningKind::Deprecated,
        )
        .with_suggestion(format!("use {} instead", replacement.into()))
    }

    /// Warning about a setting with reliability implications.
    pub fn reliability(
        property: impl Into<String>,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::new(Some(property.into()), message, ValidationWarningKind::Reliability)
            .with_suggestion(suggestion)
    }

    /// The property this warning refers to, if it refers to one.
    pub fn property(&self) -> Option<&str> {
        self.property.as_deref()
    }

    /// The warning message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The warning category.
    pub fn kind(&self) -> ValidationWarningKind {
        self.kind
    }

    /// The suggestion, if any.
    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    /// The value that triggered the warning, if recorded.
    pub fn actual(&self) -> Option<&str> {
        self.actual.as_deref()
    }

    /// True when a non-blank suggestion is attached.
    pub fn has_suggestion(&self) -> bool {
        self.suggestion
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }

    /// Renders `[property] message Suggestion: ...`, omitting absent parts.
    pub fn formatted_message(&self) -> String {
        let mut out = String::new();
        if let Some(property) = &self.property {
            out.push_str(&format!("[{}] ", property));
        }
        out.push_str(&self.message);
        if let Some(suggestion) = self.suggestion.as_deref().filter(|s| !s.trim().is_empty()) {
            out.push_str(&format!(" Suggestion: {}", suggestion));
        }
        out
    }
}

impl PartialEq for ValidationWarning {
    fn eq(&self, other: &Self) -> bool {
        self.property == other.property && self.message == other.message && self.kind == other.kind
    }
}

impl Eq for ValidationWarning {}

impl Hash for ValidationWarning {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.property.hash(state);
        self.message.hash(state);
        self.kind.hash(state);
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted_message())
    }
}

/// The composable pass/fail verdict of one or more validation checks.
///
/// A result is valid exactly when it carries no errors; warnings are
/// advisory and never block. The empty result is the identity of
/// [`merge`](Self::merge).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates an empty (passing) result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alias for [`new`](Self::new) reading better at call sites that
    /// return early.
    pub fn success() -> Self {
        Self::new()
    }

    /// Creates a result carrying a single error.
    pub fn error(error: ValidationError) -> Self {
        let mut result = Self::new();
        result.add_error(error);
        result
    }

    /// Creates a result carrying a single warning.
    pub fn warning(warning: ValidationWarning) -> Self {
        let mut result = Self::new();
        result.add_warning(warning);
        result
    }

    /// Appends an error.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Appends a warning.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Appends every entry of `other`, preserving call order. Merging is
    /// associative, and commutative up to ordering.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// True when any error is present.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// True when any warning is present.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// True when no errors are present; warnings do not count.
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// The recorded errors, in append order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The recorded warnings, in append order.
    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    /// Total number of errors and warnings.
    pub fn total_issues(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// All non-blank suggestions from errors and warnings, deduplicated,
    /// first occurrence wins.
    pub fn recovery_suggestions(&self) -> Vec<String> {
        let mut suggestions: Vec<String> = Vec::new();
        let candidates = self
            .errors
            .iter()
            .filter(|e| e.has_suggestion())
            .filter_map(|e| e.suggestion())
            .chain(
                self.warnings
                    .iter()
                    .filter(|w| w.has_suggestion())
                    .filter_map(|w| w.suggestion()),
            );
        for suggestion in candidates {
            if !suggestions.iter().any(|s| s == suggestion) {
                suggestions.push(suggestion.to_string());
            }
        }
        suggestions
    }

    /// Renders a multi-line report: numbered errors, then numbered
    /// warnings, then the deduplicated suggestions. Empty sections are
    /// omitted.
    pub fn detailed_message(&self) -> String {
        let mut out = String::from("configuration validation failed");

        if !self.errors.is_empty() {
            out.push_str("\n\nErrors:");
            for (i, error) in self.errors.iter().enumerate() {
                out.push_str(&format!("\n  {}. {}", i + 1, error.formatted_message()));
            }
        }

        if !self.warnings.is_empty() {
            out.push_str("\n\nWarnings:");
            for (i, warning) in self.warnings.iter().enumerate() {
                out.push_str(&format!("\n  {}. {}", i + 1, warning.formatted_message()));
            }
        }

        let suggestions = self.recovery_suggestions();
        if !suggestions.is_empty() {
            out.push_str("\n\nSuggestions:");
            for (i, suggestion) in suggestions.iter().enumerate() {
                out.push_str(&format!("\n  {}. {}", i + 1, suggestion));
            }
        }

        out
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ValidationResult {{ errors: {}, warnings: {}, valid: {} }}",
            self.errors.len(),
            self.warnings.len(),
            self.is_valid()
        )
    }
}
