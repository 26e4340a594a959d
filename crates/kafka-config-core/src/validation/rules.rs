//! Generic validation rules
//!
//! Each rule is a pure function from a property map (plus rule parameters)
//! to a [`ValidationResult`]. Rules never fail for validation reasons and
//! never mutate the map; callers compose them by merging results in
//! whatever order they choose.

use super::capability::{Capability, CapabilityRegistry};
use super::result::{ValidationError, ValidationErrorKind, ValidationResult, ValidationWarning};
use crate::properties::{PropertyMap, PropertyValue};

/// Checks that every key in `required` is present with a non-blank value.
///
/// Reports one `MissingRequired` error per violation; it never stops at the
/// first missing key.
pub fn validate_required_properties(map: &PropertyMap, required: &[&str]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for &key in required {
        let missing = match map.get(key) {
            None => true,
            Some(PropertyValue::String(s)) => s.trim().is_empty(),
            Some(_) => false,
        };
        if missing {
            result.add_error(ValidationError::missing_required(key));
        }
    }

    result
}

/// Checks that `key`, when set, has a string form contained in `allowed`.
///
/// Absent keys pass; required-ness is a separate rule.
pub fn validate_allowed_values(map: &PropertyMap, key: &str, allowed: &[&str]) -> ValidationResult {
    let mut result = ValidationResult::new();

    let Some(value) = map.get(key) else {
        return result;
    };

    let actual = value.to_string();
    if !allowed.contains(&actual.as_str()) {
        result.add_error(ValidationError::invalid_value(
            key,
            actual,
            format!("one of: {}", allowed.join(", ")),
        ));
    }

    result
}

/// Checks that `key`, when set, holds a number within `[min, max]`
/// (inclusive both ends).
///
/// Integer values are used natively; string values must parse as integers,
/// anything else is an `InvalidFormat` error.
pub fn validate_range(map: &PropertyMap, key: &str, min: i64, max: i64) -> ValidationResult {
    let mut result = ValidationResult::new();

    let Some(value) = map.get(key) else {
        return result;
    };

    let parsed = match value {
        PropertyValue::Integer(i) => Ok(*i),
        other => other.to_string().trim().parse::<i64>(),
    };

    match parsed {
        Ok(number) => {
            if number < min || number > max {
                result.add_error(ValidationError::out_of_range(key, number, min, max));
            }
        }
        Err(_) => {
            result.add_error(
                ValidationError::new(
                    Some(key.to_string()),
                    format!("invalid numeric value: {}", value),
                    ValidationErrorKind::InvalidFormat,
                )
                .with_suggestion("value must be a valid number")
                .with_actual(value.to_string()),
            );
        }
    }

    result
}

/// Checks that `key`, when set, names a registered implementation providing
/// the expected capability.
///
/// Identifiers are resolved against a [`CapabilityRegistry`] rather than
/// loaded dynamically; both unknown identifiers and identifiers lacking the
/// capability are `InvalidClass` errors.
pub fn validate_implementation(
    map: &PropertyMap,
    key: &str,
    expected: Capability,
    registry: &CapabilityRegistry,
) -> ValidationResult {
    let mut result = ValidationResult::new();

    let Some(value) = map.get(key) else {
        return result;
    };

    let identifier = value.to_string();
    match registry.capabilities_of(&identifier) {
        None => {
            result.add_error(
                ValidationError::new(
                    Some(key.to_string()),
                    format!("unknown implementation: {}", identifier),
                    ValidationErrorKind::InvalidClass,
                )
                .with_suggestion("register the implementation or check the identifier for typos")
                .with_actual(identifier),
            );
        }
        Some(capabilities) if !capabilities.contains(&expected) => {
            result.add_error(
                ValidationError::new(
                    Some(key.to_string()),
                    format!(
                        "implementation {} does not provide the {} capability",
                        identifier, expected
                    ),
                    ValidationErrorKind::InvalidClass,
                )
                .with_suggestion(format!("use an implementation registered as a {}", expected))
                .with_actual(identifier)
                .with_expected(expected.to_string()),
            );
        }
        Some(_) => {}
    }

    result
}

/// Runs a caller-supplied rule against `key`'s value, forwarding its result
/// unchanged. Absent keys pass without invoking the rule.
pub fn validate_custom<F>(map: &PropertyMap, key: &str, rule: F) -> ValidationResult
where
    F: FnOnce(&str, &PropertyValue) -> ValidationResult,
{
    match map.get(key) {
        Some(value) => rule(key, value),
        None => ValidationResult::success(),
    }
}

/// Runs the fixed battery of best-practice checks and returns the advisory
/// warnings that apply. Never produces errors.
pub fn check_for_warnings(map: &PropertyMap) -> ValidationResult {
    let mut result = ValidationResult::new();

    check_bootstrap_servers(map, &mut result);
    result.merge(check_producer_warnings(map));
    result.merge(check_consumer_warnings(map));

    result
}

fn check_bootstrap_servers(map: &PropertyMap, result: &mut ValidationResult) {
    if let Some(servers) = map.get("bootstrap.servers") {
        if !servers.to_string().contains(',') {
            result.add_warning(ValidationWarning::performance(
                "bootstrap.servers",
                "only one bootstrap server is configured",
                "configure multiple bootstrap servers for better reliability: 'host1:9092,host2:9092'",
            ));
        }
    }
}

pub(super) fn check_producer_warnings(map: &PropertyMap) -> ValidationResult {
    let mut result = ValidationResult::new();

    if map.get("acks").is_some_and(|v| v.to_string() == "0") {
        result.add_warning(ValidationWarning::reliability(
            "acks",
            "acks=0 provides no guarantee that records have been received by the broker",
            "consider acks=1 or acks=all for better durability guarantees",
        ));
    }

    if map.get("retries").is_some_and(|v| v.to_string() == "0") {
        result.add_warning(ValidationWarning::reliability(
            "retries",
            "retries=0 means no retries will be performed",
            "consider a positive retry count to handle transient errors",
        ));
    }

    result
}

pub(super) fn check_consumer_warnings(map: &PropertyMap) -> ValidationResult {
    let mut result = ValidationResult::new();

    if map
        .get("enable.auto.commit")
        .is_some_and(|v| v.to_string() == "true")
    {
        result.add_warning(ValidationWarning::reliability(
            "enable.auto.commit",
            "enable.auto.commit=true may result in duplicate processing or message loss",
            "consider manual commits (enable.auto.commit=false) for better control",
        ));
    }

    if map
        .get("auto.offset.reset")
        .is_some_and(|v| v.to_string() == "latest")
    {
        result.add_warning(ValidationWarning::performance(
            "auto.offset.reset",
            "auto.offset.reset=latest will skip messages sent while the consumer was offline",
            "consider 'earliest' if every message must be processed",
        ));
    }

    result
}
