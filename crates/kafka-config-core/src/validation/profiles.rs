//! Role-specific validation profiles
//!
//! Each profile is a fixed composition of the generic rules in
//! [`rules`](super::rules) with the parameter set appropriate to one client
//! role. Profiles contain no rule logic of their own; sub-results are
//! merged in the documented order, so the errors a caller observes follow
//! that order.

use super::rules::{
    self, check_for_warnings, validate_allowed_values, validate_range,
    validate_required_properties,
};
use super::result::ValidationResult;
use crate::properties::PropertyMap;

/// Baseline validation applicable to any client role: the bootstrap servers
/// must be configured, and the warning battery runs.
pub fn validate(map: &PropertyMap) -> ValidationResult {
    let mut result = ValidationResult::new();
    result.merge(validate_required_properties(map, &["bootstrap.servers"]));
    result.merge(check_for_warnings(map));
    result
}

/// Validates a producer configuration.
///
/// Merge order: required properties, `acks`, `compression.type`, the
/// numeric ranges, then the producer warning battery.
pub fn validate_producer_properties(map: &PropertyMap) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(validate_required_properties(
        map,
        &["bootstrap.servers", "key.serializer", "value.serializer"],
    ));
    result.merge(validate_allowed_values(map, "acks", &["0", "1", "all", "-1"]));
    result.merge(validate_allowed_values(
        map,
        "compression.type",
        &["none", "gzip", "snappy", "lz4", "zstd"],
    ));
    result.merge(validate_range(map, "retries", 0, i64::MAX));
    result.merge(validate_range(map, "batch.size", 0, i64::MAX));
    result.merge(validate_range(map, "linger.ms", 0, i64::MAX));
    result.merge(validate_range(map, "buffer.memory", 0, i64::MAX));
    result.merge(rules::check_producer_warnings(map));

    result
}

/// Validates a consumer configuration.
///
/// Merge order: required properties, `auto.offset.reset`, the numeric
/// ranges, then the consumer warning battery.
pub fn validate_consumer_properties(map: &PropertyMap) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(validate_required_properties(
        map,
        &[
            "bootstrap.servers",
            "group.id",
            "key.deserializer",
            "value.deserializer",
        ],
    ));
    result.merge(validate_allowed_values(
        map,
        "auto.offset.reset",
        &["earliest", "latest", "none"],
    ));
    result.merge(validate_range(map, "session.timeout.ms", 1, 3_600_000));
    result.merge(validate_range(map, "max.poll.records", 1, i64::MAX));
    result.merge(validate_range(map, "fetch.min.bytes", 1, i64::MAX));
    result.merge(validate_range(map, "fetch.max.wait.ms", 0, i64::MAX));
    result.merge(rules::check_consumer_warnings(map));

    result
}

/// Validates an admin client configuration.
///
/// Merge order: required properties, then the numeric ranges.
pub fn validate_admin_client_properties(map: &PropertyMap) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(validate_required_properties(map, &["bootstrap.servers"]));
    result.merge(validate_range(map, "request.timeout.ms", 1000, 300_000));
    result.merge(validate_range(map, "retries", 0, i64::MAX));

    result
}
