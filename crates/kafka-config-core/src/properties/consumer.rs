//! Consumer client properties

use super::{CommonProperties, PropertyMap, PropertyValue};
use crate::validation::{profiles, ValidationResult};

/// Fluent builder for consumer configuration.
///
/// New instances default to manual offset commits
/// (`enable.auto.commit=false`) and `auto.offset.reset=earliest` so no
/// records are silently skipped.
#[derive(Debug, Clone)]
pub struct ConsumerProperties {
    common: CommonProperties,
}

impl ConsumerProperties {
    /// Creates consumer properties with the default values.
    pub fn new() -> Self {
        let common = CommonProperties::new()
            .property("enable.auto.commit", "false")
            .property("auto.offset.reset", "earliest")
            .property("fetch.min.bytes", 1)
            .property("fetch.max.wait.ms", 500)
            .property("max.poll.records", 500);
        Self { common }
    }

    /// Sets the bootstrap servers as a comma-separated list of `host:port`
    /// pairs.
    pub fn bootstrap_servers(self, servers: impl Into<String>) -> Self {
        self.map_common(|c| c.bootstrap_servers(servers))
    }

    /// Sets the client id reported to the brokers.
    pub fn client_id(self, client_id: impl Into<String>) -> Self {
        self.map_common(|c| c.client_id(client_id))
    }

    /// Sets the security protocol.
    pub fn security_protocol(self, protocol: impl Into<String>) -> Self {
        self.map_common(|c| c.security_protocol(protocol))
    }

    /// Sets the SASL mechanism.
    pub fn sasl_mechanism(self, mechanism: impl Into<String>) -> Self {
        self.map_common(|c| c.sasl_mechanism(mechanism))
    }

    /// Sets the consumer group id.
    pub fn group_id(self, group_id: impl Into<String>) -> Self {
        self.property("group.id", group_id.into())
    }

    /// Enables or disables automatic offset commits.
    pub fn enable_auto_commit(self, enable: bool) -> Self {
        self.property("enable.auto.commit", enable.to_string())
    }

    /// Sets the automatic commit interval in milliseconds.
    pub fn auto_commit_interval_ms(self, interval_ms: i32) -> Self {
        self.property("auto.commit.interval.ms", interval_ms)
    }

    /// Sets the offset reset policy (earliest, latest, none).
    pub fn auto_offset_reset(self, policy: impl Into<String>) -> Self {
        self.property("auto.offset.reset", policy.into())
    }

    /// Sets the minimum bytes per fetch.
    pub fn fetch_min_bytes(self, fetch_min_bytes: i32) -> Self {
        self.property("fetch.min.bytes", fetch_min_bytes)
    }

    /// Sets the maximum wait per fetch in milliseconds.
    pub fn fetch_max_wait_ms(self, fetch_max_wait_ms: i32) -> Self {
        self.property("fetch.max.wait.ms", fetch_max_wait_ms)
    }

    /// Sets the maximum number of records per poll.
    pub fn max_poll_records(self, max_poll_records: i32) -> Self {
        self.property("max.poll.records", max_poll_records)
    }

    /// Sets the session timeout in milliseconds.
    pub fn session_timeout_ms(self, session_timeout_ms: i32) -> Self {
        self.property("session.timeout.ms", session_timeout_ms)
    }

    /// Sets the maximum poll interval in milliseconds.
    pub fn max_poll_interval_ms(self, max_poll_interval_ms: i32) -> Self {
        self.property("max.poll.interval.ms", max_poll_interval_ms)
    }

    /// Sets the key deserializer implementation identifier.
    pub fn key_deserializer(self, identifier: impl Into<String>) -> Self {
        self.property("key.deserializer", identifier.into())
    }

    /// Sets the value deserializer implementation identifier.
    pub fn value_deserializer(self, identifier: impl Into<String>) -> Self {
        self.property("value.deserializer", identifier.into())
    }

    /// Sets a single property by key.
    pub fn property(self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.map_common(|c| c.property(key, value))
    }

    /// Copies every entry of `props` into this builder, overriding existing
    /// keys.
    pub fn properties(self, props: PropertyMap) -> Self {
        self.map_common(|c| c.properties(props))
    }

    /// Validates the current configuration against the consumer profile.
    pub fn validate(&self) -> ValidationResult {
        profiles::validate_consumer_properties(self.common.as_map())
    }

    /// Returns the accumulated property map.
    pub fn build(self) -> PropertyMap {
        self.common.build()
    }

    fn map_common(mut self, f: impl FnOnce(CommonProperties) -> CommonProperties) -> Self {
        self.common = f(self.common);
        self
    }
}

impl Default for ConsumerProperties {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_manual_commits() {
        let map = ConsumerProperties::new().build();
        assert_eq!(
            map.get("enable.auto.commit"),
            Some(&PropertyValue::from("false"))
        );
        assert_eq!(
            map.get("auto.offset.reset"),
            Some(&PropertyValue::from("earliest"))
        );
        assert_eq!(map.get("max.poll.records"), Some(&PropertyValue::from(500)));
    }

    #[test]
    fn test_auto_commit_setter_stores_string_form() {
        let map = ConsumerProperties::new().enable_auto_commit(true).build();
        assert_eq!(
            map.get("enable.auto.commit"),
            Some(&PropertyValue::from("true"))
        );
    }

    #[test]
    fn test_validate_requires_group_and_deserializers() {
        let props = ConsumerProperties::new().bootstrap_servers("h1:9092,h2:9092");
        let result = props.validate();
        assert!(!result.is_valid());
        // group.id, key.deserializer, value.deserializer
        assert_eq!(result.errors().len(), 3);
    }
}
