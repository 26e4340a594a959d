//! Admin client properties

use super::{CommonProperties, PropertyMap, PropertyValue};
use crate::validation::{profiles, ValidationResult};

/// Fluent builder for admin client configuration.
///
/// New instances default to `request.timeout.ms=30000` and `retries=5`.
#[derive(Debug, Clone)]
pub struct AdminClientProperties {
    common: CommonProperties,
}

impl AdminClientProperties {
    /// Creates admin client properties with the default values.
    pub fn new() -> Self {
        let common = CommonProperties::new()
            .property("request.timeout.ms", 30_000)
            .property("retries", 5);
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

    /// Sets the request timeout in milliseconds.
    pub fn request_timeout_ms(self, request_timeout_ms: i32) -> Self {
        self.property("request.timeout.ms", request_timeout_ms)
    }

    /// Sets the number of retries.
    pub fn retries(self, retries: i32) -> Self {
        self.property("retries", retries)
    }

    /// Sets the retry backoff in milliseconds.
    pub fn retry_backoff_ms(self, retry_backoff_ms: i64) -> Self {
        self.property("retry.backoff.ms", retry_backoff_ms)
    }

    /// Sets the maximum idle time for connections in milliseconds.
    pub fn connections_max_idle_ms(self, connections_max_idle_ms: i64) -> Self {
        self.property("connections.max.idle.ms", connections_max_idle_ms)
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

    /// Validates the current configuration against the admin client profile.
    pub fn validate(&self) -> ValidationResult {
        profiles::validate_admin_client_properties(self.common.as_map())
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

impl Default for AdminClientProperties {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let map = AdminClientProperties::new().build();
        assert_eq!(
            map.get("request.timeout.ms"),
            Some(&PropertyValue::from(30_000))
        );
        assert_eq!(map.get("retries"), Some(&PropertyValue::from(5)));
    }

    #[test]
    fn test_validate_requires_bootstrap_servers() {
        let result = AdminClientProperties::new().validate();
        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].property(), Some("bootstrap.servers"));
    }

    #[test]
    fn test_validate_checks_timeout_range() {
        let result = AdminClientProperties::new()
            .bootstrap_servers("h1:9092,h2:9092")
            .request_timeout_ms(500)
            .validate();
        assert!(!result.is_valid());
    }
}
