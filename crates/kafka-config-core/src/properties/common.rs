//! Properties shared by every client role

use super::{PropertyMap, PropertyValue};

/// Fluent builder for the properties common to producer, consumer, and
/// admin clients: broker addresses, client identity, and the security
/// settings.
#[derive(Debug, Clone, Default)]
pub struct CommonProperties {
    properties: PropertyMap,
}

impl CommonProperties {
    /// Creates an empty set of common properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bootstrap servers as a comma-separated list of `host:port`
    /// pairs.
    pub fn bootstrap_servers(self, servers: impl Into<String>) -> Self {
        self.property("bootstrap.servers", servers.into())
    }

    /// Sets the client id reported to the brokers.
    pub fn client_id(self, client_id: impl Into<String>) -> Self {
        self.property("client.id", client_id.into())
    }

    /// Sets the security protocol (PLAINTEXT, SSL, SASL_PLAINTEXT, SASL_SSL).
    pub fn security_protocol(self, protocol: impl Into<String>) -> Self {
        self.property("security.protocol", protocol.into())
    }

    /// Sets the SASL mechanism (PLAIN, SCRAM-SHA-256, SCRAM-SHA-512, ...).
    pub fn sasl_mechanism(self, mechanism: impl Into<String>) -> Self {
        self.property("sasl.mechanism", mechanism.into())
    }

    /// Sets the SASL JAAS configuration line.
    pub fn sasl_jaas_config(self, jaas_config: impl Into<String>) -> Self {
        self.property("sasl.jaas.config", jaas_config.into())
    }

    /// Sets a single property by key.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Copies every entry of `props` into this builder, overriding existing
    /// keys.
    pub fn properties(mut self, props: PropertyMap) -> Self {
        self.properties.extend(props);
        self
    }

    /// Returns the accumulated property map.
    pub fn build(self) -> PropertyMap {
        self.properties
    }

    /// Read access for the role builders that wrap this one.
    pub(crate) fn as_map(&self) -> &PropertyMap {
        &self.properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_land_under_platform_keys() {
        let map = CommonProperties::new()
            .bootstrap_servers("h1:9092,h2:9092")
            .client_id("billing")
            .security_protocol("SASL_SSL")
            .sasl_mechanism("SCRAM-SHA-512")
            .build();

        assert_eq!(
            map.get("bootstrap.servers"),
            Some(&PropertyValue::from("h1:9092,h2:9092"))
        );
        assert_eq!(map.get("client.id"), Some(&PropertyValue::from("billing")));
        assert_eq!(
            map.get("security.protocol"),
            Some(&PropertyValue::from("SASL_SSL"))
        );
        assert_eq!(
            map.get("sasl.mechanism"),
            Some(&PropertyValue::from("SCRAM-SHA-512"))
        );
    }

    #[test]
    fn test_bulk_properties_override_existing() {
        let mut extra = PropertyMap::new();
        extra.insert("client.id".to_string(), PropertyValue::from("override"));

        let map = CommonProperties::new()
            .client_id("original")
            .properties(extra)
            .build();

        assert_eq!(map.get("client.id"), Some(&PropertyValue::from("override")));
    }
}
