//! Producer client properties

use super::{CommonProperties, PropertyMap, PropertyValue};
use crate::validation::{profiles, ValidationResult};

/// Fluent builder for producer configuration.
///
/// New instances start from durability-leaning defaults: `acks=all`,
/// `retries=3`, `batch.size=16384`, `linger.ms=5`, `buffer.memory=33554432`.
#[derive(Debug, Clone)]
pub struct ProducerProperties {
    common: CommonProperties,
}

impl ProducerProperties {
    /// Creates producer properties with the default values.
    pub fn new() -> Self {
        let common = CommonProperties::new()
            .property("acks", "all")
            .property("retries", 3)
            .property("batch.size", 16384)
            .property("linger.ms", 5)
            .property("buffer.memory", 33_554_432i64);
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

    /// Sets the acknowledgment mode (`0`, `1`, `all`, or `-1`).
    pub fn acks(self, acks: impl Into<String>) -> Self {
        self.property("acks", acks.into())
    }

    /// Sets the number of send retries.
    pub fn retries(self, retries: i32) -> Self {
        self.property("retries", retries)
    }

    /// Sets the batch size in bytes.
    pub fn batch_size(self, batch_size: i32) -> Self {
        self.property("batch.size", batch_size)
    }

    /// Sets the linger time in milliseconds.
    pub fn linger_ms(self, linger_ms: i64) -> Self {
        self.property("linger.ms", linger_ms)
    }

    /// Sets the total buffer memory in bytes.
    pub fn buffer_memory(self, buffer_memory: i64) -> Self {
        self.property("buffer.memory", buffer_memory)
    }

    /// Sets the key serializer implementation identifier.
    pub fn key_serializer(self, identifier: impl Into<String>) -> Self {
        self.property("key.serializer", identifier.into())
    }

    /// Sets the value serializer implementation identifier.
    pub fn value_serializer(self, identifier: impl Into<String>) -> Self {
        self.property("value.serializer", identifier.into())
    }

    /// Sets the compression type (none, gzip, snappy, lz4, zstd).
    pub fn compression_type(self, compression: impl Into<String>) -> Self {
        self.property("compression.type", compression.into())
    }

    /// Sets the maximum request size in bytes.
    pub fn max_request_size(self, max_request_size: i32) -> Self {
        self.property("max.request.size", max_request_size)
    }

    /// Sets the request timeout in milliseconds.
    pub fn request_timeout_ms(self, request_timeout_ms: i32) -> Self {
        self.property("request.timeout.ms", request_timeout_ms)
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

    /// Validates the current configuration against the producer profile.
    pub fn validate(&self) -> ValidationResult {
        profiles::validate_producer_properties(self.common.as_map())
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

impl Default for ProducerProperties {
    fn default() -> Self {
        Self::new()
    }
}
