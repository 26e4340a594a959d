//! Implementation-identifier capability registry
//!
//! Codec properties (`key.serializer`, `value.deserializer`, ...) carry the
//! identifier of a pluggable implementation. Instead of resolving those
//! identifiers dynamically at validation time, known implementations are
//! registered up front with the capabilities they provide, and
//! [`rules::validate_implementation`](super::rules::validate_implementation)
//! checks identifiers against this registry.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A capability a registered implementation can provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Turns typed keys or values into bytes.
    Serializer,
    /// Turns bytes back into typed keys or values.
    Deserializer,
    /// Assigns records to partitions.
    Partitioner,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Serializer => f.write_str("serializer"),
            Capability::Deserializer => f.write_str("deserializer"),
            Capability::Partitioner => f.write_str("partitioner"),
        }
    }
}

/// Registry of implementation identifiers and the capabilities each one
/// provides.
#[derive(Debug, Clone, Default)]
pub struct CapabilityRegistry {
    entries: HashMap<String, HashSet<Capability>>,
}

impl CapabilityRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry preloaded with the platform's standard codec
    /// implementations.
    pub fn with_defaults() -> Self {
        const SERIALIZERS: &[&str] = &[
            "org.apache.kafka.common.serialization.StringSerializer",
            "org.apache.kafka.common.serialization.ByteArraySerializer",
            "org.apache.kafka.common.serialization.IntegerSerializer",
            "org.apache.kafka.common.serialization.LongSerializer",
            "org.apache.kafka.common.serialization.DoubleSerializer",
        ];
        const DESERIALIZERS: &[&str] = &[
            "org.apache.kafka.common.serialization.StringDeserializer",
            "org.apache.kafka.common.serialization.ByteArrayDeserializer",
            "org.apache.kafka.common.serialization.IntegerDeserializer",
            "org.apache.kafka.common.serialization.LongDeserializer",
            "org.apache.kafka.common.serialization.DoubleDeserializer",
        ];
        const PARTITIONERS: &[&str] = &[
            "org.apache.kafka.clients.producer.internals.DefaultPartitioner",
            "org.apache.kafka.clients.producer.RoundRobinPartitioner",
        ];

        let mut registry = Self::new();
        for id in SERIALIZERS {
            registry.register(*id, Capability::Serializer);
        }
        for id in DESERIALIZERS {
            registry.register(*id, Capability::Deserializer);
        }
        for id in PARTITIONERS {
            registry.register(*id, Capability::Partitioner);
        }
        registry
    }

    /// Registers `capability` for `identifier`, keeping any capabilities
    /// already registered under the same identifier.
    pub fn register(&mut self, identifier: impl Into<String>, capability: Capability) {
        self.entries
            .entry(identifier.into())
            .or_default()
            .insert(capability);
    }

    /// The capabilities registered for `identifier`, or `None` when the
    /// identifier is unknown.
    pub fn capabilities_of(&self, identifier: &str) -> Option<&HashSet<Capability>> {
        self.entries.get(identifier)
    }

    /// True when `identifier` is registered with `capability`.
    pub fn provides(&self, identifier: &str, capability: Capability) -> bool {
        self.capabilities_of(identifier)
            .is_some_and(|caps| caps.contains(&capability))
    }

    /// Number of registered identifiers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no identifier is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
