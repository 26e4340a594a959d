//! Property model and fluent configuration builders
//!
//! Client configuration is carried as a flat, string-keyed map of scalar
//! values. The builders in this module provide a typed, chainable surface
//! over that map for each client role; the escape hatches `property` and
//! `properties` accept any key the platform understands.

mod admin;
mod common;
mod consumer;
mod producer;

pub use admin::AdminClientProperties;
pub use common::CommonProperties;
pub use consumer::ConsumerProperties;
pub use producer::ProducerProperties;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A flat client configuration: property name to scalar value.
///
/// Keys are unique and insertion order carries no meaning. Validation rules
/// read the map but never mutate it.
pub type PropertyMap = HashMap<String, PropertyValue>;

/// A single scalar configuration value.
///
/// The platform's configuration surface is loosely typed: every value has a
/// canonical string form (the [`fmt::Display`] impl) which is what rules
/// compare against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// A string value.
    String(String),
    /// An integer value (covers the platform's int and long properties).
    Integer(i64),
    /// A boolean value.
    Boolean(bool),
}

impl PropertyValue {
    /// Returns the string slice if this value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this value is one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the boolean if this value is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::String(s) => f.write_str(s),
            PropertyValue::Integer(i) => write!(f, "{}", i),
            PropertyValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Integer(i64::from(value))
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Integer(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Boolean(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_canonical_string_form() {
        assert_eq!(PropertyValue::from("all").to_string(), "all");
        assert_eq!(PropertyValue::from(30000).to_string(), "30000");
        assert_eq!(PropertyValue::from(true).to_string(), "true");
    }

    #[test]
    fn test_scalar_accessors() {
        assert_eq!(PropertyValue::from("x").as_str(), Some("x"));
        assert_eq!(PropertyValue::from(7).as_integer(), Some(7));
        assert_eq!(PropertyValue::from(false).as_bool(), Some(false));
        assert_eq!(PropertyValue::from(7).as_str(), None);
    }

    #[test]
    fn test_serde_untagged_roundtrip() {
        let json = serde_json::to_string(&PropertyValue::from(42)).unwrap();
        assert_eq!(json, "42");
        let back: PropertyValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PropertyValue::Integer(42));
    }
}
