//! Client configuration preparation and validation for Kafka producer,
//! consumer, and admin clients.
//!
//! ## Features
//!
//! - **Fluent builders**: typed, chainable configuration surfaces per
//!   client role with sensible durability-leaning defaults.
//! - **Property sources**: TOML files and prefixed environment variables,
//!   merged with explicit precedence.
//! - **Composable validation**: stateless rules returning structured
//!   verdicts instead of throwing; every violation is reported in one pass.
//! - **Machine-readable taxonomy**: errors and warnings carry a category,
//!   the offending value, and a recovery suggestion.
//! - **Fail-fast adaptation**: a single boundary function turns a failing
//!   verdict into a [`ConfigurationError`] for call sites that construct
//!   live clients.
//!
//! ## Architecture
//!
//! 1. **Properties** (`properties/`): the scalar value model, the flat
//!    property map, and the role builders.
//! 2. **Sources** (`sources/`): file and environment adapters producing
//!    property maps.
//! 3. **Validation** (`validation/`): the verdict model, the generic rule
//!    set, the capability registry for codec identifiers, and the
//!    role profiles.
//! 4. **Error** (`error`): the `ConfigurationError` family and the
//!    fail-fast adapter.
//!
//! ## Example
//!
//! ```rust
//! use kafka_config_core::properties::ProducerProperties;
//! use kafka_config_core::error::ensure_valid;
//!
//! let props = ProducerProperties::new()
//!     .bootstrap_servers("h1:9092,h2:9092")
//!     .key_serializer("org.apache.kafka.common.serialization.StringSerializer")
//!     .value_serializer("org.apache.kafka.common.serialization.StringSerializer");
//!
//! let verdict = props.validate();
//! for warning in verdict.warnings() {
//!     eprintln!("{}", warning);
//! }
//! let map = ensure_valid(verdict).map(|_| props.build()).expect("validated");
//! assert!(map.contains_key("bootstrap.servers"));
//! ```

pub mod error;
pub mod properties;
pub mod sources;
pub mod validation;

pub use error::{ensure_valid, ConfigurationError};
pub use properties::{
    AdminClientProperties, CommonProperties, ConsumerProperties, ProducerProperties, PropertyMap,
    PropertyValue,
};
pub use sources::SourceError;
pub use validation::{
    Capability, CapabilityRegistry, ValidationError, ValidationErrorKind, ValidationResult,
    ValidationWarning, ValidationWarningKind,
};
