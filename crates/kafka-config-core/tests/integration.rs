//! Integration tests for the configuration core
//!
//! Exercises the full path an application takes: load properties from a
//! file and the environment, layer builder defaults on top, validate the
//! result, and convert a failing verdict at the fail-fast boundary.

use kafka_config_core::error::ensure_valid;
use kafka_config_core::properties::{ConsumerProperties, ProducerProperties};
use kafka_config_core::sources;
use kafka_config_core::validation::{
    profiles, rules, Capability, CapabilityRegistry, ValidationErrorKind, ValidationWarningKind,
};
use std::io::Write;

#[test]
fn test_file_env_and_builder_layers_compose() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[bootstrap]\nservers = \"h1:9092,h2:9092\"\n\n[session.timeout]\nms = 30000"
    )
    .unwrap();

    let from_file = sources::load_from_file(file.path()).unwrap();
    let from_env = sources::properties_from_vars(
        "KAFKA_",
        [("KAFKA_GROUP_ID".to_string(), "billing".to_string())],
    );

    let map = ConsumerProperties::new()
        .key_deserializer("org.apache.kafka.common.serialization.StringDeserializer")
        .value_deserializer("org.apache.kafka.common.serialization.StringDeserializer")
        .properties(sources::merge([from_file, from_env]))
        .build();

    let verdict = profiles::validate_consumer_properties(&map);
    assert!(verdict.is_valid(), "{}", verdict.detailed_message());
    // defaults chose earliest + manual commits, so no reliability warnings
    assert!(verdict
        .warnings()
        .iter()
        .all(|w| w.kind() != ValidationWarningKind::Reliability));
}

#[test]
fn test_rejected_configuration_reports_every_violation() {
    let map = ProducerProperties::new()
        .acks("2")
        .retries(-1)
        .compression_type("brotli")
        .build();

    let verdict = profiles::validate_producer_properties(&map);
    let error = ensure_valid(verdict).unwrap_err();

    // missing bootstrap.servers + serializers, invalid acks and
    // compression.type, out-of-range retries: all in one report
    assert_eq!(error.errors().len(), 6);
    assert!(error.to_string().contains("6 errors"));
    assert!(error.has_recovery_suggestions());

    let detailed = error.detailed_message();
    assert!(detailed.contains("Errors:"));
    assert!(detailed.contains("[acks]"));
    assert!(detailed.contains("[retries]"));
}

#[test]
fn test_accepted_with_warnings_proceeds() {
    let map = ProducerProperties::new()
        .bootstrap_servers("solo:9092")
        .key_serializer("org.apache.kafka.common.serialization.StringSerializer")
        .value_serializer("org.apache.kafka.common.serialization.StringSerializer")
        .build();

    let verdict = profiles::validate(&map);
    let passed = ensure_valid(verdict).unwrap();
    assert_eq!(passed.warnings().len(), 1);
    assert_eq!(
        passed.warnings()[0].kind(),
        ValidationWarningKind::Performance
    );
}

#[test]
fn test_codec_identifiers_check_against_the_registry() {
    let map = ProducerProperties::new()
        .bootstrap_servers("h1:9092,h2:9092")
        .key_serializer("org.apache.kafka.common.serialization.StringDeserializer")
        .value_serializer("org.apache.kafka.common.serialization.StringSerializer")
        .build();

    let registry = CapabilityRegistry::with_defaults();
    let mut verdict = profiles::validate_producer_properties(&map);
    verdict.merge(rules::validate_implementation(
        &map,
        "key.serializer",
        Capability::Serializer,
        &registry,
    ));
    verdict.merge(rules::validate_implementation(
        &map,
        "value.serializer",
        Capability::Serializer,
        &registry,
    ));

    let errors = verdict.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), ValidationErrorKind::InvalidClass);
    assert_eq!(errors[0].property(), Some("key.serializer"));
}
