//! Environment variable property source

use crate::properties::{PropertyMap, PropertyValue};

/// Loads every environment variable starting with `prefix` into a property
/// map, mapping `PREFIX_BOOTSTRAP_SERVERS` to `bootstrap.servers`: the
/// prefix is stripped, the rest lowercased, and underscores become dots.
/// Values are kept as strings.
pub fn load_from_env(prefix: &str) -> PropertyMap {
    let map = properties_from_vars(prefix, std::env::vars());
    tracing::debug!(prefix, count = map.len(), "loaded properties from environment");
    map
}

/// The pure mapping behind [`load_from_env`], taking the variables as an
/// iterator so callers and tests can supply them directly.
pub fn properties_from_vars(
    prefix: &str,
    vars: impl IntoIterator<Item = (String, String)>,
) -> PropertyMap {
    let mut map = PropertyMap::new();
    for (name, value) in vars {
        if let Some(rest) = name.strip_prefix(prefix) {
            if rest.is_empty() {
                continue;
            }
            let key = rest.to_lowercase().replace('_', ".");
            map.insert(key, PropertyValue::String(value));
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_prefix_is_stripped_and_key_rewritten() {
        let map = properties_from_vars(
            "KAFKA_",
            vars(&[
                ("KAFKA_BOOTSTRAP_SERVERS", "h1:9092,h2:9092"),
                ("KAFKA_GROUP_ID", "billing"),
            ]),
        );
        assert_eq!(
            map.get("bootstrap.servers"),
            Some(&PropertyValue::from("h1:9092,h2:9092"))
        );
        assert_eq!(map.get("group.id"), Some(&PropertyValue::from("billing")));
    }

    #[test]
    fn test_unrelated_variables_are_ignored() {
        let map = properties_from_vars(
            "KAFKA_",
            vars(&[("PATH", "/usr/bin"), ("KAFKA_ACKS", "all")]),
        );
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("acks"), Some(&PropertyValue::from("all")));
    }

    #[test]
    fn test_bare_prefix_variable_is_skipped() {
        let map = properties_from_vars("KAFKA_", vars(&[("KAFKA_", "x")]));
        assert!(map.is_empty());
    }
}
