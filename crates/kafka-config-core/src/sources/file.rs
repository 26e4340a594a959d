//! TOML file property source

use super::SourceError;
use crate::properties::{PropertyMap, PropertyValue};
use std::path::Path;

/// Loads a property map from a TOML file.
///
/// Nested tables are flattened into dot-joined keys, so
///
/// ```toml
/// [bootstrap]
/// servers = "h1:9092,h2:9092"
/// ```
///
/// becomes `bootstrap.servers`. Only string, integer, and boolean scalars
/// are accepted; any other value is a parse error naming the key.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<PropertyMap, SourceError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), "loading properties from file");
    load_from_str(&contents)
}

/// Parses a property map from TOML text. Same rules as
/// [`load_from_file`].
pub fn load_from_str(contents: &str) -> Result<PropertyMap, SourceError> {
    let document: toml::Table = contents
        .parse()
        .map_err(|e: toml::de::Error| SourceError::Parse(e.to_string()))?;

    let mut map = PropertyMap::new();
    flatten_table(&document, None, &mut map)?;
    Ok(map)
}

fn flatten_table(
    table: &toml::Table,
    prefix: Option<&str>,
    out: &mut PropertyMap,
) -> Result<(), SourceError> {
    for (key, value) in table {
        let full_key = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.clone(),
        };
        match value {
            toml::Value::String(s) => {
                out.insert(full_key, PropertyValue::String(s.clone()));
            }
            toml::Value::Integer(i) => {
                out.insert(full_key, PropertyValue::Integer(*i));
            }
            toml::Value::Boolean(b) => {
                out.insert(full_key, PropertyValue::Boolean(*b));
            }
            toml::Value::Table(nested) => {
                flatten_table(nested, Some(&full_key), out)?;
            }
            other => {
                return Err(SourceError::Parse(format!(
                    "unsupported value type for key '{}': {}",
                    full_key,
                    other.type_str()
                )));
            }
        }
    }
    Ok(())
}
