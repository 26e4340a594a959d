//! Property sources
//!
//! Adapters that produce a [`PropertyMap`](crate::properties::PropertyMap)
//! from somewhere outside the process: a TOML file on disk or the process
//! environment. Sources only rename and retype keys; validation is a
//! separate step.

mod env;
mod file;

pub use env::{load_from_env, properties_from_vars};
pub use file::{load_from_file, load_from_str};

use crate::properties::PropertyMap;
use thiserror::Error;

/// Errors raised while reading a property source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source could not be read.
    #[error("failed to read property source: {0}")]
    Io(#[from] std::io::Error),

    /// The source was read but could not be interpreted.
    #[error("failed to parse property source: {0}")]
    Parse(String),
}

/// Combines property maps, later maps overriding earlier ones key by key.
pub fn merge<I>(maps: I) -> PropertyMap
where
    I: IntoIterator<Item = PropertyMap>,
{
    let mut merged = PropertyMap::new();
    for map in maps {
        merged.extend(map);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::PropertyValue;

    #[test]
    fn test_merge_later_maps_win() {
        let mut base = PropertyMap::new();
        base.insert("acks".to_string(), PropertyValue::from("all"));
        base.insert("retries".to_string(), PropertyValue::from(3));

        let mut overrides = PropertyMap::new();
        overrides.insert("acks".to_string(), PropertyValue::from("1"));

        let merged = merge([base, overrides]);
        assert_eq!(merged.get("acks"), Some(&PropertyValue::from("1")));
        assert_eq!(merged.get("retries"), Some(&PropertyValue::from(3)));
    }

    #[test]
    fn test_merge_of_nothing_is_empty() {
        assert!(merge(std::iter::empty()).is_empty());
    }
}
