//! YAML resource reader.

use crate::error::ReadResult;
use crate::reader::{malformed, read_contents, Reader};
use lingo_common::MessageMap;
use serde_yaml::Value;
use std::path::Path;

/// Reads `.yml` resources: a top-level mapping of scalar values.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlReader;

impl YamlReader {
    /// Create a new YAML reader.
    pub fn new() -> Self {
        Self
    }
}

impl Reader for YamlReader {
    fn extension(&self) -> &'static str {
        "yml"
    }

    fn read(&self, path: &Path) -> ReadResult<MessageMap> {
        let contents = read_contents(path)?;

        let value: Value =
            serde_yaml::from_str(&contents).map_err(|err| malformed(path, err))?;

        let Value::Mapping(mapping) = value else {
            return Err(malformed(path, "top-level value must be a mapping"));
        };

        let mut messages = MessageMap::with_capacity(mapping.len());

        for (key, value) in mapping {
            let Value::String(key) = key else {
                return Err(malformed(path, "mapping keys must be strings"));
            };

            let rendered = match value {
                Value::String(text) => text,
                Value::Number(number) => number.to_string(),
                Value::Bool(flag) => flag.to_string(),
                _ => {
                    return Err(malformed(
                        path,
                        format!("value for key {key:?} must be a scalar"),
                    ))
                }
            };

            messages.insert(key, rendered);
        }

        Ok(messages)
    }
}
