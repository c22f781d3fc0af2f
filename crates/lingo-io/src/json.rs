//! JSON resource reader.

use crate::error::ReadResult;
use crate::reader::{malformed, read_contents, Reader};
use lingo_common::MessageMap;
use serde_json::Value;
use std::path::Path;

/// Reads `.json` resources: a top-level object of scalar values.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonReader;

impl JsonReader {
    /// Create a new JSON reader.
    pub fn new() -> Self {
        Self
    }
}

impl Reader for JsonReader {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn read(&self, path: &Path) -> ReadResult<MessageMap> {
        let contents = read_contents(path)?;

        let value: Value =
            serde_json::from_str(&contents).map_err(|err| malformed(path, err))?;

        let Value::Object(object) = value else {
            return Err(malformed(path, "top-level value must be an object"));
        };

        let mut messages = MessageMap::with_capacity(object.len());

        for (key, value) in object {
            let rendered = match value {
                Value::String(text) => text,
                Value::Number(number) => number.to_string(),
                Value::Bool(flag) => flag.to_string(),
                other => {
                    return Err(malformed(
                        path,
                        format!("value for key {key:?} must be a scalar, found {other}"),
                    ))
                }
            };

            messages.insert(key, rendered);
        }

        Ok(messages)
    }
}
