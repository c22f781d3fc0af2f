//! TOML resource reader.

use crate::error::ReadResult;
use crate::reader::{malformed, read_contents, Reader};
use ::toml::{Table, Value};
use lingo_common::MessageMap;
use std::path::Path;

/// Reads `.toml` resources: a top-level table of scalar values.
#[derive(Debug, Default, Clone, Copy)]
pub struct TomlReader;

impl TomlReader {
    /// Create a new TOML reader.
    pub fn new() -> Self {
        Self
    }
}

impl Reader for TomlReader {
    fn extension(&self) -> &'static str {
        "toml"
    }

    fn read(&self, path: &Path) -> ReadResult<MessageMap> {
        let contents = read_contents(path)?;

        let table: Table = contents.parse().map_err(|err| malformed(path, err))?;

        let mut messages = MessageMap::with_capacity(table.len());

        for (key, value) in table {
            let rendered = match value {
                Value::String(text) => text,
                Value::Integer(number) => number.to_string(),
                Value::Float(number) => number.to_string(),
                Value::Boolean(flag) => flag.to_string(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReadError;
    use std::fs;

    fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_read_flat_table() {
        let dir = lingo_common::test_utils::create_temp_dir();
        let path = write_fixture(
            &dir,
            "foo.toml",
            "a = \"Lorem ipsum\"\nb = \"Dolor sit amet\"\nretries = 3\n",
        );

        let messages = TomlReader::new().read(&path).unwrap();

        assert_eq!(messages.get("a").map(String::as_str), Some("Lorem ipsum"));
        assert_eq!(messages.get("b").map(String::as_str), Some("Dolor sit amet"));
        assert_eq!(messages.get("retries").map(String::as_str), Some("3"));
    }

    #[test]
    fn test_read_rejects_nested_tables() {
        let dir = lingo_common::test_utils::create_temp_dir();
        let path = write_fixture(&dir, "foo.toml", "[section]\na = \"Lorem ipsum\"\n");

        let err = TomlReader::new().read(&path).unwrap_err();
        assert!(matches!(err, ReadError::Malformed { .. }));
    }

    #[test]
    fn test_read_rejects_syntax_error() {
        let dir = lingo_common::test_utils::create_temp_dir();
        let path = write_fixture(&dir, "foo.toml", "a = \n");

        let err = TomlReader::new().read(&path).unwrap_err();
        assert!(matches!(err, ReadError::Malformed { .. }));
    }
}
