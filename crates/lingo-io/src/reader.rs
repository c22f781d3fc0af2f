//! The reader capability: one implementation per resource format.

use crate::error::{ReadError, ReadResult};
use lingo_common::MessageMap;
use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A parser for one on-disk resource format.
///
/// Readers are selected by extension match, first registered reader wins.
/// `read` either produces the complete mapping or fails with
/// [`ReadError::Malformed`]; it never partially populates.
pub trait Reader: fmt::Debug + Send + Sync {
    /// The file extension (without dot) this reader recognizes.
    fn extension(&self) -> &'static str;

    /// Whether this reader can parse the file at `path`, judged by extension.
    fn can_read(&self, path: &Path) -> bool {
        path.extension().and_then(OsStr::to_str) == Some(self.extension())
    }

    /// Parse the resource at `path` into a flat key/value mapping.
    fn read(&self, path: &Path) -> ReadResult<MessageMap>;
}

/// Read the full contents of a resource file.
///
/// Shared by the concrete readers so that disk failures surface uniformly as
/// [`ReadError::Unreadable`].
pub(crate) fn read_contents(path: &Path) -> ReadResult<String> {
    debug!("Reading resource file: {:?}", path);

    fs::read_to_string(path).map_err(|source| ReadError::Unreadable {
        path: path.display().to_string(),
        source,
    })
}

/// Build the malformed-resource error for `path`.
pub(crate) fn malformed(path: &Path, detail: impl fmt::Display) -> ReadError {
    ReadError::Malformed {
        path: path.display().to_string(),
        detail: detail.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct StubReader;

    impl Reader for StubReader {
        fn extension(&self) -> &'static str {
            "stub"
        }

        fn read(&self, _path: &Path) -> ReadResult<MessageMap> {
            Ok(MessageMap::new())
        }
    }

    #[test]
    fn test_can_read_matches_extension_only() {
        let reader = StubReader;

        assert!(reader.can_read(Path::new("/tmp/messages.stub")));
        assert!(!reader.can_read(Path::new("/tmp/messages.json")));
        assert!(!reader.can_read(Path::new("/tmp/messages")));
    }

    #[test]
    fn test_read_contents_missing_file() {
        let err = read_contents(Path::new("/nonexistent/messages.stub")).unwrap_err();
        assert!(matches!(err, ReadError::Unreadable { .. }));
    }
}
