//! The resolved message catalog for one (domain, bundle, locale) triple.

use lingo_common::MessageMap;
use serde::{Deserialize, Serialize};

/// An immutable mapping of message keys to message templates.
///
/// Built by the message loader on every load (or rebuilt verbatim from the
/// cache) and never mutated afterwards. A missing key is a lookup miss, not
/// an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    bundle: String,
    domain: String,
    messages: MessageMap,
}

impl Catalog {
    /// Create a catalog for `bundle` within `domain`.
    pub fn new(bundle: impl Into<String>, domain: impl Into<String>, messages: MessageMap) -> Self {
        Self {
            bundle: bundle.into(),
            domain: domain.into(),
            messages,
        }
    }

    /// The bundle identifier, typically a file basename.
    pub fn bundle(&self) -> &str {
        &self.bundle
    }

    /// The logical resource namespace this catalog belongs to.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The full key/template mapping.
    pub fn messages(&self) -> &MessageMap {
        &self.messages
    }

    /// Look up the template for `key`.
    pub fn message(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Whether the catalog holds no messages at all.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_lookup() {
        let mut messages = MessageMap::new();
        messages.insert("a".to_string(), "Lorem ipsum".to_string());

        let catalog = Catalog::new("foo", "test", messages);

        assert_eq!(catalog.bundle(), "foo");
        assert_eq!(catalog.domain(), "test");
        assert_eq!(catalog.message("a"), Some("Lorem ipsum"));
        assert_eq!(catalog.message("missing"), None);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new("baz", "test", MessageMap::new());

        assert!(catalog.is_empty());
        assert_eq!(catalog.message("a"), None);
    }
}
