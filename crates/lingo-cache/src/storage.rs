//! The storage capability contract.

use lingo_common::MessageMap;
use std::fmt;

/// A generic key-value cache for resolved message mappings.
///
/// Implementations are shared across callers and are solely responsible for
/// safe concurrent reads and writes; all methods therefore take `&self`.
/// Stored values are the flat mappings produced by a reader, not the catalog
/// wrapper around them.
pub trait Storage: fmt::Debug + Send + Sync {
    /// Whether a value is cached under `key`.
    fn has(&self, key: &str) -> bool;

    /// The value cached under `key`, if any.
    fn get_item(&self, key: &str) -> Option<MessageMap>;

    /// Cache `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: MessageMap);
}
