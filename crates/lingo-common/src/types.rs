//! Common type definitions shared across the workspace.

use std::collections::HashMap;

/// A flat mapping from message key to message template.
///
/// This is the shape every resource reader produces, the shape the cache
/// stores, and the shape a catalog wraps. Insertion order is irrelevant.
pub type MessageMap = HashMap<String, String>;
