//! Locale identity and fallback derivation.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Thousands-grouping separators for languages that deviate from the generic
/// `,` default.
static GROUPING_SEPARATORS: Lazy<HashMap<&'static str, char>> = Lazy::new(|| {
    HashMap::from([("de", '.'), ("es", '.'), ("it", '.'), ("fr", ' ')])
});

/// An immutable language/region identifier.
///
/// Codes have the form `language` or `language_REGION` and are kept
/// case-sensitive as supplied. A regional code carries a derived parent code,
/// the language portion before the first `_`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Locale {
    code: String,
    parent_code: Option<String>,
}

impl Locale {
    /// Create a locale from its code, deriving the fallback parent code.
    pub fn new(code: impl Into<String>) -> Self {
        let code = code.into();
        let parent_code = code
            .split_once('_')
            .map(|(language, _)| language.to_string());

        Self { code, parent_code }
    }

    /// The full locale code, e.g. `ex` or `ex_CH`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The derived fallback code, present only for regional codes.
    pub fn parent_code(&self) -> Option<&str> {
        self.parent_code.as_deref()
    }

    /// The language portion of the code.
    pub fn language(&self) -> &str {
        self.parent_code
            .as_deref()
            .unwrap_or(&self.code)
    }

    /// The synthetic language-only parent locale, for regional codes.
    pub fn parent(&self) -> Option<Self> {
        self.parent_code.as_deref().map(Self::new)
    }

    /// Whether this locale is the fallback parent of `other`.
    pub fn is_fallback_of(&self, other: &Self) -> bool {
        other.parent_code() == Some(self.code())
    }

    /// The thousands-grouping character for this locale's language.
    pub fn grouping_separator(&self) -> char {
        GROUPING_SEPARATORS
            .get(self.language())
            .copied()
            .unwrap_or(',')
    }
}

// Two locales are equal iff their codes are equal; the parent code is derived
// from the code and carries no extra identity.
impl PartialEq for Locale {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Locale {}

impl Hash for Locale {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl From<String> for Locale {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.code
    }
}
