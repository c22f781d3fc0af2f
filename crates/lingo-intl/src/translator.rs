//! The public translation surface: locale registry, resource paths, and
//! `translate`.

use crate::catalog::Catalog;
use crate::error::{IntlError, IntlResult};
use crate::loader::MessageLoader;
use crate::locale::Locale;
use crate::message::{interpolate, Argument};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/// Owns the registered locales and per-domain resource paths, and resolves
/// dotted message keys to interpolated strings.
///
/// A translator is mutable process state (`localize` selects the active
/// locale), so concurrent hosts should give each logical session its own
/// instance; the `&mut self` receivers make shared mutation a compile error
/// rather than a race.
#[derive(Debug)]
pub struct Translator {
    loader: MessageLoader,
    locales: HashMap<String, Locale>,
    active: Option<String>,
    resource_paths: HashMap<String, Vec<PathBuf>>,
}

impl Translator {
    /// Create a translator around a configured loader.
    pub fn new(loader: MessageLoader) -> Self {
        Self {
            loader,
            locales: HashMap::new(),
            active: None,
            resource_paths: HashMap::new(),
        }
    }

    /// The underlying message loader.
    pub fn loader(&self) -> &MessageLoader {
        &self.loader
    }

    /// Mutable access to the loader, for startup configuration.
    pub fn loader_mut(&mut self) -> &mut MessageLoader {
        &mut self.loader
    }

    /// Register a supported locale. Registering an already-present code is a
    /// no-op.
    ///
    /// A regional locale implicitly registers its synthetic language-only
    /// parent as well, so a single `add_locale(Locale::new("ex_CH"))` makes
    /// both `ex_CH` and `ex` addressable by `localize`. Fallback resolution
    /// relies on this; do not "simplify" it away.
    pub fn add_locale(&mut self, locale: Locale) -> &mut Self {
        if let Some(parent) = locale.parent() {
            self.locales
                .entry(parent.code().to_string())
                .or_insert(parent);
        }

        self.locales
            .entry(locale.code().to_string())
            .or_insert(locale);

        self
    }

    /// Whether a locale with `code` is registered, implicit parents included.
    pub fn is_registered(&self, code: &str) -> bool {
        self.locales.contains_key(code)
    }

    /// Append search directories for `domain`, creating the domain entry if
    /// absent. Insertion order is preserved and defines search precedence.
    pub fn add_resource_paths(
        &mut self,
        domain: impl Into<String>,
        paths: impl IntoIterator<Item = PathBuf>,
    ) -> &mut Self {
        self.resource_paths
            .entry(domain.into())
            .or_default()
            .extend(paths);

        self
    }

    /// The ordered search directories registered for `domain`.
    pub fn resource_paths(&self, domain: &str) -> &[PathBuf] {
        self.resource_paths
            .get(domain)
            .map_or(&[], Vec::as_slice)
    }

    /// Select the active locale by exact code match.
    ///
    /// Previously cached catalogs stay valid across a switch; every cache
    /// entry is keyed by the locale code that produced it.
    pub fn localize(&mut self, code: &str) -> IntlResult<()> {
        if !self.locales.contains_key(code) {
            return Err(IntlError::UnknownLocale {
                code: code.to_string(),
            });
        }

        debug!("Activating locale: {}", code);
        self.active = Some(code.to_string());
        Ok(())
    }

    /// The currently active locale.
    pub fn locale(&self) -> IntlResult<&Locale> {
        self.active
            .as_deref()
            .and_then(|code| self.locales.get(code))
            .ok_or(IntlError::NoActiveLocale)
    }

    /// Load the catalog for `(domain, bundle)` under the active locale.
    ///
    /// Caching lives in the loader; this is only the wiring that feeds it the
    /// active locale and the domain's search paths.
    pub fn load_catalog(&self, domain: &str, bundle: &str) -> IntlResult<Catalog> {
        let locale = self.locale()?;

        self.loader
            .load_catalog(domain, bundle, locale, self.resource_paths(domain))
    }

    /// Resolve `key` (`<domain>.<bundle>.<message key>`) to its localized,
    /// interpolated message.
    pub fn translate(&self, key: &str, args: &[Argument]) -> IntlResult<String> {
        let segments: Vec<&str> = key.split('.').collect();

        let (domain, bundle, message_key) = match segments.as_slice() {
            [domain, bundle, message_key]
                if !domain.is_empty() && !bundle.is_empty() && !message_key.is_empty() =>
            {
                (*domain, *bundle, *message_key)
            }
            _ => {
                return Err(IntlError::InvalidMessageKey {
                    key: key.to_string(),
                })
            }
        };

        let locale = self.locale()?;
        let catalog = self.load_catalog(domain, bundle)?;

        let template = catalog
            .message(message_key)
            .ok_or_else(|| IntlError::MissingMessage {
                domain: domain.to_string(),
                bundle: bundle.to_string(),
                key: message_key.to_string(),
                locale: locale.code().to_string(),
            })?;

        Ok(interpolate(template, args, locale.grouping_separator()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    fn translator() -> Translator {
        Translator::new(MessageLoader::new())
    }

    #[test]
    fn test_add_locale_registers_parent() {
        let mut translator = translator();
        translator.add_locale(Locale::new("ex_CH"));

        assert!(translator.is_registered("ex_CH"));
        assert!(translator.is_registered("ex"));
        assert!(!translator.is_registered("yy"));
    }

    #[test]
    fn test_add_locale_is_idempotent() {
        let mut translator = translator();
        translator.add_locale(Locale::new("ex"));
        translator.add_locale(Locale::new("ex_CH"));
        translator.add_locale(Locale::new("ex_CH"));

        assert!(translator.is_registered("ex"));
        assert!(translator.is_registered("ex_CH"));
    }

    #[test]
    fn test_localize_unknown_locale() {
        let mut translator = translator();
        translator.add_locale(Locale::new("ex_CH"));

        let err = translator.localize("yy").unwrap_err();
        assert!(matches!(err, IntlError::UnknownLocale { code } if code == "yy"));
    }

    #[test]
    fn test_localize_implicit_parent() {
        let mut translator = translator();
        translator.add_locale(Locale::new("ex_CH"));

        translator.localize("ex_CH").unwrap();
        assert_eq!(translator.locale().unwrap().code(), "ex_CH");

        translator.localize("ex").unwrap();
        assert_eq!(translator.locale().unwrap().code(), "ex");
    }

    #[test]
    fn test_locale_unset() {
        let translator = translator();
        assert!(matches!(
            translator.locale().unwrap_err(),
            IntlError::NoActiveLocale
        ));
    }

    #[test]
    fn test_translate_requires_active_locale() {
        let translator = translator();
        let err = translator.translate("test.bar.format", &args![]).unwrap_err();

        assert!(matches!(err, IntlError::NoActiveLocale));
    }

    #[test]
    fn test_translate_rejects_malformed_keys() {
        let mut translator = translator();
        translator.add_locale(Locale::new("ex"));
        translator.localize("ex").unwrap();

        for key in ["test", "test.bar", "test.bar.baz.qux", "test..baz", ""] {
            let err = translator.translate(key, &args![]).unwrap_err();
            assert!(
                matches!(err, IntlError::InvalidMessageKey { .. }),
                "expected InvalidMessageKey for {key:?}"
            );
        }
    }

    #[test]
    fn test_resource_path_order_preserved() {
        let mut translator = translator();
        translator.add_resource_paths("test", [PathBuf::from("/one")]);
        translator.add_resource_paths("test", [PathBuf::from("/two"), PathBuf::from("/three")]);

        assert_eq!(
            translator.resource_paths("test"),
            [
                PathBuf::from("/one"),
                PathBuf::from("/two"),
                PathBuf::from("/three")
            ]
        );
        assert!(translator.resource_paths("other").is_empty());
    }
}
