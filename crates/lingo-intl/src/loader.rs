//! Catalog construction: cache lookup, resource discovery, reader dispatch.

use crate::catalog::Catalog;
use crate::error::IntlResult;
use crate::locale::Locale;
use lingo_cache::Storage;
use lingo_common::MessageMap;
use lingo_io::Reader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Builds [`Catalog`]s from cache or disk.
///
/// Readers are consulted in registration order; the first reader whose
/// extension matches a file in a search directory wins. Storage is optional,
/// and its absence simply disables caching.
///
/// The loader holds no locale state of its own: the active locale and the
/// domain's search paths are passed into [`load_catalog`](Self::load_catalog)
/// by the [`Translator`](crate::Translator), which keeps every load a pure
/// function of its inputs.
#[derive(Debug, Default)]
pub struct MessageLoader {
    readers: Vec<Box<dyn Reader>>,
    storage: Option<Arc<dyn Storage>>,
}

impl MessageLoader {
    /// Create a loader with no readers and no storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a reader; later registrations have lower precedence.
    pub fn add_reader(&mut self, reader: Box<dyn Reader>) -> &mut Self {
        self.readers.push(reader);
        self
    }

    /// Append several readers, preserving their order.
    pub fn add_readers(&mut self, readers: Vec<Box<dyn Reader>>) -> &mut Self {
        self.readers.extend(readers);
        self
    }

    /// The registered readers, in precedence order.
    pub fn readers(&self) -> &[Box<dyn Reader>] {
        &self.readers
    }

    /// Attach a cache storage.
    pub fn set_storage(&mut self, storage: Arc<dyn Storage>) -> &mut Self {
        self.storage = Some(storage);
        self
    }

    /// The attached cache storage, if any.
    pub fn storage(&self) -> Option<&Arc<dyn Storage>> {
        self.storage.as_ref()
    }

    /// Build the catalog for `(domain, bundle)` under `locale`.
    ///
    /// The cache fast path bypasses all filesystem and reader work. On a
    /// cache miss, `paths` are searched in order for
    /// `<dir>/<locale code>/<bundle>.<ext>`; the first directory with a
    /// matching file wins and the remaining directories are not consulted.
    /// A missing resource yields an empty catalog, not an error.
    pub fn load_catalog(
        &self,
        domain: &str,
        bundle: &str,
        locale: &Locale,
        paths: &[PathBuf],
    ) -> IntlResult<Catalog> {
        let cache_key = cache_key(domain, bundle, locale.code());

        if let Some(storage) = &self.storage {
            if let Some(messages) = storage.get_item(&cache_key) {
                debug!("Catalog cache hit: {}", cache_key);
                return Ok(Catalog::new(bundle, domain, messages));
            }
        }

        for dir in paths {
            if let Some((reader, file)) = self.discover(dir, bundle, locale) {
                debug!("Loading catalog {}.{} from {:?}", domain, bundle, file);

                let messages = reader.read(&file)?;

                if let Some(storage) = &self.storage {
                    storage.set(&cache_key, messages.clone());
                }

                return Ok(Catalog::new(bundle, domain, messages));
            }
        }

        debug!(
            "No resource for catalog {}.{} under locale {}",
            domain,
            bundle,
            locale.code()
        );

        Ok(Catalog::new(bundle, domain, MessageMap::new()))
    }

    /// Find the first reader (registration order) with a matching resource
    /// file for `bundle` in `dir`.
    fn discover(&self, dir: &Path, bundle: &str, locale: &Locale) -> Option<(&dyn Reader, PathBuf)> {
        self.readers.iter().find_map(|reader| {
            let candidate = dir
                .join(locale.code())
                .join(format!("{bundle}.{}", reader.extension()));

            (candidate.is_file() && reader.can_read(&candidate))
                .then(|| (reader.as_ref(), candidate))
        })
    }
}

/// The cache key for one (domain, bundle, locale) triple.
///
/// The exact format is load-bearing for compatibility with existing caches:
/// literal dots, no escaping.
fn cache_key(domain: &str, bundle: &str, locale_code: &str) -> String {
    format!("intl.catalog.{domain}.{bundle}.{locale_code}")
}
