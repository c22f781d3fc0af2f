//! # Lingo Intl
//!
//! Locale-aware message resolution: given a locale, a message domain, and a
//! dotted key, resolve the correctly localized, parameter-interpolated
//! string.
//!
//! The pipeline is: [`Translator::translate`] splits the key, asks the
//! [`MessageLoader`] for the [`Catalog`] of that domain and bundle under the
//! active [`Locale`], looks up the message template, and interpolates the
//! positional arguments with locale-aware numeric grouping. Catalog parsing
//! is delegated to [`Reader`]s registered per format; resolved mappings are
//! cached in an optional [`Storage`].
//!
//! # Example
//!
//! ```
//! use lingo_intl::{Locale, MessageLoader, Translator};
//!
//! let mut translator = Translator::new(MessageLoader::new());
//! translator.add_locale(Locale::new("ex_CH"));
//!
//! // The language-only parent was registered implicitly.
//! translator.localize("ex")?;
//! assert_eq!(translator.locale()?.code(), "ex");
//! # Ok::<(), lingo_intl::IntlError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod error;
pub mod loader;
pub mod locale;
pub mod message;
pub mod translator;

pub use catalog::Catalog;
pub use error::{IntlError, IntlResult};
pub use loader::MessageLoader;
pub use locale::Locale;
pub use message::{interpolate, Argument};
pub use translator::Translator;

// Re-export the collaborating capabilities so integrators need only one
// crate in scope.
pub use lingo_cache::{MemoryStorage, Storage};
pub use lingo_common::MessageMap;
pub use lingo_io::{JsonReader, ReadError, Reader, TomlReader, YamlReader};
