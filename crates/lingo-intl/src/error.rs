//! Error types for message resolution.

use thiserror::Error;

/// Errors that can occur while resolving a localized message.
#[derive(Error, Debug)]
pub enum IntlError {
    /// `localize` was called with a code no registered locale carries.
    #[error("locale is not registered: {code}")]
    UnknownLocale {
        /// The code that failed to resolve.
        code: String,
    },

    /// A locale-dependent operation ran before any locale was selected.
    #[error("no active locale has been set")]
    NoActiveLocale,

    /// A message key was not of the form `<domain>.<bundle>.<key>`.
    #[error("message key must have the form <domain>.<bundle>.<key>: {key}")]
    InvalidMessageKey {
        /// The offending key.
        key: String,
    },

    /// The catalog resolved but does not contain the requested message.
    #[error("no message {key:?} in catalog {domain}.{bundle} for locale {locale}")]
    MissingMessage {
        /// Domain segment of the message key.
        domain: String,
        /// Bundle segment of the message key.
        bundle: String,
        /// Leaf message key.
        key: String,
        /// Code of the locale the lookup ran under.
        locale: String,
    },

    /// A resource file was found but could not be read or parsed.
    #[error(transparent)]
    Resource(#[from] lingo_io::ReadError),
}

/// Result type for message resolution operations.
pub type IntlResult<T> = Result<T, IntlError>;
