//! # Lingo Io
//!
//! Resource readers for the Lingo message resolution pipeline.
//!
//! A [`Reader`] parses one on-disk resource format into a flat key/value
//! [`MessageMap`](lingo_common::MessageMap). Readers are registered with the
//! message loader in an ordered list; the registration order defines format
//! precedence when more than one reader could handle a bundle.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod json;
pub mod reader;
pub mod toml;
pub mod yaml;

pub use error::{ReadError, ReadResult};
pub use json::JsonReader;
pub use reader::Reader;
pub use self::toml::TomlReader;
pub use yaml::YamlReader;
