//! # Lingo Cache
//!
//! The storage capability for the Lingo message resolution pipeline.
//!
//! [`Storage`] is a generic get/has/set key-value cache. The message loader
//! treats it as possibly absent and makes no assumption about persistence,
//! eviction, or distribution; any conforming implementation is acceptable.
//! [`MemoryStorage`] is the bundled process-local implementation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod memory;
pub mod storage;

pub use memory::MemoryStorage;
pub use storage::Storage;
