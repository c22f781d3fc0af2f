//! # Lingo Common
//!
//! Shared types and common functionality for the Lingo workspace.
//!
//! This crate provides the foundational aliases and test helpers used across
//! all other crates in the Lingo workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use types::*;
