//! Response handling module.
//!
//! This module provides the [`ResponseFormat`] trait for type-safe response
//! parsing along with the two formats the scanner API needs.

mod format;

pub use format::{Discard, JsonFormat, ResponseFormat};
